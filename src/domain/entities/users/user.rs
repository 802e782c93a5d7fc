//! User Entity Implementation
//!
//! 회원 엔티티의 핵심 구현체입니다.
//! 기본 가입(로그인 ID + 비밀번호)으로 생성된 뒤, 추가 정보 입력으로
//! 최종 가입 상태로 전환되는 2단계 가입 흐름을 표현합니다.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::core::errors::{AppError, AppResult};

/// 회원 식별자
pub type UserId = i64;

/// 로그인 ID 최소 길이 (포함)
pub const MIN_LOGIN_ID_LENGTH: usize = 4;
/// 로그인 ID 최대 길이 (포함)
pub const MAX_LOGIN_ID_LENGTH: usize = 20;

/// 로그인 ID 길이가 허용 범위를 벗어났는지 확인합니다.
///
/// 길이는 문자 단위로 계산하며 4자와 20자는 허용됩니다.
pub fn is_login_id_length_out_of_range(login_id: &str) -> bool {
    let length = login_id.chars().count();
    length < MIN_LOGIN_ID_LENGTH || length > MAX_LOGIN_ID_LENGTH
}

/// 가입 진행 상태
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RegistrationStatus {
    /// 로그인 ID와 비밀번호만 등록된 상태
    Basic,
    /// 닉네임, 이메일, 주소까지 등록된 상태
    Completed,
}

/// 회원 엔티티
///
/// MongoDB `users` 컬렉션 문서와 1:1로 매핑됩니다.
/// `id`는 저장소가 시퀀스로 할당하므로 저장 전에는 `None`입니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<UserId>,
    /// 로그인 ID (unique)
    pub login_id: String,
    /// bcrypt 해시된 비밀번호
    pub password_hash: String,
    /// 닉네임 (최종 가입 후 설정, unique)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    /// 이메일 (최종 가입 후 설정, unique)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// 배송 주소
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    pub registration_status: RegistrationStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// 기본 가입 회원 생성
    pub fn new_basic(login_id: String, password_hash: String) -> Self {
        let now = Utc::now();

        Self {
            id: None,
            login_id,
            password_hash,
            nickname: None,
            email: None,
            address: None,
            registration_status: RegistrationStatus::Basic,
            created_at: now,
            updated_at: now,
        }
    }

    /// 추가 정보를 입력받아 최종 가입 상태로 전환합니다.
    ///
    /// 이미 최종 가입이 끝난 회원이면 `ValidationError`를 반환합니다.
    pub fn complete_registration(
        &mut self,
        nickname: String,
        email: String,
        address: String,
    ) -> AppResult<()> {
        if self.is_registration_completed() {
            return Err(AppError::ValidationError(
                "이미 최종 가입이 완료된 사용자입니다".to_string(),
            ));
        }

        self.nickname = Some(nickname);
        self.email = Some(email);
        self.address = Some(address);
        self.registration_status = RegistrationStatus::Completed;
        self.touch();
        Ok(())
    }

    pub fn change_nickname(&mut self, nickname: String) {
        self.nickname = Some(nickname);
        self.touch();
    }

    pub fn change_password_hash(&mut self, password_hash: String) {
        self.password_hash = password_hash;
        self.touch();
    }

    pub fn change_address(&mut self, address: String) {
        self.address = Some(address);
        self.touch();
    }

    pub fn is_registration_completed(&self) -> bool {
        self.registration_status == RegistrationStatus::Completed
    }

    /// 저장되지 않은 엔티티면 0을 반환합니다.
    pub fn id_or_default(&self) -> UserId {
        self.id.unwrap_or_default()
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_id_length_boundaries() {
        assert!(is_login_id_length_out_of_range("abc"));
        assert!(!is_login_id_length_out_of_range("abcd"));
        assert!(!is_login_id_length_out_of_range(&"a".repeat(20)));
        assert!(is_login_id_length_out_of_range(&"a".repeat(21)));
    }

    #[test]
    fn test_login_id_length_counts_characters() {
        // 한글 4자는 12바이트지만 4자로 계산
        assert!(!is_login_id_length_out_of_range("못난이들"));
        assert!(is_login_id_length_out_of_range("못난이"));
    }

    #[test]
    fn test_complete_registration_once() {
        let mut user = User::new_basic("farmer01".to_string(), "hash".to_string());
        assert_eq!(user.registration_status, RegistrationStatus::Basic);

        user.complete_registration(
            "못난이".to_string(),
            "farmer@example.com".to_string(),
            "서울시 중구".to_string(),
        )
        .unwrap();

        assert!(user.is_registration_completed());
        assert_eq!(user.nickname.as_deref(), Some("못난이"));

        let second = user.complete_registration(
            "다른닉".to_string(),
            "other@example.com".to_string(),
            "부산".to_string(),
        );
        assert!(matches!(second, Err(AppError::ValidationError(_))));
        assert_eq!(user.nickname.as_deref(), Some("못난이"));
    }

    #[test]
    fn test_bson_document_uses_numeric_id() {
        let mut user = User::new_basic("farmer01".to_string(), "hash".to_string());
        user.id = Some(42);

        let document = mongodb::bson::to_document(&user).unwrap();

        assert_eq!(document.get_i64("_id").unwrap(), 42);
        assert!(!document.contains_key("nickname"));
        assert_eq!(document.get_str("registration_status").unwrap(), "BASIC");
    }
}
