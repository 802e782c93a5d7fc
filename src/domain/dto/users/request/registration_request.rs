//! 회원가입 요청 DTO
//!
//! 기본 가입(`POST /api/users`)과 최종 가입(`PATCH /api/users/{userId}/registration`)
//! 두 단계의 요청 본문을 정의합니다.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};
use crate::utils::string_utils::is_valid_string;

/// 기본 가입 요청 DTO
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct BasicRegRequest {
    /// 로그인 ID (4-20자). 사용 가능 여부 조회와 같은 길이 규칙입니다.
    #[validate(length(min = 4, max = 20, message = "로그인 ID는 4-20자 사이여야 합니다"))]
    pub login_id: String,

    /// 비밀번호 (8-64자, 영문과 숫자 포함)
    #[validate(length(min = 8, max = 64, message = "비밀번호는 8-64자 사이여야 합니다"))]
    #[validate(custom(function = "validate_password_strength"))]
    pub password: String,
}

/// 최종 가입(추가 정보) 요청 DTO
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AdditionalRegRequest {
    #[validate(length(min = 2, max = 20, message = "닉네임은 2-20자 사이여야 합니다"))]
    #[validate(custom(function = "validate_not_blank"))]
    pub nickname: String,

    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    #[validate(length(min = 1, max = 200, message = "주소는 1-200자 사이여야 합니다"))]
    #[validate(custom(function = "validate_not_blank"))]
    pub address: String,
}

/// 비밀번호 강도 검증 (영문자와 숫자 필수 포함)
pub(crate) fn validate_password_strength(password: &str) -> Result<(), ValidationError> {
    let has_letter = password.chars().any(|c| c.is_alphabetic());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());

    if !(has_letter && has_digit) {
        return Err(ValidationError::new("weak_password")
            .with_message("비밀번호는 영문자와 숫자를 포함해야 합니다".into()));
    }

    Ok(())
}

/// 공백만으로 이루어진 값 거부
pub(crate) fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if !is_valid_string(value) {
        return Err(ValidationError::new("blank")
            .with_message("공백만 입력할 수 없습니다".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_reg_request_from_camel_case_json() {
        let json = r#"{"loginId": "farmer01", "password": "ugly1234"}"#;
        let request: BasicRegRequest = serde_json::from_str(json).unwrap();

        assert_eq!(request.login_id, "farmer01");
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_basic_reg_request_accepts_non_ascii_login_id() {
        let request = BasicRegRequest {
            login_id: "못난이들".to_string(),
            password: "ugly1234".to_string(),
        };

        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_basic_reg_request_rejects_short_login_id_and_weak_password() {
        let request = BasicRegRequest {
            login_id: "abc".to_string(),
            password: "onlyletters".to_string(),
        };

        let errors = request.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("login_id"));
        assert!(fields.contains_key("password"));
    }

    #[test]
    fn test_additional_reg_request_rejects_blank_nickname_and_bad_email() {
        let request = AdditionalRegRequest {
            nickname: "   ".to_string(),
            email: "not-an-email".to_string(),
            address: "서울시 중구".to_string(),
        };

        let errors = request.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("nickname"));
        assert!(fields.contains_key("email"));
        assert!(!fields.contains_key("address"));
    }
}
