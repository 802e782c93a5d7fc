use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::domain::entities::users::user::{RegistrationStatus, User, UserId};

/// 범용 회원 응답 DTO (`GET /api/users/{userId}`)
///
/// 비밀번호 해시는 포함하지 않습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub user_id: UserId,
    pub login_id: String,
    pub nickname: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub registration_status: RegistrationStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let user_id = user.id_or_default();
        let User {
            login_id,
            nickname,
            email,
            address,
            registration_status,
            created_at,
            updated_at,
            ..
        } = user;

        Self {
            user_id,
            login_id,
            nickname,
            email,
            address,
            registration_status,
            created_at,
            updated_at,
        }
    }
}

/// 프로필 응답 DTO (`GET /api/users/{userId}/profile`)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    pub user_id: UserId,
    pub login_id: String,
    pub nickname: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
}

impl From<User> for ProfileResponse {
    fn from(user: User) -> Self {
        Self {
            user_id: user.id_or_default(),
            login_id: user.login_id,
            nickname: user.nickname,
            email: user.email,
            address: user.address,
        }
    }
}

/// 기본 가입 응답 DTO
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BasicRegResponse {
    pub user_id: UserId,
    pub login_id: String,
}

impl From<User> for BasicRegResponse {
    fn from(user: User) -> Self {
        Self {
            user_id: user.id_or_default(),
            login_id: user.login_id,
        }
    }
}

/// 최종 가입 응답 DTO
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinalRegResponse {
    pub user_id: UserId,
    pub login_id: String,
    pub nickname: String,
    pub email: String,
    pub address: String,
}

impl From<User> for FinalRegResponse {
    fn from(user: User) -> Self {
        Self {
            user_id: user.id_or_default(),
            login_id: user.login_id,
            nickname: user.nickname.unwrap_or_default(),
            email: user.email.unwrap_or_default(),
            address: user.address.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_response_hides_password_hash() {
        let mut user = User::new_basic("farmer01".to_string(), "$2b$04$secret".to_string());
        user.id = Some(3);

        let json = serde_json::to_value(UserResponse::from(user)).unwrap();

        assert_eq!(json["userId"], 3);
        assert_eq!(json["loginId"], "farmer01");
        assert_eq!(json["registrationStatus"], "BASIC");
        assert!(json.get("passwordHash").is_none());
        assert!(!json.to_string().contains("secret"));
    }
}
