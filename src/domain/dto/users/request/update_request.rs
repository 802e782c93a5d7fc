//! 회원 정보 수정 요청 DTO
//!
//! 닉네임/주소 DTO는 수정 결과 응답으로도 그대로 사용됩니다.

use serde::{Deserialize, Serialize};
use validator::Validate;
use super::registration_request::{validate_not_blank, validate_password_strength};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateNicknameDto {
    #[validate(length(min = 2, max = 20, message = "닉네임은 2-20자 사이여야 합니다"))]
    #[validate(custom(function = "validate_not_blank"))]
    pub nickname: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePasswordRequest {
    #[validate(length(min = 8, max = 64, message = "비밀번호는 8-64자 사이여야 합니다"))]
    #[validate(custom(function = "validate_password_strength"))]
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAddressDto {
    #[validate(length(min = 1, max = 200, message = "주소는 1-200자 사이여야 합니다"))]
    #[validate(custom(function = "validate_not_blank"))]
    pub address: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_dtos_validation() {
        assert!(UpdateNicknameDto { nickname: "못난이".to_string() }.validate().is_ok());
        assert!(UpdateNicknameDto { nickname: "  ".to_string() }.validate().is_err());
        assert!(UpdatePasswordRequest { password: "short1".to_string() }.validate().is_err());
        assert!(UpdatePasswordRequest { password: "longenough1".to_string() }.validate().is_ok());
        assert!(UpdateAddressDto { address: "".to_string() }.validate().is_err());
    }
}
