//! # 문자열 유틸리티
//!
//! 문자열 처리와 관련된 공통 유틸리티 함수들입니다.

use crate::core::errors::{AppError, AppResult};

/// 필수 문자열 파라미터 검증
///
/// 빈 문자열이나 공백만 있는 경우 ValidationError를 반환하고,
/// 유효한 경우 입력값을 그대로 돌려줍니다 (공백을 제거하지 않음).
///
/// # 인자
/// * `value` - 검증할 문자열
/// * `field_name` - 필드명 (에러 메시지용)
///
/// # 예제
/// ```rust,ignore
/// use crate::utils::string_utils::require_not_blank;
///
/// assert_eq!(require_not_blank("farmer01", "loginId").unwrap(), "farmer01");
/// assert!(require_not_blank("   ", "loginId").is_err());
/// ```
pub fn require_not_blank<'a>(value: &'a str, field_name: &str) -> AppResult<&'a str> {
    if !is_valid_string(value) {
        return Err(AppError::ValidationError(
            format!("{}은(는) 필수입니다", field_name)
        ));
    }
    Ok(value)
}

/// 문자열이 비어있지 않은지 확인 (공백만 있는 경우도 false)
///
/// 공백 판정은 U+0020 이하의 제어/공백 문자만 대상으로 합니다.
/// 전각 공백(U+3000) 같은 유니코드 공백은 값으로 취급합니다.
pub fn is_valid_string(value: &str) -> bool {
    !value.trim_matches(|c: char| c <= ' ').is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_not_blank() {
        assert_eq!(require_not_blank("farmer01", "loginId").unwrap(), "farmer01");
        assert_eq!(require_not_blank(" 못난이 ", "nickname").unwrap(), " 못난이 ");

        let error = require_not_blank("", "loginId").unwrap_err();
        assert!(matches!(error, AppError::ValidationError(ref msg) if msg.contains("loginId")));
        assert!(require_not_blank("   ", "email").is_err());
    }

    #[test]
    fn test_is_valid_string() {
        assert!(is_valid_string("Hello"));
        assert!(is_valid_string("  World  "));
        assert!(!is_valid_string(""));
        assert!(!is_valid_string("   "));
        assert!(!is_valid_string("\t\n"));
    }

    #[test]
    fn test_ideographic_space_is_not_blank() {
        assert!(is_valid_string("\u{3000}"));
        assert_eq!(require_not_blank("\u{3000}", "nickname").unwrap(), "\u{3000}");
    }
}
