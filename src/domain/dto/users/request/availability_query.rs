//! 가용성 검사 쿼리 파라미터
//!
//! 파라미터 누락은 쿼리 추출 단계에서 400으로 처리되고,
//! 빈 값/길이 검사는 핸들러에서 수행합니다.

use serde::Deserialize;

/// `GET /api/login-id-availability?loginId=`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginIdAvailabilityQuery {
    pub login_id: String,
}

/// `GET /api/nickname-availability?nickname=`
#[derive(Debug, Deserialize)]
pub struct NicknameAvailabilityQuery {
    pub nickname: String,
}

/// `GET /api/email-availability?email=`
#[derive(Debug, Deserialize)]
pub struct EmailAvailabilityQuery {
    pub email: String,
}
