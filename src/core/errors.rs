//! # Application Error Handling System
//!
//! 사용자/리뷰 백엔드를 위한 통합 에러 처리 시스템입니다.
//! 서비스 계층은 예외를 던지는 대신 `AppResult<T>`를 반환하고,
//! HTTP 계층은 `actix_web::ResponseError` 구현을 통해 상태 코드로 변환합니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 사용 시나리오 |
//! |----------|-------------|---------------|
//! | `ValidationError` | 400 Bad Request | 입력값 검증 실패, 가용성 검사 파라미터 오류 |
//! | `NotFound` | 404 Not Found | ID 기반 조회 실패 |
//! | `ConflictError` | 409 Conflict | 로그인 ID/닉네임/이메일 중복 |
//! | `DatabaseError` | 500 Internal Server Error | 저장소 오류 |
//! | `InternalError` | 500 Internal Server Error | 예상치 못한 오류 |
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use crate::core::errors::{AppError, AppResult};
//!
//! async fn find_user(&self, tx: &mut Transaction, id: UserId) -> AppResult<User> {
//!     self.user_repo
//!         .find_by_id(tx, id)
//!         .await?
//!         .ok_or_else(|| AppError::NotFound(format!("{}에 해당하는 사용자가 없습니다.", id)))
//! }
//! ```

use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// 백엔드 서비스에서 발생할 수 있는 모든 종류의 에러를 포괄하는 열거형입니다.
/// `thiserror`로 `Error` trait을 구현하고, `actix_web::ResponseError`를 구현하여
/// 핸들러에서 `?` 연산자만으로 HTTP 응답으로 변환됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 데이터베이스 관련 에러 (500 Internal Server Error)
    ///
    /// MongoDB 연결 실패, 쿼리 실패, 트랜잭션 커밋/중단 실패 등을 나타냅니다.
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 입력값 검증 에러 (400 Bad Request)
    ///
    /// # 발생 시나리오
    /// - 요청 본문의 필드 검증 실패 (`validator`)
    /// - 가용성 검사 파라미터가 비어 있거나 길이 범위를 벗어남
    /// - 잘못된 경로 변수 또는 누락된 쿼리 파라미터
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 리소스 찾을 수 없음 에러 (404 Not Found)
    ///
    /// ID로 사용자나 리뷰를 조회했지만 존재하지 않을 때 발생합니다.
    /// 조회 실패가 검색 서비스 경계를 넘어 `None`으로 전파되지 않도록 합니다.
    #[error("Not found: {0}")]
    NotFound(String),

    /// 충돌/중복 에러 (409 Conflict)
    ///
    /// 유니크해야 하는 필드(로그인 ID, 닉네임, 이메일)가 이미 사용 중일 때 발생합니다.
    #[error("Conflict error: {0}")]
    ConflictError(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;

        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ConflictError(_) => StatusCode::CONFLICT,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 모든 에러 응답은 다음과 같은 표준 JSON 형식을 따릅니다:
    ///
    /// ```json
    /// {
    ///   "error": "Not found: 42에 해당하는 사용자가 없습니다."
    /// }
    /// ```
    ///
    /// 5xx 에러는 서버 로그에 기록합니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        let status = self.status_code();

        if status.is_server_error() {
            log::error!("요청 처리 중 서버 오류: {}", self);
        }

        actix_web::HttpResponse::build(status)
            .json(serde_json::json!({
                "error": self.to_string()
            }))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::ValidationError(errors.to_string())
    }
}

impl From<mongodb::error::Error> for AppError {
    /// 유니크 인덱스 위반(E11000)은 `ConflictError`로, 나머지는 `DatabaseError`로 변환합니다.
    fn from(error: mongodb::error::Error) -> Self {
        use mongodb::error::{ErrorKind, WriteFailure};

        match error.kind.as_ref() {
            ErrorKind::Write(WriteFailure::WriteError(write_error))
                if write_error.code == DUPLICATE_KEY_CODE =>
            {
                AppError::ConflictError("이미 사용 중인 값입니다".to_string())
            }
            _ => AppError::DatabaseError(error.to_string()),
        }
    }
}

const DUPLICATE_KEY_CODE: i32 = 11000;

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
///
/// ```rust,ignore
/// let password_hash = bcrypt::hash(&password, cost)
///     .context("비밀번호 해싱 실패")?;
/// ```
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }
}
