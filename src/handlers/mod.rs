//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//! Spring Framework의 `@RestController`와 유사한 역할을 수행합니다.
//!
//! 핸들러는 `web::Data<AppState>`로 서비스를 받고, `Result<HttpResponse, AppError>`를
//! 반환합니다. 에러는 `AppError`의 `ResponseError` 구현이 JSON 응답으로 변환합니다.
//!
//! ```text
//! HTTP Request → Router → Handler → Service → Repository → Database
//!                    ↓         ↓         ↓
//!              Extractor   AppError   Transaction
//! ```
//!
//! ## 모듈 구성
//!
//! - [`users`] - 가입, 조회, 정보 수정, 탈퇴, 가용성 검사
//! - [`reviews`] - 리뷰 조회

pub mod users;
pub mod reviews;
