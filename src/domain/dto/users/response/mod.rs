//! # 사용자 관련 응답 DTO 모듈
//!
//! 엔티티에서 엔드포인트별 응답 형태(projection)를 만드는 DTO들입니다.
//! 모든 projection은 조회 시마다 새로 만들어지며 저장되지 않습니다.
//!
//! - **데이터 은닉**: 비밀번호 해시는 어떤 응답에도 포함하지 않음
//! - **일관성**: JSON 필드명은 camelCase
//!
//! ## JSON 응답 예제
//!
//! ```json
//! {
//!   "userId": 42,
//!   "loginId": "farmer01",
//!   "nickname": "못난이",
//!   "email": "farmer@example.com",
//!   "address": "서울시 중구",
//!   "registrationStatus": "COMPLETED",
//!   "createdAt": "2024-06-01T10:00:00Z",
//!   "updatedAt": "2024-06-07T12:00:00Z"
//! }
//! ```

pub mod user_response;

pub use user_response::{BasicRegResponse, FinalRegResponse, ProfileResponse, UserResponse};
