//! # 사용자 관련 요청 DTO 모듈
//!
//! 클라이언트로부터 받은 JSON 본문과 쿼리 파라미터를 구조화된 Rust 타입으로
//! 변환하고 검증합니다. JSON 필드명은 프론트엔드 계약에 맞춰 camelCase를 사용합니다.
//!
//! ## 검증 계층
//!
//! 1. **구문 검증**: JSON 구조와 타입 일치성 (`serde`, 실패 시 400)
//! 2. **형식 검증**: 길이, 이메일 형식, 공백 여부 (`validator`)
//! 3. **비즈니스 검증**: 중복 여부, 가입 상태 (서비스 계층)

pub mod registration_request;
pub mod update_request;
pub mod availability_query;

pub use registration_request::{AdditionalRegRequest, BasicRegRequest};
pub use update_request::{UpdateAddressDto, UpdateNicknameDto, UpdatePasswordRequest};
pub use availability_query::{EmailAvailabilityQuery, LoginIdAvailabilityQuery, NicknameAvailabilityQuery};
