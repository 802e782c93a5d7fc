//! # Data Transfer Objects (DTO) Module
//!
//! API 경계에서 데이터를 전송하기 위한 객체들을 정의하는 모듈입니다.
//! Spring의 `@RequestBody`, `@ResponseBody` DTO와 같은 역할을 합니다.
//!
//! | Spring | 이 시스템 | 역할 |
//! |--------|-----------|------|
//! | `@RequestBody` | `request` 모듈 | HTTP 요청 본문 매핑 |
//! | `@ResponseBody` | `response` 모듈 | HTTP 응답 본문 매핑 |
//! | `@Valid` | `validator` crate | 입력값 유효성 검증 |
//! | `@JsonProperty` | `serde` annotations | JSON 필드 매핑 |
//! | `XxxDtoUtil.toResponse` | `From<Entity>` 구현 | Entity → Projection 변환 |
//!
//! ```text
//! dto/
//! ├── users/      # 회원 요청/응답 DTO
//! └── reviews/    # 리뷰 응답 DTO
//! ```

pub mod users;
pub mod reviews;
