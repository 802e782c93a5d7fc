//! # Domain Entities Module
//!
//! 비즈니스 도메인의 핵심 엔티티들을 정의합니다.
//! Spring JPA의 `@Entity`와 같은 역할을 하며, MongoDB 문서와 직접 매핑됩니다.
//!
//! ## 엔티티 설계 원칙
//!
//! - **숫자 식별자**: `_id`는 저장소의 시퀀스(`counters` 컬렉션)에서 할당되는 `i64`
//! - **ID 참조**: 엔티티 간 직접 참조 대신 `user_id`, `item_id` 같은 ID 참조 사용
//! - **상태 변경 캡슐화**: 필드 변경은 `change_*` 메서드로만 수행하고 `updated_at`을 함께 갱신
//!
//! ## 모듈 구조
//!
//! ```text
//! entities/
//! ├── users/      ← User 엔티티, 로그인 ID 규칙
//! └── reviews/    ← Review 엔티티
//! ```

pub mod users;
pub mod reviews;
