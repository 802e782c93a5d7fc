//! Users Entity Module
//!
//! 회원 도메인의 핵심 엔티티를 정의하는 모듈입니다.
//!
//! # 주요 구성 요소
//!
//! - [`User`](user::User): 2단계 가입(기본 → 최종)을 거치는 회원 엔티티
//! - 로그인 ID 길이 규칙 (`MIN_LOGIN_ID_LENGTH`..=`MAX_LOGIN_ID_LENGTH`)
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::entities::users::user::User;
//!
//! let mut user = User::new_basic("farmer01".to_string(), password_hash);
//! user.complete_registration(nickname, email, address)?;
//! ```

pub mod user;
