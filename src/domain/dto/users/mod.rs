//! # User Data Transfer Objects Module
//!
//! 회원 API의 요청/응답 데이터 구조를 정의합니다.
//!
//! ```text
//! users/
//! ├── request/     # 가입, 정보 수정 요청 본문과 가용성 검사 쿼리
//! └── response/    # UserResponse, ProfileResponse, 가입 응답
//! ```

pub mod request;
pub mod response;
