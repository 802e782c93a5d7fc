//! 공통 유틸리티 함수 모듈
//!
//! # Modules
//!
//! - [`string_utils`] - 필수 문자열 검증
//! - [`display_terminal`] - 터미널 출력 포맷팅 함수들
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::utils::string_utils::require_not_blank;
//! use crate::utils::display_terminal::print_boxed_title;
//!
//! let nickname = require_not_blank(&query.nickname, "nickname")?;
//! print_boxed_title("Gracefully Ugly Backend");
//! ```

pub mod string_utils;
pub mod display_terminal;
