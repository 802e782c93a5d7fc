//! # Core Module
//!
//! 애플리케이션 전반에서 쓰이는 기반 구성 요소입니다.
//!
//! - [`errors`] - `AppError`와 HTTP 상태 코드 매핑
//! - [`transaction`] - 트랜잭션 guard와 저장소별 세션 추상화
//! - [`app_state`] - 생성자 주입으로 조립한 서비스 묶음
//!
//! | Spring | 이 모듈 |
//! |--------|---------|
//! | `@ControllerAdvice` + `@ExceptionHandler` | `impl ResponseError for AppError` |
//! | `@Transactional(readOnly = true)` | `tx_manager.begin(TxMode::ReadOnly)` |
//! | `ApplicationContext` | `AppState` (`web::Data`) |

pub mod errors;
pub mod transaction;
pub mod app_state;

pub use errors::*;
pub use app_state::AppState;
