//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 생성자로 트랜잭션 매니저와 리포지토리를 주입받으며,
//! 공개 연산마다 트랜잭션 하나를 열고 결과에 따라 커밋 또는 롤백합니다.
//!
//! - 조회 서비스 (`UserSearchService`, `ReviewSearchService`): 읽기 전용 트랜잭션
//! - 변경 서비스 (`UserService`): 읽기/쓰기 트랜잭션

pub mod users;
pub mod reviews;
