//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 영속성 게이트웨이 trait과 저장소별 구현을 제공합니다.
//! 리포지토리는 `Arc<dyn UserRepository>` 형태로 서비스 생성자에 주입되며,
//! 모든 메서드는 서비스가 연 [`Transaction`](crate::core::transaction::Transaction)을 받습니다.
//!
//! | trait | MongoDB | 인메모리 |
//! |-------|---------|----------|
//! | [`UserRepository`](users::UserRepository) | `MongoUserRepository` | `MemoryUserRepository` |
//! | [`ReviewRepository`](reviews::ReviewRepository) | `MongoReviewRepository` | `MemoryReviewRepository` |

pub mod users;
pub mod reviews;
