//! # Application State
//!
//! 저장소 백엔드에 맞춰 리포지토리와 서비스를 조립하고, actix의 `web::Data`로
//! 핸들러에 전달되는 애플리케이션 상태입니다. 전역 레지스트리 없이 모든 의존성은
//! 생성자로 전달됩니다.
//!
//! ```text
//! TransactionManager ─┬─> UserSearchService ──┐
//! UserRepository ─────┤                       ├─> UserService
//!                     └───────────────────────┘
//! TransactionManager ─┬─> ReviewSearchService
//! ReviewRepository ───┘
//! ```

use std::sync::Arc;
use crate::core::transaction::TransactionManager;
use crate::db::Database;
use crate::db::memory::MemoryDatabase;
use crate::repositories::reviews::{MemoryReviewRepository, MongoReviewRepository, ReviewRepository};
use crate::repositories::users::{MemoryUserRepository, MongoUserRepository, UserRepository};
use crate::services::reviews::ReviewSearchService;
use crate::services::users::{UserSearchService, UserService};

#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<UserService>,
    pub user_search_service: Arc<UserSearchService>,
    pub review_search_service: Arc<ReviewSearchService>,
}

impl AppState {
    pub fn new(
        tx_manager: Arc<dyn TransactionManager>,
        user_repo: Arc<dyn UserRepository>,
        review_repo: Arc<dyn ReviewRepository>,
        bcrypt_cost: u32,
    ) -> Self {
        let user_search_service = Arc::new(UserSearchService::new(
            Arc::clone(&tx_manager),
            Arc::clone(&user_repo),
        ));
        let user_service = Arc::new(UserService::new(
            Arc::clone(&tx_manager),
            user_repo,
            Arc::clone(&user_search_service),
            bcrypt_cost,
        ));
        let review_search_service = Arc::new(ReviewSearchService::new(tx_manager, review_repo));

        Self {
            user_service,
            user_search_service,
            review_search_service,
        }
    }

    /// MongoDB 백엔드로 조립
    pub fn with_mongo(database: Arc<Database>, bcrypt_cost: u32) -> Self {
        Self::new(
            Arc::clone(&database) as Arc<dyn TransactionManager>,
            Arc::new(MongoUserRepository::new(Arc::clone(&database))),
            Arc::new(MongoReviewRepository::new(database)),
            bcrypt_cost,
        )
    }

    /// 인메모리 백엔드로 조립
    pub fn in_memory(database: MemoryDatabase, bcrypt_cost: u32) -> Self {
        Self::new(
            Arc::new(database),
            Arc::new(MemoryUserRepository::new()),
            Arc::new(MemoryReviewRepository::new()),
            bcrypt_cost,
        )
    }
}
