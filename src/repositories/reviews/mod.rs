//! 리뷰 데이터 액세스 계층
//!
//! 리뷰는 HTTP로는 조회만 가능하지만, 저장소 시딩을 위해 게이트웨이는
//! `insert`/`delete_by_id`도 제공합니다.

pub mod review_repo;
pub mod memory_review_repo;

use async_trait::async_trait;
use crate::core::errors::AppResult;
use crate::core::transaction::Transaction;
use crate::domain::entities::reviews::review::{ItemId, Review, ReviewId};
use crate::domain::entities::users::user::UserId;

/// 리뷰 영속성 게이트웨이
#[async_trait]
pub trait ReviewRepository: Send + Sync {
    async fn find_by_id(&self, tx: &mut Transaction, id: ReviewId) -> AppResult<Option<Review>>;

    /// 상품의 리뷰 목록. 리뷰 ID 오름차순이며 없으면 빈 목록입니다.
    async fn find_by_item_id(&self, tx: &mut Transaction, item_id: ItemId) -> AppResult<Vec<Review>>;

    /// 작성자의 리뷰 수. 없으면 0.
    async fn count_by_user_id(&self, tx: &mut Transaction, user_id: UserId) -> AppResult<u64>;

    async fn insert(&self, tx: &mut Transaction, review: Review) -> AppResult<Review>;

    async fn delete_by_id(&self, tx: &mut Transaction, id: ReviewId) -> AppResult<bool>;
}

pub use memory_review_repo::MemoryReviewRepository;
pub use review_repo::MongoReviewRepository;
