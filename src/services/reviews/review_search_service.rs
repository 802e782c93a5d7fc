//! # 리뷰 조회 서비스
//!
//! ID 조회는 실패를 `NotFound`로 드러내고, 상품별 목록 조회는 리뷰가 없을 때
//! 빈 목록을 돌려줍니다. 두 조회 방식의 차이는 의도된 계약입니다.

use std::sync::Arc;
use crate::core::errors::{AppError, AppResult};
use crate::core::transaction::{TransactionManager, TxMode};
use crate::domain::dto::reviews::ReviewResponse;
use crate::domain::entities::reviews::review::{ItemId, Review, ReviewId};
use crate::domain::entities::users::user::UserId;
use crate::repositories::reviews::ReviewRepository;

pub struct ReviewSearchService {
    tx_manager: Arc<dyn TransactionManager>,
    review_repo: Arc<dyn ReviewRepository>,
}

impl ReviewSearchService {
    pub fn new(tx_manager: Arc<dyn TransactionManager>, review_repo: Arc<dyn ReviewRepository>) -> Self {
        Self { tx_manager, review_repo }
    }

    /// # Errors
    ///
    /// * `AppError::NotFound` - `"해당 리뷰가 존재하지 않습니다."`
    pub async fn find_by_id(&self, review_id: ReviewId) -> AppResult<Review> {
        let mut tx = self.tx_manager.begin(TxMode::ReadOnly).await?;
        let result = self
            .review_repo
            .find_by_id(&mut tx, review_id)
            .await
            .and_then(|review| {
                review.ok_or_else(|| AppError::NotFound("해당 리뷰가 존재하지 않습니다.".to_string()))
            });
        tx.finish(result).await
    }

    pub async fn get_review_by_id(&self, review_id: ReviewId) -> AppResult<ReviewResponse> {
        self.find_by_id(review_id).await.map(ReviewResponse::from)
    }

    pub async fn count_by_user_id(&self, user_id: UserId) -> AppResult<u64> {
        let mut tx = self.tx_manager.begin(TxMode::ReadOnly).await?;
        let result = self.review_repo.count_by_user_id(&mut tx, user_id).await;
        tx.finish(result).await
    }

    /// 상품의 리뷰 목록을 리뷰 ID 오름차순으로 반환합니다. 리뷰가 없으면 빈 목록.
    pub async fn get_reviews_or_empty_by_item_id(&self, item_id: ItemId) -> AppResult<Vec<ReviewResponse>> {
        let mut tx = self.tx_manager.begin(TxMode::ReadOnly).await?;
        let result = self.review_repo.find_by_item_id(&mut tx, item_id).await;
        let reviews = tx.finish(result).await?;

        Ok(reviews.into_iter().map(ReviewResponse::from).collect())
    }
}
