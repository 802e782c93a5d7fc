//! 리뷰 응답 DTO

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::domain::entities::reviews::review::{ItemId, Review, ReviewId};
use crate::domain::entities::users::user::UserId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewResponse {
    pub review_id: ReviewId,
    pub user_id: UserId,
    pub item_id: ItemId,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Review> for ReviewResponse {
    fn from(review: Review) -> Self {
        Self {
            review_id: review.id_or_default(),
            user_id: review.user_id,
            item_id: review.item_id,
            content: review.content,
            created_at: review.created_at,
            updated_at: review.updated_at,
        }
    }
}

/// 작성자별 리뷰 수 응답 (`GET /api/users/{userId}/reviews/count`)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewCountResponse {
    pub user_id: UserId,
    pub count: u64,
}
