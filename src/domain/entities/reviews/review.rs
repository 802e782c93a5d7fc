//! Review Entity Implementation

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::domain::entities::users::user::UserId;

/// 리뷰 식별자
pub type ReviewId = i64;
/// 상품 식별자
pub type ItemId = i64;

/// 리뷰 엔티티
///
/// MongoDB `reviews` 컬렉션 문서와 1:1로 매핑됩니다.
/// 이 서비스에서는 조회 전용이며, 생성/삭제는 시딩과 다른 서비스의 몫입니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ReviewId>,
    /// 작성자
    pub user_id: UserId,
    /// 리뷰 대상 상품
    pub item_id: ItemId,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Review {
    pub fn new(user_id: UserId, item_id: ItemId, content: String) -> Self {
        let now = Utc::now();

        Self {
            id: None,
            user_id,
            item_id,
            content,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn id_or_default(&self) -> ReviewId {
        self.id.unwrap_or_default()
    }
}
