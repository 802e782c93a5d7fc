//! 리뷰 리포지토리 인메모리 구현

use async_trait::async_trait;
use crate::core::errors::AppResult;
use crate::core::transaction::Transaction;
use crate::db::memory::MemorySession;
use crate::domain::entities::reviews::review::{ItemId, Review, ReviewId};
use crate::domain::entities::users::user::UserId;
use super::ReviewRepository;

#[derive(Debug, Default, Clone)]
pub struct MemoryReviewRepository;

impl MemoryReviewRepository {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ReviewRepository for MemoryReviewRepository {
    async fn find_by_id(&self, tx: &mut Transaction, id: ReviewId) -> AppResult<Option<Review>> {
        let tables = tx.session_mut::<MemorySession>()?.tables()?;

        Ok(tables.reviews.get(&id).cloned())
    }

    async fn find_by_item_id(&self, tx: &mut Transaction, item_id: ItemId) -> AppResult<Vec<Review>> {
        let tables = tx.session_mut::<MemorySession>()?.tables()?;

        // BTreeMap 순회는 ID 오름차순
        Ok(tables
            .reviews
            .values()
            .filter(|review| review.item_id == item_id)
            .cloned()
            .collect())
    }

    async fn count_by_user_id(&self, tx: &mut Transaction, user_id: UserId) -> AppResult<u64> {
        let tables = tx.session_mut::<MemorySession>()?.tables()?;

        Ok(tables
            .reviews
            .values()
            .filter(|review| review.user_id == user_id)
            .count() as u64)
    }

    async fn insert(&self, tx: &mut Transaction, mut review: Review) -> AppResult<Review> {
        let tables = tx.session_mut::<MemorySession>()?.tables_mut()?;

        let id = tables.next_review_id();
        review.id = Some(id);
        tables.reviews.insert(id, review.clone());

        Ok(review)
    }

    async fn delete_by_id(&self, tx: &mut Transaction, id: ReviewId) -> AppResult<bool> {
        let tables = tx.session_mut::<MemorySession>()?.tables_mut()?;

        Ok(tables.reviews.remove(&id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::transaction::{TransactionManager, TxMode};
    use crate::db::memory::MemoryDatabase;

    #[actix_web::test]
    async fn test_delete_by_id_removes_only_target_review() {
        let db = MemoryDatabase::new();
        let repo = MemoryReviewRepository::new();

        let mut tx = db.begin(TxMode::ReadWrite).await.unwrap();
        let first = repo
            .insert(&mut tx, Review::new(1, 10, "못생겼지만 달아요".to_string()))
            .await
            .unwrap();
        repo.insert(&mut tx, Review::new(1, 10, "또 살게요".to_string()))
            .await
            .unwrap();
        tx.commit().await.unwrap();

        let mut tx = db.begin(TxMode::ReadWrite).await.unwrap();
        assert!(repo.delete_by_id(&mut tx, first.id_or_default()).await.unwrap());
        assert!(!repo.delete_by_id(&mut tx, first.id_or_default()).await.unwrap());
        tx.commit().await.unwrap();

        let mut tx = db.begin(TxMode::ReadOnly).await.unwrap();
        let remaining = repo.find_by_item_id(&mut tx, 10).await.unwrap();
        let count = repo.count_by_user_id(&mut tx, 1).await.unwrap();
        tx.commit().await.unwrap();

        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].content, "또 살게요");
        assert_eq!(count, 1);
    }
}
