//! 리뷰 리포지토리 MongoDB 구현

use std::sync::Arc;
use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{bson::doc, Collection};
use crate::core::errors::AppResult;
use crate::core::transaction::Transaction;
use crate::db::{Database, MongoSession, REVIEWS_COLLECTION};
use crate::domain::entities::reviews::review::{ItemId, Review, ReviewId};
use crate::domain::entities::users::user::UserId;
use super::ReviewRepository;

/// 리뷰 데이터 액세스 리포지토리 (MongoDB `reviews` 컬렉션)
pub struct MongoReviewRepository {
    db: Arc<Database>,
}

impl MongoReviewRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<Review> {
        self.db.get_database().collection::<Review>(REVIEWS_COLLECTION)
    }
}

#[async_trait]
impl ReviewRepository for MongoReviewRepository {
    async fn find_by_id(&self, tx: &mut Transaction, id: ReviewId) -> AppResult<Option<Review>> {
        let session = tx.session_mut::<MongoSession>()?.client_session();

        Ok(self.collection().find_one(doc! { "_id": id }).session(session).await?)
    }

    async fn find_by_item_id(&self, tx: &mut Transaction, item_id: ItemId) -> AppResult<Vec<Review>> {
        let session = tx.session_mut::<MongoSession>()?.client_session();

        let mut cursor = self
            .collection()
            .find(doc! { "item_id": item_id })
            .sort(doc! { "_id": 1 })
            .session(&mut *session)
            .await?;

        let reviews: Vec<Review> = cursor.stream(session).try_collect().await?;
        Ok(reviews)
    }

    async fn count_by_user_id(&self, tx: &mut Transaction, user_id: UserId) -> AppResult<u64> {
        let session = tx.session_mut::<MongoSession>()?.client_session();

        Ok(self
            .collection()
            .count_documents(doc! { "user_id": user_id })
            .session(session)
            .await?)
    }

    async fn insert(&self, tx: &mut Transaction, mut review: Review) -> AppResult<Review> {
        let session = tx.session_mut::<MongoSession>()?.client_session();

        let id = self.db.next_sequence(session, REVIEWS_COLLECTION).await?;
        review.id = Some(id);

        self.collection().insert_one(&review).session(session).await?;

        Ok(review)
    }

    async fn delete_by_id(&self, tx: &mut Transaction, id: ReviewId) -> AppResult<bool> {
        let session = tx.session_mut::<MongoSession>()?.client_session();

        let result = self
            .collection()
            .delete_one(doc! { "_id": id })
            .session(session)
            .await?;

        Ok(result.deleted_count > 0)
    }
}
