//! # 사용자 리포지토리 MongoDB 구현
//!
//! `users` 컬렉션에 대한 데이터 액세스를 담당합니다.
//!
//! - **숫자 ID**: `counters` 컬렉션 시퀀스로 `_id`를 할당
//! - **세션 필수**: 모든 쿼리는 트랜잭션의 클라이언트 세션으로 실행
//! - **데이터 무결성**: 유니크 인덱스 위반은 `ConflictError`로 변환

use std::sync::Arc;
use async_trait::async_trait;
use mongodb::{bson::doc, Collection};
use crate::core::errors::{AppError, AppResult};
use crate::core::transaction::Transaction;
use crate::db::{Database, MongoSession, USERS_COLLECTION};
use crate::domain::entities::users::user::{User, UserId};
use super::UserRepository;

/// 사용자 데이터 액세스 리포지토리 (MongoDB)
///
/// ## 저장 구조
///
/// - **컬렉션명**: `users`
/// - **인덱스**: login_id(unique), nickname(unique, partial), email(unique, partial)
pub struct MongoUserRepository {
    db: Arc<Database>,
}

impl MongoUserRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<User> {
        self.db.get_database().collection::<User>(USERS_COLLECTION)
    }

    async fn find_one_by(
        &self,
        tx: &mut Transaction,
        filter: mongodb::bson::Document,
    ) -> AppResult<Option<User>> {
        let session = tx.session_mut::<MongoSession>()?.client_session();

        Ok(self.collection().find_one(filter).session(session).await?)
    }
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    async fn find_by_id(&self, tx: &mut Transaction, id: UserId) -> AppResult<Option<User>> {
        self.find_one_by(tx, doc! { "_id": id }).await
    }

    async fn find_by_login_id(&self, tx: &mut Transaction, login_id: &str) -> AppResult<Option<User>> {
        self.find_one_by(tx, doc! { "login_id": login_id }).await
    }

    async fn find_by_nickname(&self, tx: &mut Transaction, nickname: &str) -> AppResult<Option<User>> {
        self.find_one_by(tx, doc! { "nickname": nickname }).await
    }

    async fn find_by_email(&self, tx: &mut Transaction, email: &str) -> AppResult<Option<User>> {
        self.find_one_by(tx, doc! { "email": email }).await
    }

    async fn insert(&self, tx: &mut Transaction, mut user: User) -> AppResult<User> {
        let session = tx.session_mut::<MongoSession>()?.client_session();

        let id = self.db.next_sequence(session, USERS_COLLECTION).await?;
        user.id = Some(id);

        self.collection().insert_one(&user).session(session).await?;

        Ok(user)
    }

    async fn update(&self, tx: &mut Transaction, user: &User) -> AppResult<()> {
        let id = user.id.ok_or_else(|| {
            AppError::InternalError("저장되지 않은 사용자는 수정할 수 없습니다".to_string())
        })?;
        let session = tx.session_mut::<MongoSession>()?.client_session();

        let result = self
            .collection()
            .replace_one(doc! { "_id": id }, user)
            .session(session)
            .await?;

        if result.matched_count == 0 {
            return Err(AppError::NotFound(format!("{}에 해당하는 사용자가 없습니다.", id)));
        }

        Ok(())
    }

    async fn delete_by_id(&self, tx: &mut Transaction, id: UserId) -> AppResult<bool> {
        let session = tx.session_mut::<MongoSession>()?.client_session();

        let result = self
            .collection()
            .delete_one(doc! { "_id": id })
            .session(session)
            .await?;

        Ok(result.deleted_count > 0)
    }
}
