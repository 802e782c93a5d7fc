//! In-memory persistence store
//!
//! `BTreeMap` 테이블을 `tokio::sync::RwLock` 뒤에 두는 개발/테스트용 저장소입니다.
//!
//! - 읽기 전용 트랜잭션은 읽기 잠금을 잡고 일관된 스냅샷을 봅니다.
//! - 읽기/쓰기 트랜잭션은 쓰기 잠금을 잡은 채 작업 사본을 수정하고,
//!   커밋 시 사본이 테이블을 대체합니다. 커밋 전에 해제되면 사본은 버려집니다.

use std::any::Any;
use std::collections::BTreeMap;
use std::sync::Arc;
use async_trait::async_trait;
use log::debug;
use tokio::sync::{OwnedRwLockReadGuard, OwnedRwLockWriteGuard, RwLock};
use crate::core::errors::{AppError, AppResult};
use crate::core::transaction::{Transaction, TransactionManager, TxMode, TxSession};
use crate::domain::entities::reviews::review::{Review, ReviewId};
use crate::domain::entities::users::user::{User, UserId};

/// 저장소 테이블 묶음
#[derive(Debug, Clone, Default)]
pub struct Tables {
    pub users: BTreeMap<UserId, User>,
    pub reviews: BTreeMap<ReviewId, Review>,
    last_user_id: UserId,
    last_review_id: ReviewId,
}

impl Tables {
    pub fn next_user_id(&mut self) -> UserId {
        self.last_user_id += 1;
        self.last_user_id
    }

    pub fn next_review_id(&mut self) -> ReviewId {
        self.last_review_id += 1;
        self.last_review_id
    }
}

/// 인메모리 저장소
#[derive(Clone, Default)]
pub struct MemoryDatabase {
    tables: Arc<RwLock<Tables>>,
}

impl MemoryDatabase {
    pub fn new() -> Self {
        Self::default()
    }
}

/// 인메모리 트랜잭션 세션
pub enum MemorySession {
    Read(OwnedRwLockReadGuard<Tables>),
    Write {
        guard: OwnedRwLockWriteGuard<Tables>,
        working: Tables,
    },
    Closed,
}

impl MemorySession {
    pub fn tables(&self) -> AppResult<&Tables> {
        match self {
            MemorySession::Read(guard) => Ok(&**guard),
            MemorySession::Write { working, .. } => Ok(working),
            MemorySession::Closed => Err(closed_session()),
        }
    }

    /// 쓰기용 작업 사본. 읽기 전용 트랜잭션이면 `InternalError`.
    pub fn tables_mut(&mut self) -> AppResult<&mut Tables> {
        match self {
            MemorySession::Write { working, .. } => Ok(working),
            MemorySession::Read(_) => Err(AppError::InternalError(
                "읽기 전용 트랜잭션에서는 데이터를 변경할 수 없습니다".to_string(),
            )),
            MemorySession::Closed => Err(closed_session()),
        }
    }
}

fn closed_session() -> AppError {
    AppError::InternalError("이미 종료된 트랜잭션 세션입니다".to_string())
}

#[async_trait]
impl TxSession for MemorySession {
    async fn commit(&mut self) -> AppResult<()> {
        if let MemorySession::Write { mut guard, working } =
            std::mem::replace(self, MemorySession::Closed)
        {
            *guard = working;
        }
        Ok(())
    }

    async fn rollback(&mut self) -> AppResult<()> {
        *self = MemorySession::Closed;
        Ok(())
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

#[async_trait]
impl TransactionManager for MemoryDatabase {
    async fn begin(&self, mode: TxMode) -> AppResult<Transaction> {
        let session = match mode {
            TxMode::ReadOnly => MemorySession::Read(Arc::clone(&self.tables).read_owned().await),
            TxMode::ReadWrite => {
                let guard = Arc::clone(&self.tables).write_owned().await;
                let working = guard.clone();
                MemorySession::Write { guard, working }
            }
        };

        debug!("인메모리 {:?} 트랜잭션 시작", mode);
        Ok(Transaction::new(Box::new(session), mode))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn insert_user(tx: &mut Transaction, login_id: &str) -> AppResult<UserId> {
        let tables = tx.session_mut::<MemorySession>()?.tables_mut()?;
        let id = tables.next_user_id();
        let mut user = User::new_basic(login_id.to_string(), "hash".to_string());
        user.id = Some(id);
        tables.users.insert(id, user);
        Ok(id)
    }

    async fn user_count(db: &MemoryDatabase) -> usize {
        let mut tx = db.begin(TxMode::ReadOnly).await.unwrap();
        let count = tx.session_mut::<MemorySession>().unwrap().tables().unwrap().users.len();
        tx.commit().await.unwrap();
        count
    }

    #[actix_web::test]
    async fn test_commit_publishes_working_copy() {
        let db = MemoryDatabase::new();

        let mut tx = db.begin(TxMode::ReadWrite).await.unwrap();
        let id = insert_user(&mut tx, "farmer01").await.unwrap();
        tx.commit().await.unwrap();

        assert_eq!(id, 1);
        assert_eq!(user_count(&db).await, 1);
    }

    #[actix_web::test]
    async fn test_finish_with_error_discards_changes() {
        let db = MemoryDatabase::new();

        let mut tx = db.begin(TxMode::ReadWrite).await.unwrap();
        insert_user(&mut tx, "farmer01").await.unwrap();
        let result: AppResult<()> = tx
            .finish(Err(AppError::ConflictError("dup".to_string())))
            .await;

        assert!(result.is_err());
        assert_eq!(user_count(&db).await, 0);
    }

    #[actix_web::test]
    async fn test_drop_without_commit_discards_changes() {
        let db = MemoryDatabase::new();

        {
            let mut tx = db.begin(TxMode::ReadWrite).await.unwrap();
            insert_user(&mut tx, "farmer01").await.unwrap();
        }

        assert_eq!(user_count(&db).await, 0);

        // 폐기된 할당은 다음 트랜잭션에서 다시 사용됩니다
        let mut tx = db.begin(TxMode::ReadWrite).await.unwrap();
        assert_eq!(insert_user(&mut tx, "farmer02").await.unwrap(), 1);
        tx.commit().await.unwrap();
    }

    #[actix_web::test]
    async fn test_read_only_rejects_writes() {
        let db = MemoryDatabase::new();

        let mut tx = db.begin(TxMode::ReadOnly).await.unwrap();
        let result = insert_user(&mut tx, "farmer01").await;
        tx.rollback().await.unwrap();

        assert!(matches!(result, Err(AppError::InternalError(_))));
    }
}
