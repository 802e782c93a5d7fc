//! 사용자 리포지토리 인메모리 구현

use async_trait::async_trait;
use crate::core::errors::{AppError, AppResult};
use crate::core::transaction::Transaction;
use crate::db::memory::{MemorySession, Tables};
use crate::domain::entities::users::user::{User, UserId};
use super::UserRepository;

#[derive(Debug, Default, Clone)]
pub struct MemoryUserRepository;

impl MemoryUserRepository {
    pub fn new() -> Self {
        Self
    }

    fn find_in<F>(tx: &mut Transaction, predicate: F) -> AppResult<Option<User>>
    where
        F: Fn(&User) -> bool,
    {
        let tables = tx.session_mut::<MemorySession>()?.tables()?;

        Ok(tables.users.values().find(|user| predicate(user)).cloned())
    }

    /// 유니크 인덱스와 같은 규칙. 자기 자신(`except`)은 제외합니다.
    fn check_unique(tables: &Tables, user: &User, except: Option<UserId>) -> AppResult<()> {
        let others = tables.users.values().filter(|other| except.is_none() || other.id != except);

        for other in others {
            if other.login_id == user.login_id {
                return Err(AppError::ConflictError("이미 사용 중인 로그인 ID입니다".to_string()));
            }
            if user.nickname.is_some() && other.nickname == user.nickname {
                return Err(AppError::ConflictError("이미 사용 중인 닉네임입니다".to_string()));
            }
            if user.email.is_some() && other.email == user.email {
                return Err(AppError::ConflictError("이미 사용 중인 이메일입니다".to_string()));
            }
        }

        Ok(())
    }
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
    async fn find_by_id(&self, tx: &mut Transaction, id: UserId) -> AppResult<Option<User>> {
        let tables = tx.session_mut::<MemorySession>()?.tables()?;

        Ok(tables.users.get(&id).cloned())
    }

    async fn find_by_login_id(&self, tx: &mut Transaction, login_id: &str) -> AppResult<Option<User>> {
        Self::find_in(tx, |user| user.login_id == login_id)
    }

    async fn find_by_nickname(&self, tx: &mut Transaction, nickname: &str) -> AppResult<Option<User>> {
        Self::find_in(tx, |user| user.nickname.as_deref() == Some(nickname))
    }

    async fn find_by_email(&self, tx: &mut Transaction, email: &str) -> AppResult<Option<User>> {
        Self::find_in(tx, |user| user.email.as_deref() == Some(email))
    }

    async fn insert(&self, tx: &mut Transaction, mut user: User) -> AppResult<User> {
        let tables = tx.session_mut::<MemorySession>()?.tables_mut()?;
        Self::check_unique(tables, &user, None)?;

        let id = tables.next_user_id();
        user.id = Some(id);
        tables.users.insert(id, user.clone());

        Ok(user)
    }

    async fn update(&self, tx: &mut Transaction, user: &User) -> AppResult<()> {
        let id = user.id.ok_or_else(|| {
            AppError::InternalError("저장되지 않은 사용자는 수정할 수 없습니다".to_string())
        })?;
        let tables = tx.session_mut::<MemorySession>()?.tables_mut()?;

        if !tables.users.contains_key(&id) {
            return Err(AppError::NotFound(format!("{}에 해당하는 사용자가 없습니다.", id)));
        }
        Self::check_unique(tables, user, Some(id))?;

        tables.users.insert(id, user.clone());
        Ok(())
    }

    async fn delete_by_id(&self, tx: &mut Transaction, id: UserId) -> AppResult<bool> {
        let tables = tx.session_mut::<MemorySession>()?.tables_mut()?;

        Ok(tables.users.remove(&id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::transaction::{TransactionManager, TxMode};
    use crate::db::memory::MemoryDatabase;

    #[actix_web::test]
    async fn test_insert_assigns_increasing_ids() {
        let db = MemoryDatabase::new();
        let repo = MemoryUserRepository::new();

        let mut tx = db.begin(TxMode::ReadWrite).await.unwrap();
        let first = repo
            .insert(&mut tx, User::new_basic("farmer01".to_string(), "hash".to_string()))
            .await
            .unwrap();
        let second = repo
            .insert(&mut tx, User::new_basic("farmer02".to_string(), "hash".to_string()))
            .await
            .unwrap();
        tx.commit().await.unwrap();

        assert_eq!(first.id, Some(1));
        assert_eq!(second.id, Some(2));
    }

    #[actix_web::test]
    async fn test_insert_duplicate_login_id_conflicts() {
        let db = MemoryDatabase::new();
        let repo = MemoryUserRepository::new();

        let mut tx = db.begin(TxMode::ReadWrite).await.unwrap();
        repo.insert(&mut tx, User::new_basic("farmer01".to_string(), "hash".to_string()))
            .await
            .unwrap();
        let duplicate = repo
            .insert(&mut tx, User::new_basic("farmer01".to_string(), "other".to_string()))
            .await;
        tx.rollback().await.unwrap();

        assert!(matches!(duplicate, Err(AppError::ConflictError(_))));
    }

    #[actix_web::test]
    async fn test_update_keeps_own_values_unique() {
        let db = MemoryDatabase::new();
        let repo = MemoryUserRepository::new();

        let mut tx = db.begin(TxMode::ReadWrite).await.unwrap();
        let mut user = repo
            .insert(&mut tx, User::new_basic("farmer01".to_string(), "hash".to_string()))
            .await
            .unwrap();
        user.change_address("부산".to_string());
        repo.update(&mut tx, &user).await.unwrap();

        let found = repo.find_by_id(&mut tx, 1).await.unwrap().unwrap();
        tx.commit().await.unwrap();

        assert_eq!(found.address.as_deref(), Some("부산"));
    }

    #[actix_web::test]
    async fn test_exists_and_delete() {
        let db = MemoryDatabase::new();
        let repo = MemoryUserRepository::new();

        let mut tx = db.begin(TxMode::ReadWrite).await.unwrap();
        repo.insert(&mut tx, User::new_basic("farmer01".to_string(), "hash".to_string()))
            .await
            .unwrap();

        assert!(repo.exists_by_login_id(&mut tx, "farmer01").await.unwrap());
        assert!(!repo.exists_by_nickname(&mut tx, "못난이").await.unwrap());
        assert!(repo.delete_by_id(&mut tx, 1).await.unwrap());
        assert!(!repo.delete_by_id(&mut tx, 1).await.unwrap());
        tx.commit().await.unwrap();
    }
}
