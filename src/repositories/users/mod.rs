//! 사용자 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! [`UserRepository`] trait 하나에 두 가지 구현을 제공합니다.
//!
//! - [`user_repo::MongoUserRepository`]: MongoDB `users` 컬렉션
//! - [`memory_user_repo::MemoryUserRepository`]: 인메모리 테이블
//!
//! 모든 메서드는 호출자가 연 트랜잭션 안에서 실행됩니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! let mut tx = tx_manager.begin(TxMode::ReadOnly).await?;
//! let user = user_repo.find_by_login_id(&mut tx, "farmer01").await?;
//! tx.finish(Ok(user)).await?;
//! ```

pub mod user_repo;
pub mod memory_user_repo;

use async_trait::async_trait;
use crate::core::errors::AppResult;
use crate::core::transaction::Transaction;
use crate::domain::entities::users::user::{User, UserId};

/// 사용자 영속성 게이트웨이
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, tx: &mut Transaction, id: UserId) -> AppResult<Option<User>>;

    async fn find_by_login_id(&self, tx: &mut Transaction, login_id: &str) -> AppResult<Option<User>>;

    async fn find_by_nickname(&self, tx: &mut Transaction, nickname: &str) -> AppResult<Option<User>>;

    async fn find_by_email(&self, tx: &mut Transaction, email: &str) -> AppResult<Option<User>>;

    async fn exists_by_login_id(&self, tx: &mut Transaction, login_id: &str) -> AppResult<bool> {
        Ok(self.find_by_login_id(tx, login_id).await?.is_some())
    }

    async fn exists_by_nickname(&self, tx: &mut Transaction, nickname: &str) -> AppResult<bool> {
        Ok(self.find_by_nickname(tx, nickname).await?.is_some())
    }

    async fn exists_by_email(&self, tx: &mut Transaction, email: &str) -> AppResult<bool> {
        Ok(self.find_by_email(tx, email).await?.is_some())
    }

    /// 새 사용자를 저장하고 할당된 ID가 채워진 엔티티를 반환합니다.
    ///
    /// 로그인 ID가 이미 있으면 `ConflictError`.
    async fn insert(&self, tx: &mut Transaction, user: User) -> AppResult<User>;

    /// 저장된 사용자 전체를 교체합니다. 존재하지 않으면 `NotFound`.
    async fn update(&self, tx: &mut Transaction, user: &User) -> AppResult<()>;

    /// 삭제된 행이 있으면 `true`
    async fn delete_by_id(&self, tx: &mut Transaction, id: UserId) -> AppResult<bool>;
}

pub use memory_user_repo::MemoryUserRepository;
pub use user_repo::MongoUserRepository;
