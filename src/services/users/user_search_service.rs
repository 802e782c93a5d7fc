//! # 사용자 조회 서비스
//!
//! 사용자 조회 연산을 읽기 전용 트랜잭션 하나로 감싸는 검색 서비스입니다.
//! ID 기반 조회 실패를 `NotFound`로 바꾸는 일은 [`UserSearchService::find_by_id_in`]
//! 한 곳에서만 수행하며, 변경 서비스도 같은 메서드를 자기 트랜잭션 안에서 재사용합니다.

use std::sync::Arc;
use crate::core::errors::{AppError, AppResult};
use crate::core::transaction::{Transaction, TransactionManager, TxMode};
use crate::domain::dto::users::response::{ProfileResponse, UserResponse};
use crate::domain::entities::users::user::{User, UserId};
use crate::repositories::users::UserRepository;

pub struct UserSearchService {
    tx_manager: Arc<dyn TransactionManager>,
    user_repo: Arc<dyn UserRepository>,
}

impl UserSearchService {
    pub fn new(tx_manager: Arc<dyn TransactionManager>, user_repo: Arc<dyn UserRepository>) -> Self {
        Self { tx_manager, user_repo }
    }

    /// 진행 중인 트랜잭션 안에서 ID로 사용자를 조회합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - `"{id}에 해당하는 사용자가 없습니다."`
    pub async fn find_by_id_in(&self, tx: &mut Transaction, user_id: UserId) -> AppResult<User> {
        self.user_repo
            .find_by_id(tx, user_id)
            .await?
            .ok_or_else(|| {
                log::debug!("사용자 조회 실패: {}", user_id);
                AppError::NotFound(format!("{}에 해당하는 사용자가 없습니다.", user_id))
            })
    }

    pub async fn find_by_id(&self, user_id: UserId) -> AppResult<User> {
        let mut tx = self.tx_manager.begin(TxMode::ReadOnly).await?;
        let result = self.find_by_id_in(&mut tx, user_id).await;
        tx.finish(result).await
    }

    /// 범용 회원 응답 (`GET /api/users/{userId}`)
    pub async fn get_user(&self, user_id: UserId) -> AppResult<UserResponse> {
        self.find_by_id(user_id).await.map(UserResponse::from)
    }

    /// 프로필 응답 (`GET /api/users/{userId}/profile`)
    pub async fn get_profile(&self, user_id: UserId) -> AppResult<ProfileResponse> {
        self.find_by_id(user_id).await.map(ProfileResponse::from)
    }

    pub async fn exists_by_login_id(&self, login_id: &str) -> AppResult<bool> {
        let mut tx = self.tx_manager.begin(TxMode::ReadOnly).await?;
        let result = self.user_repo.exists_by_login_id(&mut tx, login_id).await;
        tx.finish(result).await
    }

    pub async fn exists_by_nickname(&self, nickname: &str) -> AppResult<bool> {
        let mut tx = self.tx_manager.begin(TxMode::ReadOnly).await?;
        let result = self.user_repo.exists_by_nickname(&mut tx, nickname).await;
        tx.finish(result).await
    }

    pub async fn exists_by_email(&self, email: &str) -> AppResult<bool> {
        let mut tx = self.tx_manager.begin(TxMode::ReadOnly).await?;
        let result = self.user_repo.exists_by_email(&mut tx, email).await;
        tx.finish(result).await
    }
}
