//! # 사용자 관리 서비스 구현
//!
//! 회원 계정의 생명주기(기본 가입 → 최종 가입 → 정보 수정 → 탈퇴)를 관리하는
//! 변경(mutation) 서비스입니다. 공개 연산 하나가 읽기/쓰기 트랜잭션 하나에 대응하며,
//! 연산이 `Err`로 끝나면 그 안의 모든 변경이 롤백됩니다.
//!
//! ```text
//! ┌───────────────────────────────────────────────┐
//! │                  UserService                  │
//! │  • 요청 검증 (validator)                      │
//! │  • 비밀번호 해싱 (bcrypt)                     │
//! │  • 중복 검사 (로그인 ID, 닉네임, 이메일)      │
//! └───────────────┬───────────────────┬───────────┘
//!                 │                   │
//!                 ▼                   ▼
//!       UserSearchService      UserRepository
//!       (find_by_id_in)        (insert / update / delete)
//! ```
//!
//! ## 비밀번호 보안
//!
//! - **bcrypt 해싱**: cost는 생성자로 주입 (`PasswordConfig::bcrypt_cost()`)
//! - **잠금 최소화**: 해싱은 트랜잭션을 열기 전에 수행

use std::sync::Arc;
use bcrypt::hash;
use validator::Validate;
use crate::core::errors::{AppError, AppResult, ErrorContext};
use crate::core::transaction::{Transaction, TransactionManager, TxMode};
use crate::domain::dto::users::request::{
    AdditionalRegRequest, BasicRegRequest, UpdateAddressDto, UpdateNicknameDto,
};
use crate::domain::dto::users::response::{BasicRegResponse, FinalRegResponse};
use crate::domain::entities::users::user::{User, UserId};
use crate::repositories::users::UserRepository;
use super::user_search_service::UserSearchService;

pub struct UserService {
    tx_manager: Arc<dyn TransactionManager>,
    user_repo: Arc<dyn UserRepository>,
    user_search_service: Arc<UserSearchService>,
    bcrypt_cost: u32,
}

impl UserService {
    pub fn new(
        tx_manager: Arc<dyn TransactionManager>,
        user_repo: Arc<dyn UserRepository>,
        user_search_service: Arc<UserSearchService>,
        bcrypt_cost: u32,
    ) -> Self {
        Self {
            tx_manager,
            user_repo,
            user_search_service,
            bcrypt_cost,
        }
    }

    /// 기본 가입 (로그인 ID + 비밀번호)
    ///
    /// # Errors
    ///
    /// * `ValidationError` - 로그인 ID/비밀번호 형식 위반
    /// * `ConflictError` - 이미 사용 중인 로그인 ID
    pub async fn create_basic_account(&self, request: BasicRegRequest) -> AppResult<BasicRegResponse> {
        request.validate()?;

        let password_hash = self.hash_password(&request.password)?;

        let mut tx = self.tx_manager.begin(TxMode::ReadWrite).await?;
        let result = self.insert_basic_account(&mut tx, request.login_id, password_hash).await;
        let user = tx.finish(result).await?;

        log::info!("기본 가입 완료: {} (id: {})", user.login_id, user.id_or_default());
        Ok(BasicRegResponse::from(user))
    }

    /// 최종 가입 (닉네임, 이메일, 주소 등록)
    ///
    /// # Errors
    ///
    /// * `NotFound` - 존재하지 않는 사용자
    /// * `ValidationError` - 형식 위반 또는 이미 최종 가입이 끝난 사용자
    /// * `ConflictError` - 다른 사용자가 쓰는 닉네임/이메일
    pub async fn complete_registration(
        &self,
        user_id: UserId,
        request: AdditionalRegRequest,
    ) -> AppResult<FinalRegResponse> {
        request.validate()?;

        let mut tx = self.tx_manager.begin(TxMode::ReadWrite).await?;
        let result = self.complete_registration_in(&mut tx, user_id, request).await;
        let user = tx.finish(result).await?;

        log::info!("최종 가입 완료: {}", user_id);
        Ok(FinalRegResponse::from(user))
    }

    pub async fn update_nickname(&self, user_id: UserId, nickname: String) -> AppResult<UpdateNicknameDto> {
        let mut tx = self.tx_manager.begin(TxMode::ReadWrite).await?;
        let result = self.update_nickname_in(&mut tx, user_id, nickname).await;
        let user = tx.finish(result).await?;

        log::info!("닉네임 변경: {}", user_id);
        Ok(UpdateNicknameDto {
            nickname: user.nickname.unwrap_or_default(),
        })
    }

    pub async fn update_password(&self, user_id: UserId, password: String) -> AppResult<()> {
        let password_hash = self.hash_password(&password)?;

        let mut tx = self.tx_manager.begin(TxMode::ReadWrite).await?;
        let result = self.update_password_in(&mut tx, user_id, password_hash).await;
        tx.finish(result).await?;

        log::info!("비밀번호 변경: {}", user_id);
        Ok(())
    }

    pub async fn update_address(&self, user_id: UserId, address: String) -> AppResult<UpdateAddressDto> {
        let mut tx = self.tx_manager.begin(TxMode::ReadWrite).await?;
        let result = self.update_address_in(&mut tx, user_id, address).await;
        let user = tx.finish(result).await?;

        log::info!("주소 변경: {}", user_id);
        Ok(UpdateAddressDto {
            address: user.address.unwrap_or_default(),
        })
    }

    /// 회원 탈퇴. 존재하지 않는 ID도 성공으로 처리합니다.
    pub async fn delete(&self, user_id: UserId) -> AppResult<()> {
        let mut tx = self.tx_manager.begin(TxMode::ReadWrite).await?;
        let result = self.user_repo.delete_by_id(&mut tx, user_id).await;
        let deleted = tx.finish(result).await?;

        if deleted {
            log::warn!("사용자 삭제 완료: {}", user_id);
        } else {
            log::debug!("삭제할 사용자가 없습니다: {}", user_id);
        }
        Ok(())
    }

    fn hash_password(&self, password: &str) -> AppResult<String> {
        let start_time = std::time::Instant::now();
        let password_hash = hash(password, self.bcrypt_cost).context("비밀번호 해싱 실패")?;
        log::debug!("Password hashing took: {:?}", start_time.elapsed());

        Ok(password_hash)
    }

    async fn insert_basic_account(
        &self,
        tx: &mut Transaction,
        login_id: String,
        password_hash: String,
    ) -> AppResult<User> {
        if self.user_repo.exists_by_login_id(tx, &login_id).await? {
            return Err(AppError::ConflictError(format!("이미 사용 중인 로그인 ID입니다: {}", login_id)));
        }

        self.user_repo.insert(tx, User::new_basic(login_id, password_hash)).await
    }

    async fn complete_registration_in(
        &self,
        tx: &mut Transaction,
        user_id: UserId,
        request: AdditionalRegRequest,
    ) -> AppResult<User> {
        let mut user = self.user_search_service.find_by_id_in(tx, user_id).await?;

        self.ensure_nickname_available(tx, user_id, &request.nickname).await?;
        self.ensure_email_available(tx, user_id, &request.email).await?;

        user.complete_registration(request.nickname, request.email, request.address)?;
        self.user_repo.update(tx, &user).await?;
        Ok(user)
    }

    async fn update_nickname_in(&self, tx: &mut Transaction, user_id: UserId, nickname: String) -> AppResult<User> {
        let mut user = self.user_search_service.find_by_id_in(tx, user_id).await?;

        self.ensure_nickname_available(tx, user_id, &nickname).await?;

        user.change_nickname(nickname);
        self.user_repo.update(tx, &user).await?;
        Ok(user)
    }

    async fn update_password_in(&self, tx: &mut Transaction, user_id: UserId, password_hash: String) -> AppResult<()> {
        let mut user = self.user_search_service.find_by_id_in(tx, user_id).await?;

        user.change_password_hash(password_hash);
        self.user_repo.update(tx, &user).await
    }

    async fn update_address_in(&self, tx: &mut Transaction, user_id: UserId, address: String) -> AppResult<User> {
        let mut user = self.user_search_service.find_by_id_in(tx, user_id).await?;

        user.change_address(address);
        self.user_repo.update(tx, &user).await?;
        Ok(user)
    }

    /// 다른 사용자가 같은 닉네임을 쓰고 있으면 `ConflictError`
    async fn ensure_nickname_available(&self, tx: &mut Transaction, user_id: UserId, nickname: &str) -> AppResult<()> {
        let taken = self
            .user_repo
            .find_by_nickname(tx, nickname)
            .await?
            .is_some_and(|owner| owner.id != Some(user_id));

        if taken {
            return Err(AppError::ConflictError(format!("이미 사용 중인 닉네임입니다: {}", nickname)));
        }
        Ok(())
    }

    async fn ensure_email_available(&self, tx: &mut Transaction, user_id: UserId, email: &str) -> AppResult<()> {
        let taken = self
            .user_repo
            .find_by_email(tx, email)
            .await?
            .is_some_and(|owner| owner.id != Some(user_id));

        if taken {
            return Err(AppError::ConflictError(format!("이미 사용 중인 이메일입니다: {}", email)));
        }
        Ok(())
    }
}
