//! 사용자 관리 서비스 모듈
//!
//! - [`UserSearchService`](user_search_service::UserSearchService): 읽기 전용 조회, 중앙화된 `NotFound` 처리
//! - [`UserService`](user_service::UserService): 가입, 정보 수정, 탈퇴
//!
//! # Examples
//!
//! ```rust,ignore
//! let search = Arc::new(UserSearchService::new(tx_manager.clone(), user_repo.clone()));
//! let users = UserService::new(tx_manager, user_repo, search.clone(), PasswordConfig::bcrypt_cost());
//!
//! let created = users.create_basic_account(request).await?;
//! let profile = search.get_profile(created.user_id).await?;
//! ```

pub mod user_search_service;
pub mod user_service;

pub use user_search_service::UserSearchService;
pub use user_service::UserService;
