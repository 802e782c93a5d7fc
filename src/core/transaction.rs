//! # Transaction Scoping
//!
//! 서비스 연산 하나를 하나의 작업 단위(unit of work)로 묶는 명시적 트랜잭션 계층입니다.
//! Spring의 `@Transactional` 어노테이션이 하던 일을 값(guard)으로 표현합니다.
//!
//! ```text
//! Service operation
//!   │  tx = manager.begin(mode)
//!   │  result = repo.xxx(&mut tx, ..)
//!   ▼  tx.finish(result)  →  Ok: commit / Err: rollback
//! ```
//!
//! `finish`, `commit`, `rollback` 중 어느 것도 호출되지 않은 채 `Transaction`이
//! drop 되면(조기 반환, panic, future 취소) 세션 구현이 작업 내용을 폐기합니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! pub async fn get_profile(&self, user_id: UserId) -> AppResult<ProfileResponse> {
//!     let mut tx = self.tx_manager.begin(TxMode::ReadOnly).await?;
//!     let result = self.find_by_id_in(&mut tx, user_id).await.map(ProfileResponse::from);
//!     tx.finish(result).await
//! }
//! ```

use std::any::Any;
use async_trait::async_trait;
use crate::core::errors::{AppError, AppResult};

/// 트랜잭션 접근 모드
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TxMode {
    /// 조회 전용. 쓰기 시도는 거부될 수 있습니다.
    ReadOnly,
    /// 조회와 변경 모두 허용
    ReadWrite,
}

/// 저장소별 트랜잭션 세션
///
/// 구현체는 커밋되지 않은 상태로 drop 될 때 작업 내용을 반드시 폐기해야 합니다.
#[async_trait]
pub trait TxSession: Send + 'static {
    /// 변경 내용을 저장소에 반영합니다.
    async fn commit(&mut self) -> AppResult<()>;

    /// 변경 내용을 폐기합니다.
    async fn rollback(&mut self) -> AppResult<()>;

    /// 리포지토리가 구체 세션 타입으로 다운캐스트할 때 사용합니다.
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// 트랜잭션 시작 지점
///
/// 각 저장소 백엔드(MongoDB, 인메모리)가 구현하며, 서비스에는
/// `Arc<dyn TransactionManager>`로 생성자 주입됩니다.
#[async_trait]
pub trait TransactionManager: Send + Sync {
    async fn begin(&self, mode: TxMode) -> AppResult<Transaction>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TxState {
    Active,
    Committed,
    RolledBack,
}

/// 진행 중인 트랜잭션 guard
pub struct Transaction {
    session: Box<dyn TxSession>,
    mode: TxMode,
    state: TxState,
}

impl Transaction {
    pub fn new(session: Box<dyn TxSession>, mode: TxMode) -> Self {
        Self {
            session,
            mode,
            state: TxState::Active,
        }
    }

    /// 구체 세션 타입을 꺼냅니다.
    ///
    /// 리포지토리와 트랜잭션 매니저가 서로 다른 백엔드로 조립된 경우
    /// `InternalError`를 반환합니다.
    pub fn session_mut<S: TxSession>(&mut self) -> AppResult<&mut S> {
        if self.state != TxState::Active {
            return Err(AppError::InternalError(
                "이미 종료된 트랜잭션입니다".to_string(),
            ));
        }

        self.session
            .as_any_mut()
            .downcast_mut::<S>()
            .ok_or_else(|| AppError::InternalError(format!(
                "트랜잭션 세션 타입이 일치하지 않습니다: {}",
                std::any::type_name::<S>()
            )))
    }

    pub async fn commit(mut self) -> AppResult<()> {
        self.commit_in_place().await
    }

    /// 커밋에 실패하면 세션 구현이 작업 내용을 폐기하므로 롤백된 것으로 간주합니다.
    async fn commit_in_place(&mut self) -> AppResult<()> {
        let result = self.session.commit().await;
        self.state = match result {
            Ok(()) => TxState::Committed,
            Err(_) => TxState::RolledBack,
        };
        result
    }

    pub async fn rollback(mut self) -> AppResult<()> {
        let result = self.session.rollback().await;
        self.state = TxState::RolledBack;
        result
    }

    /// 연산 결과에 따라 트랜잭션을 종료합니다.
    ///
    /// - `Ok` → 커밋. 커밋 실패 시 커밋 에러를 반환합니다.
    /// - `Err` → 롤백. 롤백 실패는 로그로 남기고 원래 에러를 반환합니다.
    pub async fn finish<T>(self, result: AppResult<T>) -> AppResult<T> {
        match result {
            Ok(value) => {
                self.commit().await?;
                Ok(value)
            }
            Err(error) => {
                if let Err(rollback_error) = self.rollback().await {
                    log::error!(
                        "트랜잭션 롤백 실패: {} (원래 에러: {})",
                        rollback_error,
                        error
                    );
                }
                Err(error)
            }
        }
    }
}

impl Drop for Transaction {
    fn drop(&mut self) {
        if self.state == TxState::Active {
            log::warn!(
                "{:?} 트랜잭션이 종료되지 않은 채 해제되었습니다. 변경 내용은 폐기됩니다",
                self.mode
            );
        }
    }
}

impl std::fmt::Debug for Transaction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Transaction")
            .field("mode", &self.mode)
            .field("state", &self.state)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct Counters {
        commits: AtomicUsize,
        rollbacks: AtomicUsize,
    }

    struct RecordingSession {
        counters: Arc<Counters>,
        fail_commit: bool,
    }

    #[async_trait]
    impl TxSession for RecordingSession {
        async fn commit(&mut self) -> AppResult<()> {
            if self.fail_commit {
                return Err(AppError::DatabaseError("commit failed".to_string()));
            }
            self.counters.commits.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }

        async fn rollback(&mut self) -> AppResult<()> {
            self.counters.rollbacks.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }

        fn as_any_mut(&mut self) -> &mut dyn Any {
            self
        }
    }

    struct OtherSession;

    #[async_trait]
    impl TxSession for OtherSession {
        async fn commit(&mut self) -> AppResult<()> {
            Ok(())
        }

        async fn rollback(&mut self) -> AppResult<()> {
            Ok(())
        }

        fn as_any_mut(&mut self) -> &mut dyn Any {
            self
        }
    }

    fn recording_tx(counters: &Arc<Counters>, fail_commit: bool) -> Transaction {
        Transaction::new(
            Box::new(RecordingSession {
                counters: Arc::clone(counters),
                fail_commit,
            }),
            TxMode::ReadWrite,
        )
    }

    #[actix_web::test]
    async fn test_finish_commits_on_ok() {
        let counters = Arc::new(Counters::default());
        let tx = recording_tx(&counters, false);

        let value = tx.finish(Ok(7)).await.unwrap();

        assert_eq!(value, 7);
        assert_eq!(counters.commits.load(Ordering::SeqCst), 1);
        assert_eq!(counters.rollbacks.load(Ordering::SeqCst), 0);
    }

    #[actix_web::test]
    async fn test_finish_rolls_back_on_err() {
        let counters = Arc::new(Counters::default());
        let tx = recording_tx(&counters, false);

        let result: AppResult<()> = tx
            .finish(Err(AppError::NotFound("missing".to_string())))
            .await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
        assert_eq!(counters.commits.load(Ordering::SeqCst), 0);
        assert_eq!(counters.rollbacks.load(Ordering::SeqCst), 1);
    }

    #[actix_web::test]
    async fn test_finish_surfaces_commit_failure() {
        let counters = Arc::new(Counters::default());
        let tx = recording_tx(&counters, true);

        let result = tx.finish(Ok(())).await;

        assert!(matches!(result, Err(AppError::DatabaseError(_))));
    }

    #[actix_web::test]
    async fn test_failed_commit_leaves_transaction_finished() {
        let counters = Arc::new(Counters::default());
        let mut tx = recording_tx(&counters, true);

        let result = tx.commit_in_place().await;

        assert!(matches!(result, Err(AppError::DatabaseError(_))));
        assert_eq!(tx.state, TxState::RolledBack);
        assert!(matches!(
            tx.session_mut::<RecordingSession>(),
            Err(AppError::InternalError(_))
        ));
    }

    #[test]
    fn test_session_downcast() {
        let counters = Arc::new(Counters::default());
        let mut tx = recording_tx(&counters, false);

        assert!(tx.session_mut::<RecordingSession>().is_ok());
        assert!(matches!(
            tx.session_mut::<OtherSession>(),
            Err(AppError::InternalError(_))
        ));
    }
}
