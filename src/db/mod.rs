//! Database Connection Management Module
//!
//! 저장소 연결과 트랜잭션 세션을 관리하는 모듈입니다.
//!
//! - [`Database`]: MongoDB 클라이언트 래퍼. 트랜잭션마다 클라이언트 세션을 하나씩 엽니다.
//! - [`memory::MemoryDatabase`]: 개발/테스트용 인메모리 저장소
//!
//! 두 구현 모두 [`TransactionManager`]를 구현하므로 서비스 계층은 어떤 저장소가
//! 조립되었는지 알지 못합니다.
//!
//! # 환경 변수 설정
//!
//! ```bash
//! # MongoDB 연결 URI (트랜잭션 사용을 위해 replica set 필요)
//! export MONGODB_URI="mongodb://localhost:27017/?replicaSet=rs0"
//!
//! # 사용할 데이터베이스 이름
//! export DATABASE_NAME="gracefully_ugly_dev"
//! ```

pub mod memory;

use std::any::Any;
use async_trait::async_trait;
use mongodb::{
    bson::{doc, Document},
    options::{ClientOptions, FindOneAndUpdateOptions, IndexOptions, ReturnDocument},
    Client, ClientSession, IndexModel,
};
use log::{debug, info};
use crate::core::errors::{AppError, AppResult};
use crate::core::transaction::{Transaction, TransactionManager, TxMode, TxSession};

pub const USERS_COLLECTION: &str = "users";
pub const REVIEWS_COLLECTION: &str = "reviews";
const COUNTERS_COLLECTION: &str = "counters";

/// MongoDB 데이터베이스 연결 래퍼
///
/// MongoDB 클라이언트와 데이터베이스 이름을 보관하며,
/// 리포지토리 계층에서 컬렉션 접근과 세션 생성을 위한 기본 인터페이스를 제공합니다.
#[derive(Clone)]
pub struct Database {
    client: Client,
    database_name: String,
}

impl Database {
    /// 새 MongoDB 데이터베이스 연결을 생성합니다.
    ///
    /// 클라이언트를 초기화한 뒤 `ping` 명령으로 연결 상태를 검증합니다.
    ///
    /// ## 사용 예제
    /// ```rust,ignore
    /// let database = Database::connect(&DatabaseConfig::mongodb_uri(), &DatabaseConfig::database_name()).await?;
    /// ```
    pub async fn connect(mongodb_uri: &str, database_name: &str) -> AppResult<Self> {
        let mut client_options = ClientOptions::parse(mongodb_uri).await?;
        client_options.app_name = Some("gracefully_ugly_backend".to_string());

        let client = Client::with_options(client_options)?;

        client
            .database(database_name)
            .run_command(doc! { "ping": 1 })
            .await?;

        info!("✅ MongoDB 연결 성공: {}", database_name);

        Ok(Self {
            client,
            database_name: database_name.to_string(),
        })
    }

    /// 실제 MongoDB 작업을 위한 `mongodb::Database` 인스턴스를 반환합니다.
    pub fn get_database(&self) -> mongodb::Database {
        self.client.database(&self.database_name)
    }

    pub fn database_name(&self) -> &str {
        &self.database_name
    }

    /// 컬렉션별 시퀀스 값을 하나 증가시켜 새 숫자 ID를 할당합니다.
    ///
    /// `counters` 컬렉션의 `{ _id: <collection>, seq }` 문서를 upsert 하며,
    /// 호출자의 트랜잭션 세션 안에서 실행되므로 롤백 시 할당도 취소됩니다.
    pub async fn next_sequence(&self, session: &mut ClientSession, collection: &str) -> AppResult<i64> {
        let options = FindOneAndUpdateOptions::builder()
            .upsert(true)
            .return_document(ReturnDocument::After)
            .build();

        let counter = self
            .get_database()
            .collection::<Document>(COUNTERS_COLLECTION)
            .find_one_and_update(doc! { "_id": collection }, doc! { "$inc": { "seq": 1_i64 } })
            .with_options(options)
            .session(session)
            .await?
            .ok_or_else(|| AppError::DatabaseError(format!("{} 시퀀스를 할당하지 못했습니다", collection)))?;

        counter
            .get_i64("seq")
            .map_err(|e| AppError::DatabaseError(format!("{} 시퀀스 형식 오류: {}", collection, e)))
    }

    /// 애플리케이션 시작 시 필요한 인덱스를 생성합니다.
    ///
    /// 1. `users.login_id` 유니크 인덱스
    /// 2. `users.nickname`, `users.email` 유니크 부분 인덱스 (값이 문자열인 문서만)
    /// 3. `reviews.item_id`, `reviews.user_id` 조회 인덱스
    ///
    /// 이미 중복 데이터가 있으면 유니크 인덱스 생성이 실패합니다.
    pub async fn create_indexes(&self) -> AppResult<()> {
        let database = self.get_database();

        let login_id_index = IndexModel::builder()
            .keys(doc! { "login_id": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("login_id_unique".to_string())
                .build())
            .build();

        let nickname_index = IndexModel::builder()
            .keys(doc! { "nickname": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .partial_filter_expression(doc! { "nickname": { "$type": "string" } })
                .name("nickname_unique".to_string())
                .build())
            .build();

        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .partial_filter_expression(doc! { "email": { "$type": "string" } })
                .name("email_unique".to_string())
                .build())
            .build();

        database
            .collection::<Document>(USERS_COLLECTION)
            .create_indexes([login_id_index, nickname_index, email_index])
            .await?;

        let item_index = IndexModel::builder()
            .keys(doc! { "item_id": 1, "_id": 1 })
            .options(IndexOptions::builder().name("item_id_asc".to_string()).build())
            .build();

        let author_index = IndexModel::builder()
            .keys(doc! { "user_id": 1 })
            .options(IndexOptions::builder().name("user_id_asc".to_string()).build())
            .build();

        database
            .collection::<Document>(REVIEWS_COLLECTION)
            .create_indexes([item_index, author_index])
            .await?;

        info!("✅ MongoDB 인덱스 준비 완료");
        Ok(())
    }
}

/// MongoDB 트랜잭션 세션
///
/// 커밋되지 않은 채 drop 되면 드라이버가 진행 중인 트랜잭션을 중단(abort)합니다.
pub struct MongoSession {
    session: ClientSession,
}

impl MongoSession {
    pub fn client_session(&mut self) -> &mut ClientSession {
        &mut self.session
    }
}

#[async_trait]
impl TxSession for MongoSession {
    async fn commit(&mut self) -> AppResult<()> {
        self.session.commit_transaction().await?;
        Ok(())
    }

    async fn rollback(&mut self) -> AppResult<()> {
        self.session.abort_transaction().await?;
        Ok(())
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

#[async_trait]
impl TransactionManager for Database {
    async fn begin(&self, mode: TxMode) -> AppResult<Transaction> {
        let mut session = self.client.start_session().await?;
        session.start_transaction().await?;

        debug!("MongoDB {:?} 트랜잭션 시작", mode);
        Ok(Transaction::new(Box::new(MongoSession { session }), mode))
    }
}
