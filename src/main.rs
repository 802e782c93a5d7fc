//! # Gracefully Ugly Backend
//!
//! 회원/리뷰 관리 REST 백엔드의 진입점입니다.
//!
//! ## 시작 순서
//!
//! 1. 프로필별 `.env` 로드 (`PROFILE=dev|prod`)
//! 2. `env_logger` 초기화 (`RUST_LOG`, 기본 `info,actix_web=debug`)
//! 3. 저장소 백엔드 조립 (`STORAGE_BACKEND=mongodb|memory`)
//! 4. HTTP 서버 시작 (rate limit, CORS, 접근 로그)

use std::sync::Arc;
use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use actix_governor::{Governor, GovernorConfigBuilder};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};
use gracefully_ugly_backend::config::{
    CorsConfig, DatabaseConfig, PasswordConfig, RateLimitConfig, ServerConfig, StorageBackend,
};
use gracefully_ugly_backend::core::AppState;
use gracefully_ugly_backend::core::errors::AppResult;
use gracefully_ugly_backend::db::Database;
use gracefully_ugly_backend::db::memory::MemoryDatabase;
use gracefully_ugly_backend::routes::configure_all_routes;
use gracefully_ugly_backend::utils::display_terminal::{
    print_boxed_title, print_step_complete, print_step_start, print_sub_task,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let env_status = load_env_file();
    init_logging();

    print_boxed_title("Gracefully Ugly Backend");
    info!("{}", env_status);

    let state = build_app_state().await.map_err(|e| {
        error!("애플리케이션 초기화 실패: {}", e);
        std::io::Error::other(e.to_string())
    })?;

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    start_http_server(state).await
}

async fn start_http_server(state: AppState) -> std::io::Result<()> {
    let bind_address = (ServerConfig::host(), ServerConfig::port());

    info!("🌐 서버가 http://{}:{} 에서 실행중입니다", bind_address.0, bind_address.1);
    info!("📍 Health check: http://{}:{}/health", bind_address.0, bind_address.1);

    let per_second = RateLimitConfig::per_second();
    let burst_size = RateLimitConfig::burst_size();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(per_second)
        .burst_size(burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| std::io::Error::other("rate limit 설정이 올바르지 않습니다"))?;

    info!("🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개", per_second, burst_size);

    let allowed_origins = CorsConfig::allowed_origins();
    let state = web::Data::new(state);

    HttpServer::new(move || {
        App::new()
            // Rate Limiting 미들웨어 (가장 먼저 적용)
            .wrap(Governor::new(&governor_conf))
            .wrap(configure_cors(&allowed_origins))
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .app_data(state.clone())
            .configure(configure_all_routes)
    })
    .bind(bind_address)?
    .workers(ServerConfig::workers())
    .run()
    .await
}

fn load_env_file() -> String {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    let status = match profile.as_str() {
        "prod" => dotenv::from_filename(".env.prod").map(|_| ".env.prod 파일 로드 됨".to_string()),
        "dev" => dotenv::from_filename(".env.dev").map(|_| ".env.dev 파일 로드 됨".to_string()),
        _ => dotenv().map(|_| "기본 .env 파일 로드".to_string()),
    };

    match status {
        Ok(message) => format!("Current profile: {} ({})", profile, message),
        Err(e) => format!("Current profile: {} (환경 파일 로드 실패: {})", profile, e),
    }
}

fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}

/// 설정된 저장소 백엔드로 리포지토리와 서비스를 조립합니다.
async fn build_app_state() -> AppResult<AppState> {
    let bcrypt_cost = PasswordConfig::bcrypt_cost();

    print_step_start(1, "Initializing storage backend");
    let state = match DatabaseConfig::storage_backend() {
        StorageBackend::MongoDb => {
            info!("📡 데이터베이스 연결 중...");
            let database = Arc::new(
                Database::connect(&DatabaseConfig::mongodb_uri(), &DatabaseConfig::database_name()).await?,
            );
            database.create_indexes().await?;
            print_sub_task("MongoDB", database.database_name());

            AppState::with_mongo(database, bcrypt_cost)
        }
        StorageBackend::Memory => {
            print_sub_task("In-memory store", "재시작 시 데이터가 사라집니다");

            AppState::in_memory(MemoryDatabase::new(), bcrypt_cost)
        }
    };
    print_step_complete(1, "Storage backend ready", 1);

    print_step_start(2, "Wiring services");
    print_sub_task("UserSearchService", "OK");
    print_sub_task("UserService", &format!("OK (bcrypt cost {})", bcrypt_cost));
    print_sub_task("ReviewSearchService", "OK");
    print_step_complete(2, "Services wired", 3);

    Ok(state)
}

fn configure_cors(allowed_origins: &[String]) -> Cors {
    let cors = allowed_origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin));

    cors.allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "PATCH", "OPTIONS"])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            header::ACCESS_CONTROL_REQUEST_METHOD,
        ])
        .supports_credentials()
        // Preflight 요청 캐시 시간 (초)
        .max_age(3600)
}
