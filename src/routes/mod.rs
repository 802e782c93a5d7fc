//! # Routes Module
//!
//! 애플리케이션의 모든 HTTP 라우트를 등록하는 모듈입니다.
//!
//! ```text
//! /health                                  헬스체크
//! /api
//! ├── /users ...                           회원 (handlers::users)
//! ├── /login-id-availability               가용성 검사
//! ├── /nickname-availability
//! ├── /email-availability
//! ├── /reviews/{reviewId}                  리뷰 (handlers::reviews)
//! ├── /items/{itemId}/reviews
//! └── /users/{userId}/reviews/count
//! ```
//!
//! 경로 변수, 쿼리 파라미터, JSON 본문 추출 실패는 모두 `AppError::ValidationError`로
//! 바꿔 다른 에러와 같은 JSON 형식의 400 응답을 돌려줍니다.

use actix_web::{web, HttpRequest};
use serde_json::json;
use crate::core::errors::AppError;
use crate::handlers;

/// 모든 라우트를 설정합니다
///
/// # Examples
///
/// ```rust,ignore
/// use actix_web::{web, App};
///
/// let app = App::new()
///     .app_data(web::Data::new(state))
///     .configure(configure_all_routes);
/// ```
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(health_check);

    cfg.service(
        web::scope("/api")
            .app_data(path_config())
            .app_data(query_config())
            .app_data(json_config())
            .configure(configure_user_routes)
            .configure(configure_review_routes),
    );
}

/// 사용자 관련 라우트를 설정합니다
///
/// ```bash
/// curl -X POST http://localhost:8080/api/users \
///   -H "Content-Type: application/json" \
///   -d '{"loginId":"farmer01","password":"ugly1234"}'
///
/// curl "http://localhost:8080/api/login-id-availability?loginId=farmer01"
/// ```
fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::users::create_basic_account)
        .service(handlers::users::complete_registration)
        .service(handlers::users::get_user)
        .service(handlers::users::get_profile)
        .service(handlers::users::update_nickname)
        .service(handlers::users::update_password)
        .service(handlers::users::update_address)
        .service(handlers::users::delete_user)
        .service(handlers::users::check_login_id_availability)
        .service(handlers::users::check_nickname_availability)
        .service(handlers::users::check_email_availability);
}

fn configure_review_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::reviews::get_review)
        .service(handlers::reviews::get_item_reviews)
        .service(handlers::reviews::count_user_reviews);
}

fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|error, _req: &HttpRequest| {
        AppError::ValidationError(format!("잘못된 경로 변수입니다: {}", error)).into()
    })
}

fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|error, _req: &HttpRequest| {
        AppError::ValidationError(format!("잘못된 쿼리 파라미터입니다: {}", error)).into()
    })
}

fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|error, _req: &HttpRequest| {
        AppError::ValidationError(format!("잘못된 요청 본문입니다: {}", error)).into()
    })
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// ```bash
/// curl http://localhost:8080/health
/// ```
///
/// Response:
/// ```json
/// {
///   "status": "healthy",
///   "service": "gracefully_ugly_backend",
///   "version": "0.1.0",
///   "timestamp": "2024-06-01T00:00:00Z"
/// }
/// ```
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::Value;
    use crate::core::AppState;
    use crate::db::memory::MemoryDatabase;

    #[actix_web::test]
    async fn test_health_and_error_body_shape() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(AppState::in_memory(MemoryDatabase::new(), 4)))
                .configure(configure_all_routes),
        )
        .await;

        let request = test::TestRequest::get().uri("/health").to_request();
        let health: Value = test::call_and_read_body_json(&app, request).await;
        assert_eq!(health["status"], "healthy");

        let request = test::TestRequest::get()
            .uri("/api/nickname-availability")
            .to_request();
        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(response).await;
        assert!(body["error"].as_str().unwrap().starts_with("Validation error"));
    }
}
