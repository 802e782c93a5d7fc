//! # Review HTTP Handlers
//!
//! 리뷰 조회 엔드포인트입니다. 리뷰 작성/삭제는 이 서비스의 HTTP 범위 밖입니다.
//!
//! | 메서드 | 경로 | 설명 |
//! |--------|------|------|
//! | `GET` | `/reviews/{reviewId}` | 리뷰 단건 조회 (없으면 404) |
//! | `GET` | `/items/{itemId}/reviews` | 상품 리뷰 목록 (없으면 빈 배열) |
//! | `GET` | `/users/{userId}/reviews/count` | 작성자별 리뷰 수 |

use actix_web::{get, web, HttpResponse};
use crate::core::errors::AppError;
use crate::core::AppState;
use crate::domain::dto::reviews::ReviewCountResponse;
use crate::domain::entities::reviews::review::{ItemId, ReviewId};
use crate::domain::entities::users::user::UserId;

#[get("/reviews/{review_id}")]
pub async fn get_review(
    state: web::Data<AppState>,
    review_id: web::Path<ReviewId>,
) -> Result<HttpResponse, AppError> {
    let review = state.review_search_service.get_review_by_id(review_id.into_inner()).await?;

    Ok(HttpResponse::Ok().json(review))
}

#[get("/items/{item_id}/reviews")]
pub async fn get_item_reviews(
    state: web::Data<AppState>,
    item_id: web::Path<ItemId>,
) -> Result<HttpResponse, AppError> {
    let reviews = state
        .review_search_service
        .get_reviews_or_empty_by_item_id(item_id.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(reviews))
}

#[get("/users/{user_id}/reviews/count")]
pub async fn count_user_reviews(
    state: web::Data<AppState>,
    user_id: web::Path<UserId>,
) -> Result<HttpResponse, AppError> {
    let user_id = user_id.into_inner();
    let count = state.review_search_service.count_by_user_id(user_id).await?;

    Ok(HttpResponse::Ok().json(ReviewCountResponse { user_id, count }))
}

#[cfg(test)]
mod tests {
    use actix_web::{http::StatusCode, test, web, App};
    use serde_json::Value;
    use crate::core::transaction::{TransactionManager, TxMode};
    use crate::core::AppState;
    use crate::db::memory::MemoryDatabase;
    use crate::domain::entities::reviews::review::Review;
    use crate::repositories::reviews::{MemoryReviewRepository, ReviewRepository};
    use crate::routes::configure_all_routes;

    async fn seeded_database() -> MemoryDatabase {
        let db = MemoryDatabase::new();
        let repo = MemoryReviewRepository::new();

        let mut tx = db.begin(TxMode::ReadWrite).await.unwrap();
        repo.insert(&mut tx, Review::new(1, 100, "못생겨도 맛있어요".to_string())).await.unwrap();
        repo.insert(&mut tx, Review::new(2, 200, "당도 최고".to_string())).await.unwrap();
        repo.insert(&mut tx, Review::new(1, 100, "재구매합니다".to_string())).await.unwrap();
        tx.commit().await.unwrap();

        db
    }

    #[actix_web::test]
    async fn test_review_endpoints() {
        let state = AppState::in_memory(seeded_database().await, 4);
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .configure(configure_all_routes),
        )
        .await;

        let request = test::TestRequest::get().uri("/api/reviews/2").to_request();
        let review: Value = test::call_and_read_body_json(&app, request).await;
        assert_eq!(review["reviewId"], 2);
        assert_eq!(review["itemId"], 200);

        let request = test::TestRequest::get().uri("/api/reviews/99").to_request();
        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let request = test::TestRequest::get().uri("/api/items/100/reviews").to_request();
        let reviews: Vec<Value> = test::call_and_read_body_json(&app, request).await;
        let ids: Vec<i64> = reviews.iter().map(|r| r["reviewId"].as_i64().unwrap()).collect();
        assert_eq!(ids, vec![1, 3]);

        let request = test::TestRequest::get().uri("/api/items/999/reviews").to_request();
        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::OK);
        let reviews: Vec<Value> = test::read_body_json(response).await;
        assert!(reviews.is_empty());

        let request = test::TestRequest::get().uri("/api/users/1/reviews/count").to_request();
        let count: Value = test::call_and_read_body_json(&app, request).await;
        assert_eq!(count["userId"], 1);
        assert_eq!(count["count"], 2);

        let request = test::TestRequest::get().uri("/api/users/5/reviews/count").to_request();
        let count: Value = test::call_and_read_body_json(&app, request).await;
        assert_eq!(count["count"], 0);
    }
}
