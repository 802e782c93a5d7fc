//! # User Management HTTP Handlers
//!
//! 회원 가입, 조회, 정보 수정, 탈퇴, 가용성 검사 엔드포인트입니다.
//! 핸들러는 입력을 검증하고 서비스 호출 결과를 HTTP 상태 코드로 옮기는 일만 합니다.
//!
//! ## 엔드포인트 (`/api` 하위)
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `POST` | `/users` | 기본 가입 | 201 Created |
//! | `PATCH` | `/users/{userId}/registration` | 최종 가입 | 200 OK |
//! | `GET` | `/users/{userId}` | 사용자 조회 | 200 OK |
//! | `GET` | `/users/{userId}/profile` | 프로필 조회 | 200 OK |
//! | `PATCH` | `/users/{userId}/nickname` | 닉네임 변경 | 200 OK |
//! | `PATCH` | `/users/{userId}/password` | 비밀번호 변경 | 200 OK (본문 없음) |
//! | `PATCH` | `/users/{userId}/address` | 주소 변경 | 200 OK |
//! | `DELETE` | `/users/{userId}` | 탈퇴 | 204 No Content |
//! | `GET` | `/login-id-availability?loginId=` | 로그인 ID 존재 여부 | 200 OK |
//! | `GET` | `/nickname-availability?nickname=` | 닉네임 존재 여부 | 200 OK |
//! | `GET` | `/email-availability?email=` | 이메일 존재 여부 | 200 OK |
//!
//! ## Spring Boot와의 비교
//!
//! | Spring | 이 모듈 |
//! |--------|---------|
//! | `@PathVariable Long userId` | `web::Path<UserId>` |
//! | `@RequestParam String loginId` | `web::Query<LoginIdAvailabilityQuery>` |
//! | `@Valid @RequestBody` | `web::Json<T>` + `payload.validate()?` |
//! | `ResponseEntity.status(CREATED)` | `HttpResponse::Created()` |

use actix_web::{delete, get, patch, post, web, HttpResponse};
use validator::Validate;
use crate::core::errors::AppError;
use crate::core::AppState;
use crate::domain::dto::users::request::{
    AdditionalRegRequest, BasicRegRequest, EmailAvailabilityQuery, LoginIdAvailabilityQuery,
    NicknameAvailabilityQuery, UpdateAddressDto, UpdateNicknameDto, UpdatePasswordRequest,
};
use crate::domain::entities::users::user::{
    is_login_id_length_out_of_range, UserId, MAX_LOGIN_ID_LENGTH, MIN_LOGIN_ID_LENGTH,
};
use crate::utils::string_utils::require_not_blank;

/// 기본 가입 핸들러
///
/// 요청 본문 검증은 `UserService::create_basic_account`가 수행합니다.
///
/// ```bash
/// curl -X POST http://localhost:8080/api/users \
///   -H "Content-Type: application/json" \
///   -d '{"loginId":"farmer01","password":"ugly1234"}'
/// ```
#[post("/users")]
pub async fn create_basic_account(
    state: web::Data<AppState>,
    payload: web::Json<BasicRegRequest>,
) -> Result<HttpResponse, AppError> {
    let response = state.user_service.create_basic_account(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(response))
}

/// 최종 가입 핸들러
#[patch("/users/{user_id}/registration")]
pub async fn complete_registration(
    state: web::Data<AppState>,
    user_id: web::Path<UserId>,
    payload: web::Json<AdditionalRegRequest>,
) -> Result<HttpResponse, AppError> {
    let response = state
        .user_service
        .complete_registration(user_id.into_inner(), payload.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(response))
}

#[get("/users/{user_id}")]
pub async fn get_user(
    state: web::Data<AppState>,
    user_id: web::Path<UserId>,
) -> Result<HttpResponse, AppError> {
    let user = state.user_search_service.get_user(user_id.into_inner()).await?;

    Ok(HttpResponse::Ok().json(user))
}

#[get("/users/{user_id}/profile")]
pub async fn get_profile(
    state: web::Data<AppState>,
    user_id: web::Path<UserId>,
) -> Result<HttpResponse, AppError> {
    let profile = state.user_search_service.get_profile(user_id.into_inner()).await?;

    Ok(HttpResponse::Ok().json(profile))
}

#[patch("/users/{user_id}/nickname")]
pub async fn update_nickname(
    state: web::Data<AppState>,
    user_id: web::Path<UserId>,
    payload: web::Json<UpdateNicknameDto>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let response = state
        .user_service
        .update_nickname(user_id.into_inner(), payload.into_inner().nickname)
        .await?;

    Ok(HttpResponse::Ok().json(response))
}

/// 비밀번호 변경 핸들러. 성공 시 본문 없이 200을 반환합니다.
#[patch("/users/{user_id}/password")]
pub async fn update_password(
    state: web::Data<AppState>,
    user_id: web::Path<UserId>,
    payload: web::Json<UpdatePasswordRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    state
        .user_service
        .update_password(user_id.into_inner(), payload.into_inner().password)
        .await?;

    Ok(HttpResponse::Ok().finish())
}

#[patch("/users/{user_id}/address")]
pub async fn update_address(
    state: web::Data<AppState>,
    user_id: web::Path<UserId>,
    payload: web::Json<UpdateAddressDto>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let response = state
        .user_service
        .update_address(user_id.into_inner(), payload.into_inner().address)
        .await?;

    Ok(HttpResponse::Ok().json(response))
}

/// 탈퇴 핸들러
///
/// 존재하지 않는 ID여도 204를 반환합니다.
///
/// ```bash
/// curl -X DELETE http://localhost:8080/api/users/7
/// ```
#[delete("/users/{user_id}")]
pub async fn delete_user(
    state: web::Data<AppState>,
    user_id: web::Path<UserId>,
) -> Result<HttpResponse, AppError> {
    state.user_service.delete(user_id.into_inner()).await?;

    Ok(HttpResponse::NoContent().finish())
}

/// 로그인 ID 가용성 검사
///
/// 빈 값이거나 길이가 4자 미만 또는 20자 초과면 400.
/// 응답 본문은 해당 로그인 ID의 존재 여부(`true` = 이미 존재)입니다.
#[get("/login-id-availability")]
pub async fn check_login_id_availability(
    state: web::Data<AppState>,
    query: web::Query<LoginIdAvailabilityQuery>,
) -> Result<HttpResponse, AppError> {
    let login_id = require_not_blank(&query.login_id, "loginId")?;

    if is_login_id_length_out_of_range(login_id) {
        return Err(AppError::ValidationError(format!(
            "로그인 ID는 {}-{}자 사이여야 합니다",
            MIN_LOGIN_ID_LENGTH, MAX_LOGIN_ID_LENGTH
        )));
    }

    let exists = state.user_search_service.exists_by_login_id(login_id).await?;

    Ok(HttpResponse::Ok().json(exists))
}

#[get("/nickname-availability")]
pub async fn check_nickname_availability(
    state: web::Data<AppState>,
    query: web::Query<NicknameAvailabilityQuery>,
) -> Result<HttpResponse, AppError> {
    let nickname = require_not_blank(&query.nickname, "nickname")?;
    let exists = state.user_search_service.exists_by_nickname(nickname).await?;

    Ok(HttpResponse::Ok().json(exists))
}

#[get("/email-availability")]
pub async fn check_email_availability(
    state: web::Data<AppState>,
    query: web::Query<EmailAvailabilityQuery>,
) -> Result<HttpResponse, AppError> {
    let email = require_not_blank(&query.email, "email")?;
    let exists = state.user_search_service.exists_by_email(email).await?;

    Ok(HttpResponse::Ok().json(exists))
}
