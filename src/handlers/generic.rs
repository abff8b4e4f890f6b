//! # 일반(generic) 인증 HTTP 핸들러
//!
//! `/api/generic` 아래의 로그인 관련 경로들입니다.
//! 네 경로 모두 사용자 핸들러와 동일한 로그인-또는-생성 흐름으로
//! 디스패치됩니다 (원본 라우터의 계약 유지).

use actix_web::{get, post, web, HttpResponse};

use crate::domain::dto::users::request::LoginCreateUserRequest;
use crate::errors::AppError;
use crate::handlers::users::respond_login_or_create;
use crate::services::users::user_service::UserService;

#[post("/login-create-user")]
pub async fn login_create_user(
    service: web::Data<UserService>,
    payload: web::Json<LoginCreateUserRequest>,
) -> Result<HttpResponse, AppError> {
    respond_login_or_create(&service, payload.into_inner()).await
}

/// Rate Limiting이 적용되는 로그인 경로
#[post("")]
pub async fn login(
    service: web::Data<UserService>,
    payload: web::Json<LoginCreateUserRequest>,
) -> Result<HttpResponse, AppError> {
    respond_login_or_create(&service, payload.into_inner()).await
}

#[get("/refresh")]
pub async fn refresh(
    service: web::Data<UserService>,
    payload: web::Json<LoginCreateUserRequest>,
) -> Result<HttpResponse, AppError> {
    respond_login_or_create(&service, payload.into_inner()).await
}

#[post("/logout")]
pub async fn logout(
    service: web::Data<UserService>,
    payload: web::Json<LoginCreateUserRequest>,
) -> Result<HttpResponse, AppError> {
    respond_login_or_create(&service, payload.into_inner()).await
}
