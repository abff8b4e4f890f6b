//! # 카테고리 HTTP 핸들러
//!
//! | 메서드 | 경로 | 인증 | 설명 |
//! |--------|------|------|------|
//! | `POST` | `/api/category/add` | 필요 | 생성 (슬러그 파생) |
//! | `GET` | `/api/category/get-all` | - | 전체 목록 |
//! | `GET` | `/api/category/{slug}` | - | 카테고리 + 소속 상품 |
//! | `PUT` | `/api/category/{slug}` | 필요 | 이름 변경 (슬러그 재파생) |
//! | `DELETE` | `/api/category/{slug}` | 필요 | 삭제 |
//!
//! 존재하지 않는 슬러그 조회는 404가 아니라 `category: null`,
//! `products: []`를 담은 200입니다 (기존 읽기 계약 유지).

use actix_web::{delete, get, post, put, web, HttpResponse};
use validator::Validate;

use crate::domain::dto::categories::CategoryRequest;
use crate::errors::AppError;
use crate::middlewares::AuthenticatedUser;
use crate::services::categories::category_service::CategoryService;
use crate::utils::response;

/// 카테고리 생성 (인증 필요)
#[post("/add")]
pub async fn create_category(
    _user: AuthenticatedUser,
    service: web::Data<CategoryService>,
    payload: web::Json<CategoryRequest>,
) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let category = service.create_category(payload.into_inner()).await?;

    Ok(response::created_response(
        "Category created successfully",
        Some(category),
    ))
}

/// 전체 카테고리 목록 (최근 생성 순)
#[get("/get-all")]
pub async fn list_categories(
    service: web::Data<CategoryService>,
) -> Result<HttpResponse, AppError> {
    let categories = service.list_categories().await?;

    Ok(response::ok_response("Success", Some(categories)))
}

/// 슬러그로 카테고리와 소속 상품 조회
#[get("/{slug}")]
pub async fn read_category(
    service: web::Data<CategoryService>,
    slug: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let data = service.read_category(&slug).await?;

    Ok(response::ok_response("Success", Some(data)))
}

/// 카테고리 이름 변경 (인증 필요)
#[put("/{slug}")]
pub async fn update_category(
    _user: AuthenticatedUser,
    service: web::Data<CategoryService>,
    slug: web::Path<String>,
    payload: web::Json<CategoryRequest>,
) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let category = service.update_category(&slug, payload.into_inner()).await?;

    Ok(response::ok_response(
        "Category updated successfully",
        Some(category),
    ))
}

/// 카테고리 삭제 (인증 필요)
#[delete("/{slug}")]
pub async fn delete_category(
    _user: AuthenticatedUser,
    service: web::Data<CategoryService>,
    slug: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let category = service.delete_category(&slug).await?;

    Ok(response::ok_response(
        "Category deleted successfully",
        Some(category),
    ))
}
