//! # 상품 HTTP 핸들러
//!
//! | 메서드 | 경로 | 인증 | 설명 |
//! |--------|------|------|------|
//! | `POST` | `/api/product/product` | 관리자 | 생성 |
//! | `GET` | `/api/product/products` | - | 목록 조회 (페이징/제목 검색) |
//! | `GET` | `/api/product/products/total` | - | 전체 개수 |
//! | `GET` | `/api/product/product/{slug}` | - | 슬러그 조회 (없으면 404) |
//! | `PUT` | `/api/product/product/{slug}` | 관리자 | 부분 수정 |
//! | `DELETE` | `/api/product/product/{slug}` | 관리자 | 삭제 |

use actix_web::{delete, get, post, put, web, HttpResponse};
use validator::Validate;

use crate::domain::dto::pagination::PageQuery;
use crate::domain::dto::products::{
    CreateProductRequest, ProductCountData, UpdateProductRequest,
};
use crate::errors::AppError;
use crate::middlewares::AdminUser;
use crate::services::products::product_service::ProductService;
use crate::utils::response;

/// 상품 생성 (관리자 전용)
#[post("/product")]
pub async fn create_product(
    _admin: AdminUser,
    service: web::Data<ProductService>,
    payload: web::Json<CreateProductRequest>,
) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let product = service.create_product(payload.into_inner()).await?;

    Ok(response::created_response(
        "Product created successfully",
        Some(product),
    ))
}

/// 상품 목록 조회
#[get("/products")]
pub async fn list_products(
    service: web::Data<ProductService>,
    query: web::Query<PageQuery>,
) -> Result<HttpResponse, AppError> {
    query
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let (products, total) = service.list_products(&query).await?;

    Ok(response::paginated_response(
        products,
        query.page,
        query.limit,
        total,
        "Success",
    ))
}

/// 전체 상품 수
#[get("/products/total")]
pub async fn products_count(
    service: web::Data<ProductService>,
) -> Result<HttpResponse, AppError> {
    let total = service.count_products().await?;

    Ok(response::ok_response(
        "Success",
        Some(ProductCountData { total }),
    ))
}

/// 슬러그로 상품 조회
#[get("/product/{slug}")]
pub async fn read_product(
    service: web::Data<ProductService>,
    slug: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let product = service.get_product_by_slug(&slug).await?;

    Ok(response::ok_response("Success", Some(product)))
}

/// 상품 부분 수정 (관리자 전용)
#[put("/product/{slug}")]
pub async fn update_product(
    _admin: AdminUser,
    service: web::Data<ProductService>,
    slug: web::Path<String>,
    payload: web::Json<UpdateProductRequest>,
) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let product = service.update_product(&slug, payload.into_inner()).await?;

    Ok(response::ok_response(
        "Product updated successfully",
        Some(product),
    ))
}

/// 상품 삭제 (관리자 전용)
#[delete("/product/{slug}")]
pub async fn delete_product(
    _admin: AdminUser,
    service: web::Data<ProductService>,
    slug: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let product = service.delete_product(&slug).await?;

    Ok(response::ok_response(
        "Product deleted successfully",
        Some(product),
    ))
}
