//! 상품 요청/응답 DTO

use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::product::Product;

/// 상품 생성 요청
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateProductRequest {
    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,

    pub description: Option<String>,

    #[validate(range(min = 0.0, message = "price must not be negative"))]
    pub price: f64,

    #[validate(range(min = 0, message = "quantity must not be negative"))]
    pub quantity: i64,

    /// 소속 카테고리의 ObjectId 16진수 문자열
    pub category: String,

    pub shipping: Option<String>,
}

/// 상품 부분 수정 요청
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateProductRequest {
    pub title: Option<String>,

    pub description: Option<String>,

    #[validate(range(min = 0.0, message = "price must not be negative"))]
    pub price: Option<f64>,

    #[validate(range(min = 0, message = "quantity must not be negative"))]
    pub quantity: Option<i64>,

    pub category: Option<String>,

    pub shipping: Option<String>,
}

/// 상품 응답
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductResponse {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub price: f64,
    pub quantity: i64,
    pub sold: i64,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping: Option<String>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        let Product {
            id,
            title,
            slug,
            description,
            price,
            quantity,
            sold,
            category,
            shipping,
            created_at,
            updated_at,
        } = product;

        Self {
            id: id.map(|id| id.to_hex()).unwrap_or_default(),
            title,
            slug,
            description,
            price,
            quantity,
            sold,
            category: category.to_hex(),
            shipping,
            created_at,
            updated_at,
        }
    }
}

/// 전체 상품 수 응답 데이터
#[derive(Debug, Clone, Serialize)]
pub struct ProductCountData {
    pub total: u64,
}
