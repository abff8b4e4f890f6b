//! 카테고리 요청/응답 DTO

use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::category::Category;
use crate::domain::dto::products::ProductResponse;

/// 카테고리 생성/수정 요청
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CategoryRequest {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
}

/// 카테고리 응답
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryResponse {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl From<Category> for CategoryResponse {
    fn from(category: Category) -> Self {
        let Category {
            id,
            name,
            slug,
            created_at,
            updated_at,
        } = category;

        Self {
            id: id.map(|id| id.to_hex()).unwrap_or_default(),
            name,
            slug,
            created_at,
            updated_at,
        }
    }
}

/// 슬러그 조회 응답 데이터
///
/// 존재하지 않는 슬러그도 404가 아니라 `category: null`,
/// `products: []`로 200 응답합니다 (기존 읽기 핸들러의 계약 유지).
#[derive(Debug, Clone, Serialize)]
pub struct CategoryReadData {
    pub category: Option<CategoryResponse>,
    pub products: Vec<ProductResponse>,
}
