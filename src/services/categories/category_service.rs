//! 카테고리 관리 서비스
//!
//! 이름에서 슬러그를 파생하여 저장하고, 슬러그 기반 조회 시
//! 소속 상품 목록을 함께 반환합니다.

use std::sync::Arc;

use mongodb::bson::{doc, DateTime};

use crate::domain::dto::categories::{CategoryReadData, CategoryRequest, CategoryResponse};
use crate::domain::dto::products::ProductResponse;
use crate::domain::entities::category::Category;
use crate::errors::AppError;
use crate::repositories::categories::category_repo::CategoryRepository;
use crate::repositories::products::product_repo::ProductRepository;
use crate::utils::string_utils::slugify;

/// 카테고리 관리 비즈니스 로직 서비스
pub struct CategoryService {
    category_repo: Arc<CategoryRepository>,
    product_repo: Arc<ProductRepository>,
}

impl CategoryService {
    pub fn new(
        category_repo: Arc<CategoryRepository>,
        product_repo: Arc<ProductRepository>,
    ) -> Self {
        Self {
            category_repo,
            product_repo,
        }
    }

    /// 카테고리 생성
    ///
    /// 이름에서 슬러그를 파생해 함께 저장합니다. 같은 이름을 두 번
    /// 만들면 슬러그 유니크 인덱스가 중복 키 오류를 내고,
    /// 번역기가 400으로 정규화합니다.
    pub async fn create_category(
        &self,
        request: CategoryRequest,
    ) -> Result<CategoryResponse, AppError> {
        let slug = slugify(&request.name);
        let created = self
            .category_repo
            .create(Category::new(request.name, slug))
            .await?;

        Ok(created.into())
    }

    /// 전체 카테고리 목록 (최근 생성 순)
    pub async fn list_categories(&self) -> Result<Vec<CategoryResponse>, AppError> {
        let categories = self.category_repo.find_all().await?;

        Ok(categories.into_iter().map(CategoryResponse::from).collect())
    }

    /// 슬러그로 카테고리와 소속 상품을 조회합니다.
    ///
    /// 존재하지 않는 슬러그도 404가 아니라 `category: null`,
    /// `products: []`로 응답합니다 (읽기 핸들러의 기존 계약 유지).
    pub async fn read_category(&self, slug: &str) -> Result<CategoryReadData, AppError> {
        let category = self.category_repo.find_by_slug(slug).await?;

        let products = match category.as_ref().and_then(|c| c.id) {
            Some(category_id) => self
                .product_repo
                .find_by_category(category_id)
                .await?
                .into_iter()
                .map(ProductResponse::from)
                .collect(),
            None => Vec::new(),
        };

        Ok(CategoryReadData {
            category: category.map(CategoryResponse::from),
            products,
        })
    }

    /// 카테고리 이름 변경 (슬러그 재파생)
    pub async fn update_category(
        &self,
        slug: &str,
        request: CategoryRequest,
    ) -> Result<CategoryResponse, AppError> {
        let new_slug = slugify(&request.name);

        let updated = self
            .category_repo
            .update_by_slug(
                slug,
                doc! {
                    "name": request.name,
                    "slug": new_slug,
                    "updatedAt": DateTime::now(),
                },
            )
            .await?
            .ok_or_else(|| AppError::NotFound("Category not found".to_string()))?;

        Ok(updated.into())
    }

    /// 카테고리 삭제
    pub async fn delete_category(&self, slug: &str) -> Result<CategoryResponse, AppError> {
        let deleted = self
            .category_repo
            .delete_by_slug(slug)
            .await?
            .ok_or_else(|| AppError::NotFound("Category not found".to_string()))?;

        Ok(deleted.into())
    }
}
