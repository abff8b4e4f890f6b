//! 상품 관리 서비스
//!
//! 제목에서 슬러그를 파생하고, 카테고리 참조를 검증하며,
//! 슬러그 기반 CRUD와 페이징 검색을 제공합니다.

use std::sync::Arc;

use mongodb::bson::{DateTime, Document};

use crate::domain::dto::pagination::PageQuery;
use crate::domain::dto::products::{
    CreateProductRequest, ProductResponse, UpdateProductRequest,
};
use crate::domain::entities::product::Product;
use crate::errors::AppError;
use crate::repositories::products::product_repo::ProductRepository;
use crate::utils::string_utils::{clean_optional_string, slugify};

/// 상품 관리 비즈니스 로직 서비스
pub struct ProductService {
    product_repo: Arc<ProductRepository>,
}

impl ProductService {
    pub fn new(product_repo: Arc<ProductRepository>) -> Self {
        Self { product_repo }
    }

    /// 상품 생성
    ///
    /// 카테고리 참조는 ObjectId로 파싱되며, 형식이 잘못된 경우
    /// cast 에러(400)로 정규화됩니다. 제목 중복은 슬러그 유니크
    /// 인덱스가 막습니다.
    pub async fn create_product(
        &self,
        request: CreateProductRequest,
    ) -> Result<ProductResponse, AppError> {
        let category_id = self.product_repo.parse_category_id(&request.category)?;
        let now = DateTime::now();

        let product = Product {
            id: None,
            slug: slugify(&request.title),
            title: request.title,
            description: request.description.unwrap_or_default(),
            price: request.price,
            quantity: request.quantity,
            sold: 0,
            category: category_id,
            shipping: clean_optional_string(request.shipping),
            created_at: now,
            updated_at: now,
        };

        let created = self.product_repo.create(product).await?;

        Ok(created.into())
    }

    /// 상품 목록 조회 (페이징 + 제목 검색)
    pub async fn list_products(
        &self,
        query: &PageQuery,
    ) -> Result<(Vec<ProductResponse>, u64), AppError> {
        let term = query.search_term();

        let total = self.product_repo.count(term).await?;
        let products = self
            .product_repo
            .find_page(term, query.skip(), query.limit as i64)
            .await?;

        Ok((
            products.into_iter().map(ProductResponse::from).collect(),
            total,
        ))
    }

    /// 전체 상품 수
    pub async fn count_products(&self) -> Result<u64, AppError> {
        self.product_repo.count(None).await
    }

    /// 슬러그로 상품 조회
    pub async fn get_product_by_slug(&self, slug: &str) -> Result<ProductResponse, AppError> {
        let product = self
            .product_repo
            .find_by_slug(slug)
            .await?
            .ok_or_else(|| AppError::NotFound("Product not found".to_string()))?;

        Ok(product.into())
    }

    /// 상품 부분 수정
    ///
    /// 제목이 바뀌면 슬러그도 다시 파생됩니다.
    pub async fn update_product(
        &self,
        slug: &str,
        request: UpdateProductRequest,
    ) -> Result<ProductResponse, AppError> {
        let mut update_doc = Document::new();

        if let Some(title) = request.title {
            update_doc.insert("slug", slugify(&title));
            update_doc.insert("title", title);
        }
        if let Some(description) = request.description {
            update_doc.insert("description", description);
        }
        if let Some(price) = request.price {
            update_doc.insert("price", price);
        }
        if let Some(quantity) = request.quantity {
            update_doc.insert("quantity", quantity);
        }
        if let Some(category) = request.category {
            let category_id = self.product_repo.parse_category_id(&category)?;
            update_doc.insert("category", category_id);
        }
        if let Some(shipping) = clean_optional_string(request.shipping) {
            update_doc.insert("shipping", shipping);
        }

        update_doc.insert("updatedAt", DateTime::now());

        let updated = self
            .product_repo
            .update_by_slug(slug, update_doc)
            .await?
            .ok_or_else(|| AppError::NotFound("Product not found".to_string()))?;

        Ok(updated.into())
    }

    /// 상품 삭제
    pub async fn delete_product(&self, slug: &str) -> Result<ProductResponse, AppError> {
        let deleted = self
            .product_repo
            .delete_by_slug(slug)
            .await?
            .ok_or_else(|| AppError::NotFound("Product not found".to_string()))?;

        Ok(deleted.into())
    }
}
