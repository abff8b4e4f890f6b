//! 상품 리포지토리
//!
//! `products` 컬렉션의 슬러그 기반 CRUD, 제목 검색 페이징,
//! 카테고리별 조회를 담당합니다.

use std::sync::Arc;

use futures_util::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId, Document};
use mongodb::options::{FindOneAndUpdateOptions, IndexOptions, ReturnDocument};
use mongodb::IndexModel;

use crate::db::Database;
use crate::domain::entities::product::Product;
use crate::errors::{AppError, MongoErrorTranslator};

const COLLECTION: &str = "products";

/// 상품 데이터 액세스 리포지토리
pub struct ProductRepository {
    db: Arc<Database>,
    translator: MongoErrorTranslator,
}

impl ProductRepository {
    pub fn new(db: Arc<Database>, translator: MongoErrorTranslator) -> Self {
        Self { db, translator }
    }

    fn collection(&self) -> mongodb::Collection<Product> {
        self.db.collection::<Product>(COLLECTION)
    }

    /// 카테고리 참조용 ObjectId 파싱
    pub fn parse_category_id(&self, id: &str) -> Result<ObjectId, AppError> {
        ObjectId::parse_str(id).map_err(|_| self.translator.malformed_id("category", id))
    }

    fn search_filter(search_term: Option<&str>) -> Document {
        match search_term {
            None => doc! {},
            Some(term) => doc! { "title": { "$regex": term, "$options": "i" } },
        }
    }

    pub async fn find_by_slug(&self, slug: &str) -> Result<Option<Product>, AppError> {
        self.collection()
            .find_one(doc! { "slug": slug })
            .await
            .map_err(|e| self.translator.translate(e))
    }

    /// 특정 카테고리에 속한 상품 전체 조회
    pub async fn find_by_category(
        &self,
        category_id: ObjectId,
    ) -> Result<Vec<Product>, AppError> {
        let cursor = self
            .collection()
            .find(doc! { "category": category_id })
            .await
            .map_err(|e| self.translator.translate(e))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| self.translator.translate(e))
    }

    pub async fn create(&self, mut product: Product) -> Result<Product, AppError> {
        let result = self
            .collection()
            .insert_one(&product)
            .await
            .map_err(|e| self.translator.translate(e))?;

        product.id = result.inserted_id.as_object_id();

        Ok(product)
    }

    pub async fn update_by_slug(
        &self,
        slug: &str,
        update_doc: Document,
    ) -> Result<Option<Product>, AppError> {
        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        self.collection()
            .find_one_and_update(doc! { "slug": slug }, doc! { "$set": update_doc })
            .with_options(options)
            .await
            .map_err(|e| self.translator.translate(e))
    }

    pub async fn delete_by_slug(&self, slug: &str) -> Result<Option<Product>, AppError> {
        self.collection()
            .find_one_and_delete(doc! { "slug": slug })
            .await
            .map_err(|e| self.translator.translate(e))
    }

    /// 페이징 목록 조회 (최근 생성 순, 제목 검색)
    pub async fn find_page(
        &self,
        search_term: Option<&str>,
        skip: u64,
        limit: i64,
    ) -> Result<Vec<Product>, AppError> {
        let cursor = self
            .collection()
            .find(Self::search_filter(search_term))
            .sort(doc! { "createdAt": -1 })
            .skip(skip)
            .limit(limit)
            .await
            .map_err(|e| self.translator.translate(e))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| self.translator.translate(e))
    }

    pub async fn count(&self, search_term: Option<&str>) -> Result<u64, AppError> {
        self.collection()
            .count_documents(Self::search_filter(search_term))
            .await
            .map_err(|e| self.translator.translate(e))
    }

    /// 슬러그 유니크 인덱스 생성
    pub async fn ensure_indexes(&self) -> Result<(), AppError> {
        let slug_index = IndexModel::builder()
            .keys(doc! { "slug": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();

        self.collection()
            .create_index(slug_index)
            .await
            .map_err(|e| self.translator.translate(e))?;

        Ok(())
    }
}
