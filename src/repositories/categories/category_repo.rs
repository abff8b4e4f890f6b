//! 카테고리 리포지토리
//!
//! `categories` 컬렉션의 슬러그 기반 CRUD를 담당합니다.
//! 슬러그에는 유니크 인덱스가 걸려 있어, 같은 이름의 카테고리를
//! 두 번 만들면 중복 키 오류가 발생하고 번역기가 400으로 정규화합니다.

use std::sync::Arc;

use futures_util::TryStreamExt;
use mongodb::bson::{doc, Document};
use mongodb::options::{FindOneAndUpdateOptions, IndexOptions, ReturnDocument};
use mongodb::IndexModel;

use crate::db::Database;
use crate::domain::entities::category::Category;
use crate::errors::{AppError, MongoErrorTranslator};

const COLLECTION: &str = "categories";

/// 카테고리 데이터 액세스 리포지토리
pub struct CategoryRepository {
    db: Arc<Database>,
    translator: MongoErrorTranslator,
}

impl CategoryRepository {
    pub fn new(db: Arc<Database>, translator: MongoErrorTranslator) -> Self {
        Self { db, translator }
    }

    fn collection(&self) -> mongodb::Collection<Category> {
        self.db.collection::<Category>(COLLECTION)
    }

    pub async fn find_by_slug(&self, slug: &str) -> Result<Option<Category>, AppError> {
        self.collection()
            .find_one(doc! { "slug": slug })
            .await
            .map_err(|e| self.translator.translate(e))
    }

    /// 전체 카테고리 목록 (최근 생성 순)
    pub async fn find_all(&self) -> Result<Vec<Category>, AppError> {
        let cursor = self
            .collection()
            .find(doc! {})
            .sort(doc! { "createdAt": -1 })
            .await
            .map_err(|e| self.translator.translate(e))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| self.translator.translate(e))
    }

    pub async fn create(&self, mut category: Category) -> Result<Category, AppError> {
        let result = self
            .collection()
            .insert_one(&category)
            .await
            .map_err(|e| self.translator.translate(e))?;

        category.id = result.inserted_id.as_object_id();

        Ok(category)
    }

    /// 슬러그로 찾아 부분 업데이트하고 최신 도큐먼트를 반환합니다.
    pub async fn update_by_slug(
        &self,
        slug: &str,
        update_doc: Document,
    ) -> Result<Option<Category>, AppError> {
        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        self.collection()
            .find_one_and_update(doc! { "slug": slug }, doc! { "$set": update_doc })
            .with_options(options)
            .await
            .map_err(|e| self.translator.translate(e))
    }

    /// 슬러그로 찾아 삭제하고, 삭제된 도큐먼트를 반환합니다.
    pub async fn delete_by_slug(&self, slug: &str) -> Result<Option<Category>, AppError> {
        self.collection()
            .find_one_and_delete(doc! { "slug": slug })
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
