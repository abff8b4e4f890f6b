//! 배송비 리포지토리
//!
//! `expenses` 컬렉션의 CRUD와 고객명 검색 페이징을 담당합니다.

use std::sync::Arc;

use futures_util::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId, Document};
use mongodb::options::{FindOneAndUpdateOptions, ReturnDocument};

use crate::db::Database;
use crate::domain::entities::expense::Expense;
use crate::errors::{AppError, MongoErrorTranslator};

const COLLECTION: &str = "expenses";

/// 배송비 데이터 액세스 리포지토리
pub struct ExpenseRepository {
    db: Arc<Database>,
    translator: MongoErrorTranslator,
}

impl ExpenseRepository {
    pub fn new(db: Arc<Database>, translator: MongoErrorTranslator) -> Self {
        Self { db, translator }
    }

    fn collection(&self) -> mongodb::Collection<Expense> {
        self.db.collection::<Expense>(COLLECTION)
    }

    fn parse_object_id(&self, id: &str) -> Result<ObjectId, AppError> {
        ObjectId::parse_str(id).map_err(|_| self.translator.malformed_id("_id", id))
    }

    fn search_filter(search_term: Option<&str>) -> Document {
        match search_term {
            None => doc! {},
            Some(term) => doc! { "customer": { "$regex": term, "$options": "i" } },
        }
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<Expense>, AppError> {
        let object_id = self.parse_object_id(id)?;

        self.collection()
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(|e| self.translator.translate(e))
    }

    pub async fn create(&self, mut expense: Expense) -> Result<Expense, AppError> {
        let result = self
            .collection()
            .insert_one(&expense)
            .await
            .map_err(|e| self.translator.translate(e))?;

        expense.id = result.inserted_id.as_object_id();

        Ok(expense)
    }

    pub async fn update(
        &self,
        id: &str,
        update_doc: Document,
    ) -> Result<Option<Expense>, AppError> {
        let object_id = self.parse_object_id(id)?;

        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        self.collection()
            .find_one_and_update(doc! { "_id": object_id }, doc! { "$set": update_doc })
            .with_options(options)
            .await
            .map_err(|e| self.translator.translate(e))
    }

    pub async fn delete(&self, id: &str) -> Result<bool, AppError> {
        let object_id = self.parse_object_id(id)?;

        let result = self
            .collection()
            .delete_one(doc! { "_id": object_id })
            .await
            .map_err(|e| self.translator.translate(e))?;

        Ok(result.deleted_count > 0)
    }

    /// 페이징 목록 조회 (최근 생성 순, 고객명 검색)
    pub async fn find_page(
        &self,
        search_term: Option<&str>,
        skip: u64,
        limit: i64,
    ) -> Result<Vec<Expense>, AppError> {
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
}
