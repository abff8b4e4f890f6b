//! 역할 리포지토리
//!
//! `roles` 컬렉션의 CRUD 연산과 이름 검색 페이징을 담당합니다.

use std::sync::Arc;

use futures_util::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId, Document};
use mongodb::options::{FindOneAndUpdateOptions, ReturnDocument};

use crate::db::Database;
use crate::domain::entities::role::Role;
use crate::errors::{AppError, MongoErrorTranslator};

const COLLECTION: &str = "roles";

/// 역할 데이터 액세스 리포지토리
pub struct RoleRepository {
    db: Arc<Database>,
    translator: MongoErrorTranslator,
}

impl RoleRepository {
    pub fn new(db: Arc<Database>, translator: MongoErrorTranslator) -> Self {
        Self { db, translator }
    }

    fn collection(&self) -> mongodb::Collection<Role> {
        self.db.collection::<Role>(COLLECTION)
    }

    fn parse_object_id(&self, id: &str) -> Result<ObjectId, AppError> {
        ObjectId::parse_str(id).map_err(|_| self.translator.malformed_id("_id", id))
    }

    fn search_filter(search_term: Option<&str>) -> Document {
        match search_term {
            None => doc! {},
            Some(term) => doc! { "name": { "$regex": term, "$options": "i" } },
        }
    }

    /// 이름으로 역할 조회 (생성 전 중복 확인에 사용)
    pub async fn find_by_name(&self, name: &str) -> Result<Option<Role>, AppError> {
        self.collection()
            .find_one(doc! { "name": name })
            .await
            .map_err(|e| self.translator.translate(e))
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<Role>, AppError> {
        let object_id = self.parse_object_id(id)?;

        self.collection()
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(|e| self.translator.translate(e))
    }

    pub async fn create(&self, mut role: Role) -> Result<Role, AppError> {
        let result = self
            .collection()
            .insert_one(&role)
            .await
            .map_err(|e| self.translator.translate(e))?;

        role.id = result.inserted_id.as_object_id();

        Ok(role)
    }

    pub async fn update(
        &self,
        id: &str,
        update_doc: Document,
    ) -> Result<Option<Role>, AppError> {
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

    pub async fn find_page(
        &self,
        search_term: Option<&str>,
        skip: u64,
        limit: i64,
    ) -> Result<Vec<Role>, AppError> {
        let cursor = self
            .collection()
            .find(Self::search_filter(search_term))
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_filter() {
        assert_eq!(RoleRepository::search_filter(None), doc! {});

        let filter = RoleRepository::search_filter(Some("adm"));
        assert!(filter.get_document("name").unwrap().contains_key("$regex"));
    }
}
