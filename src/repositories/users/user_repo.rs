//! # 사용자 리포지토리 구현
//!
//! 사용자 엔티티의 데이터 액세스 계층을 담당하는 리포지토리입니다.
//! MongoDB를 주 저장소로 사용합니다.
//!
//! ## 특징
//!
//! - **명시적 의존성 주입**: 기동 시점에 Database 핸들과 에러 번역기 주입
//! - **에러 정규화**: 모든 드라이버 에러는 번역기를 거쳐 `AppError`로 변환
//! - **페이징 조회**: skip/limit과 총계 쿼리를 함께 제공
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::repositories::users::user_repo::UserRepository;
//!
//! let repo = UserRepository::new(db.clone(), translator);
//! let user = repo.find_by_email("buyer@example.com").await?;
//! ```

use std::sync::Arc;

use futures_util::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId, Document};
use mongodb::options::{FindOneAndUpdateOptions, IndexOptions, ReturnDocument};
use mongodb::IndexModel;

use crate::db::Database;
use crate::domain::entities::user::User;
use crate::errors::{AppError, MongoErrorTranslator};

/// 사용자 컬렉션 이름
const COLLECTION: &str = "users";

/// 사용자 데이터 액세스 리포지토리
///
/// `users` 컬렉션에 대한 CRUD 연산과 페이징 검색을 담당합니다.
pub struct UserRepository {
    /// MongoDB 데이터베이스 연결
    db: Arc<Database>,
    /// 저장소 에러 번역기
    translator: MongoErrorTranslator,
}

impl UserRepository {
    pub fn new(db: Arc<Database>, translator: MongoErrorTranslator) -> Self {
        Self { db, translator }
    }

    fn collection(&self) -> mongodb::Collection<User> {
        self.db.collection::<User>(COLLECTION)
    }

    /// ObjectId 문자열을 파싱하고, 실패 시 cast 에러로 정규화합니다.
    fn parse_object_id(&self, id: &str) -> Result<ObjectId, AppError> {
        ObjectId::parse_str(id).map_err(|_| self.translator.malformed_id("_id", id))
    }

    /// 검색어를 사용자 조회 필터로 변환합니다.
    ///
    /// `name`/`email`에 대한 대소문자 무시 부분 일치이며,
    /// 숫자형 검색어는 `phone` 완전 일치 조건을 추가합니다.
    fn search_filter(search_term: Option<&str>) -> Document {
        match search_term {
            None => doc! {},
            Some(term) => {
                let mut any_of = vec![
                    doc! { "name": { "$regex": term, "$options": "i" } },
                    doc! { "email": { "$regex": term, "$options": "i" } },
                ];

                if let Ok(phone) = term.parse::<i64>() {
                    any_of.push(doc! { "phone": phone });
                }

                doc! { "$or": any_of }
            }
        }
    }

    /// 이메일 주소로 사용자 조회
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        self.collection()
            .find_one(doc! { "email": email })
            .await
            .map_err(|e| self.translator.translate(e))
    }

    /// 전화번호로 사용자 조회
    pub async fn find_by_phone(&self, phone: i64) -> Result<Option<User>, AppError> {
        self.collection()
            .find_one(doc! { "phone": phone })
            .await
            .map_err(|e| self.translator.translate(e))
    }

    /// ID로 사용자 조회
    ///
    /// # 반환값
    ///
    /// * `Ok(Some(User))` - 사용자를 찾은 경우
    /// * `Ok(None)` - 해당 ID의 사용자가 없는 경우
    /// * `Err(AppError::MalformedIdError)` - 잘못된 ObjectId 형식
    pub async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError> {
        let object_id = self.parse_object_id(id)?;

        self.collection()
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(|e| self.translator.translate(e))
    }

    /// 새 사용자 생성
    ///
    /// 생성된 ObjectId를 엔티티에 채워 반환합니다.
    pub async fn create(&self, mut user: User) -> Result<User, AppError> {
        let result = self
            .collection()
            .insert_one(&user)
            .await
            .map_err(|e| self.translator.translate(e))?;

        user.id = result.inserted_id.as_object_id();

        Ok(user)
    }

    /// 사용자 정보 부분 업데이트
    ///
    /// `$set` 연산으로 지정된 필드만 변경하고, 업데이트된 최신
    /// 도큐먼트를 반환합니다. 해당 ID가 없으면 `None`입니다.
    pub async fn update(
        &self,
        id: &str,
        update_doc: Document,
    ) -> Result<Option<User>, AppError> {
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

    /// 사용자 삭제
    ///
    /// # 반환값
    ///
    /// * `Ok(true)` - 삭제됨
    /// * `Ok(false)` - 해당 ID의 사용자가 없음
    pub async fn delete(&self, id: &str) -> Result<bool, AppError> {
        let object_id = self.parse_object_id(id)?;

        let result = self
            .collection()
            .delete_one(doc! { "_id": object_id })
            .await
            .map_err(|e| self.translator.translate(e))?;

        Ok(result.deleted_count > 0)
    }

    /// 페이징 목록 조회 (최근 생성 순)
    pub async fn find_page(
        &self,
        search_term: Option<&str>,
        skip: u64,
        limit: i64,
    ) -> Result<Vec<User>, AppError> {
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

    /// 필터에 일치하는 전체 사용자 수
    pub async fn count(&self, search_term: Option<&str>) -> Result<u64, AppError> {
        self.collection()
            .count_documents(Self::search_filter(search_term))
            .await
            .map_err(|e| self.translator.translate(e))
    }

    /// 데이터베이스 인덱스 생성
    ///
    /// 이메일 조회 인덱스와 최근 가입 순 정렬 인덱스를 생성합니다.
    /// 애플리케이션 초기화 시점에 한 번 호출됩니다.
    pub async fn ensure_indexes(&self) -> Result<(), AppError> {
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .build();

        let created_at_index = IndexModel::builder()
            .keys(doc! { "createdAt": -1 })
            .options(IndexOptions::builder().build())
            .build();

        self.collection()
            .create_indexes(vec![email_index, created_at_index])
            .await
            .map_err(|e| self.translator.translate(e))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_filter_empty() {
        assert_eq!(UserRepository::search_filter(None), doc! {});
    }

    #[test]
    fn test_search_filter_text_term() {
        let filter = UserRepository::search_filter(Some("kim"));
        let any_of = filter.get_array("$or").unwrap();

        // 문자 검색어는 name/email 두 조건만 생성
        assert_eq!(any_of.len(), 2);
    }

    #[test]
    fn test_search_filter_numeric_term_includes_phone() {
        let filter = UserRepository::search_filter(Some("1012345678"));
        let any_of = filter.get_array("$or").unwrap();

        assert_eq!(any_of.len(), 3);
    }
}
