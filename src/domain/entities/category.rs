//! 카테고리 엔티티

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// 카테고리 도큐먼트
///
/// `slug`는 이름의 소문자-대시 투영으로, 유니크 인덱스가 걸리는
/// 안정적인 조회 키입니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,

    pub name: String,

    pub slug: String,

    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl Category {
    pub fn new(name: String, slug: String) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            name,
            slug,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }
}
