//! 상품 엔티티

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// 상품 도큐먼트
///
/// `category`는 카테고리 도큐먼트에 대한 참조이며,
/// `slug`는 제목에서 파생된 유니크 조회 키입니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,

    pub title: String,

    pub slug: String,

    pub description: String,

    pub price: f64,

    pub quantity: i64,

    pub sold: i64,

    /// 소속 카테고리 참조
    pub category: ObjectId,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping: Option<String>,

    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl Product {
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }
}
