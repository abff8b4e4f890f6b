//! 역할 엔티티

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// 허용되는 역할 이름 집합
pub const ALLOWED_ROLE_NAMES: [&str; 3] = ["Admin", "Member", "Viewer"];

/// 역할 도큐먼트
///
/// 고정된 이름 집합과 권한 문자열 목록(예: `create_expense`,
/// `view_reports`)을 가집니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,

    pub name: String,

    pub description: String,

    pub permissions: Vec<String>,

    pub is_active: bool,

    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl Role {
    pub fn new(name: String, description: String, permissions: Vec<String>) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            name,
            description,
            permissions,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }
}
