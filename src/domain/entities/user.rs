//! 사용자 엔티티

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// 기본 역할 태그
pub const DEFAULT_ROLE: &str = "subscriber";

/// 관리자 역할 태그
pub const ADMIN_ROLE: &str = "admin";

/// 사용자 도큐먼트
///
/// `password`는 bcrypt 솔트 해시만 저장하며, 평문은 어디에도 남지 않습니다.
/// 응답 DTO 변환 시 해시도 함께 제거됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,

    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// bcrypt 해시 (평문 저장 금지)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub otp: Option<i64>,

    pub role: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl User {
    /// 로그인-또는-생성 흐름에서 만들어지는 신규 구독자 계정
    ///
    /// 최초 호출 시 자리표시 이름과 기본 역할로 생성되며,
    /// 이후 프로필 수정으로 채워집니다.
    pub fn new_subscriber(
        email: Option<String>,
        phone: Option<i64>,
        password_hash: String,
    ) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            name: "Test".to_string(),
            phone,
            email,
            password: Some(password_hash),
            otp: None,
            role: DEFAULT_ROLE.to_string(),
            address: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// ObjectId의 16진수 문자열 표현을 반환합니다.
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }

    pub fn is_admin(&self) -> bool {
        self.role == ADMIN_ROLE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_subscriber_defaults() {
        let user = User::new_subscriber(
            Some("buyer@example.com".to_string()),
            Some(1012345678),
            "hashed".to_string(),
        );

        assert_eq!(user.name, "Test");
        assert_eq!(user.role, DEFAULT_ROLE);
        assert!(user.id.is_none());
        assert!(!user.is_admin());
    }

    #[test]
    fn test_is_admin() {
        let mut user = User::new_subscriber(None, Some(1012345678), "hashed".to_string());
        user.role = ADMIN_ROLE.to_string();

        assert!(user.is_admin());
    }
}
