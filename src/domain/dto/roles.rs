//! 역할 요청/응답 DTO

use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::domain::entities::role::{Role, ALLOWED_ROLE_NAMES};

/// 역할 이름이 허용 집합에 속하는지 검증합니다.
pub fn validate_role_name(name: &str) -> Result<(), ValidationError> {
    if !ALLOWED_ROLE_NAMES.contains(&name) {
        return Err(ValidationError::new("invalid_role_name")
            .with_message("Role name must be one of Admin, Member, Viewer".into()));
    }
    Ok(())
}

/// 역할 생성 요청
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateRoleRequest {
    #[validate(custom(function = "validate_role_name"))]
    pub name: String,

    pub description: Option<String>,

    pub permissions: Option<Vec<String>>,
}

/// 역할 부분 수정 요청
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRoleRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub permissions: Option<Vec<String>>,
    pub is_active: Option<bool>,
}

/// 역할 응답
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleResponse {
    pub id: String,
    pub name: String,
    pub description: String,
    pub permissions: Vec<String>,
    pub is_active: bool,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl From<Role> for RoleResponse {
    fn from(role: Role) -> Self {
        let Role {
            id,
            name,
            description,
            permissions,
            is_active,
            created_at,
            updated_at,
        } = role;

        Self {
            id: id.map(|id| id.to_hex()).unwrap_or_default(),
            name,
            description,
            permissions,
            is_active,
            created_at,
            updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_name_validation() {
        assert!(validate_role_name("Admin").is_ok());
        assert!(validate_role_name("Member").is_ok());
        assert!(validate_role_name("Viewer").is_ok());
        assert!(validate_role_name("Superuser").is_err());
        assert!(validate_role_name("admin").is_err());
    }

    #[test]
    fn test_create_role_request_validation() {
        let request: CreateRoleRequest = serde_json::from_str(
            r#"{"name": "Admin", "permissions": ["create_expense"]}"#,
        )
        .unwrap();
        assert!(request.validate().is_ok());

        let request: CreateRoleRequest =
            serde_json::from_str(r#"{"name": "Root"}"#).unwrap();
        assert!(request.validate().is_err());
    }
}
