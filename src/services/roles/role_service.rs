//! 역할 관리 서비스
//!
//! 역할 CRUD 비즈니스 로직입니다. 생성 시 이름 중복을 사전에 확인하여
//! 같은 이름의 역할이 두 번 만들어지지 않도록 합니다.

use std::sync::Arc;

use mongodb::bson::{DateTime, Document};

use crate::domain::dto::pagination::PageQuery;
use crate::domain::dto::roles::{
    validate_role_name, CreateRoleRequest, RoleResponse, UpdateRoleRequest,
};
use crate::domain::entities::role::Role;
use crate::errors::AppError;
use crate::repositories::roles::role_repo::RoleRepository;

/// 역할 관리 비즈니스 로직 서비스
pub struct RoleService {
    role_repo: Arc<RoleRepository>,
}

impl RoleService {
    pub fn new(role_repo: Arc<RoleRepository>) -> Self {
        Self { role_repo }
    }

    /// 역할 생성
    ///
    /// 같은 이름의 역할이 이미 있으면 중복으로 거부합니다 (400).
    pub async fn create_role(
        &self,
        request: CreateRoleRequest,
    ) -> Result<RoleResponse, AppError> {
        if self.role_repo.find_by_name(&request.name).await?.is_some() {
            return Err(AppError::DuplicateKeyError(
                "Role already exists".to_string(),
            ));
        }

        let role = Role::new(
            request.name,
            request.description.unwrap_or_default(),
            request.permissions.unwrap_or_default(),
        );

        let created = self.role_repo.create(role).await?;

        Ok(created.into())
    }

    /// 역할 목록 조회 (페이징 + 이름 검색)
    pub async fn list_roles(
        &self,
        query: &PageQuery,
    ) -> Result<(Vec<RoleResponse>, u64), AppError> {
        let term = query.search_term();

        let total = self.role_repo.count(term).await?;
        let roles = self
            .role_repo
            .find_page(term, query.skip(), query.limit as i64)
            .await?;

        Ok((roles.into_iter().map(RoleResponse::from).collect(), total))
    }

    pub async fn get_role_by_id(&self, id: &str) -> Result<RoleResponse, AppError> {
        let role = self
            .role_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Role not found".to_string()))?;

        Ok(role.into())
    }

    /// 역할 부분 수정
    ///
    /// 이름이 포함된 경우 허용 집합에 속하는지 검증합니다.
    pub async fn update_role(
        &self,
        id: &str,
        request: UpdateRoleRequest,
    ) -> Result<RoleResponse, AppError> {
        let mut update_doc = Document::new();

        if let Some(name) = request.name {
            validate_role_name(&name)
                .map_err(|e| AppError::ValidationError(e.to_string()))?;
            update_doc.insert("name", name);
        }
        if let Some(description) = request.description {
            update_doc.insert("description", description);
        }
        if let Some(permissions) = request.permissions {
            update_doc.insert("permissions", permissions);
        }
        if let Some(is_active) = request.is_active {
            update_doc.insert("isActive", is_active);
        }

        update_doc.insert("updatedAt", DateTime::now());

        let updated = self
            .role_repo
            .update(id, update_doc)
            .await?
            .ok_or_else(|| AppError::NotFound("Role not found".to_string()))?;

        Ok(updated.into())
    }

    pub async fn delete_role(&self, id: &str) -> Result<(), AppError> {
        let deleted = self.role_repo.delete(id).await?;

        if !deleted {
            return Err(AppError::NotFound("Role not found".to_string()));
        }

        Ok(())
    }
}
