//! # 역할 HTTP 핸들러
//!
//! | 메서드 | 경로 | 설명 |
//! |--------|------|------|
//! | `POST` | `/api/roles` | 생성 (이름 중복 시 400) |
//! | `GET` | `/api/roles` | 목록 조회 (페이징/이름 검색) |
//! | `GET` | `/api/roles/{id}` | ID 조회 |
//! | `PUT` | `/api/roles/{id}` | 부분 수정 |
//! | `DELETE` | `/api/roles/{id}` | 삭제 |

use actix_web::{delete, get, post, put, web, HttpResponse};
use validator::Validate;

use crate::domain::dto::pagination::PageQuery;
use crate::domain::dto::roles::{CreateRoleRequest, UpdateRoleRequest};
use crate::errors::AppError;
use crate::services::roles::role_service::RoleService;
use crate::utils::response;

/// 역할 생성
#[post("")]
pub async fn create_role(
    service: web::Data<RoleService>,
    payload: web::Json<CreateRoleRequest>,
) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let role = service.create_role(payload.into_inner()).await?;

    Ok(response::created_response(
        "Role created successfully",
        Some(role),
    ))
}

/// 역할 목록 조회
#[get("")]
pub async fn list_roles(
    service: web::Data<RoleService>,
    query: web::Query<PageQuery>,
) -> Result<HttpResponse, AppError> {
    query
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let (roles, total) = service.list_roles(&query).await?;

    Ok(response::paginated_response(
        roles,
        query.page,
        query.limit,
        total,
        "Success",
    ))
}

/// ID로 역할 조회
#[get("/{id}")]
pub async fn get_role(
    service: web::Data<RoleService>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let role = service.get_role_by_id(&id).await?;

    Ok(response::ok_response("Success", Some(role)))
}

/// 역할 부분 수정
#[put("/{id}")]
pub async fn update_role(
    service: web::Data<RoleService>,
    id: web::Path<String>,
    payload: web::Json<UpdateRoleRequest>,
) -> Result<HttpResponse, AppError> {
    let role = service.update_role(&id, payload.into_inner()).await?;

    Ok(response::ok_response("Role updated successfully", Some(role)))
}

/// 역할 삭제
#[delete("/{id}")]
pub async fn delete_role(
    service: web::Data<RoleService>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    service.delete_role(&id).await?;

    Ok(response::deleted_response("Role deleted successfully"))
}
