//! # 배송비 HTTP 핸들러
//!
//! | 메서드 | 경로 | 설명 |
//! |--------|------|------|
//! | `POST` | `/api/expense` | 생성 (파생 필드 계산) |
//! | `GET` | `/api/expense` | 목록 조회 (페이징/고객명 검색) |
//! | `GET` | `/api/expense/{id}` | ID 조회 |
//! | `PUT` | `/api/expense/{id}` | 부분 수정 (조건부 재계산) |
//! | `DELETE` | `/api/expense/{id}` | 삭제 |

use actix_web::{delete, get, post, put, web, HttpResponse};
use validator::Validate;

use crate::domain::dto::expenses::{CreateExpenseRequest, UpdateExpenseRequest};
use crate::domain::dto::pagination::PageQuery;
use crate::errors::AppError;
use crate::services::expenses::expense_service::ExpenseService;
use crate::utils::response;

/// 배송비 기록 생성
#[post("")]
pub async fn create_expense(
    service: web::Data<ExpenseService>,
    payload: web::Json<CreateExpenseRequest>,
) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let expense = service.create_expense(payload.into_inner()).await?;

    Ok(response::created_response(
        "Expense created successfully",
        Some(expense),
    ))
}

/// 배송비 목록 조회
#[get("")]
pub async fn list_expenses(
    service: web::Data<ExpenseService>,
    query: web::Query<PageQuery>,
) -> Result<HttpResponse, AppError> {
    query
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let (expenses, total) = service.list_expenses(&query).await?;

    Ok(response::paginated_response(
        expenses,
        query.page,
        query.limit,
        total,
        "Success",
    ))
}

/// ID로 배송비 조회
#[get("/{id}")]
pub async fn get_expense(
    service: web::Data<ExpenseService>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let expense = service.get_expense_by_id(&id).await?;

    Ok(response::ok_response("Success", Some(expense)))
}

/// 배송비 부분 수정
#[put("/{id}")]
pub async fn update_expense(
    service: web::Data<ExpenseService>,
    id: web::Path<String>,
    payload: web::Json<UpdateExpenseRequest>,
) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let expense = service.update_expense(&id, payload.into_inner()).await?;

    Ok(response::ok_response(
        "Expense updated successfully",
        Some(expense),
    ))
}

/// 배송비 삭제
#[delete("/{id}")]
pub async fn delete_expense(
    service: web::Data<ExpenseService>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    service.delete_expense(&id).await?;

    Ok(response::deleted_response("Expense deleted successfully"))
}
