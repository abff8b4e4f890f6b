//! 배송비 관리 서비스
//!
//! 배송비 CRUD와 파생 필드 계산을 담당합니다.
//! 파생 필드는 기록 시점에 계산되며, 수정 시에는
//! `packagingQty`/`itemsPerPack`/`fare`가 모두 제공된 경우에만
//! 재계산됩니다.

use std::sync::Arc;

use chrono::DateTime as ChronoDateTime;
use mongodb::bson::{DateTime, Document};

use crate::domain::dto::expenses::{
    CreateExpenseRequest, ExpenseResponse, UpdateExpenseRequest,
};
use crate::domain::dto::pagination::PageQuery;
use crate::domain::entities::expense::{Expense, ExpenseStatus};
use crate::errors::AppError;
use crate::repositories::expenses::expense_repo::ExpenseRepository;
use crate::utils::string_utils::clean_optional_string;

/// 파생 필드 계산
///
/// 입력은 0이 아니라고 가정합니다 (요청 DTO 검증에서 보장).
///
/// # 반환값
///
/// `(total_units, cost_per_pack, cost_per_unit)`
pub fn compute_derived(packaging_qty: i64, items_per_pack: i64, fare: f64) -> (i64, f64, f64) {
    let total_units = packaging_qty * items_per_pack;
    let cost_per_pack = fare / packaging_qty as f64;
    let cost_per_unit = fare / total_units as f64;

    (total_units, cost_per_pack, cost_per_unit)
}

/// RFC 3339 날짜 문자열을 BSON DateTime으로 파싱합니다.
fn parse_date(raw: &str) -> Result<DateTime, AppError> {
    let parsed = ChronoDateTime::parse_from_rfc3339(raw)
        .map_err(|_| AppError::ValidationError(format!("Invalid date: {}", raw)))?;

    Ok(DateTime::from_millis(parsed.timestamp_millis()))
}

/// 배송비 관리 비즈니스 로직 서비스
pub struct ExpenseService {
    expense_repo: Arc<ExpenseRepository>,
}

impl ExpenseService {
    pub fn new(expense_repo: Arc<ExpenseRepository>) -> Self {
        Self { expense_repo }
    }

    /// 배송비 기록 생성
    ///
    /// 파생 필드를 계산해 함께 저장하며, 상태는 `Pending`으로 시작합니다.
    pub async fn create_expense(
        &self,
        request: CreateExpenseRequest,
    ) -> Result<ExpenseResponse, AppError> {
        let (total_units, cost_per_pack, cost_per_unit) = compute_derived(
            request.packaging_qty,
            request.items_per_pack,
            request.fare,
        );

        let date = match request.date.as_deref() {
            Some(raw) => parse_date(raw)?,
            None => DateTime::now(),
        };

        let now = DateTime::now();

        let expense = Expense {
            id: None,
            date,
            customer: request.customer,
            product: request.product,
            packaging_type: request.packaging_type,
            packaging_qty: request.packaging_qty,
            items_per_pack: request.items_per_pack,
            total_units,
            fare: request.fare,
            cost_per_pack,
            cost_per_unit,
            driver: clean_optional_string(request.driver),
            vehicle: clean_optional_string(request.vehicle),
            from: clean_optional_string(request.from),
            to: clean_optional_string(request.to),
            delivery_type: request.delivery_type,
            notes: clean_optional_string(request.notes),
            status: ExpenseStatus::Pending,
            created_at: now,
            updated_at: now,
        };

        let created = self.expense_repo.create(expense).await?;

        Ok(created.into())
    }

    /// 배송비 목록 조회 (페이징 + 고객명 검색)
    pub async fn list_expenses(
        &self,
        query: &PageQuery,
    ) -> Result<(Vec<ExpenseResponse>, u64), AppError> {
        let term = query.search_term();

        let total = self.expense_repo.count(term).await?;
        let expenses = self
            .expense_repo
            .find_page(term, query.skip(), query.limit as i64)
            .await?;

        Ok((
            expenses.into_iter().map(ExpenseResponse::from).collect(),
            total,
        ))
    }

    pub async fn get_expense_by_id(&self, id: &str) -> Result<ExpenseResponse, AppError> {
        let expense = self
            .expense_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Expense not found".to_string()))?;

        Ok(expense.into())
    }

    /// 배송비 부분 수정
    ///
    /// 수량/단위/운임 세 필드가 모두 있을 때만 파생 필드를 재계산합니다.
    /// 일부만 온 경우 해당 필드는 반영하되 파생 필드는 그대로 둡니다.
    pub async fn update_expense(
        &self,
        id: &str,
        request: UpdateExpenseRequest,
    ) -> Result<ExpenseResponse, AppError> {
        let mut update_doc = Document::new();

        if let (Some(packaging_qty), Some(items_per_pack), Some(fare)) =
            (request.packaging_qty, request.items_per_pack, request.fare)
        {
            let (total_units, cost_per_pack, cost_per_unit) =
                compute_derived(packaging_qty, items_per_pack, fare);

            update_doc.insert("packagingQty", packaging_qty);
            update_doc.insert("itemsPerPack", items_per_pack);
            update_doc.insert("totalUnits", total_units);
            update_doc.insert("fare", fare);
            update_doc.insert("costPerPack", cost_per_pack);
            update_doc.insert("costPerUnit", cost_per_unit);
        }

        if let Some(raw) = request.date.as_deref() {
            update_doc.insert("date", parse_date(raw)?);
        }
        if let Some(customer) = request.customer {
            update_doc.insert("customer", customer);
        }
        if let Some(product) = request.product {
            update_doc.insert("product", product);
        }
        if let Some(packaging_type) = request.packaging_type {
            update_doc.insert("packagingType", packaging_type);
        }
        if let Some(driver) = clean_optional_string(request.driver) {
            update_doc.insert("driver", driver);
        }
        if let Some(vehicle) = clean_optional_string(request.vehicle) {
            update_doc.insert("vehicle", vehicle);
        }
        if let Some(from) = clean_optional_string(request.from) {
            update_doc.insert("from", from);
        }
        if let Some(to) = clean_optional_string(request.to) {
            update_doc.insert("to", to);
        }
        if let Some(delivery_type) = request.delivery_type {
            update_doc.insert("deliveryType", delivery_type.as_str());
        }
        if let Some(notes) = clean_optional_string(request.notes) {
            update_doc.insert("notes", notes);
        }
        if let Some(status) = request.status {
            update_doc.insert("status", status.as_str());
        }

        update_doc.insert("updatedAt", DateTime::now());

        let updated = self
            .expense_repo
            .update(id, update_doc)
            .await?
            .ok_or_else(|| AppError::NotFound("Expense not found".to_string()))?;

        Ok(updated.into())
    }

    pub async fn delete_expense(&self, id: &str) -> Result<(), AppError> {
        let deleted = self.expense_repo.delete(id).await?;

        if !deleted {
            return Err(AppError::NotFound("Expense not found".to_string()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute_derived() {
        let (total_units, cost_per_pack, cost_per_unit) = compute_derived(20, 50, 4000.0);

        assert_eq!(total_units, 1000);
        assert_eq!(cost_per_pack, 200.0);
        assert_eq!(cost_per_unit, 4.0);
    }

    #[test]
    fn test_compute_derived_properties() {
        // totalUnits == packagingQty * itemsPerPack
        // costPerPack == fare / packagingQty
        // costPerUnit == fare / totalUnits
        for (qty, per_pack, fare) in [(1i64, 1i64, 10.0), (3, 7, 99.5), (250, 12, 120000.0)] {
            let (total_units, cost_per_pack, cost_per_unit) =
                compute_derived(qty, per_pack, fare);

            assert_eq!(total_units, qty * per_pack);
            assert_eq!(cost_per_pack, fare / qty as f64);
            assert_eq!(cost_per_unit, fare / (qty * per_pack) as f64);
        }
    }

    #[test]
    fn test_parse_date() {
        assert!(parse_date("2024-06-01T09:30:00Z").is_ok());
        assert!(parse_date("2024-06-01T09:30:00+09:00").is_ok());

        let err = parse_date("01-06-2024").unwrap_err();
        assert!(matches!(err, AppError::ValidationError(_)));
    }
}
