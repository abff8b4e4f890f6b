//! 배송비 요청/응답 DTO

use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::expense::{DeliveryType, Expense, ExpenseStatus};

/// 배송비 생성 요청
///
/// 파생 필드(`totalUnits`, `costPerPack`, `costPerUnit`)는 받지 않으며,
/// 서비스 계층이 기록 시점에 계산합니다.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateExpenseRequest {
    /// RFC 3339 형식, 생략 시 현재 시각
    pub date: Option<String>,

    #[validate(length(min = 1, message = "customer is required"))]
    pub customer: String,

    #[validate(length(min = 1, message = "product is required"))]
    pub product: String,

    #[validate(length(min = 1, message = "packagingType is required"))]
    pub packaging_type: String,

    #[validate(range(min = 1, message = "packagingQty must be positive"))]
    pub packaging_qty: i64,

    #[validate(range(min = 1, message = "itemsPerPack must be positive"))]
    pub items_per_pack: i64,

    #[validate(range(exclusive_min = 0.0, message = "fare must be positive"))]
    pub fare: f64,

    pub driver: Option<String>,
    pub vehicle: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub delivery_type: Option<DeliveryType>,
    pub notes: Option<String>,
}

/// 배송비 부분 수정 요청
///
/// `packagingQty`, `itemsPerPack`, `fare`가 모두 존재할 때만
/// 파생 필드가 재계산됩니다.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateExpenseRequest {
    pub date: Option<String>,
    pub customer: Option<String>,
    pub product: Option<String>,
    pub packaging_type: Option<String>,

    #[validate(range(min = 1, message = "packagingQty must be positive"))]
    pub packaging_qty: Option<i64>,

    #[validate(range(min = 1, message = "itemsPerPack must be positive"))]
    pub items_per_pack: Option<i64>,

    #[validate(range(exclusive_min = 0.0, message = "fare must be positive"))]
    pub fare: Option<f64>,

    pub driver: Option<String>,
    pub vehicle: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub delivery_type: Option<DeliveryType>,
    pub notes: Option<String>,
    pub status: Option<ExpenseStatus>,
}

/// 배송비 응답
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseResponse {
    pub id: String,
    pub date: DateTime,
    pub customer: String,
    pub product: String,
    pub packaging_type: String,
    pub packaging_qty: i64,
    pub items_per_pack: i64,
    pub total_units: i64,
    pub fare: f64,
    pub cost_per_pack: f64,
    pub cost_per_unit: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub driver: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vehicle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_type: Option<DeliveryType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub status: ExpenseStatus,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl From<Expense> for ExpenseResponse {
    fn from(expense: Expense) -> Self {
        let Expense {
            id,
            date,
            customer,
            product,
            packaging_type,
            packaging_qty,
            items_per_pack,
            total_units,
            fare,
            cost_per_pack,
            cost_per_unit,
            driver,
            vehicle,
            from,
            to,
            delivery_type,
            notes,
            status,
            created_at,
            updated_at,
        } = expense;

        Self {
            id: id.map(|id| id.to_hex()).unwrap_or_default(),
            date,
            customer,
            product,
            packaging_type,
            packaging_qty,
            items_per_pack,
            total_units,
            fare,
            cost_per_pack,
            cost_per_unit,
            driver,
            vehicle,
            from,
            to,
            delivery_type,
            notes,
            status,
            created_at,
            updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_body() -> serde_json::Value {
        serde_json::json!({
            "customer": "Acme Traders",
            "product": "Steel Rod",
            "packagingType": "10 KG Bag",
            "packagingQty": 20,
            "itemsPerPack": 50,
            "fare": 4000.0
        })
    }

    #[test]
    fn test_valid_create_request() {
        let request: CreateExpenseRequest =
            serde_json::from_value(valid_body()).unwrap();

        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_zero_quantity_rejected() {
        let mut body = valid_body();
        body["packagingQty"] = serde_json::json!(0);

        let request: CreateExpenseRequest = serde_json::from_value(body).unwrap();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_zero_fare_rejected() {
        let mut body = valid_body();
        body["fare"] = serde_json::json!(0.0);

        let request: CreateExpenseRequest = serde_json::from_value(body).unwrap();
        assert!(request.validate().is_err());
    }
}
