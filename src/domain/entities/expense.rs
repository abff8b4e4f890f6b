//! 배송비(Expense) 엔티티

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// 배송 방식
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeliveryType {
    Single,
    #[serde(rename = "Multi-Stop")]
    MultiStop,
}

impl DeliveryType {
    /// 도큐먼트/와이어 표현 문자열
    pub fn as_str(self) -> &'static str {
        match self {
            DeliveryType::Single => "Single",
            DeliveryType::MultiStop => "Multi-Stop",
        }
    }
}

/// 배송비 처리 상태
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExpenseStatus {
    Pending,
    Approved,
    Disputed,
}

impl ExpenseStatus {
    /// 도큐먼트/와이어 표현 문자열
    pub fn as_str(self) -> &'static str {
        match self {
            ExpenseStatus::Pending => "Pending",
            ExpenseStatus::Approved => "Approved",
            ExpenseStatus::Disputed => "Disputed",
        }
    }
}

/// 배송비 도큐먼트
///
/// `total_units`, `cost_per_pack`, `cost_per_unit`은 기록 시점에
/// `packaging_qty`, `items_per_pack`, `fare`에서 계산되는 파생 필드입니다.
/// 입력값은 0이 아니라고 가정합니다 (요청 DTO 검증에서 보장).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,

    pub date: DateTime,

    pub customer: String,

    pub product: String,

    /// 포장 단위 (예: "10 KG Bag")
    pub packaging_type: String,

    /// 전체 포장 수량
    pub packaging_qty: i64,

    pub items_per_pack: i64,

    /// 파생: packaging_qty * items_per_pack
    pub total_units: i64,

    pub fare: f64,

    /// 파생: fare / packaging_qty
    pub cost_per_pack: f64,

    /// 파생: fare / total_units
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

impl Expense {
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delivery_type_wire_names() {
        assert_eq!(
            serde_json::to_string(&DeliveryType::Single).unwrap(),
            r#""Single""#
        );
        assert_eq!(
            serde_json::to_string(&DeliveryType::MultiStop).unwrap(),
            r#""Multi-Stop""#
        );
    }

    #[test]
    fn test_expense_status_wire_names() {
        assert_eq!(
            serde_json::to_string(&ExpenseStatus::Pending).unwrap(),
            r#""Pending""#
        );
        let parsed: ExpenseStatus = serde_json::from_str(r#""Disputed""#).unwrap();
        assert_eq!(parsed, ExpenseStatus::Disputed);
    }
}
