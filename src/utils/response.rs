//! 응답 엔벨로프 빌더
//!
//! 모든 성공 응답에 일관된 최상위 JSON 래퍼를 제공합니다.
//! 실패 엔벨로프는 [`AppError`](crate::errors::AppError)의
//! `ResponseError` 구현이 담당합니다.
//!
//! ## 성공 엔벨로프
//!
//! ```json
//! {
//!   "success": true,
//!   "message": "Success",
//!   "data": { ... },
//!   "meta": { "pagination": { ... } }
//! }
//! ```
//!
//! `data`와 `meta`는 없을 때 필드 자체가 생략됩니다(null 아님).
//!
//! ## 페이지네이션 메타
//!
//! `(page, limit, total)`에서 올림 나눗셈으로 계산됩니다.
//! `nextPage`/`prevPage`는 각각 `hasNext`/`hasPrev`가 참일 때만 포함됩니다.

use actix_web::HttpResponse;
use actix_web::http::StatusCode;
use serde::Serialize;

/// 성공 응답 엔벨로프
#[derive(Debug, Serialize)]
pub struct SuccessBody<T: Serialize> {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
}

/// 엔벨로프의 `meta` 필드
#[derive(Debug, Serialize)]
pub struct Meta {
    pub pagination: PaginationMeta,
}

/// 페이지네이션 메타데이터
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMeta {
    pub current_page: u64,
    pub total_pages: u64,
    pub total_items: u64,
    pub items_per_page: u64,
    pub has_next: bool,
    pub has_prev: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_page: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev_page: Option<u64>,
}

impl PaginationMeta {
    /// `(page, limit, total)`에서 페이지네이션 메타를 계산합니다.
    ///
    /// `limit`은 1 이상이라고 가정합니다 (요청 DTO 검증에서 보장).
    pub fn new(page: u64, limit: u64, total: u64) -> Self {
        let total_pages = total.div_ceil(limit);
        let has_next = page < total_pages;
        let has_prev = page > 1;

        Self {
            current_page: page,
            total_pages,
            total_items: total,
            items_per_page: limit,
            has_next,
            has_prev,
            next_page: has_next.then(|| page + 1),
            prev_page: has_prev.then(|| page - 1),
        }
    }
}

/// 성공 응답을 생성합니다.
pub fn success_response<T: Serialize>(
    status: StatusCode,
    message: &str,
    data: Option<T>,
) -> HttpResponse {
    HttpResponse::build(status).json(SuccessBody {
        success: true,
        message: message.to_string(),
        data,
        meta: None,
    })
}

/// 200 OK 성공 응답
pub fn ok_response<T: Serialize>(message: &str, data: Option<T>) -> HttpResponse {
    success_response(StatusCode::OK, message, data)
}

/// 201 Created 성공 응답
pub fn created_response<T: Serialize>(message: &str, data: Option<T>) -> HttpResponse {
    success_response(StatusCode::CREATED, message, data)
}

/// 삭제 완료 응답 (본문 데이터 없음)
pub fn deleted_response(message: &str) -> HttpResponse {
    success_response::<()>(StatusCode::OK, message, None)
}

/// 페이지네이션 메타를 포함한 목록 응답을 생성합니다.
pub fn paginated_response<T: Serialize>(
    data: Vec<T>,
    page: u64,
    limit: u64,
    total: u64,
    message: &str,
) -> HttpResponse {
    HttpResponse::Ok().json(SuccessBody {
        success: true,
        message: message.to_string(),
        data: Some(data),
        meta: Some(Meta {
            pagination: PaginationMeta::new(page, limit, total),
        }),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pagination_middle_page() {
        let meta = PaginationMeta::new(2, 10, 35);

        assert_eq!(meta.total_pages, 4); // ceil(35 / 10)
        assert!(meta.has_next);
        assert!(meta.has_prev);
        assert_eq!(meta.next_page, Some(3));
        assert_eq!(meta.prev_page, Some(1));
    }

    #[test]
    fn test_pagination_first_page() {
        let meta = PaginationMeta::new(1, 10, 35);

        assert!(meta.has_next);
        assert!(!meta.has_prev);
        assert_eq!(meta.next_page, Some(2));
        assert_eq!(meta.prev_page, None);
    }

    #[test]
    fn test_pagination_last_page() {
        let meta = PaginationMeta::new(4, 10, 35);

        assert!(!meta.has_next);
        assert!(meta.has_prev);
        assert_eq!(meta.next_page, None);
        assert_eq!(meta.prev_page, Some(3));
    }

    #[test]
    fn test_pagination_exact_division() {
        let meta = PaginationMeta::new(3, 10, 30);

        assert_eq!(meta.total_pages, 3);
        assert!(!meta.has_next);
        assert!(meta.has_prev);
    }

    #[test]
    fn test_pagination_empty_result() {
        let meta = PaginationMeta::new(1, 10, 0);

        assert_eq!(meta.total_pages, 0);
        assert!(!meta.has_next);
        assert!(!meta.has_prev);
        assert_eq!(meta.next_page, None);
        assert_eq!(meta.prev_page, None);
    }

    #[test]
    fn test_pagination_flag_property() {
        // hasNext == (page < ceil(total/limit)), hasPrev == (page > 1),
        // nextPage/prevPage는 각 플래그가 참일 때만 존재
        for page in 1..=6u64 {
            for total in [0u64, 1, 9, 10, 11, 25, 60] {
                let limit = 10u64;
                let meta = PaginationMeta::new(page, limit, total);

                assert_eq!(meta.has_next, page < total.div_ceil(limit));
                assert_eq!(meta.has_prev, page > 1);
                assert_eq!(meta.next_page.is_some(), meta.has_next);
                assert_eq!(meta.prev_page.is_some(), meta.has_prev);
            }
        }
    }

    #[test]
    fn test_pagination_serializes_camel_case_and_omits_absent_links() {
        let meta = PaginationMeta::new(1, 10, 5);
        let json = serde_json::to_value(&meta).unwrap();

        assert_eq!(json["currentPage"], 1);
        assert_eq!(json["totalItems"], 5);
        assert_eq!(json["itemsPerPage"], 10);
        assert!(json.get("nextPage").is_none());
        assert!(json.get("prevPage").is_none());
    }

    #[test]
    fn test_success_body_omits_absent_fields() {
        let body = SuccessBody::<()> {
            success: true,
            message: "Success".to_string(),
            data: None,
            meta: None,
        };
        let json = serde_json::to_value(&body).unwrap();

        assert_eq!(json["success"], true);
        assert!(json.get("data").is_none());
        assert!(json.get("meta").is_none());
    }
}
