//! 목록 조회 공통 쿼리 DTO

use serde::Deserialize;
use validator::Validate;

fn default_page() -> u64 {
    1
}

fn default_limit() -> u64 {
    10
}

/// 목록 엔드포인트 공통 쿼리 파라미터
///
/// `?page=1&limit=10&searchTerm=steel` 형태로 전달되며,
/// `searchTerm`은 대소문자 구분 없는 부분 문자열 검색에 사용됩니다.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PageQuery {
    #[serde(default = "default_page")]
    #[validate(range(min = 1))]
    pub page: u64,

    #[serde(default = "default_limit")]
    #[validate(range(min = 1, max = 100))]
    pub limit: u64,

    #[serde(rename = "searchTerm")]
    pub search_term: Option<String>,
}

impl PageQuery {
    /// skip/limit 계산용 오프셋
    pub fn skip(&self) -> u64 {
        (self.page - 1) * self.limit
    }

    /// 공백뿐인 검색어는 없는 것으로 취급합니다.
    pub fn search_term(&self) -> Option<&str> {
        self.search_term
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_applied() {
        let query: PageQuery = serde_json::from_str("{}").unwrap();

        assert_eq!(query.page, 1);
        assert_eq!(query.limit, 10);
        assert!(query.search_term().is_none());
    }

    #[test]
    fn test_skip_calculation() {
        let query: PageQuery =
            serde_json::from_str(r#"{"page": 3, "limit": 20}"#).unwrap();

        assert_eq!(query.skip(), 40);
    }

    #[test]
    fn test_blank_search_term_is_ignored() {
        let query: PageQuery =
            serde_json::from_str(r#"{"searchTerm": "   "}"#).unwrap();

        assert!(query.search_term().is_none());
    }

    #[test]
    fn test_invalid_page_rejected() {
        let query: PageQuery = serde_json::from_str(r#"{"page": 0}"#).unwrap();

        assert!(query.validate().is_err());
    }
}
