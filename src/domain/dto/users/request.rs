//! 사용자 요청 DTO

use serde::Deserialize;
use validator::Validate;

fn default_page() -> u64 {
    1
}

/// 로그인-또는-생성 요청
///
/// `user_phone`과 `user_password`가 필수이며, 누락 시 서비스 계층이
/// 필드 이름을 담은 400 응답을 반환합니다. `user_email`이 있으면
/// 이메일로, 없으면 전화번호로 기존 계정을 조회합니다.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginCreateUserRequest {
    pub user_phone: Option<i64>,
    pub user_password: Option<String>,
    pub user_otp: Option<i64>,
    pub user_email: Option<String>,
}

/// 사용자 부분 수정 요청
///
/// 존재하는 필드만 `$set`으로 반영됩니다. 비밀번호는 6자 미만이면
/// 거부되고, 저장 전에 bcrypt로 재해싱됩니다.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateUserRequest {
    pub name: Option<String>,
    pub phone: Option<i64>,

    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,

    pub password: Option<String>,
    pub role: Option<String>,
    pub address: Option<String>,
}

/// 사용자 목록 쿼리
///
/// 다른 목록 엔드포인트와 달리 `pageSize`를 `limit`의 별칭으로도
/// 받습니다. 원본 시스템의 두 사용자 컨트롤러가 서로 다른 파라미터
/// 이름을 쓰기 때문에, 어느 쪽 클라이언트도 깨지지 않도록 둘 다
/// 허용합니다.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UserPageQuery {
    #[serde(default = "default_page")]
    #[validate(range(min = 1))]
    pub page: u64,

    #[validate(range(min = 1, max = 100))]
    pub limit: Option<u64>,

    #[serde(rename = "pageSize")]
    #[validate(range(min = 1, max = 100))]
    pub page_size: Option<u64>,

    #[serde(rename = "searchTerm")]
    pub search_term: Option<String>,
}

impl UserPageQuery {
    /// `limit`이 우선하고, 없으면 `pageSize`, 둘 다 없으면 10
    pub fn effective_limit(&self) -> u64 {
        self.limit.or(self.page_size).unwrap_or(10)
    }

    pub fn skip(&self) -> u64 {
        (self.page - 1) * self.effective_limit()
    }

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
    fn test_effective_limit_prefers_limit() {
        let query: UserPageQuery =
            serde_json::from_str(r#"{"limit": 5, "pageSize": 20}"#).unwrap();

        assert_eq!(query.effective_limit(), 5);
    }

    #[test]
    fn test_page_size_alias() {
        let query: UserPageQuery = serde_json::from_str(r#"{"pageSize": 20}"#).unwrap();

        assert_eq!(query.effective_limit(), 20);
    }

    #[test]
    fn test_default_limit() {
        let query: UserPageQuery = serde_json::from_str("{}").unwrap();

        assert_eq!(query.page, 1);
        assert_eq!(query.effective_limit(), 10);
    }
}
