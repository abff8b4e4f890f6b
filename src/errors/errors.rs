//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! 백엔드 서비스를 위한 통합 에러 처리 시스템입니다.
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 타입 안전하고
//! 일관된 에러 처리를 제공합니다.
//!
//! 핸들러는 `Result<HttpResponse, AppError>`를 반환하고,
//! 실패 값은 프레임워크가 `error_response()`를 통해
//! 단일한 실패 엔벨로프로 변환합니다. 별도의 에러 전달 래퍼는 없습니다.
//!
//! ## 실패 엔벨로프 (모든 에러 공통)
//!
//! ```json
//! {
//!   "success": false,
//!   "error": {
//!     "message": "Role not found",
//!     "type": "NotFoundError"
//!   }
//! }
//! ```
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 사용 시나리오 |
//! |----------|-------------|---------------|
//! | `ValidationError` | 400 Bad Request | 입력값 검증 실패 |
//! | `DuplicateKeyError` | 400 Bad Request | 유니크 인덱스 충돌 |
//! | `MalformedIdError` | 400 Bad Request | ObjectId 형식 오류 |
//! | `PayloadTooLargeError` | 400 Bad Request | 요청 본문 크기 초과 |
//! | `AuthenticationError` | 401 Unauthorized | 인증 실패, 토큰 만료/위조 |
//! | `AuthorizationError` | 403 Forbidden | 권한 부족 |
//! | `NotFound` | 404 Not Found | 리소스 없음 |
//! | `RateLimitError` | 429 Too Many Requests | 요청 속도 제한 |
//! | `ConnectivityError` | 503 Service Unavailable | 데이터베이스 연결 불가 |
//! | `DatabaseError` | 500 Internal Server Error | 분류되지 않은 저장소 오류 |
//! | `InternalError` | 500 Internal Server Error | 예상치 못한 오류 |
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::AppError;
//!
//! async fn get_role(id: &str) -> Result<Role, AppError> {
//!     let role = role_repo.find_by_id(id).await?
//!         .ok_or_else(|| AppError::NotFound("Role not found".to_string()))?;
//!     Ok(role)
//! }
//! ```

use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// 백엔드 서비스에서 발생할 수 있는 모든 종류의 에러를 포괄하는 열거형입니다.
/// 클래스 계층 대신 태그된 열거형으로 표현되며, 각 변형은 상태 코드와
/// 엔벨로프 `type` 문자열에 완전 매칭으로 매핑됩니다.
/// 자동으로 HTTP 응답으로 변환되어 클라이언트에게 전달됩니다.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    /// 입력값 검증 에러 (400 Bad Request)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 유니크 인덱스 충돌 에러 (400 Bad Request)
    #[error("Duplicate key error: {0}")]
    DuplicateKeyError(String),

    /// 식별자 형식 오류 (400 Bad Request)
    #[error("Malformed id error: {0}")]
    MalformedIdError(String),

    /// 요청 본문 크기 초과 에러 (400 Bad Request)
    #[error("Payload too large: {0}")]
    PayloadTooLargeError(String),

    /// 인증 실패 에러 (401 Unauthorized)
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// 권한 부족 에러 (403 Forbidden)
    #[error("Authorization error: {0}")]
    AuthorizationError(String),

    /// 리소스 찾을 수 없음 에러 (404 Not Found)
    #[error("Not found: {0}")]
    NotFound(String),

    /// 요청 속도 제한 에러 (429 Too Many Requests)
    #[error("Rate limit error: {0}")]
    RateLimitError(String),

    /// 데이터베이스 연결 불가 에러 (503 Service Unavailable)
    #[error("Connectivity error: {0}")]
    ConnectivityError(String),

    /// 분류되지 않은 저장소 에러 (500 Internal Server Error)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 클라이언트에게 전달되는 메시지를 반환합니다.
    ///
    /// `Display` 구현은 로그용 접두어를 포함하므로,
    /// 엔벨로프에는 이 접두어 없는 메시지를 사용합니다.
    pub fn message(&self) -> &str {
        match self {
            AppError::ValidationError(msg)
            | AppError::DuplicateKeyError(msg)
            | AppError::MalformedIdError(msg)
            | AppError::PayloadTooLargeError(msg)
            | AppError::AuthenticationError(msg)
            | AppError::AuthorizationError(msg)
            | AppError::NotFound(msg)
            | AppError::RateLimitError(msg)
            | AppError::ConnectivityError(msg)
            | AppError::DatabaseError(msg)
            | AppError::InternalError(msg) => msg,
        }
    }

    /// 엔벨로프의 `type` 필드에 들어가는 에러 식별 문자열을 반환합니다.
    pub fn error_type(&self) -> &'static str {
        match self {
            AppError::ValidationError(_) => "ValidationError",
            AppError::DuplicateKeyError(_) => "DuplicateKeyError",
            AppError::MalformedIdError(_) => "CastError",
            AppError::PayloadTooLargeError(_) => "PayloadTooLargeError",
            AppError::AuthenticationError(_) => "UnauthorizedError",
            AppError::AuthorizationError(_) => "ForbiddenError",
            AppError::NotFound(_) => "NotFoundError",
            AppError::RateLimitError(_) => "RateLimitError",
            AppError::ConnectivityError(_) => "ConnectivityError",
            AppError::DatabaseError(_) => "DatabaseError",
            AppError::InternalError(_) => "InternalError",
        }
    }
}

impl actix_web::ResponseError for AppError {
    /// 각 에러 변형을 HTTP 상태 코드로 완전 매칭합니다.
    fn status_code(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;

        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::DuplicateKeyError(_) => StatusCode::BAD_REQUEST,
            AppError::MalformedIdError(_) => StatusCode::BAD_REQUEST,
            AppError::PayloadTooLargeError(_) => StatusCode::BAD_REQUEST,
            AppError::AuthenticationError(_) => StatusCode::UNAUTHORIZED,
            AppError::AuthorizationError(_) => StatusCode::FORBIDDEN,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::RateLimitError(_) => StatusCode::TOO_MANY_REQUESTS,
            AppError::ConnectivityError(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 모든 실패는 이 단일 종결 지점에서 실패 엔벨로프로 변환됩니다.
    /// 5xx 에러는 서버 로그에 상세를 남기되, 클라이언트에는
    /// 정규화된 메시지만 전달합니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        let status = self.status_code();

        if status.is_server_error() {
            log::error!("{}", self);
        } else {
            log::warn!("{}", self);
        }

        actix_web::HttpResponse::build(status)
            .json(serde_json::json!({
                "success": false,
                "error": {
                    "message": self.message(),
                    "type": self.error_type()
                }
            }))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
///
/// bcrypt, jsonwebtoken 등 번역기가 따로 없는 라이브러리의 에러를
/// 컨텍스트 문자열과 함께 `InternalError`로 변환합니다.
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;

    /// 클로저를 사용하여 지연 평가된 컨텍스트를 제공합니다.
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;
    use actix_web::http::StatusCode;

    #[test]
    fn test_validation_error_response() {
        let error = AppError::ValidationError("name is required".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_duplicate_key_error_response() {
        let error = AppError::DuplicateKeyError("Duplicate data found".to_string());
        let response = error.error_response();

        // 중복 키는 500이 아니라 400으로 응답해야 함
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_malformed_id_error_response() {
        let error = AppError::MalformedIdError("Invalid _id: abc".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_authentication_error_response() {
        let error = AppError::AuthenticationError("Unauthorized".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_authorization_error_response() {
        let error = AppError::AuthorizationError("Admin resource. Access denied.".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn test_not_found_error_response() {
        let error = AppError::NotFound("User not found".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_rate_limit_error_response() {
        let error = AppError::RateLimitError("Too many requests".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
    }

    #[test]
    fn test_connectivity_error_response() {
        let error = AppError::ConnectivityError("Database connection failed".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn test_internal_error_response() {
        let error = AppError::InternalError("Something went wrong".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_error_type_strings() {
        assert_eq!(
            AppError::ValidationError(String::new()).error_type(),
            "ValidationError"
        );
        assert_eq!(
            AppError::DuplicateKeyError(String::new()).error_type(),
            "DuplicateKeyError"
        );
        assert_eq!(
            AppError::MalformedIdError(String::new()).error_type(),
            "CastError"
        );
        assert_eq!(
            AppError::AuthenticationError(String::new()).error_type(),
            "UnauthorizedError"
        );
        assert_eq!(
            AppError::NotFound(String::new()).error_type(),
            "NotFoundError"
        );
    }

    #[test]
    fn test_message_strips_log_prefix() {
        let error = AppError::NotFound("Expense not found".to_string());

        // Display는 로그용 접두어를 포함하지만 엔벨로프 메시지는 원문 그대로
        assert_eq!(error.to_string(), "Not found: Expense not found");
        assert_eq!(error.message(), "Expense not found");
    }

    #[actix_web::test]
    async fn test_error_envelope_shape() {
        let error = AppError::NotFound("Role not found".to_string());
        let response = error.error_response();

        let body = actix_web::body::to_bytes(response.into_body())
            .await
            .expect("body should collect");
        let json: serde_json::Value =
            serde_json::from_slice(&body).expect("body should be json");

        assert_eq!(json["success"], serde_json::json!(false));
        assert_eq!(json["error"]["message"], serde_json::json!("Role not found"));
        assert_eq!(json["error"]["type"], serde_json::json!("NotFoundError"));
    }

    #[test]
    fn test_error_context_trait() {
        let result: Result<(), &str> = Err("original error");
        let app_result = result.context("Additional context");

        assert!(app_result.is_err());
        if let Err(AppError::InternalError(msg)) = app_result {
            assert!(msg.contains("Additional context"));
            assert!(msg.contains("original error"));
        } else {
            panic!("Expected InternalError");
        }
    }
}
