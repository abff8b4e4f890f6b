//! MongoDB 에러 번역기
//!
//! 저장소 계층에서 발생한 원시 드라이버 에러를 분류하고,
//! 안정적인 HTTP 에러 계약을 가진 [`AppError`]로 번역합니다.
//!
//! ## 분류 규칙
//!
//! | 분류 | 판별 기준 | HTTP Status |
//! |------|-----------|-------------|
//! | `Validation` | 서버 코드 121, BSON 직렬화/역직렬화 실패 | 400 |
//! | `DuplicateKey` | 서버 코드 11000 | 400 |
//! | `Connectivity` | 서버 선택 실패, I/O 오류, 커넥션 풀 초기화 | 503 |
//! | `Unclassified` | 그 외 전부 | 500 |
//!
//! ObjectId 형식 오류(cast)는 드라이버 에러가 아니라 파싱 단계에서
//! 발생하므로 [`MongoErrorTranslator::malformed_id`]가 별도로 생성합니다.
//!
//! 메시지 상세도는 실행 환경으로 게이팅됩니다. 개발 환경에서는 드라이버의
//! 원본 메시지를 그대로 노출하고, 운영 환경에서는 내부 정보가 새지 않는
//! 일반화된 메시지만 내보냅니다.
//!
//! 이미 정규화된 `AppError`는 `?` 연산자의 항등 `From` 변환으로
//! 그대로 통과하므로 재번역되지 않습니다.
//!
//! ## 재시도 가능성 분류
//!
//! [`is_retryable`]은 일시적 오류(쓰기 충돌, 네트워크 타임아웃,
//! 프라이머리 교체 등)를 식별합니다. 정보 제공용이며,
//! 재시도 루프는 어디에도 구현되어 있지 않습니다.

use mongodb::error::{Error as MongoError, ErrorKind, WriteFailure};

use crate::config::Environment;
use super::errors::AppError;

/// 중복 키 오류 서버 코드
pub const DUPLICATE_KEY: i32 = 11000;
/// 쓰기 충돌 서버 코드
pub const WRITE_CONFLICT: i32 = 11001;
/// 작업 중단 서버 코드
pub const INTERRUPTED: i32 = 11601;
/// maxTimeMS 초과 서버 코드
pub const MAXIMUM_TIME_MS_EXPIRED: i32 = 50;
/// 네트워크 타임아웃 서버 코드
pub const NETWORK_TIMEOUT: i32 = 89;
/// 프라이머리 강등 서버 코드
pub const PRIMARY_STEPPED_DOWN: i32 = 189;
/// 복제 상태 변경으로 인한 중단 서버 코드
pub const INTERRUPTED_DUE_TO_REPL_STATE_CHANGE: i32 = 11602;
/// 도큐먼트 검증 실패 서버 코드
pub const DOCUMENT_VALIDATION_FAILURE: i32 = 121;

const TRANSIENT_TRANSACTION_ERROR: &str = "TransientTransactionError";

/// 저장소 에러 분류
///
/// 닫힌 열거형으로, [`MongoErrorTranslator::translate`]에서
/// 완전 매칭으로 소비됩니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MongoErrorClass {
    /// 도큐먼트 검증 실패 또는 BSON 변환 실패
    Validation,
    /// 유니크 인덱스 충돌
    DuplicateKey,
    /// 서버에 도달할 수 없는 상태
    Connectivity,
    /// 알려진 분류에 속하지 않는 오류
    Unclassified,
}

/// 드라이버 에러에서 서버 에러 코드를 추출합니다.
///
/// 커맨드 에러, 쓰기 에러, 쓰기 고려(write concern) 에러에서
/// 코드를 읽을 수 있으며, 그 외에는 `None`을 반환합니다.
pub fn error_code(err: &MongoError) -> Option<i32> {
    match &*err.kind {
        ErrorKind::Command(command_error) => Some(command_error.code),
        ErrorKind::Write(WriteFailure::WriteError(write_error)) => Some(write_error.code),
        ErrorKind::Write(WriteFailure::WriteConcernError(wc_error)) => Some(wc_error.code),
        _ => None,
    }
}

/// 서버 에러 코드를 분류합니다.
fn classify_code(code: i32) -> MongoErrorClass {
    match code {
        DUPLICATE_KEY => MongoErrorClass::DuplicateKey,
        DOCUMENT_VALIDATION_FAILURE => MongoErrorClass::Validation,
        _ => MongoErrorClass::Unclassified,
    }
}

/// 원시 드라이버 에러를 닫힌 분류 열거형으로 분류합니다.
///
/// `err.name`/`err.code`를 임의로 들여다보는 대신, 이 함수가
/// 유일한 분류 지점입니다.
pub fn classify(err: &MongoError) -> MongoErrorClass {
    if let Some(code) = error_code(err) {
        let class = classify_code(code);
        if class != MongoErrorClass::Unclassified {
            return class;
        }
    }

    match &*err.kind {
        ErrorKind::ServerSelection { .. }
        | ErrorKind::Io(_)
        | ErrorKind::ConnectionPoolCleared { .. }
        | ErrorKind::DnsResolve { .. } => MongoErrorClass::Connectivity,
        ErrorKind::BsonDeserialization(_) | ErrorKind::BsonSerialization(_) => {
            MongoErrorClass::Validation
        }
        _ => MongoErrorClass::Unclassified,
    }
}

/// 에러 코드 기준 재시도 가능 여부를 판정합니다.
fn is_retryable_code(code: i32) -> bool {
    matches!(
        code,
        WRITE_CONFLICT
            | INTERRUPTED
            | NETWORK_TIMEOUT
            | PRIMARY_STEPPED_DOWN
            | INTERRUPTED_DUE_TO_REPL_STATE_CHANGE
    )
}

/// 에러가 재시도 가능한지 판정합니다.
///
/// 쓰기 충돌, 일시적 네트워크 중단, 프라이머리 교체로 인한 중단이
/// 재시도 가능으로 분류됩니다. 정보 제공용 분류이며 재시도 루프는 없습니다.
pub fn is_retryable(err: &MongoError) -> bool {
    error_code(err).is_some_and(is_retryable_code)
        || err.contains_label(TRANSIENT_TRANSACTION_ERROR)
}

/// 저장소 에러 번역기
///
/// 실행 환경을 붙들고 있다가, 드라이버 에러를 환경에 맞는 상세도의
/// [`AppError`]로 번역합니다. 리포지토리 생성 시점에 주입됩니다.
#[derive(Debug, Clone, Copy)]
pub struct MongoErrorTranslator {
    env: Environment,
}

impl MongoErrorTranslator {
    pub fn new(env: Environment) -> Self {
        Self { env }
    }

    /// 원시 드라이버 에러를 [`AppError`]로 번역합니다.
    ///
    /// 분류 결과를 완전 매칭으로 소비하므로, 분류가 추가되면
    /// 이 지점에서 컴파일 에러로 드러납니다.
    ///
    /// # 예제
    ///
    /// ```rust,ignore
    /// self.collection::<Role>()
    ///     .insert_one(&role)
    ///     .await
    ///     .map_err(|e| self.translator.translate(e))?;
    /// ```
    pub fn translate(&self, err: MongoError) -> AppError {
        match classify(&err) {
            MongoErrorClass::Validation => AppError::ValidationError(
                self.gated(format!("Invalid input data. {}", err), "Invalid input data"),
            ),
            MongoErrorClass::DuplicateKey => AppError::DuplicateKeyError(
                self.gated(
                    format!("Duplicate field value: {}", err),
                    "Duplicate data found",
                ),
            ),
            MongoErrorClass::Connectivity => AppError::ConnectivityError(
                self.gated(
                    err.to_string(),
                    "Database connection failed. Please try again later.",
                ),
            ),
            MongoErrorClass::Unclassified => AppError::DatabaseError(
                self.gated(
                    err.to_string(),
                    "Something went wrong with database operation",
                ),
            ),
        }
    }

    /// ObjectId 파싱 실패를 cast 에러로 정규화합니다.
    ///
    /// # 인자
    /// * `path` - 형식이 잘못된 필드 이름 (예: `_id`)
    /// * `value` - 클라이언트가 보낸 원본 값
    pub fn malformed_id(&self, path: &str, value: &str) -> AppError {
        AppError::MalformedIdError(
            self.gated(format!("Invalid {}: {}", path, value), "Invalid data format"),
        )
    }

    /// 환경에 따라 상세 메시지 또는 일반화된 메시지를 선택합니다.
    fn gated(&self, verbose: String, generic: &str) -> String {
        if self.env.is_development() {
            verbose
        } else {
            generic.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn io_error() -> MongoError {
        MongoError::from(std::io::Error::new(
            std::io::ErrorKind::ConnectionRefused,
            "connection refused",
        ))
    }

    #[test]
    fn test_classify_code() {
        assert_eq!(classify_code(DUPLICATE_KEY), MongoErrorClass::DuplicateKey);
        assert_eq!(
            classify_code(DOCUMENT_VALIDATION_FAILURE),
            MongoErrorClass::Validation
        );
        assert_eq!(classify_code(42), MongoErrorClass::Unclassified);
        assert_eq!(classify_code(NETWORK_TIMEOUT), MongoErrorClass::Unclassified);
    }

    #[test]
    fn test_classify_io_error_as_connectivity() {
        assert_eq!(classify(&io_error()), MongoErrorClass::Connectivity);
    }

    #[test]
    fn test_classify_custom_error_as_unclassified() {
        let err = MongoError::custom("some opaque failure");
        assert_eq!(classify(&err), MongoErrorClass::Unclassified);
    }

    #[test]
    fn test_retryable_codes() {
        assert!(is_retryable_code(WRITE_CONFLICT));
        assert!(is_retryable_code(INTERRUPTED));
        assert!(is_retryable_code(NETWORK_TIMEOUT));
        assert!(is_retryable_code(PRIMARY_STEPPED_DOWN));
        assert!(is_retryable_code(INTERRUPTED_DUE_TO_REPL_STATE_CHANGE));

        // 중복 키와 maxTimeMS 초과는 재시도 대상이 아님
        assert!(!is_retryable_code(DUPLICATE_KEY));
        assert!(!is_retryable_code(MAXIMUM_TIME_MS_EXPIRED));
    }

    #[test]
    fn test_io_error_not_retryable_without_code() {
        assert!(!is_retryable(&io_error()));
    }

    #[test]
    fn test_translate_connectivity_gated_by_environment() {
        let dev = MongoErrorTranslator::new(Environment::Development);
        let prod = MongoErrorTranslator::new(Environment::Production);

        match dev.translate(io_error()) {
            AppError::ConnectivityError(msg) => {
                assert!(msg.contains("connection refused"));
            }
            other => panic!("Expected ConnectivityError, got {:?}", other),
        }

        match prod.translate(io_error()) {
            AppError::ConnectivityError(msg) => {
                assert_eq!(msg, "Database connection failed. Please try again later.");
            }
            other => panic!("Expected ConnectivityError, got {:?}", other),
        }
    }

    #[test]
    fn test_translate_unclassified_defaults_to_database_error() {
        let prod = MongoErrorTranslator::new(Environment::Production);

        match prod.translate(MongoError::custom("opaque")) {
            AppError::DatabaseError(msg) => {
                assert_eq!(msg, "Something went wrong with database operation");
            }
            other => panic!("Expected DatabaseError, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_id_messages() {
        let dev = MongoErrorTranslator::new(Environment::Development);
        let prod = MongoErrorTranslator::new(Environment::Production);

        assert_eq!(
            dev.malformed_id("_id", "not-an-object-id"),
            AppError::MalformedIdError("Invalid _id: not-an-object-id".to_string())
        );
        assert_eq!(
            prod.malformed_id("_id", "not-an-object-id"),
            AppError::MalformedIdError("Invalid data format".to_string())
        );
    }
}
