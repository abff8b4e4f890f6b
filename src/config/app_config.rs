//! # Application Configuration
//!
//! 서비스 전역 설정을 환경 변수에서 읽어 하나의 값으로 구성합니다.
//! 데이터베이스 URI, JWT 서명 비밀키, 실행 환경 플래그, Rate Limiting 설정을
//! 포함하며, 기동 시점에 한 번 생성되어 컴포넌트 생성자로 전달됩니다.
//!
//! ## 필수 환경 변수
//!
//! ```bash
//! export JWT_SECRET="your-super-secret-jwt-key"
//! ```
//!
//! ## 선택 환경 변수 (기본값 존재)
//!
//! ```bash
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="inventory_admin_dev"
//! export JWT_EXPIRY_HOURS="24"
//! export PORT="7001"
//! export PROFILE="dev"            # dev | prod
//! export RATE_LIMIT_PER_SECOND="100"
//! export RATE_LIMIT_BURST_SIZE="200"
//! export BCRYPT_COST="12"
//! ```

use std::env;
use log::error;

/// 실행 환경 구분
///
/// 에러 메시지 상세도를 게이팅합니다. 개발 환경에서는 드라이버의 원본
/// 메시지를 노출하고, 운영 환경에서는 내부 정보가 새지 않도록 일반화된
/// 메시지만 내보냅니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    /// `PROFILE` 환경변수 값으로부터 실행 환경을 결정합니다.
    ///
    /// `"prod"` 또는 `"production"`만 운영 환경으로 취급하고,
    /// 그 외의 값은 모두 개발 환경으로 취급합니다.
    pub fn from_profile(profile: &str) -> Self {
        match profile {
            "prod" | "production" => Environment::Production,
            _ => Environment::Development,
        }
    }

    pub fn is_development(self) -> bool {
        matches!(self, Environment::Development)
    }

    pub fn is_production(self) -> bool {
        matches!(self, Environment::Production)
    }
}

/// Rate Limiting 설정
#[derive(Debug, Clone)]
pub struct RateLimitConfig {
    /// 초당 허용 요청 수
    pub per_second: u64,
    /// 버스트 허용량
    pub burst_size: u32,
}

/// 애플리케이션 전역 설정
///
/// 기동 시점에 [`AppConfig::from_env`]로 한 번 구성되며,
/// 이후에는 복제되어 각 컴포넌트에 전달됩니다.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// MongoDB 연결 URI
    pub mongodb_uri: String,
    /// 사용할 데이터베이스 이름
    pub database_name: String,
    /// JWT 서명 비밀키
    pub jwt_secret: String,
    /// 액세스 토큰 만료 시간 (시간 단위)
    pub jwt_expiry_hours: i64,
    /// bcrypt 해싱 cost
    pub bcrypt_cost: u32,
    /// HTTP 서버 포트
    pub port: u16,
    /// 실행 환경 (에러 상세도 게이팅)
    pub environment: Environment,
    /// Rate Limiting 설정
    pub rate_limit: RateLimitConfig,
}

impl AppConfig {
    /// 환경 변수에서 설정을 읽어 구성합니다.
    ///
    /// 선택 항목은 파싱 실패 시 경고를 남기고 기본값으로 대체합니다.
    ///
    /// # Panics
    ///
    /// `JWT_SECRET` 환경 변수가 설정되지 않은 경우 패닉이 발생합니다.
    /// 서명 비밀키 없이 기동하는 것은 허용되지 않습니다.
    pub fn from_env() -> Self {
        let mongodb_uri = env::var("MONGODB_URI")
            .unwrap_or_else(|_| "mongodb://localhost:27017".to_string());

        let database_name = env::var("DATABASE_NAME")
            .unwrap_or_else(|_| "inventory_admin_dev".to_string());

        let jwt_secret = env::var("JWT_SECRET")
            .expect("JWT_SECRET must be set");

        let jwt_expiry_hours = parse_var("JWT_EXPIRY_HOURS", 24);
        let bcrypt_cost = parse_var("BCRYPT_COST", bcrypt::DEFAULT_COST);
        let port = parse_var("PORT", 7001);

        let profile = env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());
        let environment = Environment::from_profile(&profile);

        let rate_limit = RateLimitConfig {
            per_second: parse_var("RATE_LIMIT_PER_SECOND", 100),
            burst_size: parse_var("RATE_LIMIT_BURST_SIZE", 200),
        };

        Self {
            mongodb_uri,
            database_name,
            jwt_secret,
            jwt_expiry_hours,
            bcrypt_cost,
            port,
            environment,
            rate_limit,
        }
    }
}

/// 숫자형 환경 변수를 파싱하고, 실패 시 기본값을 사용합니다.
fn parse_var<T: std::str::FromStr + std::fmt::Display + Copy>(name: &str, default: T) -> T {
    match env::var(name) {
        Ok(raw) => raw.parse::<T>().unwrap_or_else(|_| {
            error!("{} 파싱 실패: '{}'. 기본값 {} 사용", name, raw, default);
            default
        }),
        Err(_) => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_from_profile() {
        assert_eq!(Environment::from_profile("prod"), Environment::Production);
        assert_eq!(Environment::from_profile("production"), Environment::Production);
        assert_eq!(Environment::from_profile("dev"), Environment::Development);
        assert_eq!(Environment::from_profile(""), Environment::Development);
        assert_eq!(Environment::from_profile("staging"), Environment::Development);
    }

    #[test]
    fn test_environment_flags() {
        assert!(Environment::Development.is_development());
        assert!(!Environment::Development.is_production());
        assert!(Environment::Production.is_production());
        assert!(!Environment::Production.is_development());
    }
}
