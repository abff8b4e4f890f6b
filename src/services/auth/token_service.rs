//! JWT 토큰 서비스
//!
//! HS256 서명 토큰의 발급과 검증을 담당합니다.
//! 토큰에는 사용자 식별 클레임(id/name/email/phone/role)이 담기며,
//! 검증 시에는 서명 확인 후 만료를 수동으로 검사하고,
//! 호출 측(인증 미들웨어)이 데이터베이스의 최신 레코드와
//! 클레임 일치성을 추가로 확인합니다.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::config::AppConfig;
use crate::domain::entities::user::User;
use crate::errors::AppError;

/// 토큰에 담기는 사용자 식별 클레임
///
/// 서명 시점의 사용자 스냅샷입니다. 레코드가 그 후 변경되면
/// [`TokenService::claims_match`]가 거짓을 반환하여 토큰이 거부됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    pub id: String,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<i64>,
    pub role: String,
    pub iat: i64,
    pub exp: i64,
}

/// JWT 토큰 발급/검증 서비스
pub struct TokenService {
    secret: String,
    expiry_hours: i64,
}

impl TokenService {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            secret: config.jwt_secret.clone(),
            expiry_hours: config.jwt_expiry_hours,
        }
    }

    /// 사용자에 대한 액세스 토큰을 발급합니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(String)` - 서명된 JWT
    /// * `Err(AppError::InternalError)` - ID 없는 엔티티 또는 서명 실패
    pub fn generate_token(&self, user: &User) -> Result<String, AppError> {
        let now = Utc::now();
        let expiration = now + Duration::hours(self.expiry_hours);

        let claims = TokenClaims {
            id: user
                .id_string()
                .ok_or_else(|| AppError::InternalError("User has no id".to_string()))?,
            name: user.name.clone(),
            email: user.email.clone(),
            phone: user.phone,
            role: user.role.clone(),
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        };

        let encoding_key = EncodingKey::from_secret(self.secret.as_ref());

        encode(&Header::default(), &claims, &encoding_key)
            .map_err(|e| AppError::InternalError(format!("Failed to sign token: {}", e)))
    }

    /// 토큰을 검증하고 클레임을 반환합니다.
    ///
    /// 서명은 라이브러리가 확인하되, 만료는 비활성화한 뒤 수동으로
    /// 검사합니다. 만료/위조 모두 401로 정규화됩니다.
    pub fn verify_token(&self, token: &str) -> Result<TokenClaims, AppError> {
        let decoding_key = DecodingKey::from_secret(self.secret.as_ref());
        let mut validation = Validation::default();
        validation.validate_exp = false;

        let claims = decode::<TokenClaims>(token, &decoding_key, &validation)
            .map(|token_data| token_data.claims)
            .map_err(|_| AppError::AuthenticationError("Invalid token".to_string()))?;

        let current_time = Utc::now().timestamp();
        if claims.exp < current_time {
            return Err(AppError::AuthenticationError("Token expired".to_string()));
        }

        Ok(claims)
    }

    /// `Authorization` 헤더에서 Bearer 토큰을 추출합니다.
    pub fn extract_bearer_token<'a>(&self, auth_header: &'a str) -> Result<&'a str, AppError> {
        match auth_header.strip_prefix("Bearer ") {
            Some(token) if !token.is_empty() && token != "null" => Ok(token),
            _ => Err(AppError::AuthenticationError("Unauthorized".to_string())),
        }
    }

    /// 토큰 클레임이 저장된 사용자 레코드와 여전히 일치하는지 확인합니다.
    ///
    /// 암호학적으로 유효하고 만료되지 않은 토큰이라도, 발급 이후
    /// 레코드의 name/email/phone이 변경되었다면 거짓을 반환합니다.
    pub fn claims_match(user: &User, claims: &TokenClaims) -> bool {
        user.id_string().as_deref() == Some(claims.id.as_str())
            && user.name == claims.name
            && user.email == claims.email
            && user.phone == claims.phone
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Environment, RateLimitConfig};
    use mongodb::bson::oid::ObjectId;

    fn test_config() -> AppConfig {
        AppConfig {
            mongodb_uri: "mongodb://localhost:27017".to_string(),
            database_name: "inventory_admin_test".to_string(),
            jwt_secret: "test-secret".to_string(),
            jwt_expiry_hours: 24,
            bcrypt_cost: 4,
            port: 0,
            environment: Environment::Development,
            rate_limit: RateLimitConfig {
                per_second: 100,
                burst_size: 200,
            },
        }
    }

    fn test_user() -> User {
        let mut user = User::new_subscriber(
            Some("buyer@example.com".to_string()),
            Some(1012345678),
            "hashed".to_string(),
        );
        user.id = Some(ObjectId::new());
        user.name = "Kim".to_string();
        user
    }

    #[test]
    fn test_token_round_trip() {
        let service = TokenService::new(&test_config());
        let user = test_user();

        let token = service.generate_token(&user).unwrap();
        let claims = service.verify_token(&token).unwrap();

        assert_eq!(claims.id, user.id_string().unwrap());
        assert_eq!(claims.name, "Kim");
        assert_eq!(claims.email.as_deref(), Some("buyer@example.com"));
        assert_eq!(claims.phone, Some(1012345678));
        assert_eq!(claims.role, "subscriber");
    }

    #[test]
    fn test_tampered_token_rejected() {
        let service = TokenService::new(&test_config());
        let token = service.generate_token(&test_user()).unwrap();

        let mut other_config = test_config();
        other_config.jwt_secret = "other-secret".to_string();
        let other_service = TokenService::new(&other_config);

        assert_eq!(
            other_service.verify_token(&token).unwrap_err(),
            AppError::AuthenticationError("Invalid token".to_string())
        );
    }

    #[test]
    fn test_expired_token_rejected() {
        let mut config = test_config();
        config.jwt_expiry_hours = -1;
        let service = TokenService::new(&config);

        let token = service.generate_token(&test_user()).unwrap();

        assert_eq!(
            service.verify_token(&token).unwrap_err(),
            AppError::AuthenticationError("Token expired".to_string())
        );
    }

    #[test]
    fn test_extract_bearer_token() {
        let service = TokenService::new(&test_config());

        assert_eq!(service.extract_bearer_token("Bearer abc.def.ghi").unwrap(), "abc.def.ghi");
        assert!(service.extract_bearer_token("abc.def.ghi").is_err());
        assert!(service.extract_bearer_token("Bearer ").is_err());
        assert!(service.extract_bearer_token("Bearer null").is_err());
    }

    #[test]
    fn test_claims_match_detects_record_drift() {
        let service = TokenService::new(&test_config());
        let user = test_user();

        let token = service.generate_token(&user).unwrap();
        let claims = service.verify_token(&token).unwrap();

        assert!(TokenService::claims_match(&user, &claims));

        // 발급 이후 이름이 바뀐 레코드는 더 이상 일치하지 않음
        let mut drifted = user.clone();
        drifted.name = "Lee".to_string();
        assert!(!TokenService::claims_match(&drifted, &claims));

        let mut drifted = user.clone();
        drifted.email = None;
        assert!(!TokenService::claims_match(&drifted, &claims));

        let mut drifted = user;
        drifted.phone = Some(1099999999);
        assert!(!TokenService::claims_match(&drifted, &claims));
    }
}
