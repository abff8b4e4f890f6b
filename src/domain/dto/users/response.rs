//! 사용자 응답 DTO

use mongodb::bson::DateTime;
use serde::Serialize;

use crate::domain::entities::user::User;

/// 공개 가능한 사용자 정보
///
/// 비밀번호 해시와 OTP는 변환 과정에서 제거됩니다.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let User {
            id,
            name,
            phone,
            email,
            role,
            address,
            created_at,
            updated_at,
            ..
        } = user;

        Self {
            id: id.map(|id| id.to_hex()).unwrap_or_default(),
            name,
            phone,
            email,
            role,
            address,
            created_at,
            updated_at,
        }
    }
}

/// 로그인 성공 응답 데이터
#[derive(Debug, Clone, Serialize)]
pub struct LoginData {
    pub token: String,
    pub user: UserResponse,
}

/// 신규 계정 생성 응답 데이터
#[derive(Debug, Clone, Serialize)]
pub struct CreatedUserData {
    pub created: bool,
    pub user: UserResponse,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_is_stripped() {
        let mut user = User::new_subscriber(
            Some("buyer@example.com".to_string()),
            Some(1012345678),
            "bcrypt-hash".to_string(),
        );
        user.otp = Some(123456);

        let response = UserResponse::from(user);
        let json = serde_json::to_value(&response).unwrap();

        assert!(json.get("password").is_none());
        assert!(json.get("otp").is_none());
        assert_eq!(json["email"], "buyer@example.com");
    }
}
