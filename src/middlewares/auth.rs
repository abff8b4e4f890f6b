//! 인증 가드
//!
//! `Authorization` 헤더의 Bearer 토큰을 검증하고, 데이터베이스의
//! 최신 레코드와 토큰 클레임의 일치성을 확인하는 추출기들입니다.
//!
//! ## 검증 순서
//!
//! 1. `Authorization` 헤더에서 Bearer 토큰 추출
//! 2. 서명 검증 후 만료 수동 검사
//! 3. 클레임의 `id`로 데이터베이스에서 최신 사용자 조회
//! 4. 저장된 name/email/phone이 클레임과 모두 일치하는지 확인
//!
//! 암호학적으로 유효하고 만료되지 않은 토큰이라도 레코드가 변경되어
//! 있으면 401로 거부됩니다. [`AdminUser`]는 여기에 역할 검사를 더해
//! 관리자가 아니면 403을 반환합니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! #[post("/add")]
//! pub async fn create_category(
//!     _user: AuthenticatedUser,
//!     payload: web::Json<CategoryRequest>,
//! ) -> Result<HttpResponse, AppError> {
//!     // 인증 실패 시 이 본문은 실행되지 않음
//! }
//! ```

use actix_web::{dev::Payload, web, FromRequest, HttpRequest};
use futures_util::future::LocalBoxFuture;

use crate::domain::entities::user::User;
use crate::errors::AppError;
use crate::services::auth::TokenService;
use crate::services::users::user_service::UserService;

/// 토큰-레코드 일치성 검사를 통과한 사용자
#[derive(Debug, Clone)]
pub struct AuthenticatedUser(pub User);

/// 관리자 역할까지 확인된 사용자
#[derive(Debug, Clone)]
pub struct AdminUser(pub User);

/// 요청에서 토큰을 꺼내 검증하고 최신 사용자 레코드를 반환합니다.
async fn authenticate(req: &HttpRequest) -> Result<User, AppError> {
    let token_service = req
        .app_data::<web::Data<TokenService>>()
        .ok_or_else(|| AppError::InternalError("TokenService is not configured".to_string()))?;
    let user_service = req
        .app_data::<web::Data<UserService>>()
        .ok_or_else(|| AppError::InternalError("UserService is not configured".to_string()))?;

    let auth_header = req
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| AppError::AuthenticationError("Unauthorized".to_string()))?;

    let token = token_service.extract_bearer_token(auth_header)?;
    let claims = token_service.verify_token(token)?;

    let user = user_service
        .find_entity_by_id(&claims.id)
        .await?
        .ok_or_else(|| AppError::AuthenticationError("Unauthorized".to_string()))?;

    // 토큰 발급 이후 레코드가 변경된 경우 거부
    if !TokenService::claims_match(&user, &claims) {
        log::warn!("토큰 클레임과 사용자 레코드 불일치: {}", claims.id);
        return Err(AppError::AuthenticationError("Unauthorized".to_string()));
    }

    log::debug!("인증 성공: 사용자 ID {}", claims.id);

    Ok(user)
}

impl FromRequest for AuthenticatedUser {
    type Error = AppError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let req = req.clone();

        Box::pin(async move { authenticate(&req).await.map(AuthenticatedUser) })
    }
}

impl FromRequest for AdminUser {
    type Error = AppError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let req = req.clone();

        Box::pin(async move {
            let user = authenticate(&req).await?;

            if !user.is_admin() {
                return Err(AppError::AuthorizationError(
                    "Admin resource. Access denied.".to_string(),
                ));
            }

            Ok(AdminUser(user))
        })
    }
}
