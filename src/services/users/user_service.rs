//! # 사용자 관리 서비스 구현
//!
//! 사용자 계정의 생명주기를 관리하는 비즈니스 로직을 구현합니다.
//! 로그인-또는-생성, 목록 조회, 프로필 수정, 계정 삭제를 제공합니다.
//!
//! ## 로그인-또는-생성 흐름
//!
//! ```text
//! 요청(user_phone, user_password, user_email?)
//!   │
//!   ├─ 필수 필드 누락 ────────────► 400 "{field} is required"
//!   │
//!   ├─ 계정 없음 ─► bcrypt 해싱 ─► 생성 ─► 200 { created: true, user }
//!   │
//!   └─ 계정 있음 ─► bcrypt 검증
//!         ├─ 불일치 ─────────────► 401 "Wrong Credentials!"
//!         └─ 일치 ─► JWT 발급 ───► 200 { token, user }
//! ```
//!
//! 같은 자격으로 재호출해도 기존 계정을 다시 만들지 않습니다
//! (조회 후 분기하므로 멱등).

use std::sync::Arc;

use mongodb::bson::{DateTime, Document};

use crate::config::AppConfig;
use crate::domain::dto::users::request::{
    LoginCreateUserRequest, UpdateUserRequest, UserPageQuery,
};
use crate::domain::dto::users::response::UserResponse;
use crate::domain::entities::user::User;
use crate::errors::{AppError, ErrorContext};
use crate::repositories::users::user_repo::UserRepository;
use crate::services::auth::TokenService;

/// 로그인-또는-생성의 두 가지 결과
#[derive(Debug)]
pub enum LoginOutcome {
    /// 신규 계정이 만들어짐
    Created(UserResponse),
    /// 기존 계정으로 로그인 성공
    LoggedIn { token: String, user: UserResponse },
}

/// 사용자 관리 비즈니스 로직 서비스
pub struct UserService {
    user_repo: Arc<UserRepository>,
    token_service: Arc<TokenService>,
    bcrypt_cost: u32,
}

impl UserService {
    pub fn new(
        user_repo: Arc<UserRepository>,
        token_service: Arc<TokenService>,
        config: &AppConfig,
    ) -> Self {
        Self {
            user_repo,
            token_service,
            bcrypt_cost: config.bcrypt_cost,
        }
    }

    /// 로그인 또는 신규 계정 생성
    ///
    /// `user_email`이 있으면 이메일로, 없으면 전화번호로 기존 계정을
    /// 조회합니다. 계정이 없으면 기본 역할의 구독자 계정을 만들고,
    /// 있으면 비밀번호를 검증한 뒤 식별 클레임을 담은 토큰을 발급합니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(LoginOutcome)` - 생성 또는 로그인 결과
    /// * `Err(AppError::ValidationError)` - 필수 필드 누락
    /// * `Err(AppError::AuthenticationError)` - 비밀번호 불일치
    pub async fn login_or_create(
        &self,
        request: LoginCreateUserRequest,
    ) -> Result<LoginOutcome, AppError> {
        let phone = request
            .user_phone
            .ok_or_else(|| AppError::ValidationError("user_phone is required".to_string()))?;
        let password = request
            .user_password
            .filter(|p| !p.is_empty())
            .ok_or_else(|| AppError::ValidationError("user_password is required".to_string()))?;

        let existing = match request.user_email.as_deref() {
            Some(email) => self.user_repo.find_by_email(email).await?,
            None => self.user_repo.find_by_phone(phone).await?,
        };

        match existing {
            None => {
                let password_hash = bcrypt::hash(&password, self.bcrypt_cost)
                    .context("Failed to hash password")?;

                let created = self
                    .user_repo
                    .create(User::new_subscriber(
                        request.user_email,
                        Some(phone),
                        password_hash,
                    ))
                    .await?;

                log::info!("신규 구독자 계정 생성: {}", created.id_string().unwrap_or_default());

                Ok(LoginOutcome::Created(created.into()))
            }
            Some(user) => {
                let stored_hash = user.password.as_deref().ok_or_else(|| {
                    AppError::AuthenticationError("Wrong Credentials!".to_string())
                })?;

                let is_valid = bcrypt::verify(&password, stored_hash)
                    .context("Failed to verify password")?;

                if !is_valid {
                    return Err(AppError::AuthenticationError(
                        "Wrong Credentials!".to_string(),
                    ));
                }

                let token = self.token_service.generate_token(&user)?;

                log::info!("로그인 성공: {}", user.id_string().unwrap_or_default());

                Ok(LoginOutcome::LoggedIn {
                    token,
                    user: user.into(),
                })
            }
        }
    }

    /// 사용자 목록 조회 (페이징 + 검색)
    ///
    /// 반환된 페이지와 필터에 일치하는 총계를 함께 돌려줍니다.
    pub async fn list_users(
        &self,
        query: &UserPageQuery,
    ) -> Result<(Vec<UserResponse>, u64), AppError> {
        let term = query.search_term();
        let limit = query.effective_limit();

        let total = self.user_repo.count(term).await?;
        let users = self
            .user_repo
            .find_page(term, query.skip(), limit as i64)
            .await?;

        Ok((users.into_iter().map(UserResponse::from).collect(), total))
    }

    /// ID로 사용자 조회
    pub async fn get_user_by_id(&self, id: &str) -> Result<UserResponse, AppError> {
        let user = self
            .user_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        Ok(user.into())
    }

    /// 사용자 부분 수정
    ///
    /// 비밀번호가 포함된 경우 6자 미만이면 거부하고,
    /// 저장 전에 bcrypt로 재해싱합니다.
    pub async fn update_user(
        &self,
        id: &str,
        request: UpdateUserRequest,
    ) -> Result<UserResponse, AppError> {
        let mut update_doc = Document::new();

        if let Some(name) = request.name {
            update_doc.insert("name", name);
        }
        if let Some(phone) = request.phone {
            update_doc.insert("phone", phone);
        }
        if let Some(email) = request.email {
            update_doc.insert("email", email);
        }
        if let Some(role) = request.role {
            update_doc.insert("role", role);
        }
        if let Some(address) = request.address {
            update_doc.insert("address", address);
        }
        if let Some(password) = request.password {
            if password.len() < 6 {
                return Err(AppError::ValidationError(
                    "Password must be at least 6 characters".to_string(),
                ));
            }
            let password_hash =
                bcrypt::hash(&password, self.bcrypt_cost).context("Failed to hash password")?;
            update_doc.insert("password", password_hash);
        }

        update_doc.insert("updatedAt", DateTime::now());

        let updated = self
            .user_repo
            .update(id, update_doc)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        Ok(updated.into())
    }

    /// 사용자 삭제
    pub async fn delete_user(&self, id: &str) -> Result<(), AppError> {
        let deleted = self.user_repo.delete(id).await?;

        if !deleted {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        Ok(())
    }

    /// 인증 미들웨어용: 최신 레코드를 조회해 엔티티로 반환합니다.
    pub async fn find_entity_by_id(&self, id: &str) -> Result<Option<User>, AppError> {
        self.user_repo.find_by_id(id).await
    }
}
