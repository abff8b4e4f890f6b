//! # 사용자 HTTP 핸들러
//!
//! 사용자 리소스의 엔드포인트들입니다.
//!
//! | 메서드 | 경로 | 설명 |
//! |--------|------|------|
//! | `POST` | `/api/users/login-or-create` | 로그인 또는 신규 계정 생성 |
//! | `GET` | `/api/users` | 목록 조회 (페이징/검색, `pageSize` 별칭 허용) |
//! | `GET` | `/api/users/{id}` | ID 조회 |
//! | `PUT` | `/api/users/{id}` | 부분 수정 |
//! | `DELETE` | `/api/users/{id}` | 삭제 |

use actix_web::{delete, get, post, put, web, HttpResponse};
use validator::Validate;

use crate::domain::dto::users::request::{
    LoginCreateUserRequest, UpdateUserRequest, UserPageQuery,
};
use crate::domain::dto::users::response::{CreatedUserData, LoginData};
use crate::errors::AppError;
use crate::services::users::user_service::{LoginOutcome, UserService};
use crate::utils::response;

/// 로그인-또는-생성 결과를 성공 엔벨로프로 변환합니다.
///
/// `/api/generic`의 로그인 경로들도 같은 흐름을 공유합니다.
pub(crate) async fn respond_login_or_create(
    service: &UserService,
    request: LoginCreateUserRequest,
) -> Result<HttpResponse, AppError> {
    match service.login_or_create(request).await? {
        LoginOutcome::Created(user) => Ok(response::ok_response(
            "User created successfully",
            Some(CreatedUserData {
                created: true,
                user,
            }),
        )),
        LoginOutcome::LoggedIn { token, user } => Ok(response::ok_response(
            "Login successful",
            Some(LoginData { token, user }),
        )),
    }
}

/// 로그인 또는 신규 계정 생성
///
/// 필수 필드(`user_phone`, `user_password`)가 없으면 필드 이름을 담아
/// 400으로 응답합니다. 잘못된 비밀번호는 시도 횟수와 무관하게 401입니다.
#[post("/login-or-create")]
pub async fn login_or_create(
    service: web::Data<UserService>,
    payload: web::Json<LoginCreateUserRequest>,
) -> Result<HttpResponse, AppError> {
    respond_login_or_create(&service, payload.into_inner()).await
}

/// 사용자 목록 조회
///
/// `?page=1&limit=10&searchTerm=kim` 형태이며, `pageSize`도
/// `limit`의 별칭으로 받습니다.
#[get("")]
pub async fn list_users(
    service: web::Data<UserService>,
    query: web::Query<UserPageQuery>,
) -> Result<HttpResponse, AppError> {
    query
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let (users, total) = service.list_users(&query).await?;

    Ok(response::paginated_response(
        users,
        query.page,
        query.effective_limit(),
        total,
        "Success",
    ))
}

/// ID로 사용자 조회
#[get("/{id}")]
pub async fn get_user(
    service: web::Data<UserService>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let user = service.get_user_by_id(&id).await?;

    Ok(response::ok_response("Success", Some(user)))
}

/// 사용자 부분 수정
#[put("/{id}")]
pub async fn update_user(
    service: web::Data<UserService>,
    id: web::Path<String>,
    payload: web::Json<UpdateUserRequest>,
) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let user = service.update_user(&id, payload.into_inner()).await?;

    Ok(response::ok_response("User updated", Some(user)))
}

/// 사용자 삭제
#[delete("/{id}")]
pub async fn delete_user(
    service: web::Data<UserService>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    service.delete_user(&id).await?;

    Ok(response::deleted_response("User deleted"))
}
