//! API 라우트 설정 모듈
//!
//! RESTful API 엔드포인트들을 리소스별로 그룹화하여 제공합니다.
//! 헬스체크 엔드포인트와 미등록 경로용 404 핸들러를 포함합니다.
//!
//! # Route Groups
//!
//! | 프리픽스 | 리소스 |
//! |----------|--------|
//! | `/api/generic` | 로그인-또는-생성 (Rate Limiting 대상) |
//! | `/api/category` | 카테고리 (슬러그 기반) |
//! | `/api/product` | 상품 |
//! | `/api/users` | 사용자 |
//! | `/api/roles` | 역할 |
//! | `/api/expense` | 배송비 |
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//!
//! let app = App::new().configure(configure_all_routes);
//! ```

use actix_web::{web, HttpRequest, HttpResponse};
use serde_json::json;

use crate::errors::AppError;
use crate::handlers;

/// 모든 라우트를 설정합니다
///
/// 리소스별로 분할된 라우트들을 통합하여 애플리케이션에 등록합니다.
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // Health check endpoint
    cfg.service(health_check);

    // Feature-specific routes
    configure_generic_routes(cfg);
    configure_category_routes(cfg);
    configure_product_routes(cfg);
    configure_user_routes(cfg);
    configure_role_routes(cfg);
    configure_expense_routes(cfg);
}

/// 일반(generic) 인증 라우트
///
/// 네 경로 모두 동일한 로그인-또는-생성 흐름으로 디스패치됩니다.
fn configure_generic_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/generic")
            .service(handlers::generic::login_create_user)
            .service(handlers::generic::login)
            .service(handlers::generic::refresh)
            .service(handlers::generic::logout),
    );
}

/// 카테고리 라우트
///
/// 구체 경로(`/add`, `/get-all`)를 슬러그 패턴보다 먼저 등록합니다.
fn configure_category_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/category")
            .service(handlers::categories::create_category)
            .service(handlers::categories::list_categories)
            .service(handlers::categories::read_category)
            .service(handlers::categories::update_category)
            .service(handlers::categories::delete_category),
    );
}

/// 상품 라우트
fn configure_product_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/product")
            .service(handlers::products::create_product)
            .service(handlers::products::products_count)
            .service(handlers::products::list_products)
            .service(handlers::products::read_product)
            .service(handlers::products::update_product)
            .service(handlers::products::delete_product),
    );
}

/// 사용자 라우트
///
/// `/login-or-create`를 `/{id}` 패턴보다 먼저 등록합니다.
fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/users")
            .service(handlers::users::login_or_create)
            .service(handlers::users::list_users)
            .service(handlers::users::get_user)
            .service(handlers::users::update_user)
            .service(handlers::users::delete_user),
    );
}

/// 역할 라우트
fn configure_role_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/roles")
            .service(handlers::roles::create_role)
            .service(handlers::roles::list_roles)
            .service(handlers::roles::get_role)
            .service(handlers::roles::update_role)
            .service(handlers::roles::delete_role),
    );
}

/// 배송비 라우트
fn configure_expense_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/expense")
            .service(handlers::expenses::create_expense)
            .service(handlers::expenses::list_expenses)
            .service(handlers::expenses::get_expense)
            .service(handlers::expenses::update_expense)
            .service(handlers::expenses::delete_expense),
    );
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// 로드밸런서나 모니터링 시스템에서 서비스 상태를 확인하는 데 사용됩니다.
/// 엔벨로프 없이 상태 객체만 반환합니다.
///
/// # Examples
///
/// ```bash
/// curl http://localhost:7001/health
/// ```
///
/// Response:
/// ```json
/// { "status": "UP", "message": "Server is running smoothly!" }
/// ```
#[actix_web::get("/health")]
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "UP",
        "message": "Server is running smoothly!"
    }))
}

/// 어떤 라우트와도 일치하지 않은 요청을 404 에러로 합성합니다.
///
/// 합성된 에러는 다른 모든 에러와 같은 종결 지점(실패 엔벨로프)으로
/// 전달됩니다. `App::default_service`로 등록됩니다.
pub async fn not_found(req: HttpRequest) -> Result<HttpResponse, AppError> {
    Err(AppError::NotFound(format!(
        "Route {} not found",
        req.path()
    )))
}
