//! 재고 관리 어드민 서비스 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동하고 모든 컴포넌트를 초기화합니다.
//! MongoDB 연결을 설정하고 JWT 인증 기반의 REST API를 제공합니다.

use std::sync::Arc;

use actix_cors::Cors;
use actix_governor::{Governor, GovernorConfigBuilder};
use actix_web::error::JsonPayloadError;
use actix_web::{middleware, web, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};

use inventory_admin_backend::config::AppConfig;
use inventory_admin_backend::db::Database;
use inventory_admin_backend::errors::{AppError, MongoErrorTranslator};
use inventory_admin_backend::repositories::categories::category_repo::CategoryRepository;
use inventory_admin_backend::repositories::expenses::expense_repo::ExpenseRepository;
use inventory_admin_backend::repositories::products::product_repo::ProductRepository;
use inventory_admin_backend::repositories::roles::role_repo::RoleRepository;
use inventory_admin_backend::repositories::users::user_repo::UserRepository;
use inventory_admin_backend::routes;
use inventory_admin_backend::services::auth::TokenService;
use inventory_admin_backend::services::categories::category_service::CategoryService;
use inventory_admin_backend::services::expenses::expense_service::ExpenseService;
use inventory_admin_backend::services::products::product_service::ProductService;
use inventory_admin_backend::services::roles::role_service::RoleService;
use inventory_admin_backend::services::users::user_service::UserService;

/// 기동 시점에 명시적으로 생성된 컴포넌트 묶음
///
/// `web::Data`는 내부적으로 `Arc`이므로 워커마다 저렴하게 복제됩니다.
#[derive(Clone)]
struct AppComponents {
    token_service: web::Data<TokenService>,
    user_service: web::Data<UserService>,
    role_service: web::Data<RoleService>,
    category_service: web::Data<CategoryService>,
    product_service: web::Data<ProductService>,
    expense_service: web::Data<ExpenseService>,
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    info!("🚀 재고 관리 어드민 서비스 시작중...");

    let config = AppConfig::from_env();

    // 데이터 스토어 초기화
    info!("📡 데이터베이스 연결 중...");
    let database = Arc::new(
        Database::new(&config)
            .await
            .expect("데이터베이스 연결 실패"),
    );

    // 리포지토리/서비스 명시적 생성 및 인덱스 준비
    let components = initialize_components(&config, database)
        .await
        .expect("컴포넌트 초기화 실패");

    info!("✅ 모든 컴포넌트가 성공적으로 초기화되었습니다!");

    // HTTP 서버 시작
    start_http_server(config, components).await
}

/// 리포지토리와 서비스를 생성하고 데이터베이스 인덱스를 준비합니다
///
/// 모든 의존성은 이 지점에서 명시적으로 연결됩니다.
/// 전역 레지스트리나 싱글톤은 사용하지 않습니다.
async fn initialize_components(
    config: &AppConfig,
    database: Arc<Database>,
) -> Result<AppComponents, AppError> {
    let translator = MongoErrorTranslator::new(config.environment);

    let user_repo = Arc::new(UserRepository::new(database.clone(), translator));
    let role_repo = Arc::new(RoleRepository::new(database.clone(), translator));
    let category_repo = Arc::new(CategoryRepository::new(database.clone(), translator));
    let product_repo = Arc::new(ProductRepository::new(database.clone(), translator));
    let expense_repo = Arc::new(ExpenseRepository::new(database, translator));

    // 유니크 제약(슬러그)과 조회 인덱스 준비
    user_repo.ensure_indexes().await?;
    category_repo.ensure_indexes().await?;
    product_repo.ensure_indexes().await?;

    let token_service = Arc::new(TokenService::new(config));
    let user_service = web::Data::new(UserService::new(
        user_repo,
        token_service.clone(),
        config,
    ));
    let role_service = web::Data::new(RoleService::new(role_repo));
    let category_service = web::Data::new(CategoryService::new(
        category_repo,
        product_repo.clone(),
    ));
    let product_service = web::Data::new(ProductService::new(product_repo));
    let expense_service = web::Data::new(ExpenseService::new(expense_repo));

    Ok(AppComponents {
        token_service: web::Data::from(token_service),
        user_service,
        role_service,
        category_service,
        product_service,
        expense_service,
    })
}

/// HTTP 서버를 구성하고 실행합니다
///
/// CORS, Rate Limiting, 요청 로깅, 경로 정규화 미들웨어를 포함합니다.
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(
    config: AppConfig,
    components: AppComponents,
) -> std::io::Result<()> {
    let port = config.port;

    info!("🌐 서버가 http://0.0.0.0:{} 에서 실행중입니다", port);
    info!("📍 Health check: http://127.0.0.1:{}/health", port);

    // Rate Limiting 설정
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(config.rate_limit.per_second)
        .burst_size(config.rate_limit.burst_size)
        .use_headers()
        .finish()
        .unwrap();

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        config.rate_limit.per_second, config.rate_limit.burst_size
    );

    HttpServer::new(move || {
        // CORS 설정
        let cors = configure_cors();

        App::new()
            // Rate Limiting 미들웨어 (가장 먼저 적용)
            .wrap(Governor::new(&governor_conf))
            // 기본 미들웨어들
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            // JSON 본문 제한 및 파싱 실패 정규화
            .app_data(json_config())
            // 명시적으로 생성된 컴포넌트 주입
            .app_data(components.token_service.clone())
            .app_data(components.user_service.clone())
            .app_data(components.role_service.clone())
            .app_data(components.category_service.clone())
            .app_data(components.product_service.clone())
            .app_data(components.expense_service.clone())
            // 라우트 설정
            .configure(routes::configure_all_routes)
            // 미등록 경로는 404 에러로 합성하여 같은 종결 지점으로
            .default_service(web::route().to(routes::not_found))
    })
    .bind(("0.0.0.0", port))?
    .workers(4) // 워커 스레드 수
    .run()
    .await
}

/// JSON 본문 설정을 구성합니다
///
/// 본문 크기를 2MB로 제한하고, 파싱 실패를 정규화된 에러로 변환하여
/// 실패 엔벨로프 계약을 유지합니다.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(2 * 1024 * 1024)
        .error_handler(|err, _req| {
            let app_error = match &err {
                JsonPayloadError::Overflow { .. }
                | JsonPayloadError::OverflowKnownLength { .. } => {
                    AppError::PayloadTooLargeError("Payload too large".to_string())
                }
                _ => AppError::ValidationError(format!("Invalid JSON payload: {}", err)),
            };

            app_error.into()
        })
}

/// 환경별 설정 파일을 로드합니다
///
/// PROFILE 환경변수에 따라 적절한 .env 파일을 로드합니다.
/// 개발환경과 운영환경을 구분하여 설정을 관리합니다.
///
/// # Environment Variables
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    match profile.as_str() {
        "prod" => match dotenv::from_filename(".env.prod") {
            Ok(_) => info!(".env.prod 파일 로드 됨"),
            Err(e) => error!(".env.prod 파일 로드 실패: {}", e),
        },
        "dev" => match dotenv::from_filename(".env.dev") {
            Ok(_) => info!(".env.dev 파일 로드 됨"),
            Err(e) => error!(".env.dev 파일 로드 실패: {}", e),
        },
        _ => {
            // 기본 .env 파일 로드
            dotenv().ok();
            info!("기본 .env 파일 로드");
        }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// 환경변수 RUST_LOG를 기반으로 로깅 레벨을 설정합니다.
/// 기본값은 info 레벨이며, actix_web은 debug 레벨로 설정됩니다.
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}

/// CORS 설정을 구성합니다
///
/// 어드민 프론트엔드와의 통신을 위해 모든 오리진의 요청을 허용합니다.
fn configure_cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allow_any_method()
        .allow_any_header()
        .max_age(3600)
}
