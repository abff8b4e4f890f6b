//! 재고 관리 어드민 백엔드
//!
//! Rust 기반의 재고/배송비 관리 어드민 서비스입니다.
//! 사용자, 역할, 카테고리, 상품, 배송비 리소스에 대한 REST API를 제공하며,
//! JWT 토큰 기반 인증과 MongoDB 영구 저장을 사용합니다.
//!
//! # Features
//!
//! - **사용자 관리**: 로그인-또는-생성, 목록 조회(페이징/검색), 프로필 수정, 삭제
//! - **역할 관리**: Admin/Member/Viewer 역할과 권한 문자열 목록
//! - **카테고리/상품**: 슬러그 기반 조회, 카테고리별 상품 연결
//! - **배송비(Expense)**: 기록 시점에 파생 필드 자동 계산
//! - **에러 정규화**: 저장소 오류를 일관된 HTTP 에러 계약으로 변환
//! - **MongoDB**: 도큐먼트 단위 영구 저장
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 비즈니스 로직
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 데이터 액세스
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │     MongoDB     │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! 모든 컴포넌트는 기동 시점에 명시적으로 생성되어 `web::Data`로 주입됩니다.
//! 전역 가변 상태나 서비스 로케이터는 사용하지 않습니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use inventory_admin_backend::config::AppConfig;
//! use inventory_admin_backend::db::Database;
//! use inventory_admin_backend::services::users::user_service::UserService;
//!
//! let config = AppConfig::from_env();
//! let database = Arc::new(Database::new(&config).await?);
//! let user_repo = Arc::new(UserRepository::new(database, translator));
//! let user_service = UserService::new(user_repo, token_service, &config);
//! ```

pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod errors;
pub mod middlewares;
