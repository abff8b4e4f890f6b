//! HTTP 미들웨어/가드 모듈
//!
//! 라우트 단위 인증 가드를 제공합니다. 원본 라우팅이 경로별로
//! 인증을 거는 구조이므로, actix에서는 핸들러 파라미터로 쓰는
//! 추출기(extractor) 형태로 표현합니다.

pub mod auth;

pub use auth::{AdminUser, AuthenticatedUser};
