//! 인증 서비스 모듈
//!
//! JWT 토큰의 발급/검증과 토큰-레코드 일치성 검사를 제공합니다.

pub mod token_service;

pub use token_service::{TokenClaims, TokenService};
