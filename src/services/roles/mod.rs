//! 역할 관리 서비스 모듈

pub mod role_service;
