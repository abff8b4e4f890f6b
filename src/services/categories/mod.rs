//! 카테고리 관리 서비스 모듈

pub mod category_service;
