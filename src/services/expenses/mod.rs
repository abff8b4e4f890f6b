//! 배송비 관리 서비스 모듈

pub mod expense_service;
