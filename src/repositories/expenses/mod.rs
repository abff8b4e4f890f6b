//! 배송비 리포지토리 모듈

pub mod expense_repo;
