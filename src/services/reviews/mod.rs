//! 리뷰 조회 서비스 모듈

pub mod review_search_service;

pub use review_search_service::ReviewSearchService;
