//! # Gracefully Ugly Backend Library
//!
//! 회원 가입/관리와 리뷰 조회를 제공하는 REST 백엔드의 라이브러리 크레이트입니다.
//!
//! ## 계층 구조
//!
//! ```text
//! routes → handlers → services → repositories → db
//!                        │
//!                        └── core::transaction (작업 단위 경계)
//! ```
//!
//! - [`core`] - 에러, 트랜잭션, 애플리케이션 상태
//! - [`config`] - 환경 변수 기반 설정
//! - [`db`] - MongoDB / 인메모리 저장소와 트랜잭션 매니저
//! - [`domain`] - 엔티티와 DTO
//! - [`repositories`] - 영속성 게이트웨이
//! - [`services`] - 조회/변경 서비스
//! - [`handlers`], [`routes`] - HTTP 계층
//! - [`utils`] - 문자열, 터미널 출력 유틸리티

pub mod core;
pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
