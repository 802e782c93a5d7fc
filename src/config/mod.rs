//! # Configuration Module
//!
//! 백엔드 서비스의 설정 관리를 담당하는 모듈입니다.
//! Spring Framework의 `@Configuration` 클래스와 유사한 역할을 수행하며,
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 실행 환경, 비밀번호 해싱, 저장소 백엔드 설정
//! - [`http_config`] - 서버 바인딩, 요청 제한, CORS 설정
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 프로필 (.env.dev / .env.prod 로드)
//! export PROFILE="dev"
//! export ENVIRONMENT="development"  # development, test, staging, production
//!
//! # 서버 설정
//! export HOST="0.0.0.0"
//! export PORT="8080"
//! export HTTP_WORKERS="4"
//!
//! # 저장소 설정
//! export STORAGE_BACKEND="mongodb"   # mongodb, memory
//! export MONGODB_URI="mongodb://localhost:27017/?replicaSet=rs0"
//! export DATABASE_NAME="gracefully_ugly_dev"
//!
//! # 보안 / 트래픽
//! export BCRYPT_COST="12"            # 4-15 범위
//! export RATE_LIMIT_PER_SECOND="100"
//! export RATE_LIMIT_BURST_SIZE="200"
//! export CORS_ALLOWED_ORIGINS="http://localhost:3000,http://localhost:8080"
//! ```
//!
//! ## Spring과의 비교
//!
//! | Spring | Rust (이 프로젝트) |
//! |--------|-------------------|
//! | `@Value("${property}")` | `env::var("PROPERTY")` |
//! | `@Profile("dev")` | `Environment::Development` |
//! | `application.yml` | `.env` 파일 |

pub mod data_config;
pub mod http_config;

pub use data_config::*;
pub use http_config::*;
