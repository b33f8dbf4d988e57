//! 미들웨어 모듈
//!
//! ActixWeb 애플리케이션의 요청 처리 파이프라인에서 사용되는 미들웨어들을 제공합니다.
//! 횡단 관심사(Cross-cutting concerns)를 처리합니다.
//!
//! # 제공 미들웨어
//!
//! ### 1. CORS 정책 ([`cors::cors_policy`])
//! - 모든 Origin 허용 (요청 Origin을 그대로 응답)
//! - GET, POST, PUT, DELETE, OPTIONS 메서드 허용
//! - 모든 요청 헤더 허용
//! - 자격 증명(쿠키 등) 미지원
//!
//! # 사용 방법
//!
//! ```rust,ignore
//! use actix_web::{App, HttpServer};
//! use crate::middlewares::cors_policy;
//!
//! HttpServer::new(|| {
//!     App::new()
//!         .wrap(cors_policy()) // 모든 라우트에 적용
//!         .configure(configure_all_routes)
//! })
//! ```

pub mod cors;

pub use cors::cors_policy;
