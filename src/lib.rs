//! 사용자(Usuario) 관리 서비스 백엔드
//!
//! 단일 엔티티 `Usuario`에 대한 CRUD REST API를 제공하는 Rust 서비스입니다.
//! 브라우저 클라이언트가 어떤 Origin에서든 호출할 수 있도록 허용적인 CORS 정책을 적용합니다.
//!
//! # Features
//!
//! - **사용자 관리**: 목록 조회, 생성, 수정, 삭제
//! - **SeaORM**: 관계형 데이터베이스(PostgreSQL, SQLite) 영구 저장
//! - **명시적 의존성 주입**: 리포지토리 → 서비스 → `web::Data`
//! - **CORS**: 모든 Origin, 모든 헤더 허용
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 비즈니스 로직
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 데이터 액세스
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ SeaORM + RDBMS  │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use usuarios_service_backend::db::Database;
//! use usuarios_service_backend::repositories::usuarios::SeaOrmUsuarioRepository;
//! use usuarios_service_backend::services::usuarios::UsuarioService;
//!
//! let database = Database::new().await?;
//! database.sync_schema().await?;
//!
//! let repo = Arc::new(SeaOrmUsuarioRepository::new(database.connection().clone()));
//! let service = UsuarioService::new(repo);
//! let usuarios = service.get_all().await?;
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod routes;
pub mod handlers;
pub mod middlewares;
