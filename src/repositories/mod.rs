//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 서비스 계층은 구체 타입이 아닌 리포지토리 trait에만 의존하며,
//! 구현체는 애플리케이션 시작 시 생성자로 주입됩니다.
//!
//! # Features
//!
//! - `UsuarioRepository` trait: ID 기반 CRUD 네 가지 연산
//! - SeaORM 기반 관계형 저장소 구현
//! - 개발/테스트용 인메모리 구현
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::repositories::usuarios::{SeaOrmUsuarioRepository, UsuarioRepository};
//!
//! let repo: Arc<dyn UsuarioRepository> =
//!     Arc::new(SeaOrmUsuarioRepository::new(database.connection().clone()));
//! let all = repo.find_all().await?;
//! ```

pub mod usuarios;
