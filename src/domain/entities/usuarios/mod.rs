//! Usuarios Entity Module
//!
//! 사용자 도메인의 엔티티를 정의하는 모듈입니다.
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::entities::usuarios::Usuario;
//!
//! let usuario = Usuario::new("Ana Pérez", "ana@example.com", "555-1234");
//! assert!(usuario.id.is_none()); // 저장 시 부여됨
//! ```

pub mod usuario;

pub use usuario::Usuario;
