//! 사용자 관리 서비스 모듈
//!
//! 사용자 생명주기와 관련된 비즈니스 로직을 담당합니다.
//! 입력값 검증은 하지 않으며, 유일한 도메인 규칙은 "존재하지 않는 사용자는 수정할 수 없다"입니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::usuarios::UsuarioService;
//!
//! let service = UsuarioService::new(repo);
//! let updated = service.update(1, changes).await?;
//! ```

pub mod usuario_service;

pub use usuario_service::UsuarioService;
