//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 생성자로 리포지토리를 전달받으며, 핸들러에는 `web::Data`로 전달됩니다.
//!
//! # Features
//!
//! - 사용자 목록 조회, 생성, 삭제 (리포지토리 위임)
//! - 사용자 부분 수정 (조회 → 필드 병합 → 저장)
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::usuarios::UsuarioService;
//!
//! let service = UsuarioService::new(repo);
//! let usuarios = service.get_all().await?;
//! ```

pub mod usuarios;
