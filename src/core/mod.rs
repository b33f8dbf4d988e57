//! # Core Module
//!
//! 서비스 전역에서 공유하는 핵심 기능을 제공하는 모듈입니다.
//!
//! ## 모듈 구성
//!
//! ### [`errors`] - 통합 에러 처리
//! - **AppError**: 애플리케이션 전역 에러 타입 정의
//! - **HTTP 통합**: Actix-Web ResponseError 구현
//! - **자동 변환**: SeaORM `DbErr` → `AppError::DatabaseError`
//!
//! ## 의존성 연결
//!
//! 서비스 로케이터나 전역 싱글톤은 사용하지 않습니다.
//! 각 계층은 생성자를 통해 하위 계층을 전달받습니다:
//!
//! ```rust,ignore
//! let database = Database::new().await?;
//! let repo: Arc<dyn UsuarioRepository> =
//!     Arc::new(SeaOrmUsuarioRepository::new(database.connection().clone()));
//! let service = web::Data::new(UsuarioService::new(repo));
//!
//! HttpServer::new(move || {
//!     App::new()
//!         .app_data(service.clone())
//!         .configure(configure_all_routes)
//! })
//! ```

pub mod errors;

pub use errors::*;
