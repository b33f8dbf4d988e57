//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//! ActixWeb 프레임워크를 기반으로 REST 동사를 서비스 호출에 매핑합니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! HTTP Layer Architecture
//! ┌─────────────────────────────────────────────┐
//!   Client (Browser, API Client)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (이 모듈) - HTTP 엔드포인트 처리         ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - 비즈니스 로직                        ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Repositories - 데이터 접근                     ← Repository Layer
//! ├─────────────────────────────────────────────┤
//!   Entities - 도메인 모델                         ← Domain Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 의존성 전달
//!
//! 핸들러는 서비스를 전역에서 꺼내지 않고 `web::Data<UsuarioService>`로 받습니다.
//! 서비스는 애플리케이션 시작 시 `App::app_data`로 한 번 등록됩니다.
//!
//! ```rust,ignore
//! #[put("/{id}")]
//! pub async fn update(
//!     service: web::Data<UsuarioService>,
//!     id: web::Path<i64>,
//!     payload: web::Json<Usuario>,
//! ) -> Result<HttpResponse, AppError> {
//!     let updated = service.update(id.into_inner(), payload.into_inner()).await?;
//!     Ok(HttpResponse::Ok().json(updated))
//! }
//! ```
//!
//! ## 에러 처리
//!
//! 핸들러는 `Result<HttpResponse, AppError>`를 반환하며,
//! `AppError`의 `ResponseError` 구현이 상태 코드와 JSON 본문을 결정합니다.
//!
//! ## 모듈 구성
//!
//! - **`usuarios`**: 사용자 CRUD 엔드포인트 (`/api/usuarios`)
//! - **`health`**: 헬스체크 엔드포인트 (`/health`)

pub mod health;
pub mod usuarios;
