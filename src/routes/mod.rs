//! API 라우트 설정 모듈
//!
//! RESTful API 엔드포인트들을 기능별로 그룹화하여 제공합니다.
//! 사용자 CRUD 라우트와 헬스체크 엔드포인트를 포함합니다.
//!
//! 핸들러가 사용하는 `web::Data<UsuarioService>`와 `web::Data<Database>`는
//! 이 모듈이 아니라 애플리케이션 조립 시점(`main`)에 등록됩니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//!
//! let app = App::new()
//!     .app_data(web::Data::new(usuario_service))
//!     .app_data(web::Data::new(database))
//!     .configure(configure_all_routes);
//! ```

use crate::handlers;
use actix_web::web;

/// 모든 라우트를 설정합니다
///
/// # Arguments
///
/// * `cfg` - Actix-web 서비스 설정 객체
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // Health check endpoint
    cfg.service(handlers::health::health_check);

    configure_usuario_routes(cfg);
}

/// 사용자 관련 라우트를 설정합니다
///
/// # Available Routes
///
/// - `GET /api/usuarios` - 사용자 목록 조회
/// - `POST /api/usuarios` - 사용자 생성
/// - `PUT /api/usuarios/{id}` - 사용자 수정
/// - `DELETE /api/usuarios/{id}` - 사용자 삭제
///
/// 모든 라우트는 인증 없이 접근 가능합니다.
///
/// # Examples
///
/// ```bash
/// curl -X PUT http://localhost:8080/api/usuarios/1 \
///   -H "Content-Type: application/json" \
///   -d '{"nombreCompleto":"Ana P.","email":"ana@example.com","telefono":"555-9999"}'
/// ```
pub fn configure_usuario_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/usuarios")
            .service(handlers::usuarios::get_all)
            .service(handlers::usuarios::create)
            .service(handlers::usuarios::update)
            .service(handlers::usuarios::delete_usuario),
    );
}
