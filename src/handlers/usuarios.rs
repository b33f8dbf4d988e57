//! # Usuario Management HTTP Handlers
//!
//! 사용자 관리와 관련된 HTTP 엔드포인트를 처리하는 핸들러 함수들입니다.
//!
//! ## RESTful API
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `GET` | `/api/usuarios` | 사용자 목록 조회 | 200 OK |
//! | `POST` | `/api/usuarios` | 새 사용자 생성 | 201 Created |
//! | `PUT` | `/api/usuarios/{id}` | 사용자 정보 수정 | 200 OK / 404 Not Found |
//! | `DELETE` | `/api/usuarios/{id}` | 사용자 삭제 | 204 No Content |
//!
//! 요청 본문 검증은 하지 않습니다. 필드가 빠지거나 `null`이어도 그대로 저장됩니다.

use actix_web::{delete, get, post, put, web, HttpResponse};

use crate::core::errors::AppError;
use crate::domain::entities::usuarios::Usuario;
use crate::services::usuarios::UsuarioService;

/// 사용자 목록 조회 핸들러
///
/// # 엔드포인트
///
/// `GET /api/usuarios`
///
/// # 응답
///
/// ## 성공 (200 OK)
/// ```json
/// [
///   { "id": 1, "nombreCompleto": "Ana Pérez", "email": "ana@example.com", "telefono": "555-1234" }
/// ]
/// ```
#[get("")]
pub async fn get_all(service: web::Data<UsuarioService>) -> Result<HttpResponse, AppError> {
    let usuarios = service.get_all().await?;

    Ok(HttpResponse::Ok().json(usuarios))
}

/// 사용자 생성 핸들러
///
/// # 엔드포인트
///
/// `POST /api/usuarios`
///
/// # 요청 본문
///
/// ```json
/// { "nombreCompleto": "Ana Pérez", "email": "ana@example.com", "telefono": "555-1234" }
/// ```
///
/// # 응답
///
/// ## 성공 (201 Created)
/// ```json
/// { "id": 1, "nombreCompleto": "Ana Pérez", "email": "ana@example.com", "telefono": "555-1234" }
/// ```
///
/// # 사용 예제
///
/// ```bash
/// curl -X POST http://localhost:8080/api/usuarios \
///   -H "Content-Type: application/json" \
///   -d '{"nombreCompleto":"Ana Pérez","email":"ana@example.com","telefono":"555-1234"}'
/// ```
#[post("")]
pub async fn create(
    service: web::Data<UsuarioService>,
    payload: web::Json<Usuario>,
) -> Result<HttpResponse, AppError> {
    let created = service.save(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(created))
}

/// 사용자 삭제 핸들러
///
/// 물리적 삭제(Hard Delete)입니다. 없는 ID를 삭제해도 204로 응답합니다.
///
/// # 엔드포인트
///
/// `DELETE /api/usuarios/{id}`
#[delete("/{id}")]
pub async fn delete_usuario(
    service: web::Data<UsuarioService>,
    id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    service.delete(id.into_inner()).await?;

    Ok(HttpResponse::NoContent().finish())
}

/// 사용자 수정 핸들러
///
/// 기존 사용자의 `nombreCompleto`, `email`, `telefono`를 요청 본문의 값으로 교체합니다.
/// 본문의 `id`는 무시됩니다.
///
/// # 엔드포인트
///
/// `PUT /api/usuarios/{id}`
///
/// # 응답
///
/// ## 성공 (200 OK)
/// ```json
/// { "id": 1, "nombreCompleto": "Ana P.", "email": "ana@example.com", "telefono": "555-9999" }
/// ```
///
/// ## 사용자 없음 (404 Not Found)
/// ```json
/// { "error": "Not found: User with id 999 not found" }
/// ```
#[put("/{id}")]
pub async fn update(
    service: web::Data<UsuarioService>,
    id: web::Path<i64>,
    payload: web::Json<Usuario>,
) -> Result<HttpResponse, AppError> {
    let updated = service.update(id.into_inner(), payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(updated))
}
