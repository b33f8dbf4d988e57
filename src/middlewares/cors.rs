//! 프로세스 전역 CORS 정책
//!
//! 모든 경로에 동일하게 적용되는 고정 정책입니다.
//! 라우트별 재정의나 환경별 변경은 없습니다.

use actix_cors::Cors;

/// CORS에서 허용하는 HTTP 메서드
pub const ALLOWED_METHODS: [&str; 5] = ["GET", "POST", "PUT", "DELETE", "OPTIONS"];

/// CORS 설정을 구성합니다
///
/// # Policy
///
/// * Origin: 모두 허용 (요청의 `Origin` 값을 그대로 `Access-Control-Allow-Origin`으로 응답)
/// * Methods: `GET`, `POST`, `PUT`, `DELETE`, `OPTIONS`
/// * Headers: 모두 허용
/// * Credentials: 미지원
///
/// `HttpServer::new`의 팩토리 클로저 안에서 워커마다 호출됩니다.
pub fn cors_policy() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allowed_methods(ALLOWED_METHODS)
        .allow_any_header()
}
