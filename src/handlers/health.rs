//! 헬스체크 핸들러

use actix_web::{get, web, HttpResponse};
use serde_json::json;

use crate::db::Database;

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// 로드밸런서나 모니터링 시스템에서 서비스 상태를 확인하는 데 사용됩니다.
/// 요청마다 데이터베이스에 ping을 보내 저장소 연결 상태를 함께 보고합니다.
///
/// # Returns
///
/// * `HttpResponse` - 항상 200 OK, 서비스 상태 정보를 포함한 JSON 응답
///   - `status`: `"healthy"` 또는 데이터베이스 불통 시 `"degraded"`
///   - `service`: 서비스 이름
///   - `version`: 현재 버전
///   - `timestamp`: 응답 시각
///   - `database`: `"up"` 또는 `"down"`
///   - `features`: 사용 중인 기술 스택
///
/// # Examples
///
/// ```bash
/// curl http://localhost:8080/health
/// ```
///
/// Response:
/// ```json
/// {
///   "status": "healthy",
///   "service": "usuarios_service",
///   "version": "0.1.0",
///   "timestamp": "2023-01-01T00:00:00Z",
///   "database": "up",
///   "features": {
///     "database": "SeaORM",
///     "cors": "permissive"
///   }
/// }
/// ```
#[get("/health")]
pub async fn health_check(database: web::Data<Database>) -> HttpResponse {
    let database_up = database.ping().await;

    HttpResponse::Ok().json(json!({
        "status": if database_up { "healthy" } else { "degraded" },
        "service": "usuarios_service",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "database": if database_up { "up" } else { "down" },
        "features": {
            "database": "SeaORM",
            "cors": "permissive"
        }
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};
    use serde_json::Value;

    #[actix_web::test]
    async fn test_health_reports_database_up() {
        let database = Database::connect("sqlite::memory:", 1, false).await.unwrap();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(database))
                .service(health_check),
        )
        .await;

        let request = test::TestRequest::get().uri("/health").to_request();
        let body: Value = test::call_and_read_body_json(&app, request).await;

        assert_eq!(body["status"], "healthy");
        assert_eq!(body["database"], "up");
        assert_eq!(body["service"], "usuarios_service");
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
        assert!(body["timestamp"].is_string());
    }
}
