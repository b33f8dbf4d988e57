//! # Application Error Handling System
//!
//! 사용자(Usuario) 서비스 전역에서 사용하는 에러 처리 시스템입니다.
//! `thiserror`로 에러 타입을 정의하고 `actix_web::ResponseError`를 구현하여
//! 핸들러에서 반환된 에러가 그대로 HTTP 응답으로 변환되도록 합니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 사용 시나리오 |
//! |----------|-------------|---------------|
//! | `NotFound` | 404 Not Found | 수정 대상 사용자 없음 |
//! | `DatabaseError` | 500 Internal Server Error | 저장소 오류 |
//! | `InternalError` | 500 Internal Server Error | 예상치 못한 오류 |
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use crate::core::errors::AppError;
//!
//! pub async fn update(&self, id: i64, changes: Usuario) -> AppResult<Usuario> {
//!     let mut existing = self.repo
//!         .find_by_id(id)
//!         .await?
//!         .ok_or_else(|| AppError::NotFound(format!("User with id {} not found", id)))?;
//!     // ...
//! }
//! ```

use actix_web::http::StatusCode;
use sea_orm::DbErr;
use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// 도메인 레벨에서 의미가 있는 에러는 `NotFound` 하나뿐이며,
/// 나머지는 인프라 계층의 실패를 감싸서 500 응답으로 전달합니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 데이터베이스 관련 에러
    ///
    /// 연결 실패, 쿼리 실행 실패 등 SeaORM 연산 중 발생한 오류입니다.
    ///
    /// ```rust,ignore
    /// Entity::find().all(db).await
    ///     .map_err(|e| AppError::DatabaseError(e.to_string()))?;
    /// ```
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 리소스 찾을 수 없음 에러 (404 Not Found)
    ///
    /// 메시지에는 조회에 사용한 ID가 포함됩니다.
    #[error("Not found: {0}")]
    NotFound(String),

    /// 내부 서버 에러
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 에러에 대응하는 HTTP 상태 코드
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::DatabaseError(_) | AppError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        self.status()
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 모든 에러는 `{"error": "..."}` 형태의 JSON 본문으로 응답됩니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        actix_web::HttpResponse::build(self.status())
            .json(serde_json::json!({
                "error": self.to_string()
            }))
    }
}

impl From<DbErr> for AppError {
    fn from(err: DbErr) -> Self {
        AppError::DatabaseError(err.to_string())
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;

    /// 클로저를 사용하여 지연 평가된 컨텍스트를 제공합니다.
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;
    use actix_web::body::to_bytes;

    #[test]
    fn test_not_found_error_response() {
        let error = AppError::NotFound("User with id 999 not found".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_database_error_response() {
        let error = AppError::DatabaseError("connection refused".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_internal_error_response() {
        let error = AppError::InternalError("Something went wrong".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[actix_web::test]
    async fn test_not_found_body_carries_message() {
        let error = AppError::NotFound("User with id 999 not found".to_string());
        let body = to_bytes(error.error_response().into_body()).await.unwrap();
        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();

        let message = value["error"].as_str().unwrap();
        assert!(message.contains("999"));
    }

    #[test]
    fn test_db_err_converts_to_database_error() {
        let error: AppError = DbErr::Custom("boom".to_string()).into();

        assert!(matches!(error, AppError::DatabaseError(ref msg) if msg.contains("boom")));
    }

    #[test]
    fn test_error_context_trait() {
        let result: Result<(), &str> = Err("original error");
        let app_result = result.context("Additional context");

        assert!(app_result.is_err());
        if let Err(AppError::InternalError(msg)) = app_result {
            assert!(msg.contains("Additional context"));
            assert!(msg.contains("original error"));
        } else {
            panic!("Expected InternalError");
        }
    }

    #[test]
    fn test_context_wraps_app_error_as_internal() {
        let result: AppResult<()> =
            Err(AppError::DatabaseError("connection refused".to_string()));
        let app_result = result.context("데이터베이스 연결 실패");

        match app_result {
            Err(AppError::InternalError(msg)) => {
                assert_eq!(
                    msg,
                    "데이터베이스 연결 실패: Database error: connection refused"
                );
            }
            other => panic!("Expected InternalError, got {:?}", other),
        }
    }

    #[test]
    fn test_error_with_context_is_lazy() {
        let result: Result<u8, &str> = Ok(7);
        let app_result = result.with_context(|| panic!("context must not be evaluated"));

        assert_eq!(app_result.unwrap(), 7);
    }
}
