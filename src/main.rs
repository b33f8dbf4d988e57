//! 사용자 관리 서비스 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동하고 모든 서비스를 초기화합니다.
//! 데이터베이스 연결을 설정하고 `/api/usuarios` CRUD REST API를 제공합니다.

use std::sync::Arc;

use actix_web::{middleware, web, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};
use usuarios_service_backend::config::{Environment, ServerConfig};
use usuarios_service_backend::core::errors::{AppResult, ErrorContext};
use usuarios_service_backend::db::Database;
use usuarios_service_backend::middlewares::cors_policy;
use usuarios_service_backend::repositories::usuarios::{SeaOrmUsuarioRepository, UsuarioRepository};
use usuarios_service_backend::routes::configure_all_routes;
use usuarios_service_backend::services::usuarios::UsuarioService;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    info!("🚀 사용자 관리 서비스 시작중... ({:?})", Environment::current());

    let database = initialize_database().await.map_err(|e| {
        error!("{}", e);
        std::io::Error::other(e.to_string())
    })?;

    // 리포지토리 → 서비스 순서로 의존성 조립
    let repo: Arc<dyn UsuarioRepository> =
        Arc::new(SeaOrmUsuarioRepository::new(database.connection().clone()));
    let usuario_service = UsuarioService::new(repo);

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    start_http_server(database, usuario_service).await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// CORS, 로깅, 경로 정규화 미들웨어를 포함합니다.
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패 또는 서버 실행 오류
///
/// # Examples
///
/// ```rust,ignore
/// // 기본값으로 서버는 127.0.0.1:8080에서 실행됩니다
/// // Health check: http://127.0.0.1:8080/health
/// // API 엔드포인트: http://127.0.0.1:8080/api/usuarios
/// ```
async fn start_http_server(
    database: Database,
    usuario_service: UsuarioService,
) -> std::io::Result<()> {
    let bind_address = ServerConfig::bind_address();
    let workers = ServerConfig::workers();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);
    info!("📍 API: http://{}/api/usuarios", bind_address);

    let database = web::Data::new(database);
    let usuario_service = web::Data::new(usuario_service);

    HttpServer::new(move || {
        App::new()
            .app_data(usuario_service.clone())
            .app_data(database.clone())
            .wrap(cors_policy())
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            // 라우트 설정
            .configure(configure_all_routes)
    })
    .bind(bind_address)?
    .workers(workers) // 워커 스레드 수
    .run()
    .await
}

/// 환경별 설정 파일을 로드합니다
///
/// PROFILE 환경변수에 따라 적절한 .env 파일을 로드합니다.
///
/// # Environment Variables
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    info!("Current profile: {}", profile);

    match profile.as_str() {
        "prod" => match dotenv::from_filename(".env.prod") {
            Ok(_) => info!(".env.prod 파일 로드 됨"),
            Err(e) => error!(".env.prod 파일 로드 실패: {}", e),
        },
        "dev" => match dotenv::from_filename(".env.dev") {
            Ok(_) => info!(".env.dev 파일 로드 됨"),
            Err(e) => error!(".env.dev 파일 로드 실패: {}", e),
        },
        _ => {
            dotenv().ok();
            info!("기본 .env 파일 로드");
        }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// # Environment Variables
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=info,sqlx=warn")
///
/// ```bash
/// # SeaORM이 실행하는 SQL까지 보기
/// RUST_LOG=debug DATABASE_SQL_LOGGING=true cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=info,sqlx=warn"));
}

/// 데이터베이스 연결과 스키마를 준비합니다
///
/// 연결이나 테이블 생성에 실패하면 어느 단계에서 실패했는지를 담은
/// `AppError::InternalError`를 반환합니다.
async fn initialize_database() -> AppResult<Database> {
    info!("📡 데이터베이스 연결 중...");

    let database = Database::new().await.context("데이터베이스 연결 실패")?;
    database
        .sync_schema()
        .await
        .context("usuario 스키마 준비 실패")?;

    Ok(database)
}
