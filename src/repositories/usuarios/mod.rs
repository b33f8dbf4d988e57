//! 사용자 데이터 액세스 계층
//!
//! [`UsuarioRepository`] trait은 저장소가 제공해야 하는 연산을 정확히 네 가지로 한정합니다.
//!
//! | 연산 | 동작 |
//! |------|------|
//! | `find_all` | 저장된 모든 사용자 (페이징 없음) |
//! | `find_by_id` | 있으면 `Some`, 없으면 `None` (에러 아님) |
//! | `save` | ID 없으면 삽입 후 ID 부여, ID 있으면 해당 레코드 교체 |
//! | `delete_by_id` | 있으면 삭제, 없어도 성공 (멱등) |
//!
//! 구현체:
//! - [`SeaOrmUsuarioRepository`](usuario_repo::SeaOrmUsuarioRepository) - 관계형 테이블
//! - [`InMemoryUsuarioRepository`](in_memory::InMemoryUsuarioRepository) - 개발/테스트용

use async_trait::async_trait;

use crate::core::errors::AppResult;
use crate::domain::entities::usuarios::Usuario;

pub mod entity;
pub mod in_memory;
pub mod usuario_repo;

pub use in_memory::InMemoryUsuarioRepository;
pub use usuario_repo::SeaOrmUsuarioRepository;

/// 사용자 영속성 게이트웨이
///
/// 구현체는 호출 단위의 원자성만 보장하며, 호출 간 직렬화나
/// 낙관적 동시성 제어는 하지 않습니다.
#[async_trait]
pub trait UsuarioRepository: Send + Sync {
    /// 저장된 모든 사용자를 반환합니다.
    async fn find_all(&self) -> AppResult<Vec<Usuario>>;

    /// ID로 사용자를 조회합니다.
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Usuario>>;

    /// 사용자를 삽입하거나 교체하고, ID가 채워진 레코드를 반환합니다.
    async fn save(&self, usuario: Usuario) -> AppResult<Usuario>;

    /// ID로 사용자를 삭제합니다. 존재하지 않아도 에러가 아닙니다.
    async fn delete_by_id(&self, id: i64) -> AppResult<()>;
}
