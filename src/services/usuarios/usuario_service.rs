//! # 사용자 관리 서비스 구현
//!
//! 리포지토리 위에 얇게 올라가는 오케스트레이션 계층입니다.
//! 목록 조회, 생성, 삭제는 리포지토리에 그대로 위임하고,
//! 수정만 "조회 → 필드 병합 → 저장" 순서의 로직을 가집니다.
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │              UsuarioService              │
//! │  get_all  → find_all                     │
//! │  save     → save                         │
//! │  delete   → delete_by_id                 │
//! │  update   → find_by_id → merge → save    │
//! └──────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌──────────────────────────────────────────┐
//! │       dyn UsuarioRepository              │
//! └──────────────────────────────────────────┘
//! ```
//!
//! ## 동시성
//!
//! 수정은 원자적이지 않습니다. 같은 ID에 대한 동시 수정은 마지막 저장이 남습니다.

use std::sync::Arc;

use log::{info, warn};

use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::usuarios::Usuario;
use crate::repositories::usuarios::UsuarioRepository;

/// 사용자 관리 비즈니스 로직 서비스
///
/// 리포지토리 구현체는 생성자로 주입됩니다:
///
/// ```rust,ignore
/// let repo: Arc<dyn UsuarioRepository> = Arc::new(InMemoryUsuarioRepository::new());
/// let service = UsuarioService::new(repo);
/// ```
#[derive(Clone)]
pub struct UsuarioService {
    repo: Arc<dyn UsuarioRepository>,
}

impl UsuarioService {
    pub fn new(repo: Arc<dyn UsuarioRepository>) -> Self {
        Self { repo }
    }

    /// 모든 사용자 조회
    pub async fn get_all(&self) -> AppResult<Vec<Usuario>> {
        self.repo.find_all().await
    }

    /// 사용자 생성
    ///
    /// 검증 없이 저장소에 저장하고, ID가 부여된 레코드를 반환합니다.
    /// 요청에 담긴 `id`는 버리며, ID는 항상 저장소가 부여합니다.
    pub async fn save(&self, usuario: Usuario) -> AppResult<Usuario> {
        let created = self.repo.save(Usuario { id: None, ..usuario }).await?;

        info!("사용자 생성: id={:?}", created.id);
        Ok(created)
    }

    /// 사용자 삭제
    ///
    /// 존재 여부를 확인하지 않습니다. 없는 ID여도 성공합니다.
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        self.repo.delete_by_id(id).await?;

        info!("사용자 삭제: id={}", id);
        Ok(())
    }

    /// 사용자 수정
    ///
    /// 기존 레코드에 `nombreCompleto`, `email`, `telefono`를 덮어쓰고 저장합니다.
    /// 입력 레코드의 `id`는 무시되며 기존 ID가 유지됩니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(Usuario)` - 저장된 최신 레코드
    /// * `Err(AppError::NotFound)` - 해당 ID의 사용자가 없음 (메시지에 ID 포함)
    /// * `Err(AppError::DatabaseError)` - 저장소 오류
    pub async fn update(&self, id: i64, changes: Usuario) -> AppResult<Usuario> {
        let mut existing = match self.repo.find_by_id(id).await? {
            Some(existing) => existing,
            None => {
                warn!("수정 대상 사용자 없음: id={}", id);
                return Err(AppError::NotFound(format!("User with id {} not found", id)));
            }
        };

        existing.apply_update(changes);
        let updated = self.repo.save(existing).await?;

        info!("사용자 수정: id={}", id);
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::usuarios::InMemoryUsuarioRepository;

    fn service() -> (UsuarioService, InMemoryUsuarioRepository) {
        let repo = InMemoryUsuarioRepository::new();
        (UsuarioService::new(Arc::new(repo.clone())), repo)
    }

    #[actix_web::test]
    async fn test_save_then_get_all() {
        let (service, _) = service();

        let r1 = service
            .save(Usuario::new("Ana", "ana@example.com", "1"))
            .await
            .unwrap();
        let r2 = service
            .save(Usuario::new("Luis", "luis@example.com", "2"))
            .await
            .unwrap();

        let all = service.get_all().await.unwrap();
        assert!(all.contains(&r1));
        assert!(all.contains(&r2));
    }

    #[actix_web::test]
    async fn test_save_ignores_client_id() {
        let (service, repo) = service();
        let existing = service
            .save(Usuario::new("Ana", "ana@example.com", "1"))
            .await
            .unwrap();

        let created = service
            .save(Usuario {
                id: existing.id,
                ..Usuario::new("Luis", "luis@example.com", "2")
            })
            .await
            .unwrap();
        let other = service
            .save(Usuario {
                id: Some(77),
                ..Usuario::default()
            })
            .await
            .unwrap();

        assert_eq!(created.id, Some(2));
        assert_eq!(other.id, Some(3));
        assert!(repo.find_by_id(77).await.unwrap().is_none());
        assert_eq!(repo.find_by_id(1).await.unwrap(), Some(existing));
    }

    #[actix_web::test]
    async fn test_update_merges_fields_and_keeps_id() {
        let (service, repo) = service();
        let created = service
            .save(Usuario::new("Ana Pérez", "ana@example.com", "555-1234"))
            .await
            .unwrap();
        let id = created.id.unwrap();

        let updated = service
            .update(
                id,
                Usuario {
                    id: Some(500),
                    ..Usuario::new("Ana P.", "ana@example.com", "555-9999")
                },
            )
            .await
            .unwrap();

        assert_eq!(
            updated,
            Usuario {
                id: Some(id),
                ..Usuario::new("Ana P.", "ana@example.com", "555-9999")
            }
        );
        assert_eq!(repo.find_by_id(id).await.unwrap(), Some(updated));
        assert!(repo.find_by_id(500).await.unwrap().is_none());
    }

    #[actix_web::test]
    async fn test_update_missing_id_is_not_found() {
        let (service, repo) = service();

        let result = service.update(999, Usuario::default()).await;

        match result {
            Err(AppError::NotFound(msg)) => assert!(msg.contains("999")),
            other => panic!("expected NotFound, got {:?}", other),
        }
        assert!(repo.is_empty().await);
    }

    #[actix_web::test]
    async fn test_delete_twice_succeeds() {
        let (service, repo) = service();
        let created = service.save(Usuario::default()).await.unwrap();
        let id = created.id.unwrap();

        service.delete(id).await.unwrap();
        service.delete(id).await.unwrap();

        assert!(repo.find_by_id(id).await.unwrap().is_none());
    }
}
