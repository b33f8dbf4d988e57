use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::UsuarioRepository;
use crate::core::errors::AppResult;
use crate::domain::entities::usuarios::Usuario;

/// In-memory implementation of UsuarioRepository (for development/testing)
///
/// IDs start at 1 and are never reused, even after deletes.
#[derive(Debug, Clone)]
pub struct InMemoryUsuarioRepository {
    usuarios: Arc<RwLock<HashMap<i64, Usuario>>>,
    next_id: Arc<AtomicI64>,
}

impl Default for InMemoryUsuarioRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryUsuarioRepository {
    pub fn new() -> Self {
        Self {
            usuarios: Arc::new(RwLock::new(HashMap::new())),
            next_id: Arc::new(AtomicI64::new(1)),
        }
    }

    /// Number of stored records
    #[cfg(test)]
    pub async fn len(&self) -> usize {
        self.usuarios.read().await.len()
    }

    #[cfg(test)]
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl UsuarioRepository for InMemoryUsuarioRepository {
    async fn find_all(&self) -> AppResult<Vec<Usuario>> {
        let usuarios = self.usuarios.read().await;

        let mut result: Vec<Usuario> = usuarios.values().cloned().collect();
        result.sort_by_key(|u| u.id);

        Ok(result)
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Usuario>> {
        let usuarios = self.usuarios.read().await;
        Ok(usuarios.get(&id).cloned())
    }

    async fn save(&self, mut usuario: Usuario) -> AppResult<Usuario> {
        let mut usuarios = self.usuarios.write().await;

        let id = match usuario.id {
            Some(id) => {
                // keep the counter ahead of explicitly supplied ids
                self.next_id.fetch_max(id.saturating_add(1), Ordering::SeqCst);
                id
            }
            None => self.next_id.fetch_add(1, Ordering::SeqCst),
        };
        usuario.id = Some(id);
        usuarios.insert(id, usuario.clone());

        log::debug!("usuario 저장 (in-memory): id={}", id);
        Ok(usuario)
    }

    async fn delete_by_id(&self, id: i64) -> AppResult<()> {
        let mut usuarios = self.usuarios.write().await;
        usuarios.remove(&id);
        Ok(())
    }
}
