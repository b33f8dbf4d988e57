//! # 사용자 리포지토리 구현 (SeaORM)
//!
//! `usuario` 테이블에 대한 데이터 액세스를 담당합니다.
//! PostgreSQL과 SQLite 모두 같은 코드로 동작합니다.
//!
//! ## 특징
//!
//! - **insert-or-replace 저장**: ID 유무에 따라 삽입/교체를 선택
//! - **멱등 삭제**: 없는 ID 삭제는 정상 처리
//! - **에러 변환**: 모든 `DbErr`는 `AppError::DatabaseError`로 전달

use async_trait::async_trait;
use log::{debug, info};
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, QueryOrder};

use super::entity;
use super::UsuarioRepository;
use crate::core::errors::AppResult;
use crate::domain::entities::usuarios::Usuario;

/// 관계형 저장소 기반 사용자 리포지토리
///
/// ## 사용 예제
///
/// ```rust,ignore
/// let repo = SeaOrmUsuarioRepository::new(database.connection().clone());
///
/// let created = repo.save(Usuario::new("Ana Pérez", "ana@example.com", "555-1234")).await?;
/// let found = repo.find_by_id(created.id.unwrap()).await?;
/// repo.delete_by_id(created.id.unwrap()).await?;
/// ```
#[derive(Clone, Debug)]
pub struct SeaOrmUsuarioRepository {
    db: DatabaseConnection,
}

impl SeaOrmUsuarioRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// 주어진 ID의 행을 교체하고, 행이 없으면 그 ID로 삽입합니다.
    async fn replace(&self, usuario: Usuario) -> AppResult<entity::Model> {
        let active_model: entity::ActiveModel = usuario.into();

        match active_model.clone().update(&self.db).await {
            Ok(model) => Ok(model),
            Err(DbErr::RecordNotUpdated) => {
                debug!("교체 대상 행 없음, 지정된 ID로 삽입");
                Ok(active_model.insert(&self.db).await?)
            }
            Err(e) => Err(e.into()),
        }
    }
}

#[async_trait]
impl UsuarioRepository for SeaOrmUsuarioRepository {
    async fn find_all(&self) -> AppResult<Vec<Usuario>> {
        let models = entity::Entity::find()
            .order_by_asc(entity::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Usuario::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Usuario>> {
        let model = entity::Entity::find_by_id(id).one(&self.db).await?;

        Ok(model.map(Usuario::from))
    }

    async fn save(&self, usuario: Usuario) -> AppResult<Usuario> {
        let model = if usuario.is_persisted() {
            self.replace(usuario).await?
        } else {
            let active_model: entity::ActiveModel = usuario.into();
            active_model.insert(&self.db).await?
        };

        info!("usuario 저장 완료: id={}", model.id);
        Ok(model.into())
    }

    async fn delete_by_id(&self, id: i64) -> AppResult<()> {
        let result = entity::Entity::delete_by_id(id).exec(&self.db).await?;

        debug!("usuario 삭제: id={}, rows_affected={}", id, result.rows_affected);
        Ok(())
    }
}
