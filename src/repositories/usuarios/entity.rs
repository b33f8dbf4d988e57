use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::entity::prelude::*;

use crate::domain::entities::usuarios::Usuario;

/// SeaORM entity for the `usuario` table
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "usuario")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub nombre_completo: Option<String>,
    pub email: Option<String>,
    pub telefono: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Usuario {
    fn from(model: Model) -> Self {
        Self {
            id: Some(model.id),
            nombre_completo: model.nombre_completo,
            email: model.email,
            telefono: model.telefono,
        }
    }
}

// id 없으면 NotSet으로 두어 저장소가 부여하게 한다
impl From<Usuario> for ActiveModel {
    fn from(usuario: Usuario) -> Self {
        ActiveModel {
            id: usuario.id.map_or(NotSet, Set),
            nombre_completo: Set(usuario.nombre_completo),
            email: Set(usuario.email),
            telefono: Set(usuario.telefono),
        }
    }
}
