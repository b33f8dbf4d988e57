//! Usuario Entity Implementation
//!
//! 사용자 레코드의 도메인 표현입니다.
//! ID와 세 개의 스칼라 필드(이름, 이메일, 전화번호)로 구성됩니다.

use serde::{Deserialize, Serialize};

/// 사용자 엔티티
///
/// JSON 직렬화 시 필드명은 camelCase(`nombreCompleto`)를 사용합니다.
/// 세 스칼라 필드에는 필수 여부, 형식, 유일성 제약이 없으며 `null`도 허용됩니다.
///
/// ```json
/// {
///   "id": 1,
///   "nombreCompleto": "Ana Pérez",
///   "email": "ana@example.com",
///   "telefono": "555-1234"
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Usuario {
    /// 저장소가 부여하는 ID (생성 요청에서는 생략)
    ///
    /// 한 번 부여되면 변경되지 않습니다.
    pub id: Option<i64>,
    /// 전체 이름
    pub nombre_completo: Option<String>,
    /// 이메일
    pub email: Option<String>,
    /// 전화번호
    pub telefono: Option<String>,
}

impl Usuario {
    /// 아직 저장되지 않은 새 사용자 생성
    pub fn new(
        nombre_completo: impl Into<String>,
        email: impl Into<String>,
        telefono: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            nombre_completo: Some(nombre_completo.into()),
            email: Some(email.into()),
            telefono: Some(telefono.into()),
        }
    }

    /// 변경 내용의 스칼라 필드를 이 레코드에 덮어씁니다.
    ///
    /// `nombreCompleto`, `email`, `telefono` 세 필드를 그대로 복사하며
    /// (`None`도 그대로 복사됨), `id`는 변경하지 않습니다.
    pub fn apply_update(&mut self, changes: Usuario) {
        self.nombre_completo = changes.nombre_completo;
        self.email = changes.email;
        self.telefono = changes.telefono;
    }

    /// ID가 부여된 상태인지 확인
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_update_keeps_id() {
        let mut existing = Usuario {
            id: Some(1),
            ..Usuario::new("Ana Pérez", "ana@example.com", "555-1234")
        };
        let changes = Usuario {
            id: Some(42),
            ..Usuario::new("Ana P.", "ana@example.com", "555-9999")
        };

        existing.apply_update(changes);

        assert_eq!(existing.id, Some(1));
        assert_eq!(existing.nombre_completo.as_deref(), Some("Ana P."));
        assert_eq!(existing.email.as_deref(), Some("ana@example.com"));
        assert_eq!(existing.telefono.as_deref(), Some("555-9999"));
    }

    #[test]
    fn test_apply_update_copies_missing_fields_as_none() {
        let mut existing = Usuario {
            id: Some(3),
            ..Usuario::new("Luis", "luis@example.com", "555-0000")
        };

        existing.apply_update(Usuario {
            nombre_completo: Some("Luis G.".to_string()),
            ..Default::default()
        });

        assert_eq!(existing.nombre_completo.as_deref(), Some("Luis G."));
        assert_eq!(existing.email, None);
        assert_eq!(existing.telefono, None);
    }

    #[test]
    fn test_json_uses_camel_case() {
        let usuario = Usuario {
            id: Some(1),
            ..Usuario::new("Ana Pérez", "ana@example.com", "555-1234")
        };

        let value = serde_json::to_value(&usuario).unwrap();

        assert_eq!(value["id"], 1);
        assert_eq!(value["nombreCompleto"], "Ana Pérez");
        assert!(value.get("nombre_completo").is_none());
    }

    #[test]
    fn test_deserialize_without_id() {
        let usuario: Usuario = serde_json::from_str(
            r#"{"nombreCompleto":"Ana Pérez","email":"ana@example.com","telefono":"555-1234"}"#,
        )
        .unwrap();

        assert!(!usuario.is_persisted());
        assert_eq!(usuario.email.as_deref(), Some("ana@example.com"));
    }
}
