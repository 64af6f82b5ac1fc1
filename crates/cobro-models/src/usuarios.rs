//! Console users and their wire mapping.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::ids::UsuarioId;

/// An administrative user of the console. Roles are server-defined strings
/// (`"admin"`, `"capturista"`, ...); the console only displays them.
#[derive(Debug, Clone, PartialEq)]
pub struct Usuario {
    pub id: UsuarioId,
    pub nombre: String,
    pub email: String,
    pub rol: String,
    pub activo: bool,
}

/// Wire shape of a console user.
#[derive(Debug, Clone, Deserialize)]
pub struct UsuarioResponse {
    pub id: i64,
    pub nombre: String,
    pub email: String,
    pub rol: String,
    pub activo: bool,
}

impl From<UsuarioResponse> for Usuario {
    fn from(raw: UsuarioResponse) -> Self {
        Usuario {
            id: UsuarioId::new(raw.id),
            nombre: raw.nombre,
            email: raw.email,
            rol: raw.rol,
            activo: raw.activo,
        }
    }
}

/// Request body for creating a console user.
#[derive(Debug, Clone, Serialize, Validate)]
pub struct CreateUsuarioDto {
    #[validate(length(min = 1, max = 100))]
    pub nombre: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1, max = 50))]
    pub rol: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn maps_a_user() {
        let raw: UsuarioResponse = serde_json::from_value(json!({
            "id": 1,
            "nombre": "Laura Méndez",
            "email": "laura@colegio.edu.mx",
            "rol": "admin",
            "activo": true
        }))
        .unwrap();

        let usuario = Usuario::from(raw);
        assert_eq!(usuario.id, UsuarioId::new(1));
        assert_eq!(usuario.rol, "admin");
    }

    #[test]
    fn create_dto_validates_email() {
        let dto = CreateUsuarioDto {
            nombre: "Laura".to_string(),
            email: "not-an-email".to_string(),
            rol: "admin".to_string(),
        };
        let errors = dto.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("email"));
    }

    #[test]
    fn create_dto_accepts_valid_input() {
        let dto = CreateUsuarioDto {
            nombre: "Laura".to_string(),
            email: "laura@colegio.edu.mx".to_string(),
            rol: "capturista".to_string(),
        };
        assert!(dto.validate().is_ok());
    }
}
