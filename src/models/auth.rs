use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};


/// Usuario y contraseña introducidos en el login
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Ambos campos son obligatorios
    pub fn is_complete(&self) -> bool {
        !self.username.trim().is_empty() && !self.password.is_empty()
    }
}

// La contraseña nunca sale en los logs
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

#[derive(Clone, PartialEq, Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl LoginRequest {
    pub fn new(credentials: &Credentials) -> Self {
        Self {
            username: credentials.username.trim().to_string(),
            password: credentials.password.clone(),
        }
    }
}

/// Respuesta de `POST /auth/login`
#[derive(Clone, PartialEq, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    #[serde(deserialize_with = "opaque_id")]
    pub id: String,
    #[serde(default, alias = "accessToken")]
    pub token: String,
    #[serde(default)]
    pub roles: Vec<String>,
    /// Algunos endpoints devuelven un único rol
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default, alias = "nombre", alias = "displayName")]
    pub username: Option<String>,
    #[serde(default)]
    pub has_employee_role: Option<bool>,
    #[serde(default)]
    pub has_multiple_roles: Option<bool>,
}

impl LoginResponse {
    /// Todos los roles crudos, incluido `role` si viene suelto
    pub fn raw_roles(&self) -> Vec<String> {
        let mut roles = self.roles.clone();
        if let Some(role) = &self.role {
            roles.push(role.clone());
        }
        roles
    }
}

/// Cuerpo de error del backend
#[derive(Clone, PartialEq, Deserialize, Debug, Default)]
pub struct ApiErrorBody {
    #[serde(default, alias = "error")]
    pub message: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
}

/// El id puede llegar como número o como string
pub(crate) fn opaque_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Number(i64),
        Text(String),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Number(n) => n.to_string(),
        RawId::Text(s) => s,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credentials_debug_hides_password() {
        let debug = format!("{:?}", Credentials::new("ana", "secreta"));
        assert!(debug.contains("ana"));
        assert!(!debug.contains("secreta"));
    }

    #[test]
    fn incomplete_credentials_are_detected() {
        assert!(Credentials::new("ana", "x").is_complete());
        assert!(!Credentials::new("   ", "x").is_complete());
        assert!(!Credentials::new("ana", "").is_complete());
    }

    #[test]
    fn login_response_accepts_numeric_id_and_aliases() {
        let json = r#"{"id": 42, "accessToken": "abc", "roles": ["ROLE_CLIENTE"], "role": "ENTRENADOR", "nombre": "Ana", "hasMultipleRoles": true}"#;
        let response: LoginResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.id, "42");
        assert_eq!(response.token, "abc");
        assert_eq!(response.username.as_deref(), Some("Ana"));
        assert_eq!(response.has_multiple_roles, Some(true));
        assert_eq!(response.raw_roles(), vec!["ROLE_CLIENTE".to_string(), "ENTRENADOR".to_string()]);
    }

    #[test]
    fn login_request_trims_username() {
        let credentials = Credentials::new(" ana ", "pw");
        let request = serde_json::to_value(LoginRequest::new(&credentials)).unwrap();
        assert_eq!(request, serde_json::json!({"username": "ana", "password": "pw"}));
    }
}
