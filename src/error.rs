// ============================================================================
// ERRORES DE AUTENTICACIÓN
// ============================================================================

use thiserror::Error;

/// Códigos estructurados que el backend puede devolver en `code`
const CODES_INVALID_CREDENTIALS: &[&str] = &["INVALID_CREDENTIALS", "BAD_CREDENTIALS", "USER_NOT_FOUND"];
const CODES_SESSION_EXPIRED: &[&str] = &["TOKEN_EXPIRED", "SESSION_EXPIRED", "INVALID_TOKEN"];

/// Palabras que delatan un fallo de credenciales cuando el backend solo manda texto
const CREDENTIAL_KEYWORDS: &[&str] = &[
    "credencial",
    "contraseña",
    "contrasena",
    "usuario",
    "credential",
    "password",
    "username",
    "bad credentials",
];

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AuthError {
    #[error("Credenciales inválidas")]
    InvalidCredentials,

    #[error("Sesión expirada")]
    SessionExpired,

    #[error("{0}")]
    Network(String),

    #[error("Error del servidor ({status}): {message}")]
    Server { status: u16, message: String },

    #[error("Respuesta inválida del servidor: {0}")]
    InvalidResponse(String),

    #[error("Error de almacenamiento: {0}")]
    Storage(String),
}

impl AuthError {
    /// Mensaje para mostrar al usuario
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidCredentials => "Usuario o contraseña incorrectos".to_string(),
            Self::SessionExpired => "Tu sesión ha expirado, inicia sesión de nuevo".to_string(),
            Self::Network(message) => format!("Error de red: {}", message),
            Self::Server { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }

    /// Clasifica un fallo de login.
    ///
    /// Orden: código estructurado del backend, luego HTTP 401, y por último
    /// la heurística sobre el texto del mensaje.
    pub fn classify_login_failure(status: u16, code: Option<&str>, message: &str) -> Self {
        if let Some(code) = code.map(|c| c.trim().to_ascii_uppercase()) {
            if CODES_INVALID_CREDENTIALS.contains(&code.as_str()) {
                return Self::InvalidCredentials;
            }
            if CODES_SESSION_EXPIRED.contains(&code.as_str()) {
                return Self::SessionExpired;
            }
        }

        if status == 401 || mentions_credentials(message) {
            return Self::InvalidCredentials;
        }

        let message = if message.trim().is_empty() {
            format!("HTTP {}", status)
        } else {
            message.to_string()
        };
        Self::Server { status, message }
    }

    /// Error en una llamada autenticada (token adjunto)
    pub fn from_authenticated_status(status: u16, message: &str) -> Self {
        match status {
            401 => Self::SessionExpired,
            _ => Self::Server {
                status,
                message: if message.trim().is_empty() {
                    format!("HTTP {}", status)
                } else {
                    message.to_string()
                },
            },
        }
    }

    pub fn is_session_expired(&self) -> bool {
        matches!(self, Self::SessionExpired)
    }
}

fn mentions_credentials(message: &str) -> bool {
    let message = message.to_lowercase();
    CREDENTIAL_KEYWORDS.iter().any(|keyword| message.contains(keyword))
}

impl From<gloo_net::Error> for AuthError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => Self::InvalidResponse(e.to_string()),
            other => Self::Network(other.to_string()),
        }
    }
}
