// ============================================================================
// AUTH SERVICE - Login contra el backend
// ============================================================================
// No navega ni toca el estado: devuelve la identidad (o el error ya
// clasificado) y el hook decide qué hacer.
// ============================================================================

use crate::error::AuthError;
use crate::models::{Credentials, Identity, LoginRequest, LoginResponse};
use crate::services::ApiClient;

/// Login. La elección de rol de un usuario multi-rol se hace después, sobre
/// la identidad ya autenticada.
pub async fn login(api: &ApiClient, credentials: &Credentials) -> Result<Identity, AuthError> {
    let request = LoginRequest::new(credentials);
    let response = api.login(&request).await?;
    identity_from_response(response)
}

pub fn identity_from_response(response: LoginResponse) -> Result<Identity, AuthError> {
    let identity = Identity::from_login(response)?;
    log::info!(
        "✅ Login correcto: {} (roles {:?}, multi-rol: {})",
        identity.label(),
        identity.roles(),
        identity.has_multiple_roles()
    );
    Ok(identity)
}
