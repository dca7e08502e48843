// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// Cada request autenticada lleva `Authorization: Bearer <token>`.
// ============================================================================

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use crate::config::CONFIG;
use crate::error::AuthError;
use crate::models::{ApiErrorBody, EmployeeRecord, LoginRequest, LoginResponse};

#[derive(Clone, Debug, PartialEq)]
pub struct ApiClient {
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            base_url: CONFIG.backend_url.clone(),
            token: None,
        }
    }

    /// Cliente que adjunta el token de la sesión actual
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
            ..Self::new()
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub fn authorization_header(&self) -> Option<String> {
        self.token.as_ref().map(|token| format!("Bearer {}", token))
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match self.authorization_header() {
            Some(value) => builder.header("Authorization", &value),
            None => builder,
        }
    }

    /// `POST /auth/login`
    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, AuthError> {
        let url = self.url("auth/login");
        log::info!("🔐 Login de {}", request.username);

        let response = Request::post(&url)
            .json(request)?
            .send()
            .await?;

        if !response.ok() {
            let status = response.status();
            let body = read_error_body(response).await;
            return Err(AuthError::classify_login_failure(
                status,
                body.code.as_deref(),
                body.message.as_deref().unwrap_or_default(),
            ));
        }

        Ok(response.json::<LoginResponse>().await?)
    }

    /// `GET /employees/by-user/{id}`
    pub async fn employee_by_user(&self, user_id: &str) -> Result<EmployeeRecord, AuthError> {
        self.get_json(&format!("employees/by-user/{}", user_id)).await
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, AuthError> {
        let url = self.url(path);
        log::debug!("📡 GET {}", url);

        let response = self.authorize(Request::get(&url)).send().await?;
        if !response.ok() {
            let status = response.status();
            let body = read_error_body(response).await;
            return Err(AuthError::from_authenticated_status(
                status,
                body.message.as_deref().unwrap_or_default(),
            ));
        }

        Ok(response.json::<T>().await?)
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

/// El backend no siempre manda JSON en los errores
async fn read_error_body(response: Response) -> ApiErrorBody {
    let text = response.text().await.unwrap_or_default();
    serde_json::from_str::<ApiErrorBody>(&text).unwrap_or_else(|_| ApiErrorBody {
        message: Some(text.trim().to_string()).filter(|t| !t.is_empty()),
        code: None,
    })
}
