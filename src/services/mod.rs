pub mod api_client;
pub mod auth_service;
pub mod session_persistence;

pub use api_client::ApiClient;
pub use session_persistence::SessionPersistence;
