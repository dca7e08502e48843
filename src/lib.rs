// ============================================================================
// GIMNASIO WEB - FRONTEND (YEW + WASM)
// ============================================================================
// - Models: estructuras compartidas con el backend (roles, identidad)
// - Services: comunicación API y persistencia de la sesión
// - Stores: estado de sesión
// - ViewModels: lógica pura (resolver de roles, guard, variante de instructor)
// - Hooks: AuthContext y navegación
// - Views / Components: renderizado
// ============================================================================

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod hooks;
pub mod models;
pub mod router;
pub mod services;
pub mod stores;
pub mod utils;
pub mod viewmodels;
pub mod views;

pub use app::App;
pub use error::AuthError;
