// ============================================================================
// SESSION STORE - Estado de sesión compartido
// ============================================================================
// Única fuente de verdad sobre la identidad. Solo se modifica a través del
// AuthContext (hooks/use_auth.rs); las transiciones viven aquí para poder
// probarlas sin navegador.
// ============================================================================

use crate::error::AuthError;
use crate::models::{Identity, Role};

#[derive(Clone, Debug, PartialEq)]
pub struct SessionStore {
    pub identity: Option<Identity>,
    /// Restauración desde localStorage o login en curso
    pub loading: bool,
    pub error: Option<String>,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self {
            identity: None,
            loading: false,
            error: None,
        }
    }
}

impl SessionStore {
    /// Estado inicial de la app: restaurando sesión
    pub fn restoring() -> Self {
        Self {
            loading: true,
            ..Self::default()
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }

    pub fn restored(&mut self, identity: Option<Identity>) {
        self.identity = identity;
        self.loading = false;
    }

    pub fn begin_login(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// La identidad ya trae el token; las credenciales no se guardan
    pub fn login_succeeded(&mut self, identity: Identity) {
        self.identity = Some(identity);
        self.loading = false;
        self.error = None;
    }

    pub fn login_failed(&mut self, error: &AuthError) {
        self.loading = false;
        self.error = Some(error.user_message());
    }

    /// Cambia el rol activo de la identidad actual
    pub fn set_active_role(&mut self, role: Role) -> Result<(), String> {
        let identity = self
            .identity
            .as_mut()
            .ok_or_else(|| "No hay sesión activa".to_string())?;
        identity
            .set_active_role(role)
            .map_err(|role| format!("El usuario no tiene el rol {}", role))?;
        Ok(())
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    /// Estado tras logout: vacío, sin restos de la sesión anterior
    pub fn logged_out() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity(roles: &[&str]) -> Identity {
        let roles: Vec<String> = roles.iter().map(|r| r.to_string()).collect();
        Identity::new("1", None, "tok", &roles, None, None).unwrap()
    }

    #[test]
    fn restoring_starts_loading() {
        let mut store = SessionStore::restoring();
        assert!(store.loading);
        assert!(!store.is_authenticated());

        store.restored(Some(identity(&["ADMIN"])));
        assert!(!store.loading);
        assert!(store.is_authenticated());
    }

    #[test]
    fn multi_role_login_keeps_only_the_identity() {
        let mut store = SessionStore::default();
        store.begin_login();
        store.login_succeeded(identity(&["CLIENTE", "ENTRENADOR"]));

        // Nada más que la identidad: la contraseña no se queda en memoria
        let SessionStore { identity: kept, loading, error } = store.clone();
        assert!(kept.is_some());
        assert!(!loading);
        assert_eq!(error, None);

        // Elegir rol después no necesita volver a pedir la contraseña
        store.set_active_role(Role::Cliente).unwrap();
        store.set_active_role(Role::Entrenador).unwrap();
        assert_eq!(
            store.identity.as_ref().map(Identity::active_role),
            Some(Role::Entrenador)
        );
    }

    #[test]
    fn failed_login_exposes_message_until_cleared() {
        let mut store = SessionStore::default();
        store.begin_login();
        store.login_failed(&AuthError::InvalidCredentials);
        assert!(!store.loading);
        assert_eq!(store.error.as_deref(), Some("Usuario o contraseña incorrectos"));

        let before = store.clone();
        store.clear_error();
        assert!(store.error.is_none());
        assert_eq!(store.identity, before.identity);
        assert_eq!(store.loading, before.loading);
    }

    #[test]
    fn set_active_role_requires_session_and_membership() {
        let mut store = SessionStore::default();
        assert!(store.set_active_role(Role::Admin).is_err());

        store.restored(Some(identity(&["RECEPCIONISTA"])));
        assert!(store.set_active_role(Role::Cliente).is_err());
        assert_eq!(
            store.identity.as_ref().map(Identity::active_role),
            Some(Role::Recepcionista)
        );
    }

    #[test]
    fn logged_out_is_empty() {
        assert_eq!(SessionStore::logged_out(), SessionStore::default());
        assert!(!SessionStore::logged_out().is_authenticated());
    }
}
