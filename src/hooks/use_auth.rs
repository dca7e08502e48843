// ============================================================================
// USE AUTH - AuthContext (capacidad de sesión inyectada)
// ============================================================================
// Lo crea SessionContextProvider debajo del router y lo consumen los
// componentes con use_auth_context(). Nadie más modifica el SessionStore.
// ============================================================================

use yew::prelude::*;

use crate::models::{Credentials, Identity, Role};
use crate::services::{auth_service, ApiClient, SessionPersistence};
use crate::stores::SessionStore;

/// Intento de login. `on_success` recibe la identidad ya guardada; la
/// navegación la decide quien llama (ver use_role_resolver).
pub struct LoginAttempt {
    pub credentials: Credentials,
    pub on_success: Callback<Identity>,
}

#[derive(Clone, PartialEq)]
pub struct AuthContext {
    pub session: UseStateHandle<SessionStore>,
    pub login: Callback<LoginAttempt>,
    pub logout: Callback<()>,
    pub clear_error: Callback<()>,
    pub set_active_role: Callback<Role>,
}

impl AuthContext {
    pub fn identity(&self) -> Option<&Identity> {
        self.session.identity.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.session.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.session.error.as_deref()
    }
}

#[hook]
pub fn use_auth() -> AuthContext {
    let session = use_state(SessionStore::restoring);

    // Restaurar sesión al montar
    {
        let session = session.clone();
        use_effect_with((), move |_| {
            let restored = SessionPersistence::browser().restore();
            if restored.is_none() {
                log::info!("ℹ️ Sin sesión guardada");
            }
            let mut current_state = (*session).clone();
            current_state.restored(restored);
            session.set(current_state);
            || ()
        });
    }

    let login = {
        let session = session.clone();
        Callback::from(move |attempt: LoginAttempt| {
            let session = session.clone();
            let mut current_state = (*session).clone();
            current_state.begin_login();
            session.set(current_state.clone());

            wasm_bindgen_futures::spawn_local(async move {
                let api = ApiClient::new();
                match auth_service::login(&api, &attempt.credentials).await {
                    Ok(identity) => {
                        if let Err(e) = SessionPersistence::browser().persist(&identity) {
                            log::error!("❌ No se pudo guardar la sesión: {}", e);
                        }
                        current_state.login_succeeded(identity.clone());
                        session.set(current_state);
                        attempt.on_success.emit(identity);
                    }
                    Err(e) => {
                        log::error!("❌ Login fallido: {}", e);
                        current_state.login_failed(&e);
                        session.set(current_state);
                    }
                }
            });
        })
    };

    let logout = {
        let session = session.clone();
        Callback::from(move |_| {
            if let Err(e) = SessionPersistence::browser().clear() {
                log::error!("❌ Error limpiando la sesión guardada: {}", e);
            }
            log::info!("👋 Logout");
            session.set(SessionStore::logged_out());
        })
    };

    let clear_error = {
        let session = session.clone();
        Callback::from(move |_| {
            let mut current_state = (*session).clone();
            current_state.clear_error();
            session.set(current_state);
        })
    };

    let set_active_role = {
        let session = session.clone();
        Callback::from(move |role: Role| {
            let mut current_state = (*session).clone();
            match current_state.set_active_role(role) {
                Ok(()) => {
                    if let Some(identity) = &current_state.identity {
                        if let Err(e) = SessionPersistence::browser().persist(identity) {
                            log::error!("❌ No se pudo guardar el rol activo: {}", e);
                        }
                    }
                    log::info!("🔄 Rol activo: {}", role);
                    session.set(current_state);
                }
                Err(e) => log::warn!("⚠️ {}", e),
            }
        })
    };

    AuthContext {
        session,
        login,
        logout,
        clear_error,
        set_active_role,
    }
}

/// AuthContext inyectado por SessionContextProvider
#[hook]
pub fn use_auth_context() -> AuthContext {
    use_context::<AuthContext>().expect("use_auth_context fuera de SessionContextProvider")
}
