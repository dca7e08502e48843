// ============================================================================
// SESSION PERSISTENCE - Guardar / restaurar la identidad entre recargas
// ============================================================================
// Dos claves: la identidad serializada y el token en crudo. Ambas se escriben
// en login, se leen al arrancar y se borran en logout.
// ============================================================================

use chrono::{DateTime, Duration, Utc};

use crate::config::CONFIG;
use crate::error::AuthError;
use crate::models::{Identity, StoredIdentity};
use crate::utils::{BrowserStorage, SessionStorage, STORAGE_KEY_IDENTITY, STORAGE_KEY_TOKEN};

pub struct SessionPersistence<S: SessionStorage> {
    storage: S,
    max_age: Duration,
}

impl SessionPersistence<BrowserStorage> {
    /// localStorage con la antigüedad máxima configurada
    pub fn browser() -> Self {
        Self::new(BrowserStorage, CONFIG.session_max_age_hours)
    }
}

impl<S: SessionStorage> SessionPersistence<S> {
    pub fn new(storage: S, max_age_hours: i64) -> Self {
        Self {
            storage,
            max_age: Duration::hours(max_age_hours),
        }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn persist(&self, identity: &Identity) -> Result<(), AuthError> {
        self.persist_at(identity, Utc::now())
    }

    pub fn persist_at(&self, identity: &Identity, now: DateTime<Utc>) -> Result<(), AuthError> {
        let json = serde_json::to_string(&identity.to_stored(now))
            .map_err(|e| AuthError::Storage(format!("Error serializando identidad: {}", e)))?;
        self.storage.set(STORAGE_KEY_IDENTITY, &json)?;
        self.storage.set(STORAGE_KEY_TOKEN, &identity.token)?;
        log::debug!("💾 Sesión guardada para {}", identity.id);
        Ok(())
    }

    pub fn restore(&self) -> Option<Identity> {
        self.restore_at(Utc::now())
    }

    /// Lee la sesión guardada. Cualquier inconsistencia (clave suelta, JSON
    /// corrupto, token distinto, sesión caducada) limpia el almacenamiento y
    /// se trata como usuario no autenticado.
    pub fn restore_at(&self, now: DateTime<Utc>) -> Option<Identity> {
        let json = self.storage.get(STORAGE_KEY_IDENTITY);
        let token = self.storage.get(STORAGE_KEY_TOKEN);

        let (json, token) = match (json, token) {
            (None, None) => return None,
            (Some(json), Some(token)) => (json, token),
            _ => {
                log::warn!("⚠️ Sesión guardada incompleta, se descarta");
                self.discard();
                return None;
            }
        };

        let stored = match serde_json::from_str::<StoredIdentity>(&json) {
            Ok(stored) => stored,
            Err(e) => {
                log::warn!("⚠️ Sesión guardada ilegible: {}", e);
                self.discard();
                return None;
            }
        };

        if stored.token != token {
            log::warn!("⚠️ El token guardado no coincide con la identidad, se descarta");
            self.discard();
            return None;
        }

        if now.signed_duration_since(stored.saved_at) > self.max_age {
            log::info!("⏰ Sesión guardada caducada ({}), hay que iniciar sesión", stored.saved_at);
            self.discard();
            return None;
        }

        match stored.into_identity() {
            Ok(identity) => {
                log::info!("🔄 Sesión restaurada: {} ({})", identity.label(), identity.active_role());
                Some(identity)
            }
            Err(e) => {
                log::warn!("⚠️ Sesión guardada inválida: {}", e);
                self.discard();
                None
            }
        }
    }

    /// Borra ambas claves. Se puede llamar varias veces.
    pub fn clear(&self) -> Result<(), AuthError> {
        let identity = self.storage.remove(STORAGE_KEY_IDENTITY);
        let token = self.storage.remove(STORAGE_KEY_TOKEN);
        identity.and(token)
    }

    fn discard(&self) {
        if let Err(e) = self.clear() {
            log::error!("❌ No se pudo limpiar la sesión guardada: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;
    use crate::utils::MemoryStorage;

    fn persistence() -> SessionPersistence<MemoryStorage> {
        SessionPersistence::new(MemoryStorage::new(), 12)
    }

    fn identity(roles: &[&str]) -> Identity {
        let roles: Vec<String> = roles.iter().map(|r| r.to_string()).collect();
        Identity::new("5", Some("Luis".into()), "tok-5", &roles, None, None).unwrap()
    }

    #[test]
    fn persist_then_restore() {
        let persistence = persistence();
        let mut original = identity(&["CLIENTE", "ENTRENADOR"]);
        original.set_active_role(Role::Cliente).unwrap();

        persistence.persist(&original).unwrap();
        assert_eq!(persistence.storage().get(STORAGE_KEY_TOKEN).as_deref(), Some("tok-5"));
        assert_eq!(persistence.restore(), Some(original));
    }

    #[test]
    fn empty_storage_restores_nothing() {
        assert_eq!(persistence().restore(), None);
    }

    #[test]
    fn expired_session_is_cleared() {
        let persistence = persistence();
        let saved = Utc::now() - Duration::hours(13);
        persistence.persist_at(&identity(&["ADMIN"]), saved).unwrap();

        assert_eq!(persistence.restore(), None);
        assert!(persistence.storage().is_empty());
    }

    #[test]
    fn mismatched_token_is_rejected() {
        let persistence = persistence();
        persistence.persist(&identity(&["ADMIN"])).unwrap();
        persistence.storage().set(STORAGE_KEY_TOKEN, "otro").unwrap();

        assert_eq!(persistence.restore(), None);
        assert!(persistence.storage().is_empty());
    }

    #[test]
    fn corrupt_or_partial_data_is_cleared() {
        let persistence = persistence();
        persistence.storage().set(STORAGE_KEY_IDENTITY, "{no es json").unwrap();
        persistence.storage().set(STORAGE_KEY_TOKEN, "tok").unwrap();
        assert_eq!(persistence.restore(), None);
        assert!(persistence.storage().is_empty());

        persistence.storage().set(STORAGE_KEY_TOKEN, "tok").unwrap();
        assert_eq!(persistence.restore(), None);
        assert!(persistence.storage().is_empty());
    }

    #[test]
    fn stored_roles_are_normalized_again() {
        let persistence = persistence();
        let json = serde_json::json!({
            "id": "5",
            "token": "tok",
            "roles": ["role_admin", "SOCIO"],
            "activeRole": "ADMIN",
            "savedAt": Utc::now(),
        });
        persistence.storage().set(STORAGE_KEY_IDENTITY, &json.to_string()).unwrap();
        persistence.storage().set(STORAGE_KEY_TOKEN, "tok").unwrap();

        let restored = persistence.restore().unwrap();
        assert_eq!(restored.roles(), &[Role::Admin]);
    }

    #[test]
    fn clear_twice_is_safe() {
        let persistence = persistence();
        persistence.persist(&identity(&["ADMIN"])).unwrap();

        assert!(persistence.clear().is_ok());
        assert!(persistence.storage().is_empty());
        assert!(persistence.clear().is_ok());
        assert!(persistence.storage().is_empty());
    }
}
