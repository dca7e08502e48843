// ============================================================================
// ROUTE GUARD - Decisión de acceso por navegación
// ============================================================================
// LOADING -> (UNAUTHENTICATED | plataforma | FORBIDDEN | AUTHORIZED)
// Nunca falla: solo decide qué renderizar o a dónde redirigir.
// ============================================================================

use crate::models::Role;
use crate::stores::SessionStore;
use crate::utils::PATH_LOGIN;

/// Roles con acceso a la plataforma de staff/admin
pub const PLATFORM_ROLES: [Role; 3] = Role::EMPLOYEE;

#[derive(Debug, Clone, PartialEq)]
pub struct GuardRule {
    /// Vacío = cualquier identidad autenticada (y apta para la plataforma)
    pub allowed_roles: Vec<Role>,
    pub redirect_path: String,
    /// Exige algún rol de `PLATFORM_ROLES`
    pub requires_platform: bool,
}

impl GuardRule {
    pub fn new(allowed_roles: &[Role], requires_platform: bool) -> Self {
        Self {
            allowed_roles: allowed_roles.to_vec(),
            redirect_path: PATH_LOGIN.to_string(),
            requires_platform,
        }
    }

    pub fn admin_area() -> Self {
        Self::new(&[Role::Admin], true)
    }

    pub fn staff_area() -> Self {
        Self::new(&[Role::Recepcionista, Role::Entrenador], true)
    }

    pub fn client_area() -> Self {
        Self::new(&[Role::Cliente], false)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum GuardDecision {
    /// Sesión restaurándose: placeholder, sin decidir
    Loading,
    /// Sin sesión: ir a `redirect` recordando la ruta pedida
    RedirectToLogin { redirect: String, from: String },
    /// Identidad sin ningún rol de plataforma: logout + login
    ForceLogout,
    /// Autenticado pero sin rol permitido
    Forbidden,
    Allow,
}

pub fn evaluate(session: &SessionStore, rule: &GuardRule, requested_path: &str) -> GuardDecision {
    if session.loading {
        return GuardDecision::Loading;
    }

    let Some(identity) = session.identity.as_ref() else {
        return GuardDecision::RedirectToLogin {
            redirect: rule.redirect_path.clone(),
            from: requested_path.to_string(),
        };
    };

    if rule.requires_platform && !identity.has_any_role(&PLATFORM_ROLES) {
        log::warn!(
            "⚠️ {} no tiene acceso a la plataforma (roles {:?}), cerrando sesión",
            identity.label(),
            identity.roles()
        );
        return GuardDecision::ForceLogout;
    }

    if !rule.allowed_roles.is_empty() && !identity.has_any_role(&rule.allowed_roles) {
        log::info!("🚫 {} sin permiso para {}", identity.label(), requested_path);
        return GuardDecision::Forbidden;
    }

    GuardDecision::Allow
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Identity;

    fn session(roles: &[&str]) -> SessionStore {
        let roles: Vec<String> = roles.iter().map(|r| r.to_string()).collect();
        let mut store = SessionStore::default();
        store.restored(Some(Identity::new("1", None, "tok", &roles, None, None).unwrap()));
        store
    }

    #[test]
    fn loading_defers_the_decision() {
        let store = SessionStore::restoring();
        assert_eq!(evaluate(&store, &GuardRule::admin_area(), "/admin/dashboard"), GuardDecision::Loading);
    }

    #[test]
    fn unauthenticated_redirects_with_origin() {
        let store = SessionStore::logged_out();
        for (rule, path) in [
            (GuardRule::admin_area(), "/admin/empleados"),
            (GuardRule::staff_area(), "/staff/asistencias"),
            (GuardRule::client_area(), "/client/membresia"),
        ] {
            assert_eq!(
                evaluate(&store, &rule, path),
                GuardDecision::RedirectToLogin {
                    redirect: "/login".to_string(),
                    from: path.to_string(),
                }
            );
        }
    }

    #[test]
    fn identities_without_platform_role_are_logged_out() {
        let client = session(&["CLIENTE"]);
        assert_eq!(evaluate(&client, &GuardRule::admin_area(), "/admin/dashboard"), GuardDecision::ForceLogout);
        assert_eq!(evaluate(&client, &GuardRule::staff_area(), "/staff/dashboard"), GuardDecision::ForceLogout);
        assert_eq!(evaluate(&client, &GuardRule::client_area(), "/client/dashboard"), GuardDecision::Allow);
    }

    #[test]
    fn roles_outside_allowed_set_are_forbidden() {
        let trainer = session(&["role_entrenador"]);
        assert_eq!(evaluate(&trainer, &GuardRule::admin_area(), "/admin/dashboard"), GuardDecision::Forbidden);
        assert_eq!(evaluate(&trainer, &GuardRule::client_area(), "/client/dashboard"), GuardDecision::Forbidden);
        assert_eq!(
            evaluate(&trainer, &GuardRule::staff_area(), "/staff/inscripciones/desempeno"),
            GuardDecision::Allow
        );
    }

    #[test]
    fn any_held_role_is_enough() {
        let both = session(&["CLIENTE", "ADMIN"]);
        assert_eq!(evaluate(&both, &GuardRule::admin_area(), "/admin/dashboard"), GuardDecision::Allow);
        assert_eq!(evaluate(&both, &GuardRule::client_area(), "/client/dashboard"), GuardDecision::Allow);
        assert_eq!(evaluate(&both, &GuardRule::staff_area(), "/staff/dashboard"), GuardDecision::Forbidden);
    }

    #[test]
    fn empty_allowed_set_only_checks_platform() {
        let open = GuardRule::new(&[], true);
        assert_eq!(evaluate(&session(&["ENTRENADOR"]), &open, "/staff/x"), GuardDecision::Allow);
        assert_eq!(evaluate(&session(&["CLIENTE"]), &open, "/staff/x"), GuardDecision::ForceLogout);
    }
}
