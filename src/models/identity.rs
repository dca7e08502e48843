// ============================================================================
// IDENTITY - Usuario autenticado
// ============================================================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::auth::LoginResponse;
use super::role::{normalize_roles, primary_employee_role, Role};
use crate::error::AuthError;

#[derive(Debug, Clone, PartialEq)]
pub struct Identity {
    pub id: String,
    pub display_name: Option<String>,
    pub token: String,
    roles: Vec<Role>,
    has_employee_role: bool,
    has_multiple_roles: bool,
    active_role: Role,
}

impl Identity {
    /// Construye la identidad a partir de datos crudos del backend.
    ///
    /// Los flags `has_employee_role` / `has_multiple_roles` que mande el backend
    /// se combinan (OR) con los derivados de la lista de roles.
    pub fn new(
        id: impl Into<String>,
        display_name: Option<String>,
        token: impl Into<String>,
        raw_roles: &[String],
        employee_flag: Option<bool>,
        multiple_flag: Option<bool>,
    ) -> Result<Self, AuthError> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(AuthError::InvalidResponse("la respuesta no incluye token".to_string()));
        }

        let roles = normalize_roles(raw_roles);
        if roles.is_empty() {
            return Err(AuthError::InvalidResponse(format!(
                "ningún rol reconocido en {:?}",
                raw_roles
            )));
        }

        let has_employee_role = roles.iter().any(Role::is_employee) || employee_flag.unwrap_or(false);
        let has_client_role = roles.contains(&Role::Cliente);
        let has_multiple_roles =
            (has_client_role && has_employee_role) || multiple_flag.unwrap_or(false);

        let active_role = primary_employee_role(&roles).unwrap_or(Role::Cliente);
        let active_role = if roles.contains(&active_role) { active_role } else { roles[0] };

        Ok(Self {
            id: id.into(),
            display_name: display_name.filter(|name| !name.trim().is_empty()),
            token,
            roles,
            has_employee_role,
            has_multiple_roles,
            active_role,
        })
    }

    pub fn from_login(response: LoginResponse) -> Result<Self, AuthError> {
        let raw_roles = response.raw_roles();
        Self::new(
            response.id,
            response.username,
            response.token,
            &raw_roles,
            response.has_employee_role,
            response.has_multiple_roles,
        )
    }

    pub fn roles(&self) -> &[Role] {
        &self.roles
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }

    pub fn has_any_role(&self, roles: &[Role]) -> bool {
        self.roles.iter().any(|role| roles.contains(role))
    }

    pub fn has_employee_role(&self) -> bool {
        self.has_employee_role
    }

    pub fn has_multiple_roles(&self) -> bool {
        self.has_multiple_roles
    }

    pub fn active_role(&self) -> Role {
        self.active_role
    }

    /// Cambia el rol activo. Solo se aceptan roles que la identidad posee.
    pub fn set_active_role(&mut self, role: Role) -> Result<(), Role> {
        if !self.has_role(role) {
            return Err(role);
        }
        self.active_role = role;
        Ok(())
    }

    /// Nombre para mostrar en la cabecera
    pub fn label(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.id)
    }

    pub fn to_stored(&self, saved_at: DateTime<Utc>) -> StoredIdentity {
        StoredIdentity {
            id: self.id.clone(),
            display_name: self.display_name.clone(),
            token: self.token.clone(),
            roles: self.roles.iter().map(|role| role.as_str().to_string()).collect(),
            has_employee_role: self.has_employee_role,
            has_multiple_roles: self.has_multiple_roles,
            active_role: self.active_role,
            saved_at,
        }
    }
}

/// Forma persistida en localStorage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredIdentity {
    pub id: String,
    #[serde(default)]
    pub display_name: Option<String>,
    pub token: String,
    pub roles: Vec<String>,
    #[serde(default)]
    pub has_employee_role: bool,
    #[serde(default)]
    pub has_multiple_roles: bool,
    pub active_role: Role,
    pub saved_at: DateTime<Utc>,
}

impl StoredIdentity {
    /// Reconstruye la identidad; los roles pasan otra vez por la normalización
    /// porque el almacenamiento también es una frontera de confianza.
    pub fn into_identity(self) -> Result<Identity, AuthError> {
        let mut identity = Identity::new(
            self.id,
            self.display_name,
            self.token,
            &self.roles,
            Some(self.has_employee_role),
            Some(self.has_multiple_roles),
        )?;
        // Un rol activo que ya no está en la lista se ignora
        let _ = identity.set_active_role(self.active_role);
        Ok(identity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity(roles: &[&str]) -> Identity {
        let roles: Vec<String> = roles.iter().map(|r| r.to_string()).collect();
        Identity::new("7", Some("Ana".into()), "tok", &roles, None, None).unwrap()
    }

    #[test]
    fn single_role_identity() {
        let admin = identity(&["ADMIN"]);
        assert_eq!(admin.active_role(), Role::Admin);
        assert!(admin.has_employee_role());
        assert!(!admin.has_multiple_roles());

        let client = identity(&["ROLE_CLIENTE"]);
        assert_eq!(client.active_role(), Role::Cliente);
        assert!(!client.has_employee_role());
        assert!(!client.has_multiple_roles());
    }

    #[test]
    fn client_plus_employee_is_multi_role() {
        let both = identity(&["CLIENTE", "RECEPCIONISTA"]);
        assert!(both.has_multiple_roles());
        assert!(both.has_employee_role());
        assert_eq!(both.active_role(), Role::Recepcionista);
    }

    #[test]
    fn two_employee_roles_are_not_ambiguous() {
        let staff = identity(&["ENTRENADOR", "RECEPCIONISTA"]);
        assert!(!staff.has_multiple_roles());
        assert_eq!(staff.active_role(), Role::Recepcionista);
    }

    #[test]
    fn backend_flags_are_combined() {
        let roles = vec!["CLIENTE".to_string()];
        let identity = Identity::new("1", None, "tok", &roles, Some(true), Some(true)).unwrap();
        assert!(identity.has_employee_role());
        assert!(identity.has_multiple_roles());
        assert_eq!(identity.active_role(), Role::Cliente);
    }

    #[test]
    fn rejects_missing_token_or_roles() {
        let roles = vec!["ADMIN".to_string()];
        assert!(matches!(
            Identity::new("1", None, " ", &roles, None, None),
            Err(AuthError::InvalidResponse(_))
        ));
        let unknown = vec!["SOCIO".to_string()];
        assert!(matches!(
            Identity::new("1", None, "tok", &unknown, None, None),
            Err(AuthError::InvalidResponse(_))
        ));
    }

    #[test]
    fn active_role_must_be_held() {
        let mut both = identity(&["CLIENTE", "ENTRENADOR"]);
        assert_eq!(both.set_active_role(Role::Admin), Err(Role::Admin));
        assert_eq!(both.active_role(), Role::Entrenador);
        assert_eq!(both.set_active_role(Role::Cliente), Ok(()));
        assert_eq!(both.active_role(), Role::Cliente);
    }

    #[test]
    fn label_falls_back_to_id() {
        let roles = vec!["ADMIN".to_string()];
        let anon = Identity::new("99", Some("  ".into()), "tok", &roles, None, None).unwrap();
        assert_eq!(anon.label(), "99");
        assert_eq!(identity(&["ADMIN"]).label(), "Ana");
    }

    #[test]
    fn stored_identity_restores_active_role() {
        let mut both = identity(&["CLIENTE", "ADMIN"]);
        both.set_active_role(Role::Cliente).unwrap();
        let stored = both.to_stored(Utc::now());
        assert_eq!(stored.roles, vec!["CLIENTE".to_string(), "ADMIN".to_string()]);
        assert_eq!(stored.into_identity().unwrap(), both);
    }
}
