// ============================================================================
// ROLES
// ============================================================================
// Los roles llegan del backend como strings ("ROLE_ADMIN", "cliente", ...).
// Se normalizan UNA vez al recibirlos; el resto del código usa `Role`.
// ============================================================================

use std::fmt;

use serde::{Deserialize, Serialize};

/// Prefijo que el backend puede anteponer a los roles
const ROLE_PREFIX: &str = "ROLE_";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Admin,
    Recepcionista,
    Entrenador,
    Cliente,
}

impl Role {
    pub const ALL: [Role; 4] = [Role::Admin, Role::Recepcionista, Role::Entrenador, Role::Cliente];

    /// Roles de empleado, en orden de prioridad
    pub const EMPLOYEE: [Role; 3] = [Role::Admin, Role::Recepcionista, Role::Entrenador];

    /// Normaliza un rol crudo del backend: recorta espacios, quita el prefijo
    /// `ROLE_` (sin distinguir mayúsculas) y compara sin distinguir mayúsculas.
    pub fn parse(raw: &str) -> Option<Self> {
        let upper = raw.trim().to_uppercase();
        let tag = upper.strip_prefix(ROLE_PREFIX).unwrap_or(&upper);
        match tag {
            "ADMIN" => Some(Self::Admin),
            "RECEPCIONISTA" => Some(Self::Recepcionista),
            "ENTRENADOR" => Some(Self::Entrenador),
            "CLIENTE" => Some(Self::Cliente),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "ADMIN",
            Self::Recepcionista => "RECEPCIONISTA",
            Self::Entrenador => "ENTRENADOR",
            Self::Cliente => "CLIENTE",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Admin => "Administrador",
            Self::Recepcionista => "Recepcionista",
            Self::Entrenador => "Entrenador",
            Self::Cliente => "Cliente",
        }
    }

    pub fn is_employee(&self) -> bool {
        !matches!(self, Self::Cliente)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normaliza la lista de roles del backend. Los desconocidos se descartan
/// (con warning) y los duplicados se eliminan conservando el orden.
pub fn normalize_roles<S: AsRef<str>>(raw: &[S]) -> Vec<Role> {
    let mut roles = Vec::with_capacity(raw.len());
    for value in raw {
        match Role::parse(value.as_ref()) {
            Some(role) if !roles.contains(&role) => roles.push(role),
            Some(_) => {}
            None => log::warn!("⚠️ Rol desconocido ignorado: {:?}", value.as_ref()),
        }
    }
    roles
}

/// Rol de empleado con más prioridad (Admin > Recepcionista > Entrenador)
pub fn primary_employee_role(roles: &[Role]) -> Option<Role> {
    Role::EMPLOYEE.into_iter().find(|role| roles.contains(role))
}

/// Elección en la pantalla de selección de rol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoleChoice {
    Empleado,
    Cliente,
}

impl RoleChoice {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Empleado => "Empleado",
            Self::Cliente => "Cliente",
        }
    }

    /// Elección que corresponde a un rol concreto
    pub fn for_role(role: Role) -> Self {
        if role.is_employee() {
            Self::Empleado
        } else {
            Self::Cliente
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_strips_prefix_and_case() {
        assert_eq!(Role::parse("ROLE_ADMIN"), Some(Role::Admin));
        assert_eq!(Role::parse("role_recepcionista"), Some(Role::Recepcionista));
        assert_eq!(Role::parse("  Entrenador "), Some(Role::Entrenador));
        assert_eq!(Role::parse("cliente"), Some(Role::Cliente));
        assert_eq!(Role::parse("NUTRICIONISTA"), None);
        assert_eq!(Role::parse(""), None);
    }

    #[test]
    fn parse_round_trips_canonical_tags() {
        for role in Role::ALL {
            assert_eq!(Role::parse(role.as_str()), Some(role));
        }
    }

    #[test]
    fn normalize_drops_unknown_and_duplicates() {
        let roles = normalize_roles(&["ROLE_CLIENTE", "cliente", "SOCIO", "RECEPCIONISTA"]);
        assert_eq!(roles, vec![Role::Cliente, Role::Recepcionista]);
    }

    #[test]
    fn primary_employee_role_uses_priority() {
        assert_eq!(
            primary_employee_role(&[Role::Entrenador, Role::Cliente, Role::Admin]),
            Some(Role::Admin)
        );
        assert_eq!(
            primary_employee_role(&[Role::Entrenador, Role::Recepcionista]),
            Some(Role::Recepcionista)
        );
        assert_eq!(primary_employee_role(&[Role::Cliente]), None);
    }

    #[test]
    fn role_serializes_as_backend_tag() {
        assert_eq!(serde_json::to_string(&Role::Recepcionista).unwrap(), "\"RECEPCIONISTA\"");
        assert_eq!(serde_json::to_string(&RoleChoice::Empleado).unwrap(), "\"empleado\"");
    }
}
