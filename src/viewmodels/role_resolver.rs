// ============================================================================
// ROLE RESOLVER - Destino tras el login / la selección de rol
// ============================================================================
// Reglas en orden, gana la primera:
//   1. Multi-rol sin elección explícita      -> selección de rol
//   2. Rol efectivo cliente (sin ambigüedad)  -> panel de cliente
//   3. Rol efectivo de empleado               -> panel admin / staff
//   4. Nada encaja                            -> login (warning)
// ============================================================================

use crate::models::{primary_employee_role, Identity, Role, RoleChoice};
use crate::utils::{AREA_ADMIN, AREA_CLIENT, AREA_STAFF, PATH_LOGIN, PATH_ROLE_SELECTION};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    RoleSelection,
    AdminDashboard,
    StaffDashboard,
    ClientDashboard,
    Login,
}

impl Destination {
    pub fn path(&self) -> &'static str {
        match self {
            Self::RoleSelection => PATH_ROLE_SELECTION,
            Self::AdminDashboard => "/admin/dashboard",
            Self::StaffDashboard => "/staff/dashboard",
            Self::ClientDashboard => "/client/dashboard",
            Self::Login => PATH_LOGIN,
        }
    }

    /// Prefijo del área protegida a la que pertenece el destino
    pub fn area(&self) -> Option<&'static str> {
        match self {
            Self::AdminDashboard => Some(AREA_ADMIN),
            Self::StaffDashboard => Some(AREA_STAFF),
            Self::ClientDashboard => Some(AREA_CLIENT),
            Self::RoleSelection | Self::Login => None,
        }
    }

    /// Panel que corresponde a un rol de empleado. Un rol de empleado
    /// desconocido (solo señalado por el backend) cae en el panel de staff.
    pub fn for_employee_role(role: Option<Role>) -> Self {
        match role {
            Some(Role::Admin) => Self::AdminDashboard,
            _ => Self::StaffDashboard,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub destination: Destination,
    /// Rol que debe quedar activo al llegar al destino
    pub active_role: Option<Role>,
}

impl Resolution {
    fn to(destination: Destination, active_role: Option<Role>) -> Self {
        Self {
            destination,
            active_role,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EffectiveRole {
    Client,
    Employee(Option<Role>),
}

pub fn resolve(identity: &Identity, selection: Option<RoleChoice>) -> Resolution {
    if identity.has_multiple_roles() && selection.is_none() {
        return Resolution::to(Destination::RoleSelection, None);
    }

    let effective = match selection {
        Some(RoleChoice::Cliente) => EffectiveRole::Client,
        Some(RoleChoice::Empleado) => EffectiveRole::Employee(primary_employee_role(identity.roles())),
        None if identity.active_role().is_employee() => EffectiveRole::Employee(Some(identity.active_role())),
        None => EffectiveRole::Client,
    };
    let explicit = selection.is_some();

    match effective {
        EffectiveRole::Client
            if identity.has_role(Role::Cliente) && (explicit || !identity.has_employee_role()) =>
        {
            Resolution::to(Destination::ClientDashboard, Some(Role::Cliente))
        }
        EffectiveRole::Employee(role) if identity.has_employee_role() => {
            Resolution::to(Destination::for_employee_role(role), role)
        }
        _ => {
            log::warn!(
                "⚠️ Identidad inesperada del backend (roles {:?}, elección {:?}), vuelta al login",
                identity.roles(),
                selection
            );
            Resolution::to(Destination::Login, None)
        }
    }
}

/// Ruta a la que volver tras el login: la originalmente pedida, si cae dentro
/// del área elegida por el resolver.
pub fn return_path(destination: Destination, from: Option<&str>) -> Option<String> {
    let area = destination.area()?;
    let from = from?;
    let inside = from
        .strip_prefix(area)
        .map(|rest| rest.starts_with('/') && rest.len() > 1)
        .unwrap_or(false);
    inside.then(|| from.to_string())
}

/// Dónde navegar de verdad tras una resolución
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationTarget {
    pub path: String,
    /// Ruta original que debe seguir viajando en el estado del historial
    pub forward_from: Option<String>,
}

pub fn navigation_target(destination: Destination, from: Option<&str>) -> NavigationTarget {
    let path = return_path(destination, from).unwrap_or_else(|| destination.path().to_string());
    // Hasta que se elija rol no se sabe a qué área se vuelve
    let forward_from = match destination {
        Destination::RoleSelection => from.map(str::to_string),
        _ => None,
    };
    NavigationTarget { path, forward_from }
}
