// ============================================================================
// USE ROLE RESOLVER - Convierte resoluciones en navegación
// ============================================================================

use yew::prelude::*;
use yew_router::prelude::*;
use yew_router::AnyRoute;

use crate::hooks::use_auth::use_auth_context;
use crate::models::{Identity, RoleChoice};
use crate::router::{RedirectState, Route};
use crate::viewmodels::{self, navigation_target, Resolution};

#[derive(Clone, PartialEq)]
pub struct RoleResolverHandle {
    /// Resuelve y navega para una identidad recién autenticada
    pub resolve: Callback<(Identity, Option<RoleChoice>)>,
    /// Elección desde la pantalla de selección (o el cambio de rol de la cabecera)
    pub select_role: Callback<RoleChoice>,
}

#[hook]
pub fn use_role_resolver() -> RoleResolverHandle {
    let auth = use_auth_context();
    let navigator = use_navigator();
    let from = use_location()
        .and_then(|location| location.state::<RedirectState>())
        .map(|state| state.from.clone());

    let resolve = {
        let auth = auth.clone();
        let navigator = navigator.clone();
        Callback::from(move |(identity, selection): (Identity, Option<RoleChoice>)| {
            let resolution = viewmodels::resolve(&identity, selection);
            if let Some(role) = resolution.active_role {
                if role != identity.active_role() {
                    auth.set_active_role.emit(role);
                }
            }
            navigate(navigator.as_ref(), resolution, from.as_deref());
        })
    };

    let select_role = {
        let resolve = resolve.clone();
        Callback::from(move |choice: RoleChoice| {
            if let Some(identity) = auth.identity() {
                // Ya autenticado: cambio en el sitio, sin volver al backend
                resolve.emit((identity.clone(), Some(choice)));
            } else {
                log::warn!("⚠️ Selección de rol sin sesión, vuelta al login");
                if let Some(navigator) = &navigator {
                    navigator.push(&Route::Login);
                }
            }
        })
    };

    RoleResolverHandle {
        resolve,
        select_role,
    }
}

fn navigate(navigator: Option<&Navigator>, resolution: Resolution, from: Option<&str>) {
    let Some(navigator) = navigator else {
        log::error!("❌ Sin navegador para ir a {:?}", resolution.destination);
        return;
    };

    let target = navigation_target(resolution.destination, from);
    log::info!("🔄 Navegando a {}", target.path);

    let route = AnyRoute::new(target.path);
    match target.forward_from {
        Some(from) => navigator.push_with_state(&route, RedirectState { from }),
        None => navigator.push(&route),
    }
}
