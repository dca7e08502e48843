use yew::prelude::*;
use yew_router::prelude::*;

use crate::hooks::{use_auth_context, use_role_resolver};
use crate::models::RoleChoice;
use crate::router::Route;

#[function_component(SessionHeader)]
pub fn session_header() -> Html {
    let auth = use_auth_context();
    let resolver = use_role_resolver();
    let navigator = use_navigator();

    let Some(identity) = auth.identity() else {
        return html! {};
    };

    let on_logout = {
        let logout = auth.logout.clone();
        Callback::from(move |_: MouseEvent| {
            logout.emit(());
            if let Some(navigator) = &navigator {
                navigator.push(&Route::Login);
            }
        })
    };

    // Solo para identidades cliente + empleado
    let switcher = if identity.has_multiple_roles() {
        let target = match RoleChoice::for_role(identity.active_role()) {
            RoleChoice::Empleado => RoleChoice::Cliente,
            RoleChoice::Cliente => RoleChoice::Empleado,
        };
        let onclick = resolver.select_role.reform(move |_: MouseEvent| target);
        html! {
            <button class="btn-switch-role" {onclick}>
                {format!("Entrar como {}", target.label().to_lowercase())}
            </button>
        }
    } else {
        html! {}
    };

    html! {
        <header class="app-header">
            <h1>{"Gimnasio"}</h1>
            <div class="session-info">
                <span class="user-name">{identity.label()}</span>
                <span class="user-role">{identity.active_role().label()}</span>
                {switcher}
                <button class="btn-logout" onclick={on_logout}>{"Cerrar sesión"}</button>
            </div>
        </header>
    }
}
