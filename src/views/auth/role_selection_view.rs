use yew::prelude::*;
use yew_router::prelude::*;

use crate::hooks::{use_auth_context, use_role_resolver};
use crate::models::RoleChoice;
use crate::router::Route;

#[function_component(RoleSelectionView)]
pub fn role_selection_view() -> Html {
    let auth = use_auth_context();
    let resolver = use_role_resolver();

    if auth.identity().is_none() && !auth.is_loading() {
        return html! {
            <div class="role-selection">
                <p>{"Tu sesión no está activa."}</p>
                <Link<Route> to={Route::Login} classes="btn btn-primary">
                    {"Ir al login"}
                </Link<Route>>
            </div>
        };
    }

    let greeting = auth
        .identity()
        .map(|identity| format!("Hola, {}", identity.label()))
        .unwrap_or_else(|| "Hola".to_string());

    let option = |choice: RoleChoice, icon: &'static str, hint: &'static str| {
        let onclick = resolver.select_role.reform(move |_: MouseEvent| choice);
        html! {
            <button class="role-option" {onclick} disabled={auth.is_loading()}>
                <span class="role-icon">{icon}</span>
                <span class="role-name">{choice.label()}</span>
                <span class="role-hint">{hint}</span>
            </button>
        }
    };

    html! {
        <div class="role-selection">
            <h1>{greeting}</h1>
            <p>{"Tu cuenta tiene acceso como empleado y como cliente. ¿Cómo quieres entrar?"}</p>
            <div class="role-options">
                {option(RoleChoice::Empleado, "🧑‍💼", "Gestión del gimnasio")}
                {option(RoleChoice::Cliente, "🏃", "Mi membresía y asistencias")}
            </div>
        </div>
    }
}
