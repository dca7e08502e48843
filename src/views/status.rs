use yew::prelude::*;
use yew_router::prelude::*;

use crate::router::Route;

/// Placeholder no interactivo mientras se restaura la sesión
#[function_component(LoadingView)]
pub fn loading_view() -> Html {
    html! {
        <div class="loading-screen" aria-busy="true">
            <div class="spinner"></div>
            <p>{"Cargando..."}</p>
        </div>
    }
}

#[function_component(UnauthorizedView)]
pub fn unauthorized_view() -> Html {
    html! {
        <div class="status-screen">
            <h1>{"🚫 Acceso denegado"}</h1>
            <p>{"No tienes permiso para ver esta página."}</p>
            <Link<Route> to={Route::Login} classes="btn btn-primary">
                {"Volver al inicio"}
            </Link<Route>>
        </div>
    }
}

#[function_component(NotFoundView)]
pub fn not_found_view() -> Html {
    html! {
        <div class="status-screen">
            <h1>{"404"}</h1>
            <p>{"La página que buscas no existe."}</p>
            <Link<Route> to={Route::Login} classes="btn btn-primary">
                {"Volver al inicio"}
            </Link<Route>>
        </div>
    }
}
