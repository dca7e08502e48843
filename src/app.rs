use yew::prelude::*;
use yew_router::prelude::*;

use crate::hooks::SessionContextProvider;
use crate::router::{switch, Route};

/// Raíz: router -> sesión inyectada -> rutas
#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <SessionContextProvider>
                <Switch<Route> render={switch} />
            </SessionContextProvider>
        </BrowserRouter>
    }
}
