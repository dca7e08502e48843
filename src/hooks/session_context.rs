// ============================================================================
// SESSION CONTEXT - Compartir la sesión entre componentes
// ============================================================================
// Construye el AuthContext una sola vez y lo inyecta con ContextProvider.
// Va dentro del BrowserRouter para que los hooks puedan navegar.
// ============================================================================

use yew::prelude::*;

use crate::hooks::use_auth::{use_auth, AuthContext};

#[derive(Properties, PartialEq)]
pub struct SessionContextProviderProps {
    pub children: Children,
}

#[function_component(SessionContextProvider)]
pub fn session_context_provider(props: &SessionContextProviderProps) -> Html {
    let auth = use_auth();

    html! {
        <ContextProvider<AuthContext> context={auth}>
            {props.children.clone()}
        </ContextProvider<AuthContext>>
    }
}
