// ============================================================================
// ROUTE GUARD - Envuelve cada área protegida
// ============================================================================

use yew::prelude::*;
use yew_router::prelude::*;
use yew_router::AnyRoute;

use crate::hooks::use_auth_context;
use crate::router::{RedirectState, Route};
use crate::viewmodels::{evaluate, GuardDecision, GuardRule};
use crate::views::LoadingView;

#[derive(Properties, PartialEq)]
pub struct RouteGuardProps {
    pub rule: GuardRule,
    pub children: Children,
}

#[function_component(RouteGuard)]
pub fn route_guard(props: &RouteGuardProps) -> Html {
    let auth = use_auth_context();
    let navigator = use_navigator();
    let requested = use_location()
        .map(|location| location.path().to_string())
        .unwrap_or_default();

    let decision = evaluate(&auth.session, &props.rule, &requested);

    {
        let logout = auth.logout.clone();
        use_effect_with(decision.clone(), move |decision| {
            if let Some(navigator) = navigator {
                match decision {
                    GuardDecision::RedirectToLogin { redirect, from } => {
                        log::info!("🔒 {} requiere sesión", from);
                        navigator.replace_with_state(
                            &AnyRoute::new(redirect.clone()),
                            RedirectState { from: from.clone() },
                        );
                    }
                    GuardDecision::ForceLogout => {
                        logout.emit(());
                        navigator.replace(&Route::Login);
                    }
                    GuardDecision::Forbidden => navigator.replace(&Route::Unauthorized),
                    GuardDecision::Loading | GuardDecision::Allow => {}
                }
            }
            || ()
        });
    }

    match decision {
        GuardDecision::Allow => html! { {props.children.clone()} },
        GuardDecision::Loading => html! { <LoadingView /> },
        // La redirección sale del efecto; no se renderiza nada protegido
        _ => html! {},
    }
}
