// ============================================================================
// INSCRIPCIONES / DESEMPEÑO - La variante depende del tipo de instructor
// ============================================================================

mod premium_view;
mod standard_view;

use yew::prelude::*;

use crate::hooks::{use_trainer_subtype, TrainerSubtypeState};
use crate::viewmodels::TrainerVariant;
use crate::views::LoadingView;

pub use premium_view::PremiumManagementView;
pub use standard_view::StandardListView;

#[function_component(TrainerPerformanceView)]
pub fn trainer_performance_view() -> Html {
    let state = use_trainer_subtype();

    match state {
        TrainerSubtypeState::Loading => html! { <LoadingView /> },
        TrainerSubtypeState::Failed(message) => html! {
            <div class="inline-error" role="alert">
                {format!("No se pudo cargar tu perfil de instructor: {}", message)}
            </div>
        },
        TrainerSubtypeState::Ready(subtype) => match TrainerVariant::for_subtype(&subtype) {
            TrainerVariant::Management => html! { <PremiumManagementView /> },
            TrainerVariant::ListOnly => html! { <StandardListView /> },
            TrainerVariant::Denied { tipo } => {
                log::warn!("⚠️ Tipo de instructor sin vista: {:?}", tipo);
                html! {
                    <div class="permission-denied">
                        {"No tienes permisos para acceder a esta sección."}
                    </div>
                }
            }
        },
    }
}
