use yew::prelude::*;

/// Gestión de inscripciones y registro de desempeño (instructores PREMIUM)
#[function_component(PremiumManagementView)]
pub fn premium_management_view() -> Html {
    html! {
        <section class="trainer-view trainer-premium">
            <h2>{"Gestión de inscripciones"}</h2>
            <p>{"Inscribe clientes en tus clases y registra su desempeño."}</p>
            <div class="trainer-actions">
                <button class="btn btn-primary">{"Nueva inscripción"}</button>
                <button class="btn">{"Registrar desempeño"}</button>
            </div>
        </section>
    }
}
