use yew::prelude::*;

/// Solo listado (instructores ESTANDAR)
#[function_component(StandardListView)]
pub fn standard_list_view() -> Html {
    html! {
        <section class="trainer-view trainer-standard">
            <h2>{"Mis inscripciones"}</h2>
            <p>{"Listado de clientes inscritos en tus clases."}</p>
        </section>
    }
}
