// ============================================================================
// PANELES POR ÁREA
// ============================================================================
// Solo navegación; el contenido (CRUD, gráficas, reportes) lo sirve el backend
// y queda fuera de esta capa.
// ============================================================================

use yew::prelude::*;
use yew_router::prelude::*;

use crate::hooks::use_auth_context;
use crate::models::Role;
use crate::router::{AdminRoute, ClientRoute, StaffRoute};

fn greeting(name: &str) -> Html {
    html! { <h2 class="dashboard-greeting">{format!("Bienvenido, {}", name)}</h2> }
}

#[function_component(AdminDashboard)]
pub fn admin_dashboard() -> Html {
    let auth = use_auth_context();
    let name = auth.identity().map(|i| i.label().to_string()).unwrap_or_default();

    html! {
        <section class="dashboard">
            {greeting(&name)}
            <nav class="dashboard-links">
                <Link<AdminRoute> to={AdminRoute::Empleados}>{"Empleados"}</Link<AdminRoute>>
                <Link<AdminRoute> to={AdminRoute::Horarios}>{"Horarios"}</Link<AdminRoute>>
                <Link<AdminRoute> to={AdminRoute::Reportes}>{"Reportes"}</Link<AdminRoute>>
            </nav>
        </section>
    }
}

#[function_component(StaffDashboard)]
pub fn staff_dashboard() -> Html {
    let auth = use_auth_context();
    let name = auth.identity().map(|i| i.label().to_string()).unwrap_or_default();
    let is_trainer = auth.identity().map(|i| i.has_role(Role::Entrenador)).unwrap_or(false);
    let is_receptionist = auth.identity().map(|i| i.has_role(Role::Recepcionista)).unwrap_or(false);

    html! {
        <section class="dashboard">
            {greeting(&name)}
            <nav class="dashboard-links">
                if is_receptionist {
                    <Link<StaffRoute> to={StaffRoute::Asistencias}>{"Asistencias"}</Link<StaffRoute>>
                    <Link<StaffRoute> to={StaffRoute::Ventas}>{"Ventas"}</Link<StaffRoute>>
                    <Link<StaffRoute> to={StaffRoute::Alquileres}>{"Alquileres"}</Link<StaffRoute>>
                }
                if is_trainer {
                    <Link<StaffRoute> to={StaffRoute::InscripcionesDesempeno}>
                        {"Inscripciones y desempeño"}
                    </Link<StaffRoute>>
                }
            </nav>
        </section>
    }
}

#[function_component(ClientDashboard)]
pub fn client_dashboard() -> Html {
    let auth = use_auth_context();
    let name = auth.identity().map(|i| i.label().to_string()).unwrap_or_default();

    html! {
        <section class="dashboard">
            {greeting(&name)}
            <nav class="dashboard-links">
                <Link<ClientRoute> to={ClientRoute::Membresia}>{"Mi membresía"}</Link<ClientRoute>>
                <Link<ClientRoute> to={ClientRoute::Asistencias}>{"Mis asistencias"}</Link<ClientRoute>>
            </nav>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct AreaPageProps {
    pub title: AttrValue,
}

/// Sección de un área; el contenido lo pintan las vistas de cada módulo
#[function_component(AreaPage)]
pub fn area_page(props: &AreaPageProps) -> Html {
    html! {
        <section class="area-page">
            <h2>{props.title.clone()}</h2>
            <div class="area-page-body"></div>
        </section>
    }
}
