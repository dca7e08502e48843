// ============================================================================
// ROUTER - Rutas públicas y las tres áreas protegidas
// ============================================================================
// /login, /role-selection, /unauthorized     públicas
// /admin/*   guard {ADMIN}
// /staff/*   guard {RECEPCIONISTA, ENTRENADOR}
// /client/*  guard {CLIENTE}
// /          -> /login ; cualquier otra -> not found
// ============================================================================

use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{AreaLayout, RouteGuard};
use crate::viewmodels::GuardRule;
use crate::views::{
    AdminDashboard, AreaPage, ClientDashboard, LoginView, NotFoundView, RoleSelectionView,
    StaffDashboard, TrainerPerformanceView, UnauthorizedView,
};

/// Estado de navegación: ruta que se pidió antes de ir al login
#[derive(Clone, Debug, PartialEq)]
pub struct RedirectState {
    pub from: String,
}

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Root,
    #[at("/login")]
    Login,
    #[at("/role-selection")]
    RoleSelection,
    #[at("/unauthorized")]
    Unauthorized,
    #[at("/admin")]
    AdminRoot,
    #[at("/admin/*")]
    Admin,
    #[at("/staff")]
    StaffRoot,
    #[at("/staff/*")]
    Staff,
    #[at("/client")]
    ClientRoot,
    #[at("/client/*")]
    Client,
    #[not_found]
    #[at("/404")]
    NotFound,
}

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum AdminRoute {
    #[at("/admin/dashboard")]
    Dashboard,
    #[at("/admin/empleados")]
    Empleados,
    #[at("/admin/horarios")]
    Horarios,
    #[at("/admin/reportes")]
    Reportes,
    #[not_found]
    #[at("/admin/404")]
    NotFound,
}

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum StaffRoute {
    #[at("/staff/dashboard")]
    Dashboard,
    #[at("/staff/asistencias")]
    Asistencias,
    #[at("/staff/ventas")]
    Ventas,
    #[at("/staff/alquileres")]
    Alquileres,
    #[at("/staff/inscripciones/desempeno")]
    InscripcionesDesempeno,
    #[not_found]
    #[at("/staff/404")]
    NotFound,
}

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum ClientRoute {
    #[at("/client/dashboard")]
    Dashboard,
    #[at("/client/membresia")]
    Membresia,
    #[at("/client/asistencias")]
    Asistencias,
    #[not_found]
    #[at("/client/404")]
    NotFound,
}

pub fn switch(route: Route) -> Html {
    match route {
        Route::Root => html! { <Redirect<Route> to={Route::Login} /> },
        Route::Login => html! { <LoginView /> },
        Route::RoleSelection => html! { <RoleSelectionView /> },
        Route::Unauthorized => html! { <UnauthorizedView /> },
        Route::AdminRoot => html! { <Redirect<AdminRoute> to={AdminRoute::Dashboard} /> },
        Route::StaffRoot => html! { <Redirect<StaffRoute> to={StaffRoute::Dashboard} /> },
        Route::ClientRoot => html! { <Redirect<ClientRoute> to={ClientRoute::Dashboard} /> },
        Route::Admin => html! {
            <RouteGuard rule={GuardRule::admin_area()}>
                <AreaLayout>
                    <Switch<AdminRoute> render={switch_admin} />
                </AreaLayout>
            </RouteGuard>
        },
        Route::Staff => html! {
            <RouteGuard rule={GuardRule::staff_area()}>
                <AreaLayout>
                    <Switch<StaffRoute> render={switch_staff} />
                </AreaLayout>
            </RouteGuard>
        },
        Route::Client => html! {
            <RouteGuard rule={GuardRule::client_area()}>
                <AreaLayout>
                    <Switch<ClientRoute> render={switch_client} />
                </AreaLayout>
            </RouteGuard>
        },
        Route::NotFound => html! { <NotFoundView /> },
    }
}

fn switch_admin(route: AdminRoute) -> Html {
    match route {
        AdminRoute::Dashboard => html! { <AdminDashboard /> },
        AdminRoute::Empleados => html! { <AreaPage title="Empleados" /> },
        AdminRoute::Horarios => html! { <AreaPage title="Horarios" /> },
        AdminRoute::Reportes => html! { <AreaPage title="Reportes" /> },
        AdminRoute::NotFound => html! { <NotFoundView /> },
    }
}

fn switch_staff(route: StaffRoute) -> Html {
    match route {
        StaffRoute::Dashboard => html! { <StaffDashboard /> },
        StaffRoute::Asistencias => html! { <AreaPage title="Asistencias" /> },
        StaffRoute::Ventas => html! { <AreaPage title="Ventas" /> },
        StaffRoute::Alquileres => html! { <AreaPage title="Alquileres" /> },
        StaffRoute::InscripcionesDesempeno => html! { <TrainerPerformanceView /> },
        StaffRoute::NotFound => html! { <NotFoundView /> },
    }
}

fn switch_client(route: ClientRoute) -> Html {
    match route {
        ClientRoute::Dashboard => html! { <ClientDashboard /> },
        ClientRoute::Membresia => html! { <AreaPage title="Mi membresía" /> },
        ClientRoute::Asistencias => html! { <AreaPage title="Mis asistencias" /> },
        ClientRoute::NotFound => html! { <NotFoundView /> },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::viewmodels::Destination;

    #[test]
    fn public_paths_are_recognized() {
        assert_eq!(Route::recognize("/login"), Some(Route::Login));
        assert_eq!(Route::recognize("/role-selection"), Some(Route::RoleSelection));
        assert_eq!(Route::recognize("/unauthorized"), Some(Route::Unauthorized));
        assert_eq!(Route::recognize("/"), Some(Route::Root));
    }

    #[test]
    fn area_paths_hit_their_subtree() {
        assert_eq!(Route::recognize("/admin/empleados"), Some(Route::Admin));
        assert_eq!(Route::recognize("/staff/inscripciones/desempeno"), Some(Route::Staff));
        assert_eq!(Route::recognize("/client/membresia"), Some(Route::Client));
        assert_eq!(
            StaffRoute::recognize("/staff/inscripciones/desempeno"),
            Some(StaffRoute::InscripcionesDesempeno)
        );
    }

    #[test]
    fn resolver_destinations_are_real_routes() {
        assert_eq!(AdminRoute::recognize(Destination::AdminDashboard.path()), Some(AdminRoute::Dashboard));
        assert_eq!(StaffRoute::recognize(Destination::StaffDashboard.path()), Some(StaffRoute::Dashboard));
        assert_eq!(ClientRoute::recognize(Destination::ClientDashboard.path()), Some(ClientRoute::Dashboard));
        assert_eq!(Route::recognize(Destination::RoleSelection.path()), Some(Route::RoleSelection));
        assert_eq!(Route::recognize(Destination::Login.path()), Some(Route::Login));
    }
}
