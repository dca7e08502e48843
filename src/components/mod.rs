pub mod route_guard;
pub mod session_header;
pub mod area_layout;

pub use route_guard::RouteGuard;
pub use session_header::SessionHeader;
pub use area_layout::AreaLayout;
