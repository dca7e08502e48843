pub mod auth;
pub mod status;
pub mod dashboards;
pub mod trainer;

pub use auth::{LoginView, RoleSelectionView};
pub use status::{LoadingView, NotFoundView, UnauthorizedView};
pub use dashboards::{AdminDashboard, AreaPage, ClientDashboard, StaffDashboard};
pub use trainer::TrainerPerformanceView;
