pub mod role_resolver;
pub mod route_guard;
pub mod trainer_access;

pub use role_resolver::{navigation_target, resolve, Destination, NavigationTarget, Resolution};
pub use route_guard::{evaluate, GuardDecision, GuardRule, PLATFORM_ROLES};
pub use trainer_access::TrainerVariant;
