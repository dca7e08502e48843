pub mod use_auth;
pub mod session_context;
pub mod use_role_resolver;
pub mod use_trainer_subtype;

pub use use_auth::{use_auth, use_auth_context, AuthContext, LoginAttempt};
pub use session_context::SessionContextProvider;
pub use use_role_resolver::{use_role_resolver, RoleResolverHandle};
pub use use_trainer_subtype::{use_trainer_subtype, TrainerSubtypeState};
