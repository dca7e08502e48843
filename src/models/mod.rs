pub mod role;
pub mod auth;
pub mod identity;
pub mod employee;

pub use role::{normalize_roles, primary_employee_role, Role, RoleChoice};
pub use auth::{ApiErrorBody, Credentials, LoginRequest, LoginResponse};
pub use identity::{Identity, StoredIdentity};
pub use employee::{EmployeeRecord, TrainerSubtype};
