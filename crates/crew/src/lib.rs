//! People domain: roles, employees, and the login flow.
//!
//! Business rules only; no HTTP, no storage engine. Services operate through
//! the `EntityStore` seam.

pub mod auth;
pub mod employee;
pub mod role;

pub use auth::AuthService;
pub use employee::{
    Employee, EmployeeId, EmployeeService, EmployeeUpdate, NewEmployee, PasswordChange,
    PasswordChangeError,
};
pub use role::{NewRole, Role, RoleId, RoleService, RoleUpdate};
