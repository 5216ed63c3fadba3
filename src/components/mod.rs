pub mod auth_form;
pub mod protected_route;

pub use auth_form::{AuthForm, AuthFormKind};
pub use protected_route::ProtectedRoute;
