pub mod auth;
pub mod user;

pub use auth::{
    AuthRequest, ErrorInfo, FormData, PasswordResetRequest, ProfileResponse, SessionResponse,
    StoredSession,
};
pub use user::{AuthUser, UserMetadata};
