use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::user::AuthUser;

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct AuthRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct PasswordResetRequest {
    pub email: String,
}

/// Respuesta del proveedor a registro / login
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct SessionResponse {
    pub success: bool,
    #[serde(default)]
    pub user: Option<AuthUser>,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub expires_in: Option<i64>,
    #[serde(default)]
    pub error: Option<ErrorInfo>,
}

/// Respuesta del proveedor a la consulta de perfil (restauración de sesión)
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct ProfileResponse {
    pub success: bool,
    #[serde(default)]
    pub user: Option<AuthUser>,
    #[serde(default)]
    pub error: Option<ErrorInfo>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct ErrorInfo {
    pub code: Option<String>,
    pub message: Option<String>,
}

/// Sesión persistida en localStorage para sobrevivir recargas
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct StoredSession {
    pub token: String,
    pub user: AuthUser,
    /// Expiración en RFC 3339; las sesiones sin fecha válida se descartan
    pub expires_at: String,
}

impl StoredSession {
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        match DateTime::parse_from_rfc3339(&self.expires_at) {
            Ok(expires_at) => expires_at.with_timezone(&Utc) <= now,
            Err(_) => true,
        }
    }
}

/// Entrada transitoria de los formularios de login/registro
#[derive(Clone, PartialEq, Debug, Default)]
pub struct FormData {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_user() -> AuthUser {
        AuthUser {
            uid: "u1".to_string(),
            email: Some("a@b.com".to_string()),
            display_name: None,
            email_verified: false,
            metadata: None,
            provider_id: Some("password".to_string()),
        }
    }

    #[test]
    fn parses_provider_error_envelope() {
        let json = r#"{
            "success": false,
            "error": { "code": "auth/wrong-password", "message": "INVALID_PASSWORD" }
        }"#;

        let response: SessionResponse = serde_json::from_str(json).unwrap();
        assert!(!response.success);
        assert!(response.user.is_none());
        let error = response.error.unwrap();
        assert_eq!(error.code.as_deref(), Some("auth/wrong-password"));
    }

    #[test]
    fn parses_provider_session_envelope() {
        let json = r#"{
            "success": true,
            "user": { "uid": "u1", "email": "a@b.com", "displayName": null },
            "token": "tok-1",
            "expires_in": 3600
        }"#;

        let response: SessionResponse = serde_json::from_str(json).unwrap();
        assert!(response.success);
        assert_eq!(response.token.as_deref(), Some("tok-1"));
        assert_eq!(response.expires_in, Some(3600));
        assert_eq!(response.user.unwrap().email.as_deref(), Some("a@b.com"));
    }

    #[test]
    fn stored_session_expiry() {
        let now = Utc.with_ymd_and_hms(2026, 8, 28, 12, 0, 0).unwrap();

        let live = StoredSession {
            token: "t".to_string(),
            user: sample_user(),
            expires_at: "2026-08-28T13:00:00Z".to_string(),
        };
        assert!(!live.is_expired(now));

        let expired = StoredSession {
            expires_at: "2026-08-28T11:59:59Z".to_string(),
            ..live.clone()
        };
        assert!(expired.is_expired(now));

        // Una fecha ilegible cuenta como expirada
        let garbled = StoredSession {
            expires_at: "not-a-date".to_string(),
            ..live
        };
        assert!(garbled.is_expired(now));
    }
}
