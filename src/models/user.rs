use serde::{Deserialize, Serialize};

/// Identidad devuelta por el proveedor. Se reemplaza completa en cada
/// notificación de sesión, nunca se muta parcialmente.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct AuthUser {
    pub uid: String,
    pub email: Option<String>,
    pub display_name: Option<String>,
    #[serde(default)]
    pub email_verified: bool,
    #[serde(default)]
    pub metadata: Option<UserMetadata>,
    #[serde(default)]
    pub provider_id: Option<String>,
}

/// Metadatos del proveedor: fechas en el formato que él entregue (RFC 3339)
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct UserMetadata {
    #[serde(default)]
    pub creation_time: Option<String>,
    #[serde(default)]
    pub last_sign_in_time: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_provider_identity_payload() {
        let json = r#"{
            "uid": "abc123",
            "email": "a@b.com",
            "displayName": null,
            "emailVerified": true,
            "metadata": {
                "creationTime": "2026-01-15T10:00:00Z",
                "lastSignInTime": "2026-08-01T08:30:00Z"
            },
            "providerId": "password"
        }"#;

        let user: AuthUser = serde_json::from_str(json).unwrap();
        assert_eq!(user.uid, "abc123");
        assert_eq!(user.email.as_deref(), Some("a@b.com"));
        assert!(user.email_verified);
        let meta = user.metadata.unwrap();
        assert_eq!(meta.creation_time.as_deref(), Some("2026-01-15T10:00:00Z"));
    }

    #[test]
    fn missing_optional_fields_use_defaults() {
        let json = r#"{"uid": "u1", "email": "a@b.com", "displayName": null}"#;
        let user: AuthUser = serde_json::from_str(json).unwrap();
        assert!(!user.email_verified);
        assert!(user.metadata.is_none());
        assert!(user.provider_id.is_none());
    }
}
