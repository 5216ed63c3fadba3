// ============================================================================
// AUTH CLIENT - Único componente que habla con el proveedor de identidad
// ============================================================================
// Cuatro operaciones (registro, login, logout, recuperación) más una
// suscripción a cambios de sesión. Los errores del proveedor se traducen
// aquí y salen siempre tipados (AuthError); nunca se silencian.
// ============================================================================

use std::cell::Cell;
use std::rc::Rc;

use chrono::{Duration, Utc};
use gloo_net::http::{Request, Response};
use wasm_bindgen_futures::spawn_local;

use crate::config::AppConfig;
use crate::error::AuthError;
use crate::models::{
    AuthRequest, AuthUser, ErrorInfo, PasswordResetRequest, ProfileResponse, SessionResponse,
    StoredSession,
};
use crate::state::{ReactiveState, SubscriptionId};
use crate::utils::{
    error_message, load_from_storage, remove_from_storage, save_to_storage,
    STORAGE_KEY_AUTH_SESSION,
};

/// Vida de la sesión local cuando el proveedor no indica expiración
const DEFAULT_SESSION_TTL_SECONDS: i64 = 3600;

const SIGN_OUT_ERROR: &str = "Error al cerrar sesión";
const OPERATION_PENDING: &str = "Ya hay una operación en curso. Espera un momento";

thread_local! {
    // Instancia compartida de la app. Único escritor del estado de sesión;
    // los hooks solo leen a través de la suscripción.
    static AUTH_CLIENT: AuthClient = AuthClient::new(AppConfig::from_env());
}

#[derive(Clone)]
pub struct AuthClient {
    config: Rc<AppConfig>,
    session: Rc<ReactiveState<Option<AuthUser>>>,
    initialized: Rc<Cell<bool>>,
    init_started: Rc<Cell<bool>>,
    in_flight: Rc<Cell<bool>>,
}

impl AuthClient {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config: Rc::new(config),
            session: Rc::new(ReactiveState::new(None)),
            initialized: Rc::new(Cell::new(false)),
            init_started: Rc::new(Cell::new(false)),
            in_flight: Rc::new(Cell::new(false)),
        }
    }

    pub fn shared() -> Self {
        AUTH_CLIENT.with(Clone::clone)
    }

    // ------------------------------------------------------------------
    // Suscripción a cambios de sesión
    // ------------------------------------------------------------------

    /// Registrar un observador. Si el cliente ya emitió su primera
    /// notificación, el observador recibe el snapshot actual de inmediato.
    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&Option<AuthUser>) + 'static,
    {
        if self.initialized.get() {
            callback(&self.session.get());
        }
        self.session.subscribe(callback)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.session.unsubscribe(id);
    }

    /// Dispara la restauración de sesión una sola vez. La primera
    /// notificación (restaurada o None) llega de forma asíncrona.
    pub fn ensure_init(&self) {
        if self.init_started.get() {
            return;
        }
        self.init_started.set(true);

        let client = self.clone();
        spawn_local(async move {
            let restored = client.restore_session().await;
            // Un login completado mientras restaurábamos tiene prioridad
            if !client.initialized.get() {
                if restored.is_some() {
                    log::info!("🔐 Sesión restaurada desde almacenamiento local");
                }
                client.notify_session(restored);
            }
        });
    }

    fn notify_session(&self, user: Option<AuthUser>) {
        self.initialized.set(true);
        self.session.set(user);
    }

    // ------------------------------------------------------------------
    // Operaciones del proveedor
    // ------------------------------------------------------------------

    pub async fn sign_up(&self, email: &str, password: &str) -> Result<(), AuthError> {
        self.credential_call("/auth/register", email, password).await
    }

    pub async fn sign_in(&self, email: &str, password: &str) -> Result<(), AuthError> {
        self.credential_call("/auth/login", email, password).await
    }

    /// Cierra la sesión en el proveedor. Siempre realiza la llamada, haya o
    /// no sesión local; nunca produce un error de credenciales.
    pub async fn sign_out(&self) -> Result<(), AuthError> {
        let stored: Option<StoredSession> = load_from_storage(STORAGE_KEY_AUTH_SESSION);

        let mut request = Request::post(&self.endpoint("/auth/logout"));
        if let Some(session) = &stored {
            request = request.header("Authorization", &format!("Bearer {}", session.token));
        }

        let response = request
            .send()
            .await
            .map_err(|_| AuthError::Session(SIGN_OUT_ERROR.to_string()))?;

        if !response.ok() {
            log::error!("❌ Logout rechazado por el proveedor: HTTP {}", response.status());
            return Err(AuthError::Session(SIGN_OUT_ERROR.to_string()));
        }

        if let Err(e) = remove_from_storage(STORAGE_KEY_AUTH_SESSION) {
            log::warn!("⚠️ No se pudo limpiar la sesión local: {}", e);
        }
        log::info!("👋 Sesión cerrada");
        self.notify_session(None);
        Ok(())
    }

    pub async fn reset_password(&self, email: &str) -> Result<(), AuthError> {
        let response = Request::post(&self.endpoint("/auth/reset-password"))
            .json(&PasswordResetRequest {
                email: email.to_string(),
            })
            .map_err(|_| network_error())?
            .send()
            .await
            .map_err(|_| network_error())?;

        if !response.ok() {
            return Err(error_from_response(response).await);
        }
        log::info!("📧 Email de recuperación solicitado");
        Ok(())
    }

    /// El proveedor envía un email de verificación para la sesión activa
    pub async fn send_email_verification(&self) -> Result<(), AuthError> {
        let stored: StoredSession = load_from_storage(STORAGE_KEY_AUTH_SESSION)
            .ok_or_else(|| AuthError::Credential(error_message("").to_string()))?;

        let response = Request::post(&self.endpoint("/auth/send-verification"))
            .header("Authorization", &format!("Bearer {}", stored.token))
            .send()
            .await
            .map_err(|_| network_error())?;

        if !response.ok() {
            return Err(error_from_response(response).await);
        }
        Ok(())
    }

    // ------------------------------------------------------------------
    // Internos
    // ------------------------------------------------------------------

    async fn credential_call(
        &self,
        path: &str,
        email: &str,
        password: &str,
    ) -> Result<(), AuthError> {
        // Las llamadas de credenciales solapadas se rechazan, no se encolan
        self.begin_exclusive()?;
        let result = self.credential_call_inner(path, email, password).await;
        self.in_flight.set(false);
        result
    }

    async fn credential_call_inner(
        &self,
        path: &str,
        email: &str,
        password: &str,
    ) -> Result<(), AuthError> {
        let response = Request::post(&self.endpoint(path))
            .json(&AuthRequest {
                email: email.to_string(),
                password: password.to_string(),
            })
            .map_err(|_| network_error())?
            .send()
            .await
            .map_err(|_| network_error())?;

        if !response.ok() {
            return Err(error_from_response(response).await);
        }

        let session = response
            .json::<SessionResponse>()
            .await
            .map_err(|_| network_error())?;

        if !session.success {
            return Err(credential_error(session.error));
        }

        let (user, token) = match (session.user, session.token) {
            (Some(user), Some(token)) => (user, token),
            _ => {
                log::error!("❌ Respuesta del proveedor sin usuario o token");
                return Err(credential_error(None));
            }
        };

        let ttl = session.expires_in.unwrap_or(DEFAULT_SESSION_TTL_SECONDS);
        let stored = StoredSession {
            token,
            user: user.clone(),
            expires_at: (Utc::now() + Duration::seconds(ttl)).to_rfc3339(),
        };
        if let Err(e) = save_to_storage(STORAGE_KEY_AUTH_SESSION, &stored) {
            log::warn!("⚠️ No se pudo persistir la sesión: {}", e);
        }

        log::info!("✅ Sesión iniciada: {}", user.email.as_deref().unwrap_or("?"));
        self.notify_session(Some(user));
        Ok(())
    }

    fn begin_exclusive(&self) -> Result<(), AuthError> {
        if self.in_flight.get() {
            return Err(AuthError::Credential(OPERATION_PENDING.to_string()));
        }
        self.in_flight.set(true);
        Ok(())
    }

    async fn restore_session(&self) -> Option<AuthUser> {
        let stored: StoredSession = load_from_storage(STORAGE_KEY_AUTH_SESSION)?;

        if stored.is_expired(Utc::now()) {
            log::info!("⌛ Sesión local expirada, descartando");
            let _ = remove_from_storage(STORAGE_KEY_AUTH_SESSION);
            return None;
        }

        match self.fetch_profile(&stored.token).await {
            Ok(Some(user)) => {
                // Refrescar la copia local con el perfil actual del proveedor
                let refreshed = StoredSession {
                    user: user.clone(),
                    ..stored
                };
                let _ = save_to_storage(STORAGE_KEY_AUTH_SESSION, &refreshed);
                Some(user)
            }
            Ok(None) => {
                log::info!("🔒 El proveedor rechazó el token guardado");
                let _ = remove_from_storage(STORAGE_KEY_AUTH_SESSION);
                None
            }
            Err(()) => {
                // Sin red: la copia local sigue siendo la última notificación válida
                log::warn!("⚠️ Sin conexión al proveedor, usando sesión local");
                Some(stored.user)
            }
        }
    }

    /// Ok(None) significa token rechazado; Err(()) es fallo de red
    async fn fetch_profile(&self, token: &str) -> Result<Option<AuthUser>, ()> {
        let response = Request::get(&self.endpoint("/auth/me"))
            .header("Authorization", &format!("Bearer {}", token))
            .send()
            .await
            .map_err(|_| ())?;

        if !response.ok() {
            return Ok(None);
        }

        let profile = response.json::<ProfileResponse>().await.map_err(|_| ())?;
        if profile.success {
            Ok(profile.user)
        } else {
            Ok(None)
        }
    }

    fn endpoint(&self, path: &str) -> String {
        match &self.config.api_key {
            Some(key) => format!("{}{}?key={}", self.config.auth_api_url(), path, key),
            None => format!("{}{}", self.config.auth_api_url(), path),
        }
    }
}

fn network_error() -> AuthError {
    AuthError::Credential(error_message("auth/network-request-failed").to_string())
}

/// Error de credenciales a partir del envelope del proveedor. Sin código
/// (o con uno desconocido) cae en el mensaje genérico del traductor.
fn credential_error(error: Option<ErrorInfo>) -> AuthError {
    let code = error.and_then(|e| e.code).unwrap_or_default();
    AuthError::Credential(error_message(&code).to_string())
}

async fn error_from_response(response: Response) -> AuthError {
    match response.json::<SessionResponse>().await {
        Ok(body) => credential_error(body.error),
        Err(_) => credential_error(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::errors::FALLBACK_ERROR_MESSAGE;
    use std::cell::RefCell;

    fn test_client() -> AuthClient {
        AuthClient::new(AppConfig::default())
    }

    fn sample_user(email: &str) -> AuthUser {
        AuthUser {
            uid: "u1".to_string(),
            email: Some(email.to_string()),
            display_name: None,
            email_verified: false,
            metadata: None,
            provider_id: None,
        }
    }

    #[test]
    fn credential_errors_are_translated_by_code() {
        let error = credential_error(Some(ErrorInfo {
            code: Some("auth/wrong-password".to_string()),
            message: Some("INVALID_PASSWORD".to_string()),
        }));
        assert_eq!(error, AuthError::Credential("Contraseña incorrecta".to_string()));

        let no_code = credential_error(Some(ErrorInfo {
            code: None,
            message: Some("whatever".to_string()),
        }));
        assert_eq!(
            no_code,
            AuthError::Credential(FALLBACK_ERROR_MESSAGE.to_string())
        );

        let empty = credential_error(None);
        assert_eq!(
            empty,
            AuthError::Credential(FALLBACK_ERROR_MESSAGE.to_string())
        );
    }

    #[test]
    fn endpoint_appends_api_key_when_configured() {
        let plain = test_client();
        assert_eq!(
            plain.endpoint("/auth/login"),
            "http://localhost:3000/auth/login"
        );

        let mut config = AppConfig::default();
        config.api_key = Some("k-123".to_string());
        let keyed = AuthClient::new(config);
        assert_eq!(
            keyed.endpoint("/auth/login"),
            "http://localhost:3000/auth/login?key=k-123"
        );
    }

    #[test]
    fn overlapping_credential_calls_are_rejected() {
        let client = test_client();

        assert!(client.begin_exclusive().is_ok());
        let second = client.begin_exclusive();
        assert_eq!(
            second,
            Err(AuthError::Credential(OPERATION_PENDING.to_string()))
        );

        client.in_flight.set(false);
        assert!(client.begin_exclusive().is_ok());
    }

    #[test]
    fn subscribers_get_snapshot_once_initialized() {
        let client = test_client();
        let seen: Rc<RefCell<Vec<Option<String>>>> = Rc::new(RefCell::new(Vec::new()));

        // Antes de la primera notificación no hay snapshot inmediato
        let seen_early = seen.clone();
        let id = client.subscribe(move |user| {
            seen_early
                .borrow_mut()
                .push(user.as_ref().and_then(|u| u.email.clone()));
        });
        assert!(seen.borrow().is_empty());

        client.notify_session(Some(sample_user("a@b.com")));
        assert_eq!(seen.borrow().len(), 1);
        assert_eq!(seen.borrow()[0].as_deref(), Some("a@b.com"));
        client.unsubscribe(id);

        // Un observador tardío recibe el estado actual al suscribirse
        let seen_late = seen.clone();
        let id = client.subscribe(move |user| {
            seen_late
                .borrow_mut()
                .push(user.as_ref().and_then(|u| u.email.clone()));
        });
        assert_eq!(seen.borrow().len(), 2);
        client.unsubscribe(id);
    }

    #[test]
    fn sign_out_notification_clears_session() {
        let client = test_client();
        client.notify_session(Some(sample_user("a@b.com")));

        let last: Rc<RefCell<Option<Option<String>>>> = Rc::new(RefCell::new(None));
        let last_clone = last.clone();
        client.subscribe(move |user| {
            *last_clone.borrow_mut() = Some(user.as_ref().and_then(|u| u.email.clone()));
        });

        client.notify_session(None);
        assert_eq!(*last.borrow(), Some(None));
    }
}
