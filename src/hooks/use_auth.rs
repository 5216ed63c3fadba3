// ============================================================================
// USE AUTH HOOK - Espejo del estado de sesión del proveedor en la UI
// ============================================================================
// Una suscripción por componente montado, dada de baja en el teardown.
// Las operaciones delegan en AuthClient y devuelven AuthError ya traducido
// para que el llamador lo muestre inline.
// ============================================================================

use yew::prelude::*;

use crate::error::AuthError;
use crate::models::AuthUser;
use crate::services::AuthClient;
use crate::stores::AuthStore;

#[derive(Clone)]
pub struct UseAuthHandle {
    state: UseStateHandle<AuthStore>,
    client: AuthClient,
}

impl PartialEq for UseAuthHandle {
    fn eq(&self, other: &Self) -> bool {
        self.state == other.state
    }
}

impl UseAuthHandle {
    pub fn user(&self) -> Option<AuthUser> {
        self.state.user.clone()
    }

    pub fn loading(&self) -> bool {
        self.state.loading
    }

    pub fn is_signed_in(&self) -> bool {
        self.state.is_signed_in()
    }

    /// Crear cuenta. El éxito llega por el canal de notificaciones, no
    /// como valor de retorno; aquí solo se reporta el fallo.
    pub async fn sign_up(&self, email: &str, password: &str) -> Result<(), AuthError> {
        self.set_loading(true);
        let result = self.client.sign_up(email, password).await;
        if result.is_err() {
            self.set_loading(false);
        }
        result
    }

    pub async fn sign_in(&self, email: &str, password: &str) -> Result<(), AuthError> {
        self.set_loading(true);
        let result = self.client.sign_in(email, password).await;
        if result.is_err() {
            self.set_loading(false);
        }
        result
    }

    pub async fn sign_out(&self) -> Result<(), AuthError> {
        self.client.sign_out().await
    }

    pub async fn reset_password(&self, email: &str) -> Result<(), AuthError> {
        self.client.reset_password(email).await
    }

    pub async fn send_email_verification(&self) -> Result<(), AuthError> {
        self.client.send_email_verification().await
    }

    fn set_loading(&self, loading: bool) {
        let mut next = (*self.state).clone();
        next.loading = loading;
        self.state.set(next);
    }
}

#[hook]
pub fn use_auth() -> UseAuthHandle {
    let state = use_state(AuthStore::default);

    {
        let state = state.clone();
        use_effect_with((), move |_| {
            let client = AuthClient::shared();
            let id = client.subscribe(move |user| {
                let mut next = (*state).clone();
                next.user = user.clone();
                next.loading = false;
                state.set(next);
            });
            client.ensure_init();

            move || AuthClient::shared().unsubscribe(id)
        });
    }

    UseAuthHandle {
        state,
        client: AuthClient::shared(),
    }
}
