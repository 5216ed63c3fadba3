// ============================================================================
// AUTH STORE - Estado de sesión consumido por la UI
// ============================================================================

use crate::models::AuthUser;

/// Fuente única de verdad de "quién está conectado".
///
/// `loading` arranca en true y pasa a false con la primera notificación del
/// proveedor; vuelve a true mientras hay un login/registro en curso.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthStore {
    pub user: Option<AuthUser>,
    pub loading: bool,
}

impl Default for AuthStore {
    fn default() -> Self {
        Self {
            user: None,
            loading: true,
        }
    }
}

impl AuthStore {
    pub fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_loading_and_signed_out() {
        let store = AuthStore::default();
        assert!(store.loading);
        assert!(!store.is_signed_in());
    }
}
