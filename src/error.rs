use thiserror::Error;

/// Errores tipados que cruzan la frontera del cliente de autenticación.
///
/// Todos llevan ya el mensaje traducido (ver `utils::errors`), listo para
/// mostrarse en la UI sin más procesamiento.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AuthError {
    /// Credencial o email rechazado por el proveedor, o entrada inválida.
    /// Recuperable: el usuario corrige y reintenta.
    #[error("{0}")]
    Credential(String),

    /// Fallo inesperado del proveedor o de red al cerrar sesión.
    /// Recuperable reintentando.
    #[error("{0}")]
    Session(String),
}

impl AuthError {
    pub fn message(&self) -> &str {
        match self {
            AuthError::Credential(msg) | AuthError::Session(msg) => msg,
        }
    }
}
