/// Clave de localStorage donde se persiste la sesión del proveedor
pub const STORAGE_KEY_AUTH_SESSION: &str = "authTemplate_session";
