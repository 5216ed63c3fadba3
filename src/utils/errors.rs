// ============================================================================
// TRADUCCIÓN DE ERRORES DEL PROVEEDOR
// ============================================================================
// Mapea códigos de error del proveedor de identidad a mensajes en español.
// Función pura: los códigos desconocidos caen en el mensaje genérico.
// ============================================================================

pub const FALLBACK_ERROR_MESSAGE: &str = "Error inesperado. Intenta nuevamente";

/// Mensaje localizado para un código de error del proveedor
pub fn error_message(code: &str) -> &'static str {
    match code {
        "auth/email-already-in-use" => "Este email ya está registrado",
        "auth/invalid-email" => "Email inválido",
        "auth/operation-not-allowed" => "Operación no permitida",
        "auth/weak-password" => "La contraseña debe tener al menos 6 caracteres",
        "auth/user-disabled" => "Esta cuenta ha sido deshabilitada",
        "auth/user-not-found" => "Usuario no encontrado",
        "auth/wrong-password" => "Contraseña incorrecta",
        "auth/invalid-credential" => "Credenciales inválidas",
        "auth/too-many-requests" => "Demasiados intentos. Intenta más tarde",
        "auth/network-request-failed" => "Error de conexión",
        _ => FALLBACK_ERROR_MESSAGE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes_map_to_exact_messages() {
        let table = [
            ("auth/email-already-in-use", "Este email ya está registrado"),
            ("auth/invalid-email", "Email inválido"),
            ("auth/operation-not-allowed", "Operación no permitida"),
            (
                "auth/weak-password",
                "La contraseña debe tener al menos 6 caracteres",
            ),
            ("auth/user-disabled", "Esta cuenta ha sido deshabilitada"),
            ("auth/user-not-found", "Usuario no encontrado"),
            ("auth/wrong-password", "Contraseña incorrecta"),
            ("auth/invalid-credential", "Credenciales inválidas"),
            (
                "auth/too-many-requests",
                "Demasiados intentos. Intenta más tarde",
            ),
            ("auth/network-request-failed", "Error de conexión"),
        ];

        for (code, expected) in table {
            assert_eq!(error_message(code), expected, "código {}", code);
        }
    }

    #[test]
    fn unknown_codes_fall_back_to_generic_message() {
        assert_eq!(error_message("auth/no-such-code"), FALLBACK_ERROR_MESSAGE);
        assert_eq!(error_message(""), FALLBACK_ERROR_MESSAGE);
        assert_eq!(error_message("totally-unrelated"), FALLBACK_ERROR_MESSAGE);
    }
}
