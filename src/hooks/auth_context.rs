// ============================================================================
// AUTH CONTEXT - Compartir estado de sesión entre componentes
// ============================================================================
// Usa Context API de Yew para exponer UseAuthHandle globalmente
// ============================================================================

use yew::prelude::*;

use crate::hooks::use_auth::{use_auth, UseAuthHandle};

#[derive(Properties, PartialEq)]
pub struct AuthContextProviderProps {
    pub children: Children,
}

/// Provider que envuelve la app y publica el estado de sesión
#[function_component(AuthContextProvider)]
pub fn auth_context_provider(props: &AuthContextProviderProps) -> Html {
    let auth = use_auth();

    html! {
        <ContextProvider<UseAuthHandle> context={auth}>
            {props.children.clone()}
        </ContextProvider<UseAuthHandle>>
    }
}

/// Leer el handle de sesión ambiente
#[hook]
pub fn use_auth_context() -> UseAuthHandle {
    use_context::<UseAuthHandle>()
        .expect("use_auth_context debe ser usado dentro de AuthContextProvider")
}
