// ============================================================================
// PROTECTED ROUTE - Guardia de acceso por presencia de sesión
// ============================================================================

use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::hooks::use_auth_context;

/// Decisión del guardia. `Pending` mientras no llega la primera
/// notificación del proveedor; `Redirecting` dispara exactamente una
/// navegación y no renderiza hijos.
#[derive(Debug, Clone, PartialEq)]
pub enum GuardState {
    Pending,
    Authorized,
    Redirecting(Route),
}

/// Evaluación pura del guardia, re-ejecutada en cada cambio de
/// sesión/carga. Un usuario autenticado en una vista solo-invitados se
/// redirige a su perfil.
pub fn evaluate_guard(
    loading: bool,
    signed_in: bool,
    require_auth: bool,
    redirect_to: &Route,
) -> GuardState {
    if loading {
        return GuardState::Pending;
    }
    if require_auth && !signed_in {
        return GuardState::Redirecting(redirect_to.clone());
    }
    if !require_auth && signed_in {
        return GuardState::Redirecting(Route::Profile);
    }
    GuardState::Authorized
}

#[derive(Properties, PartialEq)]
pub struct ProtectedRouteProps {
    pub children: Children,
    #[prop_or(true)]
    pub require_auth: bool,
    #[prop_or(Route::Login)]
    pub redirect_to: Route,
}

#[function_component(ProtectedRoute)]
pub fn protected_route(props: &ProtectedRouteProps) -> Html {
    let auth = use_auth_context();
    let navigator = use_navigator().expect("ProtectedRoute debe usarse dentro del router");

    let guard = evaluate_guard(
        auth.loading(),
        auth.is_signed_in(),
        props.require_auth,
        &props.redirect_to,
    );

    {
        let guard = guard.clone();
        use_effect_with(guard, move |guard| {
            if let GuardState::Redirecting(target) = guard {
                navigator.push(target);
            }
        });
    }

    match guard {
        GuardState::Pending => html! {
            <div class="centered-screen">
                <div class="spinner"></div>
                <p>{"Cargando..."}</p>
            </div>
        },
        GuardState::Redirecting(_) => Html::default(),
        GuardState::Authorized => html! { <>{props.children.clone()}</> },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_while_loading() {
        assert_eq!(
            evaluate_guard(true, false, true, &Route::Login),
            GuardState::Pending
        );
        // Incluso con sesión presente, sin primera notificación no se decide
        assert_eq!(
            evaluate_guard(true, true, false, &Route::Login),
            GuardState::Pending
        );
    }

    #[test]
    fn children_render_only_when_flag_matches_session() {
        assert_eq!(
            evaluate_guard(false, true, true, &Route::Login),
            GuardState::Authorized
        );
        assert_eq!(
            evaluate_guard(false, false, false, &Route::Login),
            GuardState::Authorized
        );
    }

    #[test]
    fn missing_session_on_protected_view_redirects_to_target() {
        assert_eq!(
            evaluate_guard(false, false, true, &Route::Login),
            GuardState::Redirecting(Route::Login)
        );
        // El destino es configurable
        assert_eq!(
            evaluate_guard(false, false, true, &Route::Home),
            GuardState::Redirecting(Route::Home)
        );
    }

    #[test]
    fn signed_in_user_on_guest_view_redirects_to_profile() {
        assert_eq!(
            evaluate_guard(false, true, false, &Route::Login),
            GuardState::Redirecting(Route::Profile)
        );
    }
}
