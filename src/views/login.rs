use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::components::{AuthForm, AuthFormKind, ProtectedRoute};

/// Vista solo-invitados: un usuario ya autenticado es redirigido al perfil
#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let navigator = use_navigator().expect("LoginPage debe usarse dentro del router");

    let on_success = Callback::from(move |()| {
        navigator.push(&Route::Profile);
    });

    html! {
        <ProtectedRoute require_auth={false}>
            <div class="centered-screen">
                <AuthForm kind={AuthFormKind::Login} {on_success} />

                <div class="page-footer">
                    <p>
                        {"¿No tienes cuenta?"}
                        <Link<Route> to={Route::Register}>{"Regístrate aquí"}</Link<Route>>
                    </p>
                </div>
            </div>
        </ProtectedRoute>
    }
}
