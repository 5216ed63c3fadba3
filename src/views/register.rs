use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::components::{AuthForm, AuthFormKind, ProtectedRoute};

#[function_component(RegisterPage)]
pub fn register_page() -> Html {
    let navigator = use_navigator().expect("RegisterPage debe usarse dentro del router");

    let on_success = Callback::from(move |()| {
        navigator.push(&Route::Profile);
    });

    html! {
        <ProtectedRoute require_auth={false}>
            <div class="centered-screen">
                <AuthForm kind={AuthFormKind::Register} {on_success} />

                <div class="page-footer">
                    <p>
                        {"¿Ya tienes cuenta?"}
                        <Link<Route> to={Route::Login}>{"Inicia sesión aquí"}</Link<Route>>
                    </p>
                </div>

                <div class="terms">
                    <p>{"Al registrarte, aceptas nuestros términos de servicio y política de privacidad"}</p>
                </div>
            </div>
        </ProtectedRoute>
    }
}
