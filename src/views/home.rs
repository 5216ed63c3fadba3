use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::hooks::use_auth_context;

/// Portada pública: tarjeta de usuario si hay sesión, llamada a la acción
/// si no. No usa guardia; es accesible en ambos estados.
#[function_component(HomePage)]
pub fn home_page() -> Html {
    let auth = use_auth_context();

    if auth.loading() {
        return html! {
            <div class="centered-screen">
                <div class="spinner"></div>
                <p>{"Cargando..."}</p>
            </div>
        };
    }

    html! {
        <div class="centered-screen">
            <div class="home-card">
                <h1>{"🔐 Auth Template"}</h1>
                <p>{"Sistema de autenticación seguro"}</p>

                {
                    if let Some(user) = auth.user() {
                        html! {
                            <div>
                                <div class="user-info">
                                    <h2>{"¡Bienvenido!"}</h2>
                                    <p><strong>{"Email: "}</strong>{user.email.clone().unwrap_or_default()}</p>
                                    <p><strong>{"UID: "}</strong>{user.uid.clone()}</p>
                                    <p><strong>{"Verificado: "}</strong>{ if user.email_verified { "✅" } else { "❌" } }</p>
                                </div>
                                <div class="button-row">
                                    <Link<Route> to={Route::Profile}>{"Ver Perfil"}</Link<Route>>
                                    <Link<Route> to={Route::Logout}>{"Cerrar Sesión"}</Link<Route>>
                                </div>
                            </div>
                        }
                    } else {
                        html! {
                            <div>
                                <p>{"Inicia sesión o regístrate para acceder a las funciones protegidas"}</p>
                                <div class="button-row">
                                    <Link<Route> to={Route::Login}>{"Iniciar Sesión"}</Link<Route>>
                                    <Link<Route> to={Route::Register}>{"Registrarse"}</Link<Route>>
                                </div>
                            </div>
                        }
                    }
                }

                <div class="features">
                    <h3>{"✨ Características incluidas:"}</h3>
                    <ul>
                        <li>{"🔒 Autenticación con email y contraseña"}</li>
                        <li>{"🛡️ Rutas protegidas"}</li>
                        <li>{"📧 Recuperación de contraseña"}</li>
                        <li>{"⚡ Rust + Yew (WASM)"}</li>
                        <li>{"🎨 Diseño responsive simple"}</li>
                        <li>{"🚀 Listo para producción"}</li>
                    </ul>
                </div>
            </div>
        </div>
    }
}
