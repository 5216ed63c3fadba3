use gloo_timers::callback::Timeout;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::hooks::{use_auth_context, UseAuthHandle};

/// Milisegundos antes de volver al inicio tras cerrar sesión
const REDIRECT_DELAY_MS: u32 = 2000;

#[derive(Clone, PartialEq)]
enum LogoutStatus {
    SigningOut,
    Success,
    Error(String),
}

fn run_sign_out(
    auth: UseAuthHandle,
    navigator: Navigator,
    status: UseStateHandle<LogoutStatus>,
) {
    spawn_local(async move {
        match auth.sign_out().await {
            Ok(()) => {
                status.set(LogoutStatus::Success);
                Timeout::new(REDIRECT_DELAY_MS, move || {
                    navigator.push(&Route::Home);
                })
                .forget();
            }
            Err(_) => {
                status.set(LogoutStatus::Error(
                    "Error al cerrar sesión. Intenta nuevamente.".to_string(),
                ));
            }
        }
    });
}

/// Cierra la sesión al montar; sin sesión activa va directo al inicio
#[function_component(LogoutPage)]
pub fn logout_page() -> Html {
    let auth = use_auth_context();
    let navigator = use_navigator().expect("LogoutPage debe usarse dentro del router");
    let status = use_state(|| LogoutStatus::SigningOut);
    let started = use_mut_ref(|| false);

    {
        let auth = auth.clone();
        let navigator = navigator.clone();
        let status = status.clone();
        use_effect_with(
            (auth.loading(), auth.is_signed_in()),
            move |(loading, signed_in)| {
                if !*loading && !*started.borrow() {
                    *started.borrow_mut() = true;
                    if *signed_in {
                        run_sign_out(auth, navigator, status);
                    } else {
                        navigator.push(&Route::Home);
                    }
                }
            },
        );
    }

    let go_home = {
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| navigator.push(&Route::Home))
    };

    let try_again = {
        let auth = auth.clone();
        let navigator = navigator.clone();
        let status = status.clone();
        Callback::from(move |_: MouseEvent| {
            status.set(LogoutStatus::SigningOut);
            run_sign_out(auth.clone(), navigator.clone(), status.clone());
        })
    };

    html! {
        <div class="centered-screen">
            <div class="auth-card" style="text-align: center;">
                {
                    match &*status {
                        LogoutStatus::SigningOut => html! {
                            <div class="centered-content">
                                <div class="spinner"></div>
                                <h2>{"Cerrando sesión..."}</h2>
                                <p>{"Por favor espera un momento"}</p>
                            </div>
                        },
                        LogoutStatus::Success => html! {
                            <div class="centered-content">
                                <div style="font-size: 3rem;">{"✅"}</div>
                                <h2>{"Sesión cerrada exitosamente"}</h2>
                                <p>{"Serás redirigido al inicio en breve"}</p>
                                <button class="btn-primary" onclick={go_home}>
                                    {"Ir al inicio ahora"}
                                </button>
                            </div>
                        },
                        LogoutStatus::Error(error) => html! {
                            <div class="centered-content">
                                <div style="font-size: 3rem;">{"❌"}</div>
                                <h2>{"Error al cerrar sesión"}</h2>
                                <p class="alert-error">{error.clone()}</p>
                                <div class="button-row">
                                    <button class="btn-primary" onclick={try_again}>
                                        {"Intentar nuevamente"}
                                    </button>
                                    <button class="btn-primary btn-muted" onclick={go_home}>
                                        {"Ir al inicio"}
                                    </button>
                                </div>
                            </div>
                        },
                    }
                }
            </div>
        </div>
    }
}
