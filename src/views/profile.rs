use chrono::DateTime;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::components::ProtectedRoute;
use crate::hooks::use_auth_context;

/// Fecha del proveedor (RFC 3339) en formato legible local
fn format_provider_date(value: Option<&str>) -> String {
    value
        .and_then(|raw| DateTime::parse_from_rfc3339(raw).ok())
        .map(|date| date.format("%d/%m/%Y %H:%M").to_string())
        .unwrap_or_else(|| "No disponible".to_string())
}

#[function_component(ProfilePage)]
pub fn profile_page() -> Html {
    html! {
        <ProtectedRoute require_auth={true}>
            <ProfileContent />
        </ProtectedRoute>
    }
}

#[function_component(ProfileContent)]
fn profile_content() -> Html {
    let auth = use_auth_context();
    let navigator = use_navigator().expect("ProfilePage debe usarse dentro del router");
    let busy = use_state(|| false);
    let message = use_state(String::new);
    let error = use_state(String::new);

    let Some(user) = auth.user() else {
        // El guardia ya está redirigiendo
        return Html::default();
    };

    let on_sign_out = {
        let auth = auth.clone();
        let navigator = navigator.clone();
        let busy = busy.clone();
        let error = error.clone();
        Callback::from(move |_: MouseEvent| {
            let auth = auth.clone();
            let navigator = navigator.clone();
            let busy = busy.clone();
            let error = error.clone();
            busy.set(true);
            spawn_local(async move {
                match auth.sign_out().await {
                    Ok(()) => navigator.push(&Route::Home),
                    Err(e) => error.set(e.to_string()),
                }
                busy.set(false);
            });
        })
    };

    let on_send_verification = {
        let auth = auth.clone();
        let busy = busy.clone();
        let message = message.clone();
        let error = error.clone();
        Callback::from(move |_: MouseEvent| {
            let auth = auth.clone();
            let busy = busy.clone();
            let message = message.clone();
            let error = error.clone();
            busy.set(true);
            error.set(String::new());
            spawn_local(async move {
                match auth.send_email_verification().await {
                    Ok(()) => message.set(
                        "Email de verificación enviado. Revisa tu bandeja de entrada.".to_string(),
                    ),
                    Err(_) => error.set("Error al enviar email de verificación".to_string()),
                }
                busy.set(false);
            });
        })
    };

    let go_home = {
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| navigator.push(&Route::Home))
    };

    let avatar = user
        .email
        .as_deref()
        .and_then(|email| email.chars().next())
        .map(|c| c.to_uppercase().to_string())
        .unwrap_or_else(|| "👤".to_string());

    let metadata = user.metadata.clone().unwrap_or_default();

    html! {
        <div class="centered-screen">
            <div class="profile-card">
                <div class="profile-header">
                    <div class="profile-avatar">{avatar}</div>
                    <h1>{"Mi Perfil"}</h1>
                </div>

                <div class="profile-body">
                    <h2>{"Información Personal"}</h2>

                    <div class="profile-field">
                        <label>{"Email:"}</label>
                        <p>{user.email.clone().unwrap_or_default()}</p>
                    </div>

                    <div class="profile-field">
                        <label>{"UID:"}</label>
                        <p class="uid">{user.uid.clone()}</p>
                    </div>

                    <div class="profile-field">
                        <label>{"Estado de verificación:"}</label>
                        {
                            if user.email_verified {
                                html! { <span class="verified">{"✅ Verificado"}</span> }
                            } else {
                                html! {
                                    <div>
                                        <span class="unverified">{"❌ No verificado"}</span>
                                        <button
                                            class="btn-primary btn-success"
                                            onclick={on_send_verification}
                                            disabled={*busy}
                                        >
                                            { if *busy { "Enviando..." } else { "Verificar Email" } }
                                        </button>
                                    </div>
                                }
                            }
                        }
                    </div>

                    <div class="profile-field">
                        <label>{"Fecha de creación:"}</label>
                        <p>{format_provider_date(metadata.creation_time.as_deref())}</p>
                    </div>

                    <div class="profile-field">
                        <label>{"Último acceso:"}</label>
                        <p>{format_provider_date(metadata.last_sign_in_time.as_deref())}</p>
                    </div>

                    if !message.is_empty() {
                        <div class="alert-success">{(*message).clone()}</div>
                    }
                    if !error.is_empty() {
                        <div class="alert-error">{(*error).clone()}</div>
                    }

                    <div class="actions">
                        <button class="btn-primary btn-muted" onclick={go_home}>
                            {"🏠 Ir al Inicio"}
                        </button>
                        <button class="btn-primary btn-danger" onclick={on_sign_out} disabled={*busy}>
                            { if *busy { "Cerrando..." } else { "🚪 Cerrar Sesión" } }
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_provider_dates_or_falls_back() {
        assert_eq!(
            format_provider_date(Some("2026-01-15T10:30:00Z")),
            "15/01/2026 10:30"
        );
        assert_eq!(format_provider_date(Some("garbage")), "No disponible");
        assert_eq!(format_provider_date(None), "No disponible");
    }
}
