// ============================================================================
// AUTH FORM - Formulario compartido de login/registro
// ============================================================================
// Inputs controlados; la validación de cliente corta antes de cualquier
// llamada al proveedor. Desde el login se alcanza la vista de recuperación
// de contraseña.
// ============================================================================

use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::hooks::use_auth_context;
use crate::models::FormData;

/// Longitud mínima que exige el proveedor para contraseñas
pub const MIN_PASSWORD_LEN: usize = 6;

#[derive(Clone, Copy, PartialEq)]
pub enum AuthFormKind {
    Login,
    Register,
}

/// Validación de cliente. Devuelve el mensaje a mostrar inline; si falla,
/// no se hace ninguna llamada al proveedor.
pub fn validate_form(kind: AuthFormKind, form: &FormData) -> Result<(), String> {
    if form.email.is_empty() || form.password.is_empty() {
        return Err("Todos los campos son obligatorios".to_string());
    }
    if form.password.chars().count() < MIN_PASSWORD_LEN {
        return Err("La contraseña debe tener al menos 6 caracteres".to_string());
    }
    if kind == AuthFormKind::Register && form.password != form.confirm_password {
        return Err("Las contraseñas no coinciden".to_string());
    }
    Ok(())
}

#[derive(Properties, PartialEq)]
pub struct AuthFormProps {
    pub kind: AuthFormKind,
    #[prop_or_default]
    pub on_success: Callback<()>,
}

#[function_component(AuthForm)]
pub fn auth_form(props: &AuthFormProps) -> Html {
    let auth = use_auth_context();
    let form = use_state(FormData::default);
    let error = use_state(String::new);
    let message = use_state(String::new);
    let show_reset = use_state(|| false);

    let is_login = props.kind == AuthFormKind::Login;
    let title = if is_login { "Iniciar Sesión" } else { "Registrarse" };

    // Editar cualquier campo limpia los avisos anteriores
    let make_input_handler = |apply: fn(&mut FormData, String)| {
        let form = form.clone();
        let error = error.clone();
        let message = message.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            apply(&mut next, input.value());
            form.set(next);
            error.set(String::new());
            message.set(String::new());
        })
    };
    let on_email = make_input_handler(|form, value| form.email = value);
    let on_password = make_input_handler(|form, value| form.password = value);
    let on_confirm = make_input_handler(|form, value| form.confirm_password = value);

    let on_submit = {
        let auth = auth.clone();
        let form = form.clone();
        let error = error.clone();
        let message = message.clone();
        let on_success = props.on_success.clone();
        let kind = props.kind;

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let data = (*form).clone();

            if let Err(msg) = validate_form(kind, &data) {
                error.set(msg);
                return;
            }

            let auth = auth.clone();
            let error = error.clone();
            let message = message.clone();
            let on_success = on_success.clone();
            spawn_local(async move {
                let result = match kind {
                    AuthFormKind::Login => auth.sign_in(&data.email, &data.password).await,
                    AuthFormKind::Register => auth.sign_up(&data.email, &data.password).await,
                };
                match result {
                    Ok(()) => {
                        if kind == AuthFormKind::Register {
                            message.set("Cuenta creada exitosamente".to_string());
                        }
                        on_success.emit(());
                    }
                    Err(e) => error.set(e.to_string()),
                }
            });
        })
    };

    let on_reset_submit = {
        let auth = auth.clone();
        let form = form.clone();
        let error = error.clone();
        let message = message.clone();
        let show_reset = show_reset.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let email = form.email.clone();

            if email.is_empty() {
                error.set("Ingresa tu email para recuperar la contraseña".to_string());
                return;
            }

            let auth = auth.clone();
            let error = error.clone();
            let message = message.clone();
            let show_reset = show_reset.clone();
            spawn_local(async move {
                match auth.reset_password(&email).await {
                    Ok(()) => {
                        message.set(
                            "Se envió un email para restablecer tu contraseña".to_string(),
                        );
                        show_reset.set(false);
                    }
                    Err(e) => error.set(e.to_string()),
                }
            });
        })
    };

    let toggle_reset = |value: bool| {
        let show_reset = show_reset.clone();
        Callback::from(move |_: MouseEvent| show_reset.set(value))
    };

    let alerts = html! {
        <>
            if !error.is_empty() {
                <div class="alert-error">{(*error).clone()}</div>
            }
            if !message.is_empty() {
                <div class="alert-success">{(*message).clone()}</div>
            }
        </>
    };

    if *show_reset {
        return html! {
            <div class="auth-card">
                <h1>{"Recuperar Contraseña"}</h1>
                <form onsubmit={on_reset_submit}>
                    <div class="form-group">
                        <label for="email">{"Email:"}</label>
                        <input
                            type="email"
                            id="email"
                            name="email"
                            value={form.email.clone()}
                            oninput={on_email}
                            required=true
                        />
                    </div>

                    {alerts}

                    <button type="submit" class="btn-primary" disabled={auth.loading()}>
                        { if auth.loading() { "Enviando..." } else { "Enviar Email" } }
                    </button>
                    <button type="button" class="btn-link" onclick={toggle_reset(false)}>
                        {"Volver al login"}
                    </button>
                </form>
            </div>
        };
    }

    html! {
        <div class="auth-card">
            <h1>{title}</h1>
            <form onsubmit={on_submit}>
                <div class="form-group">
                    <label for="email">{"Email:"}</label>
                    <input
                        type="email"
                        id="email"
                        name="email"
                        value={form.email.clone()}
                        oninput={on_email}
                        required=true
                    />
                </div>

                <div class="form-group">
                    <label for="password">{"Contraseña:"}</label>
                    <input
                        type="password"
                        id="password"
                        name="password"
                        value={form.password.clone()}
                        oninput={on_password}
                        required=true
                    />
                </div>

                if !is_login {
                    <div class="form-group">
                        <label for="confirm-password">{"Confirmar Contraseña:"}</label>
                        <input
                            type="password"
                            id="confirm-password"
                            name="confirmPassword"
                            value={form.confirm_password.clone()}
                            oninput={on_confirm}
                            required=true
                        />
                    </div>
                }

                {alerts}

                <button type="submit" class="btn-primary" disabled={auth.loading()}>
                    { if auth.loading() { "Procesando...".to_string() } else { title.to_string() } }
                </button>

                if is_login {
                    <button type="button" class="btn-link" onclick={toggle_reset(true)}>
                        {"¿Olvidaste tu contraseña?"}
                    </button>
                }
            </form>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(email: &str, password: &str, confirm: &str) -> FormData {
        FormData {
            email: email.to_string(),
            password: password.to_string(),
            confirm_password: confirm.to_string(),
        }
    }

    #[test]
    fn empty_fields_are_rejected() {
        let expected = Err("Todos los campos son obligatorios".to_string());
        assert_eq!(validate_form(AuthFormKind::Login, &form("", "secret1", "")), expected);
        assert_eq!(validate_form(AuthFormKind::Login, &form("a@b.com", "", "")), expected);
        assert_eq!(validate_form(AuthFormKind::Register, &form("", "", "")), expected);
    }

    #[test]
    fn short_password_never_reaches_the_provider() {
        assert_eq!(
            validate_form(AuthFormKind::Login, &form("a@b.com", "abc", "")),
            Err("La contraseña debe tener al menos 6 caracteres".to_string())
        );
        assert_eq!(
            validate_form(AuthFormKind::Register, &form("a@b.com", "12345", "12345")),
            Err("La contraseña debe tener al menos 6 caracteres".to_string())
        );
    }

    #[test]
    fn register_requires_matching_confirmation() {
        assert_eq!(
            validate_form(AuthFormKind::Register, &form("a@b.com", "secret1", "secret2")),
            Err("Las contraseñas no coinciden".to_string())
        );
        assert!(validate_form(AuthFormKind::Register, &form("a@b.com", "secret1", "secret1")).is_ok());
    }

    #[test]
    fn login_ignores_confirmation_field() {
        assert!(validate_form(AuthFormKind::Login, &form("a@b.com", "secret1", "otra")).is_ok());
    }
}
