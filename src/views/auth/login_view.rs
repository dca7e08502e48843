use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::hooks::{use_auth_context, use_role_resolver, LoginAttempt};
use crate::models::{Credentials, Identity};

#[function_component(LoginView)]
pub fn login_view() -> Html {
    let auth = use_auth_context();
    let resolver = use_role_resolver();

    // Estados para los valores de los inputs
    let username = use_state(String::new);
    let password = use_state(String::new);
    let validation_error = use_state(|| None::<String>);

    let on_username_change = {
        let username = username.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            username.set(input.value());
        })
    };

    let on_password_change = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            password.set(input.value());
        })
    };

    let on_submit = {
        let username = username.clone();
        let password = password.clone();
        let validation_error = validation_error.clone();
        let login = auth.login.clone();
        let resolve = resolver.resolve.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let credentials = Credentials::new((*username).clone(), (*password).clone());
            if !credentials.is_complete() {
                validation_error.set(Some("Por favor, completa todos los campos".to_string()));
                return;
            }
            validation_error.set(None);

            login.emit(LoginAttempt {
                credentials,
                on_success: resolve.reform(|identity: Identity| (identity, None)),
            });
        })
    };

    let on_dismiss = {
        let clear_error = auth.clear_error.clone();
        let validation_error = validation_error.clone();
        Callback::from(move |_: MouseEvent| {
            validation_error.set(None);
            clear_error.emit(());
        })
    };

    let error = (*validation_error)
        .clone()
        .or_else(|| auth.error().map(str::to_string));
    let loading = auth.is_loading();

    html! {
        <div class="login-screen">
            <div class="login-container">
                <div class="login-header">
                    <div class="logo-icon">{"🏋️"}</div>
                    <h1>{"Gimnasio"}</h1>
                    <p>{"Sistema de gestión"}</p>
                </div>

                if let Some(message) = error {
                    <div class="login-error" role="alert">
                        <span>{message}</span>
                        <button type="button" class="btn-dismiss" onclick={on_dismiss}>{"✕"}</button>
                    </div>
                }

                <form class="login-form" onsubmit={on_submit}>
                    <div class="form-group">
                        <label for="username">{"Usuario"}</label>
                        <input
                            type="text"
                            id="username"
                            name="username"
                            placeholder="Ingresa tu usuario"
                            value={(*username).clone()}
                            oninput={on_username_change}
                            disabled={loading}
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">{"Contraseña"}</label>
                        <input
                            type="password"
                            id="password"
                            name="password"
                            placeholder="Ingresa tu contraseña"
                            value={(*password).clone()}
                            oninput={on_password_change}
                            disabled={loading}
                        />
                    </div>

                    <button type="submit" class="btn-login" disabled={loading}>
                        {if loading { "Ingresando..." } else { "Iniciar sesión" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
