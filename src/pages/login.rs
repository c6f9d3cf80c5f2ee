//! Login page: email + password sign-in against `POST /api/auth/login`.
//!
//! On success the returned user record is stored under the `user` key and the
//! browser is sent to the application root. Any failure is shown inline as a
//! title + detail pair and the form stays usable.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use crate::config::LoginConfig;
use crate::net::api::{LoginTransport, interpret_reply};
use crate::net::types::LoginRequest;
use crate::state::login::{LoginEvent, LoginFailure, LoginState, reduce};
use crate::util::storage::{KeyValueStore, save_json};

/// Post `request`, interpret the reply, and persist the user record.
///
/// `Ok` means the user is stored and the caller should redirect.
///
/// # Errors
///
/// Returns the `LoginFailure` to display: `Rejected` or `MalformedResponse`
/// from the reply, `Transport` when the request or the storage write fails.
pub async fn submit_credentials<T, S>(
    transport: &T,
    store: &S,
    config: &LoginConfig,
    request: &LoginRequest,
) -> Result<(), LoginFailure>
where
    T: LoginTransport,
    S: KeyValueStore + ?Sized,
{
    let reply = transport.post_login(&config.endpoint, request).await.map_err(|e| {
        log::error!("login error: {e}");
        LoginFailure::Transport
    })?;

    let user = interpret_reply(&reply).inspect_err(|_| {
        log::debug!("login refused (status {})", reply.status);
    })?;

    save_json(store, &config.user_storage_key, &user).map_err(|e| {
        log::error!("login error: {e}");
        LoginFailure::Transport
    })?;
    Ok(())
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let config = use_context::<LoginConfig>().unwrap_or_default();
    let signup_path = config.signup_path.clone();
    let state = RwSignal::new(LoginState::default());
    let dispatch = move |event: LoginEvent| state.update(|s| *s = reduce(std::mem::take(s), event));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if !state.with_untracked(LoginState::can_submit) {
            return;
        }
        let request = state.with_untracked(LoginState::login_request);
        dispatch(LoginEvent::SubmitStarted);
        log::debug!("login submitted");

        #[cfg(feature = "hydrate")]
        {
            let config = config.clone();
            leptos::task::spawn_local(async move {
                let result = submit_credentials(
                    &crate::net::api::GlooTransport,
                    &crate::util::storage::LocalStorage,
                    &config,
                    &request,
                )
                .await;
                let succeeded = result.is_ok();
                dispatch(LoginEvent::Settled(result));
                if succeeded {
                    crate::util::navigation::redirect(&config.home_path);
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (request, &config);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <div class="login-card__header">
                    <img
                        class="login-card__logo"
                        src="/academic-logo.svg"
                        alt="Academic Events Logo"
                        width="60"
                        height="60"
                    />
                    <h1>"Academic Events"</h1>
                    <h2 class="login-card__subtitle">"Sign in to your account"</h2>
                </div>
                <Show when=move || state.with(LoginState::has_error)>
                    <div class="login-error" role="alert">
                        <Show when=move || state.with(|s| !s.error_title.is_empty())>
                            <p class="login-error__title">{move || state.with(|s| s.error_title.clone())}</p>
                        </Show>
                        <Show when=move || state.with(|s| !s.error_detail.is_empty())>
                            <p class="login-error__detail">{move || state.with(|s| s.error_detail.clone())}</p>
                        </Show>
                    </div>
                </Show>
                <form class="login-form" on:submit=on_submit>
                    <label for="email" class="login-label">"Email address"</label>
                    <input
                        id="email"
                        name="email"
                        class="login-input"
                        type="email"
                        required=true
                        prop:value=move || state.with(|s| s.email.clone())
                        on:input=move |ev| dispatch(LoginEvent::EmailInput(event_target_value(&ev)))
                    />
                    <label for="password" class="login-label">"Password"</label>
                    <input
                        id="password"
                        name="password"
                        class="login-input"
                        type="password"
                        required=true
                        prop:value=move || state.with(|s| s.password.clone())
                        on:input=move |ev| dispatch(LoginEvent::PasswordInput(event_target_value(&ev)))
                    />
                    <button class="login-button" type="submit" disabled=move || state.with(|s| s.is_loading)>
                        {move || state.with(LoginState::submit_label)}
                    </button>
                    <p class="login-signup">
                        <span>"Don't have an account? "</span>
                        <a href=signup_path class="login-link">"Sign up"</a>
                    </p>
                </form>
            </div>
        </div>
    }
}
