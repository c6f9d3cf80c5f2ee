//! Sign-in form state and its reducer.
//!
//! LIFECYCLE
//! =========
//! idle -> `SubmitStarted` -> submitting -> `Settled(..)` -> idle (with either
//! an empty or a populated error pair). `is_loading` is the only observable
//! phase indicator.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use crate::net::types::LoginRequest;

pub const LOGIN_FAILED: &str = "Login failed";
pub const UNEXPECTED_ERROR: &str = "An unexpected error occurred";
pub const INVALID_RESPONSE: &str = "Invalid response from server";
pub const NETWORK_ERROR: &str = "Network error or server is unavailable";

pub const SIGN_IN_LABEL: &str = "Sign in";
pub const SIGNING_IN_LABEL: &str = "Signing in...";

/// Why a sign-in attempt failed, as shown to the user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoginFailure {
    /// The server answered with a non-2xx status.
    Rejected { error: Option<String>, details: Option<String> },
    /// The server answered 2xx but without a usable `user` record.
    MalformedResponse,
    /// The request never produced a response, or persisting the user failed.
    Transport,
}

impl LoginFailure {
    /// First line of the error panel.
    pub fn title(&self) -> String {
        match self {
            Self::Rejected { error: Some(error), .. } => error.clone(),
            _ => LOGIN_FAILED.to_owned(),
        }
    }

    /// Second line of the error panel.
    pub fn detail(&self) -> String {
        match self {
            Self::Rejected { details, .. } => details.clone().unwrap_or_else(|| UNEXPECTED_ERROR.to_owned()),
            Self::MalformedResponse => INVALID_RESPONSE.to_owned(),
            Self::Transport => NETWORK_ERROR.to_owned(),
        }
    }
}

/// Transient form state for one visit to the login page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginState {
    pub email: String,
    pub password: String,
    pub is_loading: bool,
    pub error_title: String,
    pub error_detail: String,
}

impl LoginState {
    /// Whether the error panel should be shown.
    pub fn has_error(&self) -> bool {
        !self.error_title.is_empty() || !self.error_detail.is_empty()
    }

    /// A new submission is accepted only while no request is outstanding.
    pub fn can_submit(&self) -> bool {
        !self.is_loading
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_loading { SIGNING_IN_LABEL } else { SIGN_IN_LABEL }
    }

    /// Request body for the current input.
    pub fn login_request(&self) -> LoginRequest {
        LoginRequest::new(&self.email, &self.password)
    }
}

/// Everything that can happen to the form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoginEvent {
    EmailInput(String),
    PasswordInput(String),
    SubmitStarted,
    /// The request settled; `Ok` means the user was stored and a redirect follows.
    Settled(Result<(), LoginFailure>),
}

/// Apply `event` to `state`.
pub fn reduce(state: LoginState, event: LoginEvent) -> LoginState {
    match event {
        LoginEvent::EmailInput(email) => LoginState { email, ..state },
        LoginEvent::PasswordInput(password) => LoginState { password, ..state },
        LoginEvent::SubmitStarted if state.is_loading => state,
        LoginEvent::SubmitStarted => LoginState {
            is_loading: true,
            error_title: String::new(),
            error_detail: String::new(),
            ..state
        },
        LoginEvent::Settled(Ok(())) => LoginState { is_loading: false, ..state },
        LoginEvent::Settled(Err(failure)) => LoginState {
            is_loading: false,
            error_title: failure.title(),
            error_detail: failure.detail(),
            ..state
        },
    }
}
