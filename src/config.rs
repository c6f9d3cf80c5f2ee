//! Login page configuration.
//!
//! The browser build has no runtime environment, so the only tunable (an
//! absolute API base for deployments where the auth endpoint lives on a
//! different origin) is read at compile time.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_LOGIN_ENDPOINT: &str = "/api/auth/login";
pub const DEFAULT_USER_STORAGE_KEY: &str = "user";
pub const DEFAULT_HOME_PATH: &str = "/";
pub const DEFAULT_SIGNUP_PATH: &str = "/signup";

/// Endpoints, storage key, and navigation targets used by the login page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoginConfig {
    /// URL the credentials are posted to.
    pub endpoint: String,
    /// Client storage key holding the serialized user record.
    pub user_storage_key: String,
    /// Where the browser goes after a successful sign-in.
    pub home_path: String,
    /// Target of the "Sign up" link.
    pub signup_path: String,
}

impl Default for LoginConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_LOGIN_ENDPOINT.to_owned(),
            user_storage_key: DEFAULT_USER_STORAGE_KEY.to_owned(),
            home_path: DEFAULT_HOME_PATH.to_owned(),
            signup_path: DEFAULT_SIGNUP_PATH.to_owned(),
        }
    }
}

impl LoginConfig {
    /// Build config from build-time environment.
    ///
    /// Optional:
    /// - `ACADEMIC_EVENTS_API_BASE`: origin prefixed to the login endpoint
    pub fn from_build_env() -> Self {
        Self::with_api_base(option_env!("ACADEMIC_EVENTS_API_BASE"))
    }

    /// Default config with the login endpoint rebased onto `base`.
    ///
    /// Absent or blank bases keep the relative endpoint.
    pub fn with_api_base(base: Option<&str>) -> Self {
        let mut config = Self::default();
        if let Some(base) = base.map(str::trim).filter(|b| !b.is_empty()) {
            config.endpoint = format!("{}{}", base.trim_end_matches('/'), DEFAULT_LOGIN_ENDPOINT);
        }
        config
    }
}
