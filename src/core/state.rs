use chrono::Duration;

use crate::core::error::Error;
use crate::core::store::{ConfigStore, UserStore};
use crate::utils::auth::{self, encode_jwt};

#[derive(Clone, Debug)]
pub(crate) struct AppState {
    pub(crate) users: UserStore,
    pub(crate) configs: ConfigStore,
    pub(crate) secret: Option<String>,
}

impl AppState {
    pub(crate) fn new(users: UserStore, configs: ConfigStore, secret: Option<String>) -> Self {
        AppState {
            users,
            configs,
            secret,
        }
    }

    /// Verifies credentials and issues a one-hour token. Unknown usernames
    /// and wrong passwords return the same error so callers cannot probe
    /// which usernames exist.
    pub(crate) fn login(&self, username: &str, password: &str) -> Result<String, Error> {
        let user = self
            .users
            .find_by_username(username)
            .ok_or(Error::InvalidCredentials)?;

        if !bcrypt::verify(password, &user.password_hash)? {
            return Err(Error::InvalidCredentials);
        }

        let secret = self
            .secret
            .as_deref()
            .filter(|s| !s.is_empty())
            .ok_or(Error::MissingSecret)?;

        encode_jwt(user, secret, Duration::seconds(auth::TOKEN_TTL_SECONDS))
    }
}
