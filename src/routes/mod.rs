pub(crate) mod auth;
pub(crate) mod configs;
pub(crate) mod router;
