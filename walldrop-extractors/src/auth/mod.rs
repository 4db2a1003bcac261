//! User authentication against the gallery.
//!
//! The gallery keeps the session in cookies, so logging in is a matter of submitting the login
//! form once with the cookie store of the shared [`Client`](walldrop_common::reqwest::Client) enabled. Every later
//! request sent through the same client is then authenticated.
use std::fmt::Debug;
use thiserror::Error;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AuthState {
    Authenticated,
    NotAuthenticated,
}

impl AuthState {
    #[inline]
    #[must_use]
    pub const fn is_auth(&self) -> bool {
        match self {
            Self::Authenticated => true,
            Self::NotAuthenticated => false,
        }
    }
}

#[derive(Error, Debug)]
pub enum Error {
    /// Indicates that login credentials are incorrect.
    #[error("Invalid username or password")]
    InvalidLogin,
}

/// Username and password used to log into the gallery.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    #[must_use]
    pub const fn new(username: String, password: String) -> Self {
        Self { username, password }
    }
}

impl Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}
