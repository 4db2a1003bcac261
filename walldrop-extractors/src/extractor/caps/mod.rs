use crate::auth::Credentials;
use crate::error::ExtractorError;
use std::future::Future;

/// Authentication capability for galleries that hide subscriptions behind a login.
pub trait Auth {
    /// Logs in with the supplied [`Credentials`]. The session lives in the client's cookie store.
    fn auth(
        &mut self,
        credentials: &Credentials,
    ) -> impl Future<Output = Result<(), ExtractorError>> + Send;

    fn is_authenticated(&self) -> bool;
}
