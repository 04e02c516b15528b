//! App credentials used to sign COVE API requests.

use crate::config::{AppId, AppSecret};

/// The app id and secret issued by PBS for COVE API access.
///
/// Credentials are immutable once constructed. The secret is masked in
/// `Debug` output through [`AppSecret`].
///
/// # Example
///
/// ```rust
/// use coveapi::{AppId, AppSecret, Credentials};
///
/// let credentials = Credentials::new(
///     AppId::new("my-app").unwrap(),
///     AppSecret::new("my-secret").unwrap(),
/// );
/// assert_eq!(credentials.app_id().as_ref(), "my-app");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Credentials {
    app_id: AppId,
    app_secret: AppSecret,
}

impl Credentials {
    /// Creates credentials from a validated app id and secret.
    #[must_use]
    pub const fn new(app_id: AppId, app_secret: AppSecret) -> Self {
        Self { app_id, app_secret }
    }

    /// Returns the app id.
    #[must_use]
    pub const fn app_id(&self) -> &AppId {
        &self.app_id
    }

    /// Returns the app secret.
    #[must_use]
    pub const fn app_secret(&self) -> &AppSecret {
        &self.app_secret
    }
}
