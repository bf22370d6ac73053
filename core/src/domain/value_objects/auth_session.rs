//! Result of a successful authentication.

use uuid::Uuid;

/// An authenticated user plus the opaque token for the session cookie
///
/// The plaintext token exists only in this value on its way into the
/// cookie; the session store holds its digest.
#[derive(Debug, Clone)]
pub struct AuthSession {
    /// The authenticated user
    pub user_id: Uuid,

    /// Opaque session token for the cookie
    pub token: String,
}
