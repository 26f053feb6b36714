//! Identity strategies for the Sources API.
//!
//! The hosted platform authenticates requests with an `x-rh-identity`
//! header established by its gateway. Outside the platform there are two
//! ways to stand in for that: a pre-encoded development identity for a
//! fixed account, or an external provider hook that resolves identity
//! before each request.

use std::fmt;
use std::sync::Arc;

use base64::Engine;
use base64::engine::general_purpose;
use futures::future::BoxFuture;

/// Name of the identity header.
pub const IDENTITY_HEADER: &str = "x-rh-identity";

/// Hook resolving user identity before a request is sent.
///
/// This is the seam where a surrounding platform's session handling plugs
/// in. The hook is awaited before every request; a failure fails the call
/// without it ever reaching the network.
pub trait IdentityProvider: fmt::Debug + Send + Sync {
    fn ensure_identity(&self) -> BoxFuture<'_, std::result::Result<(), String>>;
}

/// Strategy for establishing identity with the Sources API.
#[derive(Debug, Clone)]
pub enum IdentityStrategy {
    /// Development identity: a pre-encoded `x-rh-identity` header for the
    /// given account is attached to every request.
    Account { account_number: String },
    /// Identity resolved by an external provider before each request.
    Provider(Arc<dyn IdentityProvider>),
    /// No identity header at all.
    Anonymous,
}

/// Encode the development identity header value for an account.
///
/// The value is the base64 of `{"identity":{"account_number":"<id>"}}`,
/// which is what the platform gateway attaches for a logged-in user.
pub fn encode_identity_header(account_number: &str) -> String {
    let identity = serde_json::json!({
        "identity": { "account_number": account_number }
    });
    general_purpose::STANDARD.encode(identity.to_string())
}
