//! Identity configuration for the Sources inventory service.

use serde::{Deserialize, Serialize};

/// Identity settings controlling the `x-rh-identity` header.
///
/// When `account_number` is set the client pre-encodes a development
/// identity header for that account and attaches it to every request.
/// When unset, identity is expected to be established by the surrounding
/// platform (or not at all, for anonymous local testing).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IdentityConfig {
    /// Account number for the development identity header.
    pub account_number: Option<String>,
}
