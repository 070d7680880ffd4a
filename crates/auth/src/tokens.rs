//! Session token pair with expiry bookkeeping.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Access/refresh token pair as persisted by the session store.
///
/// Expiries are seconds since the Unix epoch, exactly as the API reports
/// them. Validity checks are pure comparisons; actually renewing a token is
/// the auth client's job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionTokens {
    pub access: String,
    pub refresh: String,
    pub access_expiry: i64,
    pub refresh_expiry: i64,
}

impl SessionTokens {
    /// Whether the access token is still inside its expiry window at `now`.
    pub fn access_valid(&self, now: DateTime<Utc>) -> bool {
        now.timestamp() < self.access_expiry
    }

    /// Whether the refresh token is still inside its expiry window at `now`.
    pub fn refresh_valid(&self, now: DateTime<Utc>) -> bool {
        now.timestamp() < self.refresh_expiry
    }
}
