//! User profile as supplied by the API and cached client-side.

use serde::{Deserialize, Serialize};

use aeroops_core::UserId;

/// A named group the user belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserGroup {
    pub name: String,
}

/// User profile payload returned at login and cached in the session store.
///
/// The role is never part of this payload; it is derived from `is_superuser`
/// and group membership on every permission check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct UserProfile {
    #[serde(default)]
    pub id: Option<UserId>,

    #[serde(default)]
    pub email: String,

    #[serde(default)]
    pub first_name: String,

    #[serde(default)]
    pub last_name: String,

    #[serde(default)]
    pub is_superuser: bool,

    /// Group memberships. Older API versions returned a single `group`
    /// string instead; both shapes are accepted.
    #[serde(default)]
    pub groups: Vec<UserGroup>,

    #[serde(default)]
    pub group: Option<String>,
}

impl UserProfile {
    /// First available group identifier, preferring the `groups` list over
    /// the legacy single `group` field.
    pub fn primary_group(&self) -> Option<&str> {
        self.groups
            .first()
            .map(|g| g.name.as_str())
            .or(self.group.as_deref())
    }

    pub fn display_name(&self) -> String {
        let full = format!("{} {}", self.first_name, self.last_name);
        let full = full.trim();
        if full.is_empty() {
            self.email.clone()
        } else {
            full.to_string()
        }
    }
}
