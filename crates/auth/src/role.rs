//! Role derivation from the cached user profile.

use serde::{Deserialize, Serialize};

use crate::profile::UserProfile;

/// Coarse-grained permission class.
///
/// Roles are derived, never stored: every permission check recomputes the
/// role from the current profile, so a profile update can never leave a
/// stale role behind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Superuser,
    Gerente,
    Operador,
    Visualizador,
}

impl Role {
    pub const ALL: [Role; 4] = [
        Role::Superuser,
        Role::Gerente,
        Role::Operador,
        Role::Visualizador,
    ];

    /// Derive the role from a cached profile.
    ///
    /// The superuser flag wins. Otherwise the first available group name is
    /// trimmed, lower-cased and mapped; unknown or absent groups fall back to
    /// `Visualizador` (fail-closed: an unrecognized group never grants more
    /// than read access).
    pub fn from_profile(profile: Option<&UserProfile>) -> Role {
        let Some(profile) = profile else {
            return Role::Visualizador;
        };

        if profile.is_superuser {
            return Role::Superuser;
        }

        match profile.primary_group() {
            Some(name) => Role::from_group_name(name),
            None => Role::Visualizador,
        }
    }

    /// Map a raw group name to a role.
    pub fn from_group_name(name: &str) -> Role {
        match name.trim().to_lowercase().as_str() {
            "gerente" | "gerencia" => Role::Gerente,
            "operador" => Role::Operador,
            _ => Role::Visualizador,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Superuser => "superuser",
            Role::Gerente => "gerente",
            Role::Operador => "operador",
            Role::Visualizador => "visualizador",
        }
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
