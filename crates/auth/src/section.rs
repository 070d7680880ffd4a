//! Application sections and actions subject to permission checks.

use serde::{Deserialize, Serialize};

/// An application area with its own permission checks.
///
/// Closed set; the serialized names match the section keys used by the API
/// and the navigation shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Dashboard,
    Empresas,
    Operadores,
    OrdenesVuelo,
    BitacoraVuelo,
    Usuarios,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Dashboard,
        Section::Empresas,
        Section::Operadores,
        Section::OrdenesVuelo,
        Section::BitacoraVuelo,
        Section::Usuarios,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Dashboard => "dashboard",
            Section::Empresas => "empresas",
            Section::Operadores => "operadores",
            Section::OrdenesVuelo => "ordenes_vuelo",
            Section::BitacoraVuelo => "bitacora_vuelo",
            Section::Usuarios => "usuarios",
        }
    }
}

impl core::fmt::Display for Section {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An operation on a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Read,
    Create,
    Update,
    Delete,
}

impl Action {
    pub const ALL: [Action; 4] = [Action::Read, Action::Create, Action::Update, Action::Delete];

    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Read => "read",
            Action::Create => "create",
            Action::Update => "update",
            Action::Delete => "delete",
        }
    }
}

impl core::fmt::Display for Action {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
