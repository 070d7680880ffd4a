//! Static role × section × action capability matrix.
//!
//! The matrix is a fixed configuration table, defined once and immutable for
//! the process lifetime. Anything not explicitly granted is denied.

use crate::role::Role;
use crate::section::{Action, Section};

const NONE: &[Action] = &[];
const READ: &[Action] = &[Action::Read];
const FULL: &[Action] = &[Action::Read, Action::Create, Action::Update, Action::Delete];
const READ_UPDATE: &[Action] = &[Action::Read, Action::Update];
const READ_CREATE_UPDATE: &[Action] = &[Action::Read, Action::Create, Action::Update];

/// Actions granted to `role` on `section`.
///
/// Only superusers touch user management; gerentes run the operational
/// catalogs, operadores work their own orders and logs, visualizadores see
/// everything operational read-only.
pub fn grants(role: Role, section: Section) -> &'static [Action] {
    match (role, section) {
        (Role::Superuser, _) => FULL,

        (Role::Gerente, Section::Dashboard) => READ,
        (Role::Gerente, Section::Empresas) => FULL,
        (Role::Gerente, Section::Operadores) => FULL,
        (Role::Gerente, Section::OrdenesVuelo) => FULL,
        (Role::Gerente, Section::BitacoraVuelo) => FULL,
        (Role::Gerente, Section::Usuarios) => NONE,

        (Role::Operador, Section::Dashboard) => READ,
        (Role::Operador, Section::Empresas) => READ,
        (Role::Operador, Section::Operadores) => READ,
        (Role::Operador, Section::OrdenesVuelo) => READ_UPDATE,
        (Role::Operador, Section::BitacoraVuelo) => READ_CREATE_UPDATE,
        (Role::Operador, Section::Usuarios) => NONE,

        (Role::Visualizador, Section::Usuarios) => NONE,
        (Role::Visualizador, _) => READ,
    }
}

/// Whether `role` may perform `action` on `section`.
///
/// Total over the enum domain: never panics, anything not granted is false.
pub fn can(role: Role, section: Section, action: Action) -> bool {
    grants(role, section).contains(&action)
}

/// Whether `role` may view `section` at all (read access).
pub fn can_view(role: Role, section: Section) -> bool {
    can(role, section, Action::Read)
}

/// Whether `role` holds create, update AND delete on `section`.
///
/// Read is deliberately not part of the conjunction.
pub fn can_crud(role: Role, section: Section) -> bool {
    can(role, section, Action::Create)
        && can(role, section, Action::Update)
        && can(role, section, Action::Delete)
}
