//! Typed wrappers over the fixed resource collections.
//!
//! Each wrapper is a thin pass-through: `GET` (list/detail), `POST` (create),
//! `PATCH` (update), `DELETE`, against trailing-slash paths, with optional
//! query-string filters on the list endpoints.

pub mod branches;
pub mod companies;
pub mod drones;
pub mod flight_logs;
pub mod flight_orders;
pub mod operators;
pub mod users;

pub use branches::{Branch, BranchPatch, BranchesApi, NewBranch};
pub use companies::{CompaniesApi, Company, CompanyPatch, NewCompany};
pub use drones::{Drone, DronePatch, DronesApi, NewDrone};
pub use flight_logs::{FlightLog, FlightLogPatch, FlightLogsApi, NewFlightLog};
pub use flight_orders::{
    FlightOrder, FlightOrderPatch, FlightOrderStatus, FlightOrdersApi, NewFlightOrder,
};
pub use operators::{NewOperator, Operator, OperatorPatch, OperatorsApi};
pub use users::{NewUserAccount, UserAccount, UserAccountPatch, UsersApi};

use crate::client::ApiClient;

impl ApiClient {
    pub fn companies(&self) -> CompaniesApi<'_> {
        CompaniesApi::new(self)
    }

    pub fn branches(&self) -> BranchesApi<'_> {
        BranchesApi::new(self)
    }

    pub fn drones(&self) -> DronesApi<'_> {
        DronesApi::new(self)
    }

    pub fn operators(&self) -> OperatorsApi<'_> {
        OperatorsApi::new(self)
    }

    pub fn flight_orders(&self) -> FlightOrdersApi<'_> {
        FlightOrdersApi::new(self)
    }

    pub fn flight_logs(&self) -> FlightLogsApi<'_> {
        FlightLogsApi::new(self)
    }

    pub fn users(&self) -> UsersApi<'_> {
        UsersApi::new(self)
    }
}
