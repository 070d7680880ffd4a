//! Flight orders (ordenes de vuelo).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use aeroops_core::{BranchId, CompanyId, DroneId, FlightOrderId, OperatorId};

use crate::client::ApiClient;
use crate::error::ClientResult;
use crate::pagination::{ListQuery, Page};

/// Lifecycle of a flight order as reported by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlightOrderStatus {
    Programada,
    EnProceso,
    Completada,
    Cancelada,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightOrder {
    pub id: FlightOrderId,
    pub company: CompanyId,
    pub drone: DroneId,
    pub operator: OperatorId,
    pub scheduled_date: NaiveDate,
    pub status: FlightOrderStatus,

    #[serde(default)]
    pub branch: Option<BranchId>,

    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewFlightOrder {
    pub company: CompanyId,
    pub drone: DroneId,
    pub operator: OperatorId,
    pub scheduled_date: NaiveDate,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch: Option<BranchId>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct FlightOrderPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drone: Option<DroneId>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub operator: Option<OperatorId>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_date: Option<NaiveDate>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<FlightOrderStatus>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch: Option<BranchId>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug)]
pub struct FlightOrdersApi<'a> {
    client: &'a ApiClient,
}

impl<'a> FlightOrdersApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self, query: &ListQuery) -> ClientResult<Page<FlightOrder>> {
        self.client.get_json("/ordenes-vuelo/", Some(query)).await
    }

    pub async fn get(&self, id: FlightOrderId) -> ClientResult<FlightOrder> {
        self.client.get_json(&format!("/ordenes-vuelo/{id}/"), None).await
    }

    pub async fn create(&self, order: &NewFlightOrder) -> ClientResult<FlightOrder> {
        self.client.post_json("/ordenes-vuelo/", order).await
    }

    pub async fn update(
        &self,
        id: FlightOrderId,
        patch: &FlightOrderPatch,
    ) -> ClientResult<FlightOrder> {
        self.client.patch_json(&format!("/ordenes-vuelo/{id}/"), patch).await
    }

    pub async fn delete(&self, id: FlightOrderId) -> ClientResult<()> {
        self.client.delete(&format!("/ordenes-vuelo/{id}/")).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_uses_snake_case_wire_names() {
        assert_eq!(
            serde_json::to_string(&FlightOrderStatus::EnProceso).unwrap(),
            "\"en_proceso\""
        );
        let status: FlightOrderStatus = serde_json::from_str("\"completada\"").unwrap();
        assert_eq!(status, FlightOrderStatus::Completada);
    }
}
