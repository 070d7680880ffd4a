//! Flight logs (bitácora de vuelo).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use aeroops_core::{FlightLogId, FlightOrderId};

use crate::client::ApiClient;
use crate::error::ClientResult;
use crate::pagination::{ListQuery, Page};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightLog {
    pub id: FlightLogId,
    pub flight_order: FlightOrderId,
    pub started_at: DateTime<Utc>,

    #[serde(default)]
    pub ended_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub duration_minutes: Option<u32>,

    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewFlightLog {
    pub flight_order: FlightOrderId,
    pub started_at: DateTime<Utc>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ended_at: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct FlightLogPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub started_at: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ended_at: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug)]
pub struct FlightLogsApi<'a> {
    client: &'a ApiClient,
}

impl<'a> FlightLogsApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self, query: &ListQuery) -> ClientResult<Page<FlightLog>> {
        self.client.get_json("/bitacora-vuelo/", Some(query)).await
    }

    pub async fn get(&self, id: FlightLogId) -> ClientResult<FlightLog> {
        self.client.get_json(&format!("/bitacora-vuelo/{id}/"), None).await
    }

    pub async fn create(&self, log: &NewFlightLog) -> ClientResult<FlightLog> {
        self.client.post_json("/bitacora-vuelo/", log).await
    }

    pub async fn update(&self, id: FlightLogId, patch: &FlightLogPatch) -> ClientResult<FlightLog> {
        self.client.patch_json(&format!("/bitacora-vuelo/{id}/"), patch).await
    }

    pub async fn delete(&self, id: FlightLogId) -> ClientResult<()> {
        self.client.delete(&format!("/bitacora-vuelo/{id}/")).await
    }
}
