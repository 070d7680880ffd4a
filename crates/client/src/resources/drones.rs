//! Drone fleet.

use serde::{Deserialize, Serialize};

use aeroops_core::{CompanyId, DroneId};

use crate::client::ApiClient;
use crate::error::ClientResult;
use crate::pagination::{ListQuery, Page};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Drone {
    pub id: DroneId,
    pub company: CompanyId,
    pub serial_number: String,
    pub model: String,

    #[serde(default)]
    pub brand: Option<String>,

    #[serde(default)]
    pub weight_kg: Option<f64>,

    #[serde(default)]
    pub is_active: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewDrone {
    pub company: CompanyId,
    pub serial_number: String,
    pub model: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight_kg: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct DronePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serial_number: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight_kg: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

#[derive(Debug)]
pub struct DronesApi<'a> {
    client: &'a ApiClient,
}

impl<'a> DronesApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self, query: &ListQuery) -> ClientResult<Page<Drone>> {
        self.client.get_json("/drones/", Some(query)).await
    }

    pub async fn get(&self, id: DroneId) -> ClientResult<Drone> {
        self.client.get_json(&format!("/drones/{id}/"), None).await
    }

    pub async fn create(&self, drone: &NewDrone) -> ClientResult<Drone> {
        self.client.post_json("/drones/", drone).await
    }

    pub async fn update(&self, id: DroneId, patch: &DronePatch) -> ClientResult<Drone> {
        self.client.patch_json(&format!("/drones/{id}/"), patch).await
    }

    pub async fn delete(&self, id: DroneId) -> ClientResult<()> {
        self.client.delete(&format!("/drones/{id}/")).await
    }
}
