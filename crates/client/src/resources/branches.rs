//! Branches (sucursales) of a company.

use serde::{Deserialize, Serialize};

use aeroops_core::{BranchId, CompanyId};

use crate::client::ApiClient;
use crate::error::ClientResult;
use crate::pagination::{ListQuery, Page};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Branch {
    pub id: BranchId,
    pub company: CompanyId,
    pub name: String,

    #[serde(default)]
    pub address: Option<String>,

    #[serde(default)]
    pub city: Option<String>,

    #[serde(default)]
    pub is_active: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewBranch {
    pub company: CompanyId,
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct BranchPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

#[derive(Debug)]
pub struct BranchesApi<'a> {
    client: &'a ApiClient,
}

impl<'a> BranchesApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self, query: &ListQuery) -> ClientResult<Page<Branch>> {
        self.client.get_json("/sucursales/", Some(query)).await
    }

    pub async fn get(&self, id: BranchId) -> ClientResult<Branch> {
        self.client.get_json(&format!("/sucursales/{id}/"), None).await
    }

    pub async fn create(&self, branch: &NewBranch) -> ClientResult<Branch> {
        self.client.post_json("/sucursales/", branch).await
    }

    pub async fn update(&self, id: BranchId, patch: &BranchPatch) -> ClientResult<Branch> {
        self.client.patch_json(&format!("/sucursales/{id}/"), patch).await
    }

    pub async fn delete(&self, id: BranchId) -> ClientResult<()> {
        self.client.delete(&format!("/sucursales/{id}/")).await
    }
}
