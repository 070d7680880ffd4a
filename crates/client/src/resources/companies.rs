//! Companies (empresas).

use serde::{Deserialize, Serialize};

use aeroops_core::CompanyId;

use crate::client::ApiClient;
use crate::error::ClientResult;
use crate::pagination::{ListQuery, Page};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    pub id: CompanyId,
    pub name: String,

    /// Tax identifier.
    #[serde(default)]
    pub rfc: Option<String>,

    #[serde(default)]
    pub contact_email: Option<String>,

    #[serde(default)]
    pub phone: Option<String>,

    #[serde(default)]
    pub is_active: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewCompany {
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub rfc: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// Partial update; only set fields are sent.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CompanyPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub rfc: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

#[derive(Debug)]
pub struct CompaniesApi<'a> {
    client: &'a ApiClient,
}

impl<'a> CompaniesApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self, query: &ListQuery) -> ClientResult<Page<Company>> {
        self.client.get_json("/empresas/", Some(query)).await
    }

    pub async fn get(&self, id: CompanyId) -> ClientResult<Company> {
        self.client.get_json(&format!("/empresas/{id}/"), None).await
    }

    pub async fn create(&self, company: &NewCompany) -> ClientResult<Company> {
        self.client.post_json("/empresas/", company).await
    }

    pub async fn update(&self, id: CompanyId, patch: &CompanyPatch) -> ClientResult<Company> {
        self.client.patch_json(&format!("/empresas/{id}/"), patch).await
    }

    pub async fn delete(&self, id: CompanyId) -> ClientResult<()> {
        self.client.delete(&format!("/empresas/{id}/")).await
    }
}
