//! Drone operators (operadores), including credential-image upload.

use reqwest::multipart;
use serde::{Deserialize, Serialize};

use aeroops_core::{CompanyId, OperatorId};

use crate::client::ApiClient;
use crate::error::ClientResult;
use crate::pagination::{ListQuery, Page};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Operator {
    pub id: OperatorId,
    pub first_name: String,
    pub last_name: String,
    pub license_number: String,

    #[serde(default)]
    pub company: Option<CompanyId>,

    #[serde(default)]
    pub email: Option<String>,

    /// URL of the uploaded credential image, if any.
    #[serde(default)]
    pub credential_image: Option<String>,

    #[serde(default)]
    pub is_active: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewOperator {
    pub first_name: String,
    pub last_name: String,
    pub license_number: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<CompanyId>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct OperatorPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub license_number: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<CompanyId>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

#[derive(Debug)]
pub struct OperatorsApi<'a> {
    client: &'a ApiClient,
}

impl<'a> OperatorsApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self, query: &ListQuery) -> ClientResult<Page<Operator>> {
        self.client.get_json("/operadores/", Some(query)).await
    }

    pub async fn get(&self, id: OperatorId) -> ClientResult<Operator> {
        self.client.get_json(&format!("/operadores/{id}/"), None).await
    }

    pub async fn create(&self, operator: &NewOperator) -> ClientResult<Operator> {
        self.client.post_json("/operadores/", operator).await
    }

    pub async fn update(&self, id: OperatorId, patch: &OperatorPatch) -> ClientResult<Operator> {
        self.client.patch_json(&format!("/operadores/{id}/"), patch).await
    }

    pub async fn delete(&self, id: OperatorId) -> ClientResult<()> {
        self.client.delete(&format!("/operadores/{id}/")).await
    }

    /// Upload the operator's credential image (multipart POST).
    ///
    /// Returns the operator with `credential_image` pointing at the stored
    /// file.
    pub async fn upload_credential(
        &self,
        id: OperatorId,
        file_name: impl Into<String>,
        bytes: Vec<u8>,
    ) -> ClientResult<Operator> {
        let part = multipart::Part::bytes(bytes).file_name(file_name.into());
        let form = multipart::Form::new().part("credencial", part);
        self.client
            .post_multipart(&format!("/operadores/{id}/credencial/"), form)
            .await
    }
}
