//! User accounts (usuarios). Superuser-only section.

use serde::{Deserialize, Serialize};

use aeroops_core::UserId;

use crate::client::ApiClient;
use crate::error::ClientResult;
use crate::pagination::{ListQuery, Page};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserAccount {
    pub id: UserId,
    pub email: String,

    #[serde(default)]
    pub first_name: String,

    #[serde(default)]
    pub last_name: String,

    #[serde(default)]
    pub is_superuser: bool,

    #[serde(default)]
    pub is_active: bool,

    /// Group names; the console derives the role from the first one.
    #[serde(default)]
    pub groups: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewUserAccount {
    pub email: String,
    pub password: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub groups: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct UserAccountPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub groups: Option<Vec<String>>,
}

#[derive(Debug)]
pub struct UsersApi<'a> {
    client: &'a ApiClient,
}

impl<'a> UsersApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self, query: &ListQuery) -> ClientResult<Page<UserAccount>> {
        self.client.get_json("/usuarios/", Some(query)).await
    }

    pub async fn get(&self, id: UserId) -> ClientResult<UserAccount> {
        self.client.get_json(&format!("/usuarios/{id}/"), None).await
    }

    pub async fn create(&self, user: &NewUserAccount) -> ClientResult<UserAccount> {
        self.client.post_json("/usuarios/", user).await
    }

    pub async fn update(&self, id: UserId, patch: &UserAccountPatch) -> ClientResult<UserAccount> {
        self.client.patch_json(&format!("/usuarios/{id}/"), patch).await
    }

    pub async fn delete(&self, id: UserId) -> ClientResult<()> {
        self.client.delete(&format!("/usuarios/{id}/")).await
    }
}
