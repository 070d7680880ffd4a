//! Session lifecycle: login, refresh, logout, validity and permission checks.
//!
//! The session moves `Unauthenticated → Authenticated → (Refreshing) →
//! Authenticated | Unauthenticated`. Each operation issues at most one HTTP
//! call and is independent of every other: concurrent expired-token
//! detections may both trigger a refresh, and that race is accepted rather
//! than guarded.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use aeroops_auth::{Action, Role, Section, SessionTokens, UserProfile, matrix};
use aeroops_core::TenantId;

use crate::client::ApiClient;
use crate::error::{ClientError, ClientResult};
use crate::store::SessionData;

/// Login form.
#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Payload returned by the login and refresh endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub access: String,
    pub refresh: String,
    pub access_expiry: i64,
    pub refresh_expiry: i64,

    #[serde(default)]
    pub tenant_id: Option<TenantId>,

    #[serde(default)]
    pub user: Option<UserProfile>,

    #[serde(default)]
    pub tenant: Option<Value>,
}

#[derive(Debug, Serialize)]
struct RefreshRequest<'a> {
    refresh: &'a str,
}

/// Auth surface of the API client.
#[derive(Debug)]
pub struct AuthApi<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    pub fn auth(&self) -> AuthApi<'_> {
        AuthApi { client: self }
    }
}

impl AuthApi<'_> {
    /// Authenticate and persist the session.
    ///
    /// Empty email or password is rejected locally, without touching the
    /// network. A rejected login clears any previous token/tenant state
    /// before surfacing the server's message.
    pub async fn login(&self, credentials: &Credentials) -> ClientResult<SessionData> {
        if credentials.email.trim().is_empty() {
            return Err(ClientError::validation("email is required"));
        }
        if credentials.password.is_empty() {
            return Err(ClientError::validation("password is required"));
        }

        match self
            .client
            .post_json_anon::<_, LoginResponse>("/auth/login/", credentials)
            .await
        {
            Ok(resp) => {
                let data = session_from_response(resp, None);
                self.persist(&data)?;
                tracing::info!(tenant = ?data.tenant_id, "login succeeded");
                Ok(data)
            }
            Err(err) => {
                self.clear_local();
                Err(err)
            }
        }
    }

    /// Exchange the stored refresh token for a fresh token pair.
    ///
    /// On success the new session is persisted exactly as at login; the
    /// cached user/tenant payloads are kept when the response omits them.
    /// On failure the token state is cleared.
    pub async fn refresh(&self) -> ClientResult<SessionData> {
        let Some(previous) = self.client.store().load() else {
            return Err(ClientError::validation("no session to refresh"));
        };
        let Some(tokens) = previous.tokens.clone() else {
            return Err(ClientError::validation("no refresh token stored"));
        };

        let request = RefreshRequest {
            refresh: &tokens.refresh,
        };
        match self
            .client
            .post_json_anon::<_, LoginResponse>("/auth/refresh/", &request)
            .await
        {
            Ok(resp) => {
                let data = session_from_response(resp, Some(previous));
                self.persist(&data)?;
                tracing::debug!("token refresh succeeded");
                Ok(data)
            }
            Err(err) => {
                self.clear_local();
                Err(err)
            }
        }
    }

    /// Invalidate the session server-side (best-effort) and clear all local
    /// token state regardless of the network outcome.
    pub async fn logout(&self) -> ClientResult<()> {
        if let Some(tokens) = self.client.store().load().and_then(|s| s.tokens) {
            let request = RefreshRequest {
                refresh: &tokens.refresh,
            };
            if let Err(err) = self
                .client
                .post_json_anon::<_, Value>("/auth/logout/", &request)
                .await
            {
                tracing::debug!("logout request failed, clearing local session anyway: {err}");
            }
        }

        self.client
            .store()
            .clear()
            .map_err(|e| ClientError::storage(e.to_string()))
    }

    /// Whether the stored access token is inside its expiry window right now.
    /// Pure and synchronous.
    pub fn access_token_valid(&self) -> bool {
        self.tokens()
            .map(|t| t.access_valid(Utc::now()))
            .unwrap_or(false)
    }

    /// Eager-renewal check on the refresh token.
    ///
    /// If the refresh expiry has passed this reports `false` with no side
    /// effects. Otherwise it refreshes immediately and reports success only
    /// if a new access token was actually obtained.
    pub async fn refresh_token_valid(&self) -> bool {
        let Some(tokens) = self.tokens() else {
            return false;
        };
        if !tokens.refresh_valid(Utc::now()) {
            return false;
        }

        match self.refresh().await {
            Ok(data) => data
                .tokens
                .map(|t| !t.access.is_empty())
                .unwrap_or(false),
            Err(_) => false,
        }
    }

    /// Role derived from the currently stored profile. Recomputed on every
    /// call; a profile update is reflected immediately.
    pub fn current_role(&self) -> Role {
        Role::from_profile(
            self.client
                .store()
                .load()
                .and_then(|s| s.user)
                .as_ref(),
        )
    }

    pub fn can(&self, section: Section, action: Action) -> bool {
        matrix::can(self.current_role(), section, action)
    }

    pub fn can_view(&self, section: Section) -> bool {
        matrix::can_view(self.current_role(), section)
    }

    pub fn can_crud(&self, section: Section) -> bool {
        matrix::can_crud(self.current_role(), section)
    }

    fn tokens(&self) -> Option<SessionTokens> {
        self.client.store().load().and_then(|s| s.tokens)
    }

    fn persist(&self, data: &SessionData) -> ClientResult<()> {
        self.client
            .store()
            .save(data)
            .map_err(|e| ClientError::storage(e.to_string()))
    }

    fn clear_local(&self) {
        if let Err(err) = self.client.store().clear() {
            tracing::warn!("failed to clear session store: {err}");
        }
    }
}

fn session_from_response(resp: LoginResponse, previous: Option<SessionData>) -> SessionData {
    let previous = previous.unwrap_or_default();
    SessionData {
        tokens: Some(SessionTokens {
            access: resp.access,
            refresh: resp.refresh,
            access_expiry: resp.access_expiry,
            refresh_expiry: resp.refresh_expiry,
        }),
        tenant_id: resp.tenant_id.or(previous.tenant_id),
        user: resp.user.or(previous.user),
        tenant: resp.tenant.or(previous.tenant),
    }
}
