//! REST identity gateway adapter
//!
//! Client for the external identity provider's account API:
//!
//! - `POST {base}/accounts:signUp`             create an account
//! - `POST {base}/accounts:signInWithPassword` sign in
//! - `POST {base}/accounts:sendOobCode`        send verification / reset email
//! - `POST {base}/accounts:update`             update profile attributes
//!
//! The provider owns all credential handling; this adapter only moves
//! requests and mirrors the resulting sign-in state into a watch channel so
//! gates and views can subscribe to changes.

use std::time::Duration;

use async_trait::async_trait;
use guidepath_domain::{GuidepathError, IdentityConfig, IdentityState, Result, UserIdentity};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tokio::sync::watch;
use tracing::{info, instrument};

use guidepath_core::IdentityGateway;

/// REST adapter for the external identity gateway
pub struct RestIdentityGateway {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
    state_tx: watch::Sender<IdentityState>,
}

#[derive(Debug, Serialize)]
struct CredentialsRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct IdentityResponse {
    uid: String,
    email: String,
    #[serde(default)]
    email_verified: bool,
    #[serde(default)]
    display_name: Option<String>,
}

impl From<IdentityResponse> for UserIdentity {
    fn from(response: IdentityResponse) -> Self {
        Self {
            uid: response.uid,
            email: response.email,
            email_verified: response.email_verified,
            display_name: response.display_name,
        }
    }
}

impl RestIdentityGateway {
    /// Create a new gateway client from configuration.
    ///
    /// The initial state is `Unknown` until [`Self::initialize`] runs.
    ///
    /// # Errors
    /// Returns `Config` if the HTTP client cannot be constructed.
    pub fn new(config: &IdentityConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| GuidepathError::Config(format!("failed to build HTTP client: {e}")))?;
        let (state_tx, _rx) = watch::channel(IdentityState::Unknown);

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            state_tx,
        })
    }

    /// Deliver the first notification.
    ///
    /// No session persistence is in scope, so the first confirmed state is
    /// always `Absent`. Until this runs, subscribers see `Unknown` and gates
    /// answer `Pending`.
    pub fn initialize(&self) {
        let _ = self.state_tx.send(IdentityState::Absent);
    }

    fn endpoint(&self, action: &str) -> String {
        format!("{}/accounts:{action}", self.base_url)
    }

    fn request(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.api_key {
            Some(key) => builder.query(&[("key", key)]),
            None => builder,
        }
    }

    async fn post_credentials(&self, action: &str, email: &str, password: &str) -> Result<UserIdentity> {
        let response = self
            .request(
                self.client
                    .post(self.endpoint(action))
                    .json(&CredentialsRequest { email, password }),
            )
            .send()
            .await
            .map_err(|e| GuidepathError::IdentityUpdateFailed(e.to_string()))?;

        let status = response.status();
        if status.is_client_error() {
            let message = response.text().await.unwrap_or_default();
            return Err(GuidepathError::NotAuthenticated(if message.is_empty() {
                format!("identity gateway rejected {action}")
            } else {
                message
            }));
        }
        if !status.is_success() {
            return Err(GuidepathError::IdentityUpdateFailed(format!(
                "{action} returned {status}"
            )));
        }

        let identity: UserIdentity = response
            .json::<IdentityResponse>()
            .await
            .map_err(|e| GuidepathError::IdentityUpdateFailed(e.to_string()))?
            .into();
        Ok(identity)
    }

    async fn post_ok(&self, action: &str, body: serde_json::Value) -> Result<()> {
        let response = self
            .request(self.client.post(self.endpoint(action)).json(&body))
            .send()
            .await
            .map_err(|e| GuidepathError::IdentityUpdateFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(GuidepathError::IdentityUpdateFailed(format!(
                "{action} returned {status}"
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl IdentityGateway for RestIdentityGateway {
    fn current_identity(&self) -> IdentityState {
        self.state_tx.borrow().clone()
    }

    fn subscribe(&self) -> watch::Receiver<IdentityState> {
        self.state_tx.subscribe()
    }

    #[instrument(skip(self, password))]
    async fn sign_up(&self, email: &str, password: &str) -> Result<UserIdentity> {
        let identity = self.post_credentials("signUp", email, password).await?;
        info!(uid = %identity.uid, "account created at identity gateway");
        let _ = self.state_tx.send(IdentityState::Present(identity.clone()));
        Ok(identity)
    }

    #[instrument(skip(self, password))]
    async fn sign_in(&self, email: &str, password: &str) -> Result<UserIdentity> {
        let identity = self.post_credentials("signInWithPassword", email, password).await?;
        info!(uid = %identity.uid, "signed in at identity gateway");
        let _ = self.state_tx.send(IdentityState::Present(identity.clone()));
        Ok(identity)
    }

    async fn send_verification_email(&self, email: &str) -> Result<()> {
        self.post_ok("sendOobCode", json!({ "requestType": "VERIFY_EMAIL", "email": email }))
            .await
    }

    async fn send_password_reset(&self, email: &str) -> Result<()> {
        self.post_ok("sendOobCode", json!({ "requestType": "PASSWORD_RESET", "email": email }))
            .await
    }

    async fn sign_out(&self) -> Result<()> {
        // The session is client-held; dropping it needs no gateway call.
        let _ = self.state_tx.send(IdentityState::Absent);
        Ok(())
    }

    async fn update_display_name(&self, uid: &str, display_name: &str) -> Result<()> {
        self.post_ok("update", json!({ "uid": uid, "displayName": display_name })).await?;

        // Keep the mirrored state current for subscribers.
        let current = self.state_tx.borrow().clone();
        if let IdentityState::Present(mut identity) = current {
            if identity.uid == uid {
                identity.display_name = Some(display_name.to_string());
                let _ = self.state_tx.send(IdentityState::Present(identity));
            }
        }
        Ok(())
    }
}
