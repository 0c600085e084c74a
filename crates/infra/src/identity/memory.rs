//! In-memory identity gateway
//!
//! Backs the `memory` backend for local development and tests. Accounts live
//! in a map keyed by email; outbound verification and reset emails land in
//! an inspectable outbox instead of being sent. The `mark_verified` helper
//! stands in for the user clicking the verification link.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use guidepath_domain::{GuidepathError, IdentityState, Result, UserIdentity};
use sha2::{Digest, Sha256};
use tokio::sync::watch;
use tracing::info;
use uuid::Uuid;

use guidepath_core::IdentityGateway;

/// Kind of email the gateway was asked to send
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutboxEmailKind {
    Verification,
    PasswordReset,
}

/// A captured outbound email
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboxEmail {
    pub kind: OutboxEmailKind,
    pub email: String,
}

struct MemoryAccount {
    uid: String,
    password_digest: String,
    email_verified: bool,
    display_name: Option<String>,
}

impl MemoryAccount {
    fn identity(&self, email: &str) -> UserIdentity {
        UserIdentity {
            uid: self.uid.clone(),
            email: email.to_string(),
            email_verified: self.email_verified,
            display_name: self.display_name.clone(),
        }
    }
}

/// In-memory implementation of [`IdentityGateway`]
pub struct MemoryIdentityGateway {
    accounts: Mutex<HashMap<String, MemoryAccount>>,
    outbox: Mutex<Vec<OutboxEmail>>,
    state_tx: watch::Sender<IdentityState>,
}

impl Default for MemoryIdentityGateway {
    fn default() -> Self {
        let (state_tx, _rx) = watch::channel(IdentityState::Unknown);
        Self { accounts: Mutex::new(HashMap::new()), outbox: Mutex::new(Vec::new()), state_tx }
    }
}

impl MemoryIdentityGateway {
    /// Create a gateway with no accounts; state starts `Unknown`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Deliver the first notification (`Absent` - nobody is signed in).
    pub fn initialize(&self) {
        let _ = self.state_tx.send(IdentityState::Absent);
    }

    /// Mark an account's email as verified, as the verification link would.
    ///
    /// # Errors
    /// Returns `IdentityUpdateFailed` if no account exists for the email.
    pub fn mark_verified(&self, email: &str) -> Result<()> {
        let mut accounts = lock(&self.accounts);
        let account = accounts
            .get_mut(email)
            .ok_or_else(|| GuidepathError::IdentityUpdateFailed(format!("no account for {email}")))?;
        account.email_verified = true;

        let identity = account.identity(email);
        drop(accounts);
        self.refresh_if_current(&identity);
        Ok(())
    }

    /// Captured outbound emails, oldest first.
    pub fn outbox(&self) -> Vec<OutboxEmail> {
        lock(&self.outbox).clone()
    }

    fn refresh_if_current(&self, identity: &UserIdentity) {
        let current = self.state_tx.borrow().clone();
        if let IdentityState::Present(signed_in) = current {
            if signed_in.uid == identity.uid {
                let _ = self.state_tx.send(IdentityState::Present(identity.clone()));
            }
        }
    }
}

fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    // Mutex poisoning only happens if a holder panicked; propagating the
    // inner data is still sound for this test/dev adapter.
    match mutex.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}

fn digest(password: &str) -> String {
    hex::encode(Sha256::digest(password.as_bytes()))
}

#[async_trait]
impl IdentityGateway for MemoryIdentityGateway {
    fn current_identity(&self) -> IdentityState {
        self.state_tx.borrow().clone()
    }

    fn subscribe(&self) -> watch::Receiver<IdentityState> {
        self.state_tx.subscribe()
    }

    async fn sign_up(&self, email: &str, password: &str) -> Result<UserIdentity> {
        let mut accounts = lock(&self.accounts);
        if accounts.contains_key(email) {
            return Err(GuidepathError::NotAuthenticated(format!(
                "an account already exists for {email}"
            )));
        }

        let account = MemoryAccount {
            uid: Uuid::new_v4().to_string(),
            password_digest: digest(password),
            email_verified: false,
            display_name: None,
        };
        let identity = account.identity(email);
        accounts.insert(email.to_string(), account);
        drop(accounts);

        info!(uid = %identity.uid, "memory account created");
        let _ = self.state_tx.send(IdentityState::Present(identity.clone()));
        Ok(identity)
    }

    async fn sign_in(&self, email: &str, password: &str) -> Result<UserIdentity> {
        let accounts = lock(&self.accounts);
        let identity = accounts
            .get(email)
            .filter(|account| account.password_digest == digest(password))
            .map(|account| account.identity(email))
            .ok_or_else(|| {
                GuidepathError::NotAuthenticated("invalid email or password".into())
            })?;
        drop(accounts);

        let _ = self.state_tx.send(IdentityState::Present(identity.clone()));
        Ok(identity)
    }

    async fn send_verification_email(&self, email: &str) -> Result<()> {
        if !lock(&self.accounts).contains_key(email) {
            return Err(GuidepathError::IdentityUpdateFailed(format!("no account for {email}")));
        }
        lock(&self.outbox)
            .push(OutboxEmail { kind: OutboxEmailKind::Verification, email: email.to_string() });
        Ok(())
    }

    async fn send_password_reset(&self, email: &str) -> Result<()> {
        if !lock(&self.accounts).contains_key(email) {
            return Err(GuidepathError::IdentityUpdateFailed(format!("no account for {email}")));
        }
        lock(&self.outbox)
            .push(OutboxEmail { kind: OutboxEmailKind::PasswordReset, email: email.to_string() });
        Ok(())
    }

    async fn sign_out(&self) -> Result<()> {
        let _ = self.state_tx.send(IdentityState::Absent);
        Ok(())
    }

    async fn update_display_name(&self, uid: &str, display_name: &str) -> Result<()> {
        let mut accounts = lock(&self.accounts);
        let entry = accounts
            .iter_mut()
            .find(|(_, account)| account.uid == uid)
            .ok_or_else(|| GuidepathError::IdentityUpdateFailed(format!("no account with uid {uid}")))?;

        entry.1.display_name = Some(display_name.to_string());
        let identity = entry.1.identity(entry.0);
        drop(accounts);

        self.refresh_if_current(&identity);
        Ok(())
    }
}
