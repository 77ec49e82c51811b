use crate::domain::account::{Account, AccountId};
use crate::domain::ports::{AccountRepository, NotificationService};
use crate::error::{LedgerError, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A thread-safe in-memory account repository.
///
/// Uses `Arc<RwLock<HashMap<AccountId, Account>>>` for shared access.
/// Backs the demo binary and the test suite; a production deployment would
/// put a database adapter behind the same port.
#[derive(Default, Clone)]
pub struct InMemoryAccountRepository {
    accounts: Arc<RwLock<HashMap<AccountId, Account>>>,
}

impl InMemoryAccountRepository {
    /// Creates a new, empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every stored account, ordered by id.
    pub async fn all_accounts(&self) -> Vec<Account> {
        let accounts = self.accounts.read().await;
        let mut all: Vec<Account> = accounts.values().cloned().collect();
        all.sort_by_key(|account| account.id());
        all
    }
}

#[async_trait]
impl AccountRepository for InMemoryAccountRepository {
    async fn account_by_id(&self, id: AccountId) -> Result<Account> {
        let accounts = self.accounts.read().await;
        accounts
            .get(&id)
            .cloned()
            .ok_or(LedgerError::AccountNotFound(id))
    }

    async fn update(&self, account: Account) -> Result<()> {
        let mut accounts = self.accounts.write().await;
        accounts.insert(account.id(), account);
        Ok(())
    }
}

/// A notification double that records every alert instead of delivering it.
///
/// Lets tests assert which addresses were notified, and how often.
#[derive(Default, Clone)]
pub struct RecordingNotifier {
    funds_low: Arc<RwLock<Vec<String>>>,
    pay_in_limit: Arc<RwLock<Vec<String>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Addresses notified of low funds, in delivery order.
    pub async fn funds_low_alerts(&self) -> Vec<String> {
        self.funds_low.read().await.clone()
    }

    /// Addresses notified of the approaching pay-in limit, in delivery order.
    pub async fn pay_in_limit_alerts(&self) -> Vec<String> {
        self.pay_in_limit.read().await.clone()
    }
}

#[async_trait]
impl NotificationService for RecordingNotifier {
    async fn notify_funds_low(&self, email: &str) -> Result<()> {
        self.funds_low.write().await.push(email.to_string());
        Ok(())
    }

    async fn notify_approaching_pay_in_limit(&self, email: &str) -> Result<()> {
        self.pay_in_limit.write().await.push(email.to_string());
        Ok(())
    }
}
