use super::account::{Account, AccountId};
use crate::error::Result;
use async_trait::async_trait;

pub type AccountRepositoryBox = Box<dyn AccountRepository>;
pub type NotificationServiceBox = Box<dyn NotificationService>;

/// Where accounts live between workflow runs.
///
/// The workflows fetch an account, mutate it in memory, and hand it back.
/// Whether an unknown id fails or returns a sentinel, and what durability
/// `update` actually provides, is the adapter's decision; the core
/// propagates adapter faults unchanged and never retries.
#[async_trait]
pub trait AccountRepository: Send + Sync {
    async fn account_by_id(&self, id: AccountId) -> Result<Account>;

    /// Replaces the stored account keyed by its id. Fire-and-forget: the
    /// core does not expect a durability confirmation.
    async fn update(&self, account: Account) -> Result<()>;
}

/// Delivery channel for threshold alerts. Best-effort; the core does not
/// inspect delivery outcomes beyond propagating the error.
#[async_trait]
pub trait NotificationService: Send + Sync {
    async fn notify_funds_low(&self, email: &str) -> Result<()>;
    async fn notify_approaching_pay_in_limit(&self, email: &str) -> Result<()>;
}
