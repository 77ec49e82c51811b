use crate::domain::user::User;
use crate::error::{LedgerError, Result};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

pub type AccountId = u32;

/// Business limits applied to an account.
///
/// Injected at construction rather than baked in as constants so a
/// deployment can vary policy, and so boundary values can be exercised in
/// tests without recompilation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AccountPolicy {
    /// Ceiling on cumulative deposits the account may ever receive.
    pub pay_in_limit: Decimal,
    /// Floor the balance may never drop below.
    pub balance_limit: Decimal,
    /// Margin at which the holder is warned they are near a limit.
    pub notify_threshold: Decimal,
}

impl Default for AccountPolicy {
    fn default() -> Self {
        Self {
            pay_in_limit: dec!(4000),
            balance_limit: Decimal::ZERO,
            notify_threshold: dec!(500),
        }
    }
}

/// A single ledger account.
///
/// The monetary fields are private and move only through [`Account::withdraw`]
/// and [`Account::pay_in`], which enforce the policy invariants atomically;
/// there is no setter bypass. A failed operation leaves the account untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    id: AccountId,
    user: User,
    policy: AccountPolicy,
    balance: Decimal,
    // Mirrors the balance movement on each withdrawal, so it grows more
    // negative over time instead of counting magnitude the way `paid_in`
    // does. Kept as-is pending product clarification.
    withdrawn: Decimal,
    paid_in: Decimal,
}

impl Account {
    pub fn new(
        id: AccountId,
        user: User,
        policy: AccountPolicy,
        balance: Decimal,
        withdrawn: Decimal,
        paid_in: Decimal,
    ) -> Self {
        Self {
            id,
            user,
            policy,
            balance,
            withdrawn,
            paid_in,
        }
    }

    pub fn id(&self) -> AccountId {
        self.id
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn policy(&self) -> &AccountPolicy {
        &self.policy
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    pub fn withdrawn(&self) -> Decimal {
        self.withdrawn
    }

    pub fn paid_in(&self) -> Decimal {
        self.paid_in
    }

    /// Debits the account.
    ///
    /// Fails with [`LedgerError::InsufficientFunds`] when the debit would
    /// take the balance below the policy floor. Amounts are not checked for
    /// sign here; that is the caller's responsibility.
    pub fn withdraw(&mut self, amount: Decimal) -> Result<()> {
        if self.balance - amount < self.policy.balance_limit {
            return Err(LedgerError::InsufficientFunds);
        }

        self.balance -= amount;
        self.withdrawn -= amount;
        Ok(())
    }

    /// Credits the account.
    ///
    /// Fails with [`LedgerError::PayInLimitExceeded`] when the deposit would
    /// push cumulative pay-ins past the policy ceiling.
    pub fn pay_in(&mut self, amount: Decimal) -> Result<()> {
        if self.paid_in + amount > self.policy.pay_in_limit {
            return Err(LedgerError::PayInLimitExceeded);
        }

        self.balance += amount;
        self.paid_in += amount;
        Ok(())
    }

    /// True when the balance has dropped under the notify threshold.
    pub fn approaching_low_funds(&self) -> bool {
        self.balance < self.policy.notify_threshold
    }

    /// True when cumulative pay-ins are within the notify threshold of the
    /// pay-in ceiling.
    pub fn approaching_pay_in_limit(&self) -> bool {
        self.paid_in + self.policy.notify_threshold > self.policy.pay_in_limit
    }
}
