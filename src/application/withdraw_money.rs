use crate::domain::account::AccountId;
use crate::domain::ports::{AccountRepositoryBox, NotificationServiceBox};
use crate::error::Result;
use rust_decimal::Decimal;

/// Debits a single account and warns its holder when funds run low.
///
/// The workflow is linear: fetch, mutate, persist, notify. A domain failure
/// aborts before anything is persisted; a collaborator failure propagates
/// unchanged with no retry or rollback.
pub struct WithdrawMoney {
    accounts: AccountRepositoryBox,
    notifications: NotificationServiceBox,
}

impl WithdrawMoney {
    pub fn new(accounts: AccountRepositoryBox, notifications: NotificationServiceBox) -> Self {
        Self {
            accounts,
            notifications,
        }
    }

    pub async fn execute(&self, account_id: AccountId, amount: Decimal) -> Result<()> {
        let mut account = self.accounts.account_by_id(account_id).await?;

        account.withdraw(amount)?;

        self.accounts.update(account.clone()).await?;

        if account.approaching_low_funds() {
            self.notifications
                .notify_funds_low(account.user().email())
                .await?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::account::{Account, AccountPolicy};
    use crate::domain::ports::AccountRepository;
    use crate::domain::user::User;
    use crate::error::LedgerError;
    use crate::infrastructure::in_memory::{InMemoryAccountRepository, RecordingNotifier};
    use rust_decimal_macros::dec;

    fn seeded_account(balance: Decimal, withdrawn: Decimal) -> Account {
        let user = User::new(1, "Alice", "alice@example.com").unwrap();
        Account::new(
            1,
            user,
            AccountPolicy::default(),
            balance,
            withdrawn,
            dec!(0),
        )
    }

    #[tokio::test]
    async fn test_withdraw_updates_balance_and_withdrawn() {
        let repository = InMemoryAccountRepository::new();
        repository
            .update(seeded_account(dec!(1000), dec!(1000)))
            .await
            .unwrap();
        let notifier = RecordingNotifier::new();
        let workflow =
            WithdrawMoney::new(Box::new(repository.clone()), Box::new(notifier.clone()));

        workflow.execute(1, dec!(500)).await.unwrap();

        let account = repository.account_by_id(1).await.unwrap();
        assert_eq!(account.balance(), dec!(500));
        assert_eq!(account.withdrawn(), dec!(500));
        assert!(notifier.funds_low_alerts().await.is_empty());
    }

    #[tokio::test]
    async fn test_withdraw_insufficient_funds_is_not_persisted() {
        let repository = InMemoryAccountRepository::new();
        repository
            .update(seeded_account(dec!(1000), dec!(0)))
            .await
            .unwrap();
        let notifier = RecordingNotifier::new();
        let workflow =
            WithdrawMoney::new(Box::new(repository.clone()), Box::new(notifier.clone()));

        let result = workflow.execute(1, dec!(1500)).await;

        assert!(matches!(result, Err(LedgerError::InsufficientFunds)));
        let account = repository.account_by_id(1).await.unwrap();
        assert_eq!(account.balance(), dec!(1000));
        assert_eq!(account.withdrawn(), dec!(0));
        assert!(notifier.funds_low_alerts().await.is_empty());
    }

    #[tokio::test]
    async fn test_withdraw_below_threshold_notifies_once() {
        let repository = InMemoryAccountRepository::new();
        repository
            .update(seeded_account(dec!(1000), dec!(1000)))
            .await
            .unwrap();
        let notifier = RecordingNotifier::new();
        let workflow =
            WithdrawMoney::new(Box::new(repository.clone()), Box::new(notifier.clone()));

        workflow.execute(1, dec!(600)).await.unwrap();

        assert_eq!(
            notifier.funds_low_alerts().await,
            vec!["alice@example.com".to_string()]
        );
    }

    #[tokio::test]
    async fn test_withdraw_from_unknown_account_propagates_fault() {
        let repository = InMemoryAccountRepository::new();
        let notifier = RecordingNotifier::new();
        let workflow = WithdrawMoney::new(Box::new(repository), Box::new(notifier));

        let result = workflow.execute(42, dec!(10)).await;
        assert!(matches!(result, Err(LedgerError::AccountNotFound(42))));
    }
}
