use crate::domain::account::AccountId;
use crate::domain::ports::{AccountRepositoryBox, NotificationServiceBox};
use crate::error::Result;
use rust_decimal::Decimal;

/// Moves money between two accounts and warns either holder who ends up
/// near a limit.
///
/// The destination credit is checked only after the source has been debited
/// in memory; since nothing is persisted until both mutations succeed, a
/// limit failure still aborts cleanly. The two `update` calls that follow
/// are independent. Ideally they would run in one transaction, but the
/// repository contract offers none, and this core does not invent one.
pub struct TransferMoney {
    accounts: AccountRepositoryBox,
    notifications: NotificationServiceBox,
}

impl TransferMoney {
    pub fn new(accounts: AccountRepositoryBox, notifications: NotificationServiceBox) -> Self {
        Self {
            accounts,
            notifications,
        }
    }

    pub async fn execute(
        &self,
        from_account_id: AccountId,
        to_account_id: AccountId,
        amount: Decimal,
    ) -> Result<()> {
        let mut from = self.accounts.account_by_id(from_account_id).await?;
        let mut to = self.accounts.account_by_id(to_account_id).await?;

        from.withdraw(amount)?;
        to.pay_in(amount)?;

        self.accounts.update(from.clone()).await?;
        self.accounts.update(to.clone()).await?;

        // Both thresholds are evaluated even if the first notification
        // fails; the earliest failure wins once both checks have run.
        let funds_low = if from.approaching_low_funds() {
            self.notifications
                .notify_funds_low(from.user().email())
                .await
        } else {
            Ok(())
        };

        let pay_in_limit = if to.approaching_pay_in_limit() {
            self.notifications
                .notify_approaching_pay_in_limit(to.user().email())
                .await
        } else {
            Ok(())
        };

        funds_low.and(pay_in_limit)
    }
}
