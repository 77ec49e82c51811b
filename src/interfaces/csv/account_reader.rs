use crate::domain::account::{Account, AccountId, AccountPolicy};
use crate::domain::user::{User, UserId};
use crate::error::Result;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::io::Read;

#[derive(Debug, Deserialize)]
struct AccountRow {
    account: AccountId,
    user: UserId,
    name: String,
    email: String,
    balance: Decimal,
    withdrawn: Decimal,
    paid_in: Decimal,
}

/// Reads seed accounts from a CSV source.
///
/// Each row carries the holder's details inline; the row is validated
/// through `User::new` before the account is built, so a malformed email
/// surfaces as an error for that row rather than a half-built account.
/// Accounts seeded this way run under the default policy.
pub struct AccountReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> AccountReader<R> {
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    pub fn accounts(self) -> impl Iterator<Item = Result<Account>> {
        self.reader.into_deserialize().map(|result| {
            let row: AccountRow = result?;
            let user = User::new(row.user, row.name, row.email)?;
            Ok(Account::new(
                row.account,
                user,
                AccountPolicy::default(),
                row.balance,
                row.withdrawn,
                row.paid_in,
            ))
        })
    }
}
