use crate::domain::account::{Account, AccountId};
use crate::error::Result;
use rust_decimal::Decimal;
use serde::Serialize;
use std::io::Write;

#[derive(Serialize)]
struct AccountRow<'a> {
    account: AccountId,
    email: &'a str,
    balance: Decimal,
    withdrawn: Decimal,
    paid_in: Decimal,
}

/// Writes the final account table as CSV.
pub struct AccountWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> AccountWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    pub fn write_accounts(mut self, accounts: &[Account]) -> Result<()> {
        for account in accounts {
            self.writer.serialize(AccountRow {
                account: account.id(),
                email: account.user().email(),
                balance: account.balance(),
                withdrawn: account.withdrawn(),
                paid_in: account.paid_in(),
            })?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::account::AccountPolicy;
    use crate::domain::user::User;
    use rust_decimal_macros::dec;

    #[test]
    fn test_writer_emits_header_and_rows() {
        let user = User::new(10, "Alice", "alice@example.com").unwrap();
        let account = Account::new(
            1,
            user,
            AccountPolicy::default(),
            dec!(400),
            dec!(600),
            dec!(0),
        );

        let mut out = Vec::new();
        AccountWriter::new(&mut out)
            .write_accounts(&[account])
            .unwrap();

        let written = String::from_utf8(out).unwrap();
        assert!(written.starts_with("account,email,balance,withdrawn,paid_in"));
        assert!(written.contains("1,alice@example.com,400,600,0"));
    }
}
