use moneybox::domain::account::{Account, AccountId, AccountPolicy};
use moneybox::domain::user::User;
use rust_decimal::Decimal;

pub fn account(
    id: AccountId,
    email: &str,
    balance: Decimal,
    withdrawn: Decimal,
    paid_in: Decimal,
) -> Account {
    let user = User::new(id, "Holder", email).unwrap();
    Account::new(
        id,
        user,
        AccountPolicy::default(),
        balance,
        withdrawn,
        paid_in,
    )
}
