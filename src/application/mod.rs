pub mod transfer_money;
pub mod withdraw_money;
