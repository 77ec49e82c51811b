use crate::domain::ports::NotificationService;
use crate::error::Result;
use async_trait::async_trait;

/// Writes one line per alert to stderr.
///
/// Stands in for a real email or SMS channel in the demo binary; stderr is
/// used so alerts do not mix with the account table on stdout.
#[derive(Default, Clone, Copy)]
pub struct ConsoleNotifier;

impl ConsoleNotifier {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl NotificationService for ConsoleNotifier {
    async fn notify_funds_low(&self, email: &str) -> Result<()> {
        eprintln!("notify {email}: balance is running low");
        Ok(())
    }

    async fn notify_approaching_pay_in_limit(&self, email: &str) -> Result<()> {
        eprintln!("notify {email}: approaching the pay-in limit");
        Ok(())
    }
}
