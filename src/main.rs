use clap::Parser;
use miette::{IntoDiagnostic, Result};
use moneybox::application::transfer_money::TransferMoney;
use moneybox::application::withdraw_money::WithdrawMoney;
use moneybox::domain::ports::AccountRepository;
use moneybox::error::LedgerError;
use moneybox::infrastructure::console::ConsoleNotifier;
use moneybox::infrastructure::in_memory::InMemoryAccountRepository;
use moneybox::interfaces::csv::account_reader::AccountReader;
use moneybox::interfaces::csv::account_writer::AccountWriter;
use moneybox::interfaces::csv::operation_reader::{OperationReader, OperationType};
use std::fs::File;
use std::io;
use std::path::PathBuf;

/// Replays a ledger session: seeds accounts from a CSV file, applies the
/// recorded operations, and prints the final account table to stdout.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input operations CSV file (op,from,to,amount)
    operations: PathBuf,

    /// Seed accounts CSV file (account,user,name,email,balance,withdrawn,paid_in)
    #[arg(long)]
    accounts: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let repository = InMemoryAccountRepository::new();
    let seed_file = File::open(&cli.accounts).into_diagnostic()?;
    for account in AccountReader::new(seed_file).accounts() {
        let account = account.into_diagnostic()?;
        repository.update(account).await.into_diagnostic()?;
    }

    let withdraw_money = WithdrawMoney::new(
        Box::new(repository.clone()),
        Box::new(ConsoleNotifier::new()),
    );
    let transfer_money = TransferMoney::new(
        Box::new(repository.clone()),
        Box::new(ConsoleNotifier::new()),
    );

    // Rejected operations are reported and the replay continues.
    let operations_file = File::open(&cli.operations).into_diagnostic()?;
    for operation in OperationReader::new(operations_file).operations() {
        match operation {
            Ok(operation) => {
                let outcome = match operation.op {
                    OperationType::Withdraw => {
                        withdraw_money
                            .execute(operation.from, operation.amount)
                            .await
                    }
                    OperationType::Transfer => match operation.to {
                        Some(to) => {
                            transfer_money
                                .execute(operation.from, to, operation.amount)
                                .await
                        }
                        None => Err(LedgerError::ValidationError(
                            "transfer is missing a destination account".to_string(),
                        )),
                    },
                };
                if let Err(e) = outcome {
                    eprintln!("Error applying operation: {e}");
                }
            }
            Err(e) => {
                eprintln!("Error reading operation: {e}");
            }
        }
    }

    let accounts = repository.all_accounts().await;

    let stdout = io::stdout();
    let writer = AccountWriter::new(stdout.lock());
    writer.write_accounts(&accounts).into_diagnostic()?;

    Ok(())
}
