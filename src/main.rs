use clap::{Parser, Subcommand, ValueEnum};
use miette::{IntoDiagnostic, Result};
use payment_orchestrator::domain::payment::PaymentId;
use payment_orchestrator::domain::ports::PaymentStoreBox;
use payment_orchestrator::infrastructure::in_memory::InMemoryPaymentStore;
#[cfg(feature = "storage-rocksdb")]
use payment_orchestrator::infrastructure::rocksdb::RocksDbPaymentStore;
use payment_orchestrator::interfaces::csv::payment_writer::PaymentWriter;
use payment_orchestrator::interfaces::csv::request_reader::RequestReader;
use payment_orchestrator::interfaces::service::{CreatePaymentRequest, PaymentService};
use rust_decimal::Decimal;
use serde::Serialize;
use std::fs::File;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to persistent database (optional). If provided, uses RocksDB.
    #[arg(long, global = true)]
    db_path: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a single pending payment and print it as JSON
    Create {
        /// Customer the payment belongs to
        customer: String,
        /// Payment amount, e.g. 49.99
        amount: Decimal,
    },
    /// Batch-create payments from a CSV file with a customerId,amount header
    Import {
        /// Input requests CSV file
        input: PathBuf,
    },
    /// Print all payments, most recent first
    List {
        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },
    /// Confirm a pending payment and print the updated record as JSON
    Confirm {
        /// Id of the payment to confirm
        id: PaymentId,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Json,
    Csv,
}

fn build_store(db_path: Option<&PathBuf>) -> Result<PaymentStoreBox> {
    #[cfg(feature = "storage-rocksdb")]
    if let Some(path) = db_path {
        let store = RocksDbPaymentStore::open(path).into_diagnostic()?;
        return Ok(Box::new(store));
    }

    #[cfg(not(feature = "storage-rocksdb"))]
    if db_path.is_some() {
        eprintln!(
            "WARNING: Persistent storage requested via --db-path, but 'storage-rocksdb' \
             feature is not enabled. Falling back to In-Memory storage."
        );
    }

    Ok(Box::new(InMemoryPaymentStore::new()))
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(value).into_diagnostic()?
    );
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let store = build_store(cli.db_path.as_ref())?;
    let service = PaymentService::new(store);

    match cli.command {
        Commands::Create { customer, amount } => {
            let payment = service
                .create_payment(CreatePaymentRequest {
                    customer_id: customer,
                    amount,
                })
                .await
                .into_diagnostic()?;
            print_json(&payment)?;
        }
        Commands::Import { input } => {
            let file = File::open(input).into_diagnostic()?;
            let reader = RequestReader::new(file);
            for request in reader.requests() {
                match request {
                    Ok(request) => {
                        if let Err(e) = service.create_payment(request).await {
                            eprintln!("Error creating payment: {e}");
                        }
                    }
                    Err(e) => {
                        eprintln!("Error reading request: {e}");
                    }
                }
            }

            // Output the resulting listing
            let payments = service.get_all_payments().await.into_diagnostic()?;
            let stdout = io::stdout();
            let mut writer = PaymentWriter::new(stdout.lock());
            writer.write_payments(payments).into_diagnostic()?;
        }
        Commands::List { format } => {
            let payments = service.get_all_payments().await.into_diagnostic()?;
            match format {
                OutputFormat::Json => print_json(&payments)?,
                OutputFormat::Csv => {
                    let stdout = io::stdout();
                    let mut writer = PaymentWriter::new(stdout.lock());
                    writer.write_payments(payments).into_diagnostic()?;
                }
            }
        }
        Commands::Confirm { id } => {
            let payment = service.confirm_payment(id).await.into_diagnostic()?;
            print_json(&payment)?;
        }
    }

    Ok(())
}
