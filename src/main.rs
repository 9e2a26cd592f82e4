use clap::Parser;
use miette::{IntoDiagnostic, Result};
use smartlend::application::engine::LendingEngine;
use smartlend::domain::application::{ApplicationStatus, CreateApplication, LoanApplication};
use smartlend::domain::ports::{ApplicationStoreBox, InvocationContext};
use smartlend::domain::schedule::RepaymentStatus;
use smartlend::error::LendingError;
use smartlend::infrastructure::context::SystemContext;
use smartlend::infrastructure::ids::RandomIdGenerator;
use smartlend::infrastructure::in_memory::InMemoryApplicationStore;
use smartlend::interfaces::csv::request_reader::{Operation, Request, RequestReader};
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input requests CSV file
    input: PathBuf,

    /// Path to persistent database (optional). If provided, uses RocksDB.
    #[arg(long)]
    db_path: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let store: ApplicationStoreBox = match cli.db_path {
        #[cfg(feature = "storage-rocksdb")]
        Some(db_path) => Box::new(
            smartlend::infrastructure::rocksdb::RocksDbApplicationStore::open(db_path)
                .into_diagnostic()?,
        ),
        #[cfg(not(feature = "storage-rocksdb"))]
        Some(_) => {
            return Err(miette::miette!(
                "built without RocksDB support; rebuild with --features storage-rocksdb"
            ));
        }
        None => Box::new(InMemoryApplicationStore::new()),
    };

    let engine = LendingEngine::new(store, Box::new(RandomIdGenerator::new()));
    let ctx = SystemContext::new();

    let file = File::open(cli.input).into_diagnostic()?;
    let reader = RequestReader::new(file);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for request in reader.requests() {
        match request {
            Ok(request) => match dispatch(&engine, request, &ctx).await {
                Ok(application) => {
                    serde_json::to_writer(&mut out, &application).into_diagnostic()?;
                    writeln!(out).into_diagnostic()?;
                }
                Err(e) => {
                    eprintln!("Error processing request: {e}");
                }
            },
            Err(e) => {
                eprintln!("Error reading request: {e}");
            }
        }
    }

    Ok(())
}

/// Maps a batch request row onto the engine operation it names.
///
/// Missing numeric columns default to zero, mirroring the lenient
/// argument handling of the external dispatch layer this stands in for.
async fn dispatch(
    engine: &LendingEngine,
    request: Request,
    ctx: &dyn InvocationContext,
) -> smartlend::error::Result<LoanApplication> {
    match request.op {
        Operation::Create => {
            engine
                .create_application(
                    CreateApplication {
                        application_number: request.application,
                        make: request.make.unwrap_or_default(),
                        model: request.model.unwrap_or_default(),
                        loan_amount: request.loan_amount.unwrap_or_default(),
                        ssn: request.ssn.unwrap_or_default(),
                        age: request.age.unwrap_or_default(),
                        monthly_income: request.monthly_income.unwrap_or_default(),
                        credit_score: request.credit_score.unwrap_or_default(),
                        tenure: request.tenure.unwrap_or_default(),
                    },
                    ctx,
                )
                .await
        }
        Operation::ConfirmBid => {
            let bid_status = ApplicationStatus::try_from(request.bid_status.unwrap_or_default())
                .map_err(LendingError::InvalidInput)?;
            engine
                .confirm_bid(
                    &request.application,
                    request.bidding_number.unwrap_or_default(),
                    bid_status,
                    ctx,
                )
                .await
        }
        Operation::ChangePaymentStatus => {
            let repayment_status =
                RepaymentStatus::try_from(request.repayment_status.unwrap_or_default())
                    .map_err(LendingError::InvalidInput)?;
            engine
                .change_payment_status(
                    &request.application,
                    request.installment.unwrap_or_default(),
                    repayment_status,
                    ctx,
                )
                .await
        }
        Operation::Read => engine.get_application(&request.application).await,
    }
}
