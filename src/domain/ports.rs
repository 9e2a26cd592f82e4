use crate::domain::application::LoanApplication;
use crate::error::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Key-addressed store of application records, one record per
/// application number. Mutual exclusion across concurrent writers to
/// the same key is the store's responsibility, not the engine's.
#[async_trait]
pub trait ApplicationStore: Send + Sync {
    async fn get(&self, application_number: &str) -> Result<Option<LoanApplication>>;
    async fn put(&self, application: &LoanApplication) -> Result<()>;
}

pub type ApplicationStoreBox = Box<dyn ApplicationStore>;

/// Source of bidding and account numbers.
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> u32;
}

pub type IdGeneratorBox = Box<dyn IdGenerator>;

/// Invocation context of the current external request, consumed when
/// stamping audit entries.
pub trait InvocationContext: Send + Sync {
    fn transaction_id(&self) -> String;
    fn timestamp(&self) -> DateTime<Utc>;
    fn caller_metadata(&self) -> Vec<u8>;
}
