use crate::domain::application::LoanApplication;
use crate::domain::ports::ApplicationStore;
use crate::error::{LendingError, Result};
use async_trait::async_trait;
use rocksdb::{ColumnFamilyDescriptor, DB, Options};
use std::path::Path;
use std::sync::Arc;

/// Column family for application records, keyed by application number.
pub const CF_APPLICATIONS: &str = "applications";

/// A persistent application store backed by RocksDB.
///
/// Records are stored as JSON under the application number in a
/// dedicated column family. This struct is thread-safe (`Clone` shares
/// the underlying `Arc<DB>`).
#[derive(Clone)]
pub struct RocksDbApplicationStore {
    db: Arc<DB>,
}

impl RocksDbApplicationStore {
    /// Opens or creates a RocksDB instance at the specified path,
    /// ensuring the applications column family exists.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut opts = Options::default();
        opts.create_if_missing(true);
        opts.create_missing_column_families(true);

        let cf_applications = ColumnFamilyDescriptor::new(CF_APPLICATIONS, Options::default());
        let db = DB::open_cf_descriptors(&opts, path, vec![cf_applications])
            .map_err(|e| LendingError::Store(e.to_string()))?;

        Ok(Self { db: Arc::new(db) })
    }

    fn cf(&self) -> Result<&rocksdb::ColumnFamily> {
        self.db
            .cf_handle(CF_APPLICATIONS)
            .ok_or_else(|| LendingError::Store("applications column family not found".to_string()))
    }
}

#[async_trait]
impl ApplicationStore for RocksDbApplicationStore {
    async fn get(&self, application_number: &str) -> Result<Option<LoanApplication>> {
        let cf = self.cf()?;
        let result = self
            .db
            .get_cf(cf, application_number.as_bytes())
            .map_err(|e| LendingError::Store(e.to_string()))?;

        match result {
            Some(bytes) => {
                let application = serde_json::from_slice(&bytes).map_err(|e| {
                    log::warn!("corrupt record for application {application_number}: {e}");
                    LendingError::Deserialization(e.to_string())
                })?;
                Ok(Some(application))
            }
            None => Ok(None),
        }
    }

    async fn put(&self, application: &LoanApplication) -> Result<()> {
        let cf = self.cf()?;
        let value =
            serde_json::to_vec(application).map_err(|e| LendingError::Store(e.to_string()))?;

        self.db
            .put_cf(cf, application.application_number.as_bytes(), value)
            .map_err(|e| LendingError::Store(e.to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::application::CreateApplication;
    use rust_decimal_macros::dec;
    use tempfile::tempdir;

    fn application(number: &str) -> LoanApplication {
        LoanApplication::new(CreateApplication {
            application_number: number.to_string(),
            make: "Tesla".to_string(),
            model: "Model 3".to_string(),
            loan_amount: dec!(60000),
            ssn: "1234567".to_string(),
            age: 35,
            monthly_income: dec!(2500),
            credit_score: 650,
            tenure: 5,
        })
    }

    #[tokio::test]
    async fn test_rocksdb_open_cf() {
        let dir = tempdir().unwrap();
        let store = RocksDbApplicationStore::open(dir.path()).expect("Failed to open RocksDB");
        assert!(store.db.cf_handle(CF_APPLICATIONS).is_some());
    }

    #[tokio::test]
    async fn test_rocksdb_round_trip() {
        let dir = tempdir().unwrap();
        let store = RocksDbApplicationStore::open(dir.path()).unwrap();

        let app = application("APP-1");
        store.put(&app).await.unwrap();

        let retrieved = store.get("APP-1").await.unwrap().unwrap();
        assert_eq!(retrieved, app);

        assert!(store.get("APP-2").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_rocksdb_corrupt_record_is_a_typed_failure() {
        let dir = tempdir().unwrap();
        let store = RocksDbApplicationStore::open(dir.path()).unwrap();

        let cf = store.cf().unwrap();
        store.db.put_cf(cf, b"APP-1", b"not json").unwrap();

        let result = store.get("APP-1").await;
        assert!(matches!(result, Err(LendingError::Deserialization(_))));
    }
}
