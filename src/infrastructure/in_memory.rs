use crate::domain::application::LoanApplication;
use crate::domain::ports::ApplicationStore;
use crate::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A thread-safe in-memory store for application records.
///
/// Uses `Arc<RwLock<HashMap<String, LoanApplication>>>` to allow shared
/// concurrent access. Ideal for testing or single-run batch processing
/// where persistence is not required.
#[derive(Default, Clone)]
pub struct InMemoryApplicationStore {
    applications: Arc<RwLock<HashMap<String, LoanApplication>>>,
}

impl InMemoryApplicationStore {
    /// Creates a new, empty in-memory application store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ApplicationStore for InMemoryApplicationStore {
    async fn get(&self, application_number: &str) -> Result<Option<LoanApplication>> {
        let applications = self.applications.read().await;
        Ok(applications.get(application_number).cloned())
    }

    async fn put(&self, application: &LoanApplication) -> Result<()> {
        let mut applications = self.applications.write().await;
        applications.insert(application.application_number.clone(), application.clone());
        Ok(())
    }
}
