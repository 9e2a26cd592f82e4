use crate::domain::ports::InvocationContext;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Production invocation context: a fresh UUID per transaction and the
/// system clock.
#[derive(Debug, Default, Clone)]
pub struct SystemContext {
    caller_metadata: Vec<u8>,
}

impl SystemContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_caller_metadata(caller_metadata: Vec<u8>) -> Self {
        Self { caller_metadata }
    }
}

impl InvocationContext for SystemContext {
    fn transaction_id(&self) -> String {
        Uuid::new_v4().to_string()
    }

    fn timestamp(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn caller_metadata(&self) -> Vec<u8> {
        self.caller_metadata.clone()
    }
}

/// Fixed invocation context for deterministic tests.
#[derive(Debug, Clone)]
pub struct FixedContext {
    pub transaction_id: String,
    pub timestamp: DateTime<Utc>,
    pub caller_metadata: Vec<u8>,
}

impl FixedContext {
    pub fn new(transaction_id: &str) -> Self {
        Self {
            transaction_id: transaction_id.to_string(),
            timestamp: DateTime::<Utc>::UNIX_EPOCH,
            caller_metadata: Vec::new(),
        }
    }
}

impl InvocationContext for FixedContext {
    fn transaction_id(&self) -> String {
        self.transaction_id.clone()
    }

    fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    fn caller_metadata(&self) -> Vec<u8> {
        self.caller_metadata.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_context_ids_are_unique() {
        let ctx = SystemContext::new();
        assert_ne!(ctx.transaction_id(), ctx.transaction_id());
    }

    #[test]
    fn test_fixed_context_is_stable() {
        let ctx = FixedContext::new("tx-1");
        assert_eq!(ctx.transaction_id(), "tx-1");
        assert_eq!(ctx.timestamp(), ctx.timestamp());
        assert!(ctx.caller_metadata().is_empty());
    }
}
