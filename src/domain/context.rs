//! Operation Context
//!
//! Request metadata carried into command handlers so ledger log lines can be
//! tied back to the HTTP request that caused them.

use std::net::IpAddr;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationContext {
    /// Correlation ID for request tracing
    pub correlation_id: Uuid,

    /// Client address as reported by the nearest proxy
    pub client_ip: Option<IpAddr>,
}

impl OperationContext {
    /// Context with a freshly generated correlation ID
    pub fn new() -> Self {
        Self::with_correlation_id(Uuid::new_v4())
    }

    pub fn with_correlation_id(correlation_id: Uuid) -> Self {
        Self {
            correlation_id,
            client_ip: None,
        }
    }

    pub fn with_client_ip(mut self, ip: IpAddr) -> Self {
        self.client_ip = Some(ip);
        self
    }
}

impl Default for OperationContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_contexts_are_distinct() {
        assert_ne!(OperationContext::new().correlation_id, OperationContext::new().correlation_id);
    }

    #[test]
    fn test_context_builder() {
        let correlation_id = Uuid::new_v4();
        let ip: IpAddr = "10.0.0.7".parse().unwrap();

        let context = OperationContext::with_correlation_id(correlation_id).with_client_ip(ip);

        assert_eq!(context.correlation_id, correlation_id);
        assert_eq!(context.client_ip, Some(ip));
    }
}
