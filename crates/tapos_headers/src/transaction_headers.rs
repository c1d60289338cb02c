use serde::{Deserialize, Serialize};
use serde_json::Value;
use tapos_time::TimePointSec;

/// TaPOS header fields of a transaction that has no actions or signatures yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionHeaders {
    pub expiration: TimePointSec,
    pub region: u16,
    pub ref_block_num: u16,
    pub ref_block_prefix: u32,
    pub max_net_usage_words: u32,
    pub max_kcpu_usage: u32,
    pub delay_sec: u32,
    pub context_free_actions: Vec<Value>,
    pub actions: Vec<Value>,
    pub signatures: Vec<String>,
}

impl TransactionHeaders {
    pub fn new(expiration: TimePointSec, ref_block_num: u16, ref_block_prefix: u32) -> Self {
        Self {
            expiration,
            region: 0,
            ref_block_num,
            ref_block_prefix,
            max_net_usage_words: 0,
            max_kcpu_usage: 0,
            delay_sec: 0,
            context_free_actions: vec![],
            actions: vec![],
            signatures: vec![],
        }
    }

    /// A block at `at` rejects the transaction once its expiration lies
    /// before the block time.
    pub fn is_expired(&self, at: &TimePointSec) -> bool {
        self.expiration < *at
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_serialize_shape() {
        let headers = TransactionHeaders::new(TimePointSec::new(1_704_067_260), 97, 305419896);
        assert_eq!(
            serde_json::to_value(&headers).unwrap(),
            json!({
                "expiration": "2024-01-01T00:01:00",
                "region": 0,
                "ref_block_num": 97,
                "ref_block_prefix": 305419896,
                "max_net_usage_words": 0,
                "max_kcpu_usage": 0,
                "delay_sec": 0,
                "context_free_actions": [],
                "actions": [],
                "signatures": []
            })
        );
    }

    #[test]
    fn test_is_expired() {
        let headers = TransactionHeaders::new(TimePointSec::new(1_000), 0, 0);
        assert!(!headers.is_expired(&TimePointSec::new(999)));
        assert!(!headers.is_expired(&TimePointSec::new(1_000)));
        assert!(headers.is_expired(&TimePointSec::new(1_001)));
    }
}
