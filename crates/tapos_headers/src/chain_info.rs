use serde::{Deserialize, Serialize};
use tapos_error::TaposError;

/// The subset of a node's `get_info` response used to anchor a transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ChainInfo {
    pub head_block_num: u32,
    pub head_block_time: String, // no zone suffix, always UTC
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chain_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub head_block_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_irreversible_block_num: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server_version: Option<String>,
}

impl ChainInfo {
    pub fn new(head_block_num: u32, head_block_time: impl Into<String>) -> Self {
        Self {
            head_block_num,
            head_block_time: head_block_time.into(),
            ..Default::default()
        }
    }
}

/// The subset of a node's `get_block` response used to anchor a transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct BlockRef {
    pub ref_block_prefix: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_num: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

impl BlockRef {
    pub fn new(ref_block_prefix: u32) -> Self {
        Self {
            ref_block_prefix,
            ..Default::default()
        }
    }

    /// Builds a reference from a hex block id alone. The block number lives
    /// big-endian in the first four bytes of the id.
    pub fn from_id(id: &str) -> Result<Self, TaposError> {
        let bytes = decode_block_id(id)?;
        Ok(Self {
            ref_block_prefix: prefix_from_bytes(&bytes),
            id: Some(id.to_owned()),
            block_num: Some(u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])),
            timestamp: None,
        })
    }
}

/// Little-endian `u32` at byte offset 8 of the 32-byte block id.
pub fn ref_block_prefix_from_id(id: &str) -> Result<u32, TaposError> {
    decode_block_id(id).map(|bytes| prefix_from_bytes(&bytes))
}

fn prefix_from_bytes(bytes: &[u8; 32]) -> u32 {
    u32::from_le_bytes([bytes[8], bytes[9], bytes[10], bytes[11]])
}

fn decode_block_id(id: &str) -> Result<[u8; 32], TaposError> {
    let raw = hex::decode(id)
        .map_err(|e| TaposError::ParseError(format!("invalid block id {id:?}: {e}")))?;
    raw.try_into().map_err(|raw: Vec<u8>| {
        TaposError::ParseError(format!(
            "block id must be 32 bytes, got {} bytes",
            raw.len()
        ))
    })
}
