//! TaPOS header assembly for new transactions.
//!
//! A transaction carries the lower 16 bits of a recent block number and 32
//! bits of that block's id, which ties it to one chain history and bounds the
//! window in which it can be replayed. [`build_transaction_headers`] fetches
//! both through a [`ChainAccessor`] and adds an expiration relative to the
//! head block time.
//!
//! Callers may reuse one set of headers for several transactions within the
//! same block window. The longer a header is reused, the wider the replay
//! window; nothing here caches or limits reuse.

mod chain_accessor;
pub use chain_accessor::ChainAccessor;

mod chain_info;
pub use chain_info::{BlockRef, ChainInfo, ref_block_prefix_from_id};

mod config;
pub use config::{DEFAULT_EXPIRE_SECONDS, HeaderConfig};

mod header_builder;
pub use header_builder::{
    HeaderBuilder, REF_BLOCK_BACKOFF, build_transaction_headers, create_transaction, ref_block_num,
};

mod transaction_headers;
pub use transaction_headers::TransactionHeaders;

pub use tapos_error::TaposError;
pub use tapos_time::TimePointSec;
