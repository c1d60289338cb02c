use std::sync::Arc;

use async_trait::async_trait;
use tapos_error::TaposError;

use crate::{BlockRef, ChainInfo};

/// Read-only queries against a chain node.
///
/// Transport, retries and timeouts belong to the implementation. Errors are
/// handed back to callers of the header builder unchanged.
#[async_trait]
pub trait ChainAccessor: Send + Sync {
    async fn get_info(&self) -> Result<ChainInfo, TaposError>;

    async fn get_block(&self, block_num: u32) -> Result<BlockRef, TaposError>;
}

#[async_trait]
impl<T: ChainAccessor + ?Sized> ChainAccessor for Arc<T> {
    async fn get_info(&self) -> Result<ChainInfo, TaposError> {
        (**self).get_info().await
    }

    async fn get_block(&self, block_num: u32) -> Result<BlockRef, TaposError> {
        (**self).get_block(block_num).await
    }
}
