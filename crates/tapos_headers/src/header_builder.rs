use std::future::Future;

use spdlog::debug;
use tapos_error::TaposError;
use tapos_time::{parse_head_block_time, seconds};

use crate::{
    ChainAccessor, TransactionHeaders,
    config::{DEFAULT_EXPIRE_SECONDS, HeaderConfig, validate_expiration},
};

/// How far behind head the reference block is taken, to stay clear of
/// mini-forks near the tip.
pub const REF_BLOCK_BACKOFF: u32 = 3;

/// Lower 16 bits of a block number, as carried in `ref_block_num`.
#[inline]
pub const fn ref_block_num(block_num: u32) -> u16 {
    (block_num & 0xFFFF) as u16
}

/// Queries head info and a recent block, then assembles the TaPOS headers of
/// a new transaction expiring `expire_in_seconds` (default 60) after the head
/// block time.
///
/// The block query is only issued once the info query has succeeded. Errors
/// from the accessor are returned as-is.
pub async fn build_transaction_headers<A>(
    accessor: &A,
    expire_in_seconds: Option<u32>,
) -> Result<TransactionHeaders, TaposError>
where
    A: ChainAccessor + ?Sized,
{
    let expire_in_seconds = expire_in_seconds.unwrap_or(DEFAULT_EXPIRE_SECONDS);
    validate_expiration(expire_in_seconds)?;

    let info = accessor.get_info().await?;
    let chain_time = parse_head_block_time(&info.head_block_time)?;

    let ref_block = info
        .head_block_num
        .checked_sub(REF_BLOCK_BACKOFF)
        .ok_or_else(|| {
            TaposError::InvalidArgument(format!(
                "head block {} is too low to reference a block {} behind it",
                info.head_block_num, REF_BLOCK_BACKOFF
            ))
        })?;

    let block = accessor.get_block(ref_block).await?;

    let expiration = chain_time
        .checked_add(seconds(expire_in_seconds as i64))
        .ok_or_else(|| TaposError::InvalidArgument("expiration overflows".into()))?
        .to_time_point_sec()?;

    debug!(
        "tapos: head {} ref block {} prefix {} expires {}",
        info.head_block_num, ref_block, block.ref_block_prefix, expiration
    );

    Ok(TransactionHeaders::new(
        expiration,
        ref_block_num(ref_block),
        block.ref_block_prefix,
    ))
}

/// Callback form of [`build_transaction_headers`].
///
/// Argument problems (no handler, zero expiration) are reported right away,
/// before any query is made. Otherwise the returned future performs the
/// queries and calls `handler` exactly once with the outcome.
pub fn create_transaction<'a, A, F>(
    accessor: &'a A,
    expire_in_seconds: Option<u32>,
    handler: Option<F>,
) -> Result<impl Future<Output = ()> + 'a, TaposError>
where
    A: ChainAccessor + ?Sized,
    F: FnOnce(Result<TransactionHeaders, TaposError>) + 'a,
{
    let handler = handler
        .ok_or_else(|| TaposError::InvalidArgument("callback parameter is required".into()))?;
    validate_expiration(expire_in_seconds.unwrap_or(DEFAULT_EXPIRE_SECONDS))?;

    Ok(async move {
        handler(build_transaction_headers(accessor, expire_in_seconds).await);
    })
}

/// Binds an accessor to a [`HeaderConfig`].
pub struct HeaderBuilder<A> {
    accessor: A,
    config: HeaderConfig,
}

impl<A: ChainAccessor> HeaderBuilder<A> {
    pub fn new(accessor: A) -> Self {
        Self {
            accessor,
            config: HeaderConfig::default(),
        }
    }

    pub fn with_config(accessor: A, config: HeaderConfig) -> Result<Self, TaposError> {
        config.validate()?;
        Ok(Self { accessor, config })
    }

    pub async fn build(&self) -> Result<TransactionHeaders, TaposError> {
        build_transaction_headers(&self.accessor, Some(self.config.expire_in_seconds)).await
    }

    pub async fn build_with_expiration(
        &self,
        expire_in_seconds: u32,
    ) -> Result<TransactionHeaders, TaposError> {
        build_transaction_headers(&self.accessor, Some(expire_in_seconds)).await
    }
}
