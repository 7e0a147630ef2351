//! Feature selection utilities.
//!
//! Two independent filters: `sentinel` drops columns dominated by missing
//! values or sentinel codes, `correlation` drops the later member of every
//! highly correlated column pair and remembers which columns it dropped so
//! the same selection can be replayed on held-out data.
pub mod correlation;
pub mod sentinel;

pub use correlation::{
    drop_highly_correlated_features, drop_test_correlated_features, DropMask,
    DEFAULT_CORRELATION_THRESHOLD,
};
pub use sentinel::{
    columns_to_remove, is_missing, reduced_data, DEFAULT_SENTINEL_THRESHOLD, SENTINEL_CODES,
};
