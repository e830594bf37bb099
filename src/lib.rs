#![doc = include_str!("../README.md")]
#![warn(
    missing_docs,
    clippy::unwrap_in_result,
    clippy::unwrap_used,
    clippy::panic,
    clippy::panic_in_result_fn,
    clippy::float_cmp,
    clippy::float_cmp_const,
    clippy::missing_panics_doc,
    clippy::todo
)]
#![no_std]
extern crate alloc;

/// Node references.
pub mod references;

mod common_traits;
mod error;
mod list;
mod node;
mod pool;

pub use error::{Error, Result};
pub use list::{Cursor, Identity, Iter, List};
pub use node::{Node, NodeKind};
pub use pool::{DEFAULT_BATCH_SIZE, NodePool, NodePoolBuilder, PoolId, Utilization};
pub use references::NodeIdx;
