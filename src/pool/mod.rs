mod builder;
mod node_pool;
mod pool_id;
mod utilization;

pub use builder::NodePoolBuilder;
pub use node_pool::{DEFAULT_BATCH_SIZE, NodePool};
pub use pool_id::PoolId;
pub use utilization::Utilization;
