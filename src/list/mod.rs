mod handle;
mod identity;
mod lookup;
mod priority;
mod traversal;

pub use handle::List;
pub use identity::Identity;
pub use traversal::{Cursor, Iter};
