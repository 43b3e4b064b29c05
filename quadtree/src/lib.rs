pub mod config;
pub mod error;
pub mod quadtree;

pub use common::{shapes, vector};
pub use config::{ChildOrder, Config};
pub use error::{QuadtreeError, QuadtreeResult};
pub use quadtree::{Entry, QuadTreeNode};
