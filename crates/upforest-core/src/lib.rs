#![deny(clippy::print_stdout, clippy::print_stderr)]

pub mod error;
pub mod node;
pub mod set_id;
pub mod union_find;

pub use error::UnionFindError;
pub use node::{Node, SetRecord};
pub use set_id::SetId;
pub use union_find::UnionFind;
