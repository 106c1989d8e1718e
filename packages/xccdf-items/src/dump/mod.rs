//! Human-readable output of an item tree.

mod text;
mod writer;

pub use text::{dump_item, truncate};
pub use writer::{generate_yaml, save_yaml};
