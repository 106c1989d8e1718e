//! Item handlers for each XCCDF item element.

mod container;
mod profile;
mod result;
mod rule;
mod value;

pub use container::{BenchmarkHandler, GroupHandler};
pub use profile::ProfileHandler;
pub use result::ResultHandler;
pub use rule::RuleHandler;
pub use value::ValueHandler;
