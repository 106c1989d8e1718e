//! Flat records attached to items.

pub mod check;
pub mod fix;
pub mod model;
pub mod reference;
pub mod status;

pub use check::{Check, CheckContentRef, CheckExport, CheckImport};
pub use fix::{Fix, FixTraits, Fixtext, Ident, ProfileNote};
pub use model::Model;
pub use reference::{Reference, Warning};
pub use status::{current_status, Status};
