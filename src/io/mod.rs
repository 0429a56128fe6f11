//! Input/output helpers.
//!
//! - saved extraction responses (`response`)
//! - summary exports (`export`)

pub mod export;
pub mod response;

pub use export::*;
pub use response::*;
