//! Supporting utilities used by models.
//!
//! These modules are public because callers need them to build model inputs,
//! but their APIs are not yet stable.

pub mod constraint;
pub mod matrix;
pub mod rescale;
pub mod sampling;
pub mod time_grid;
