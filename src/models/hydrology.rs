//! Groundwater flow models.

pub mod borehole;
