//! Thermal systems models.
//!
//! This module contains transient heat-conduction benchmark models.

pub mod sandia;
