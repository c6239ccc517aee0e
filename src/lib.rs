//! # Twine Test Functions
//!
//! Analytic benchmark functions for computer experiments and uncertainty
//! quantification, usable as [`twine_core::Model`]s.
//!
//! - [Borehole](models::hydrology::borehole): 8-input flow through a borehole.
//! - [Dampened cosine](models::analytic::dampened_cosine): 1-input oscillator.
//! - [Sandia thermal](models::thermal::sandia): 4-input transient slab
//!   temperature over a time grid.
//!
//! ## Crate layout
//!
//! - [`models`]: The benchmark functions and their model adapters.
//! - [`support`]: Parameter matrices, rescaling, time grids, seeded sampling,
//!   and numeric constraints.
//!
//! ## Workflow
//!
//! ```
//! use twine_test_functions::models::hydrology::borehole;
//! use twine_test_functions::support::sampling::SamplingConfig;
//!
//! let config = SamplingConfig::default();
//! let unit = config.sampler().sample::<8>(config.n_samples);
//!
//! let flow = borehole::eval(&borehole::rescale_input(&unit).unwrap());
//! assert_eq!(flow.len(), config.n_samples);
//! ```

pub mod models;
pub mod support;
