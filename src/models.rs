//! Public benchmark models.
//!
//! Models are the primary public interface of this crate.
//!
//! # Organization
//!
//! Models are organized into domain-specific submodules (`analytic`,
//! `hydrology`, `thermal`).
//!
//! # Model structure
//!
//! Each model module exposes the same function-call surface:
//!
//! - `BOUNDS` and `rescale_input` map unit-cube samples onto physical ranges.
//! - `eval` evaluates the model on rescaled inputs.
//!
//! The one-dimensional `dampened_cosine` takes its points as a plain slice in
//! `eval` and offers `eval_samples` for one-column sample matrices.
//!
//! A thin [`twine_core::Model`] adapter delegates to `eval`.
//! Models with non-trivial numerics keep them in an internal `core`
//! submodule that is **not** part of the public API.

pub mod analytic;
pub mod hydrology;
pub mod thermal;
