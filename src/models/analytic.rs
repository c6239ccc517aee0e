//! Closed-form analytic test functions.

pub mod dampened_cosine;
