//! Common types for the fpcheck conformance toolkit
//!
//! This crate provides the foundational types shared by the fpcheck
//! libraries: the error enum and result alias, the subnormal-handling
//! policy, the stepping direction, and named boundary values of the f32
//! and f16 encodings.

pub mod consts;
pub mod error;
pub mod types;

pub use error::{FpCheckError, Result};
pub use types::{Direction, FlushMode};
