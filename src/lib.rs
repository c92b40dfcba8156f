#![doc = include_str!("../README.md")]

// Core modules
pub mod edt;
pub mod grid;
pub mod mask;
pub mod sdf;

// Glue: I/O, configuration, diagnostics
pub mod config;
pub mod diagnostics;
pub mod gray;
pub mod io;

// --- High-level re-exports -------------------------------------------------

pub use crate::diagnostics::SdfSummary;
pub use crate::mask::{BinaryMask, Polarity};
pub use crate::sdf::{compute_sdf, SdfOptions, SdfResult};

/// Small prelude for quick experiments.
///
/// ```
/// use bitmap_sdf::prelude::*;
///
/// let mask = BinaryMask::from_fn(16, 16, |x, y| {
///     (4..12).contains(&x) && (4..12).contains(&y)
/// });
/// let result = compute_sdf(&mask, &SdfOptions::default()).unwrap();
/// assert!(result.field.get(8, 8) < 0.0);
/// ```
pub mod prelude {
    pub use crate::edt::EnvelopeMethod;
    pub use crate::grid::Grid;
    pub use crate::mask::{BinaryMask, Polarity};
    pub use crate::sdf::{compute_sdf, SdfOptions, SdfResult};
}
