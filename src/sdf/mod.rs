//! Signed distance fields from binary masks.
//!
//! Foreground and background are transformed with fully independent seed
//! sets and combined as `sqrt(dist_fg) - sqrt(dist_bg)`.
//!
//! Sign convention: **negative inside the foreground, positive outside**,
//! approximately zero on the boundary. The normalized grayscale encoding
//! maps the zero crossing to gray value 128.

pub mod field;
pub mod normalize;

pub use field::{compute_sdf, SdfOptions, SdfResult};
pub use normalize::normalize_to_gray;
