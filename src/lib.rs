//! Static hanging-cable geometry.
//!
//! The core is [`generate`] (or the [`MakeCatenary`] operation): given two
//! anchors and a few shape parameters it returns a [`CatenarySample`], the
//! catenary between them sampled end → start with both anchors reproduced
//! exactly. Everything else in the crate consumes that sample.

pub mod cable;
pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod tessellation;

pub use cable::Cable;
pub use error::{CatenaryError, Result};
pub use geometry::{CatenarySample, CurveParameters};
pub use operations::creation::{generate, MakeCatenary};
