//! The text-processing core: pure, total functions over the post buffer.
//!
//! Everything in this module tree is side-effect free and operates on
//! code-point offsets. The editing surface owns the buffer and threads
//! state through these functions; nothing here caches or invalidates.
//! Recomputation is O(length) and cheap at post sizes.

pub mod cursor;
pub mod normalize;
pub mod stats;
pub mod style;
pub mod transform;
pub mod truncate;

pub use normalize::normalize;
pub use stats::{Stats, stats};
pub use style::Style;
pub use transform::transform;
pub use truncate::{Affordance, Preview, decide};
