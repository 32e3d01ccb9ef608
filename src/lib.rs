//! # sortviz
//!
//! Interactive terminal visualizer for five classic comparison sorts.
//!
//! Every sorting algorithm comes in two forms: a silent one and an
//! instrumented one that reports each comparison, swap or placement
//! through a [`sort::StepSink`]. The [`viz::SortSession`] driver is
//! itself a sink: it renders each reported index pair as a highlighted
//! bar chart frame, paces frames by a configurable delay, and handles
//! pause/resume and cancellation input.
//!
//! ## Example
//!
//! ```rust
//! use sortviz::prelude::*;
//!
//! let mut values = vec![3, 1, 2];
//! let mut log = StepLog::new();
//! Algorithm::Bubble.sort_with(&mut values, &mut log);
//! assert_eq!(values, [1, 2, 3]);
//! assert_eq!(log.len(), 5);
//! ```

#![forbid(unsafe_code)]
#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![warn(clippy::pedantic, clippy::nursery)]
#![allow(
    clippy::module_name_repetitions,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_possible_wrap,
    clippy::cast_precision_loss,
    clippy::missing_const_for_fn, // Many functions can't be const in stable Rust
    clippy::needless_range_loop   // Index loops keep the reported step order explicit
)]

pub mod config;
pub mod error;
pub mod menu;
pub mod sample;
pub mod sort;
pub mod viz;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::{ShuffleMode, VizConfig, VizConfigBuilder};
    pub use crate::error::{VizError, VizResult};
    pub use crate::sample::SampleSource;
    pub use crate::sort::{Algorithm, NoopSink, StepLog, StepSink};
    pub use crate::viz::{Phase, SessionState, SortSession, Surface, SurfaceEvent, TerminalSurface};
}

/// Re-export for public API
pub use error::{VizError, VizResult};
