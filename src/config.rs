//! Process-wide visualizer configuration.
//!
//! Sample size, shuffle mode, window dimensions, step delay and the
//! RNG seed all live in one typed value. Configuration is
//! process-lifetime only; nothing is persisted across runs.

use serde::{Deserialize, Serialize};

use crate::error::{VizError, VizResult};

/// Arrangement applied to the sample before a sort is launched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShuffleMode {
    /// Full Fisher-Yates shuffle.
    Random,
    /// Shuffle only the first tenth of the sample.
    NearlySorted,
    /// Strictly decreasing order.
    ReverseSorted,
    /// Strictly increasing order.
    Sorted,
}

impl ShuffleMode {
    /// All modes, in menu order.
    pub const ALL: [Self; 4] = [
        Self::Random,
        Self::NearlySorted,
        Self::ReverseSorted,
        Self::Sorted,
    ];

    /// Map a 1-based menu index to a mode.
    #[must_use]
    pub fn from_index(index: i64) -> Option<Self> {
        match index {
            1 => Some(Self::Random),
            2 => Some(Self::NearlySorted),
            3 => Some(Self::ReverseSorted),
            4 => Some(Self::Sorted),
            _ => None,
        }
    }

    /// The 1-based menu index of this mode.
    #[must_use]
    pub fn index(self) -> i64 {
        match self {
            Self::Random => 1,
            Self::NearlySorted => 2,
            Self::ReverseSorted => 3,
            Self::Sorted => 4,
        }
    }

    /// Human-readable label for menus.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Random => "Simple random shuffle",
            Self::NearlySorted => "Nearly sorted",
            Self::ReverseSorted => "Reverse sorted",
            Self::Sorted => "Sorted",
        }
    }
}

/// Preset window sizes offered by the settings menu.
pub const WINDOW_PRESETS: [(u32, u32); 4] = [(640, 480), (800, 600), (1024, 768), (1280, 720)];

/// Visualizer configuration.
///
/// Mutated only through the settings menu; read when a session is
/// created and when the sample is regenerated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VizConfig {
    /// Number of elements in the sample.
    pub sample_size: usize,
    /// Arrangement applied before each sort.
    pub shuffle_mode: ShuffleMode,
    /// Requested surface width.
    pub width: u32,
    /// Requested surface height.
    pub height: u32,
    /// Minimum time each step frame stays on screen, in milliseconds.
    pub delay_ms: u64,
    /// Master seed for the sample provider.
    pub seed: u64,
}

impl Default for VizConfig {
    fn default() -> Self {
        Self {
            sample_size: 100,
            shuffle_mode: ShuffleMode::Random,
            width: 800,
            height: 600,
            delay_ms: 1,
            seed: 42,
        }
    }
}

impl VizConfig {
    /// Create a builder for configuration.
    #[must_use]
    pub fn builder() -> VizConfigBuilder {
        VizConfigBuilder::default()
    }

    /// Set the surface size. Non-positive dimensions are ignored,
    /// keeping the previous value for that axis.
    pub fn set_window_size(&mut self, width: i64, height: i64) {
        if width > 0 {
            self.width = width as u32;
        }
        if height > 0 {
            self.height = height as u32;
        }
    }

    /// Set the per-step delay.
    pub fn set_delay_ms(&mut self, delay_ms: u64) {
        self.delay_ms = delay_ms;
    }

    /// Set the sample size.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `size` is zero.
    pub fn set_sample_size(&mut self, size: i64) -> VizResult<()> {
        if size <= 0 {
            return Err(VizError::config("sample size must be positive"));
        }
        self.sample_size = size as usize;
        Ok(())
    }

    /// Set the shuffle mode.
    pub fn set_shuffle_mode(&mut self, mode: ShuffleMode) {
        self.shuffle_mode = mode;
    }
}

/// Fluent builder for [`VizConfig`].
#[derive(Debug, Default, Clone)]
pub struct VizConfigBuilder {
    sample_size: Option<usize>,
    shuffle_mode: Option<ShuffleMode>,
    window: Option<(u32, u32)>,
    delay_ms: Option<u64>,
    seed: Option<u64>,
}

impl VizConfigBuilder {
    /// Set the sample size.
    #[must_use]
    pub const fn sample_size(mut self, size: usize) -> Self {
        self.sample_size = Some(size);
        self
    }

    /// Set the shuffle mode.
    #[must_use]
    pub const fn shuffle_mode(mut self, mode: ShuffleMode) -> Self {
        self.shuffle_mode = Some(mode);
        self
    }

    /// Set the surface dimensions.
    #[must_use]
    pub const fn window(mut self, width: u32, height: u32) -> Self {
        self.window = Some((width, height));
        self
    }

    /// Set the per-step delay in milliseconds.
    #[must_use]
    pub const fn delay_ms(mut self, delay_ms: u64) -> Self {
        self.delay_ms = Some(delay_ms);
        self
    }

    /// Set the master seed.
    #[must_use]
    pub const fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Build the configuration.
    #[must_use]
    pub fn build(self) -> VizConfig {
        let mut config = VizConfig::default();
        if let Some(size) = self.sample_size {
            config.sample_size = size;
        }
        if let Some(mode) = self.shuffle_mode {
            config.shuffle_mode = mode;
        }
        if let Some((width, height)) = self.window {
            config.width = width;
            config.height = height;
        }
        if let Some(delay_ms) = self.delay_ms {
            config.delay_ms = delay_ms;
        }
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        config
    }
}
