//! Siteswap - a deterministic juggling pattern simulator
//!
//! Core modules:
//! - `sim`: Beat-driven simulation (throw scheduling, hand queues, flights)
//! - `render`: Plain-data frames handed to an external drawing layer
//! - `settings`: Construction-time configuration
//! - `error`: Error taxonomy shared by all modules

pub mod error;
pub mod render;
pub mod settings;
pub mod sim;

pub use error::{PatternFault, SimError, SimResult};
pub use render::{Frame, HandRect, RenderSink};
pub use settings::SimSettings;
pub use sim::{JugglerState, TickEvent, TickReport, tick};

/// Simulation configuration defaults
pub mod consts {
    /// Default tick interval in seconds (one beat per simulated second)
    pub const TICK_INTERVAL: f64 = 0.1;

    /// Standard gravity (m/s²)
    pub const GRAVITY_SI: f32 = 9.81;
    /// Metres per simulation unit (pixel)
    pub const LENGTH_SCALE: f32 = 0.5;

    /// Default hand positions in simulation units
    pub const LEFT_HAND: [f32; 2] = [250.0, 100.0];
    pub const RIGHT_HAND: [f32; 2] = [650.0, 100.0];
    /// Hand rectangle size (width, height)
    pub const HAND_SIZE: [f32; 2] = [20.0, 10.0];

    /// Drawn object radius
    pub const OBJECT_RADIUS: f32 = 10.0;

    /// Elapsed times this close to an integer snap onto the beat
    pub const BEAT_EPSILON: f64 = 1e-9;
    /// Most beats one tick will schedule; older crossed beats are skipped
    pub const MAX_CATCHUP_BEATS: i64 = 16;
    /// Simulated time ceiling, well inside exact f64 integers and i64 beats
    pub const MAX_ELAPSED: f64 = 1e15;
}

/// Linear interpolation between two scalars
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}
