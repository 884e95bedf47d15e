//! Render collaborator interface
//!
//! The simulation never touches drawing handles. Once per tick it hands a
//! plain-data [`Frame`] to a [`RenderSink`]; a drawing layer can turn that into
//! GPU-ready triangles with [`shapes::frame_vertices`].

pub mod shapes;
pub mod vertex;

use glam::Vec2;
use serde::{Serialize, Serializer};

use crate::sim::Hand;

pub use vertex::Vertex;

/// Static hand rectangle (bottom-left corner and size)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HandRect {
    pub hand: Hand,
    pub pos: Vec2,
    pub size: Vec2,
}

/// Everything a renderer needs for one tick
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Frame {
    pub tick: u64,
    pub beat: i64,
    /// Simulated seconds
    pub time: f64,
    /// Object positions in registry order, serialized as `{x, y}` points
    #[serde(serialize_with = "serialize_points")]
    pub objects: Vec<Vec2>,
    pub hands: [HandRect; 2],
}

#[derive(Serialize)]
struct Point {
    x: f32,
    y: f32,
}

fn serialize_points<S: Serializer>(points: &[Vec2], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_seq(points.iter().map(|p| Point { x: p.x, y: p.y }))
}

/// Receives one frame per tick
pub trait RenderSink {
    fn present(&mut self, frame: &Frame);
}

/// Discards frames (headless runs and tests)
pub struct NullSink;

impl RenderSink for NullSink {
    fn present(&mut self, _frame: &Frame) {}
}

/// Keeps every frame
impl RenderSink for Vec<Frame> {
    fn present(&mut self, frame: &Frame) {
        self.push(frame.clone());
    }
}
