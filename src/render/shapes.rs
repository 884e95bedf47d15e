//! Shape generation for 2D primitives

use glam::Vec2;
use std::f32::consts::TAU;

use super::Frame;
use super::vertex::{Vertex, colors};
use crate::consts::OBJECT_RADIUS;

/// Segments used for each object circle
pub const CIRCLE_SEGMENTS: u32 = 16;

/// Triangle fan for a filled circle: `segments` wedges sharing the centre
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let step = TAU / segments as f32;
    let rim: Vec<Vec2> = (0..=segments)
        .map(|i| center + Vec2::from_angle(i as f32 * step) * radius)
        .collect();

    rim.windows(2)
        .flat_map(|edge| [center, edge[0], edge[1]])
        .map(|p| Vertex::new(p.x, p.y, color))
        .collect()
}

/// Generate vertices for an axis-aligned rectangle anchored at its
/// bottom-left corner
pub fn rect(origin: Vec2, size: Vec2, color: [f32; 4]) -> Vec<Vertex> {
    let max = origin + size;
    vec![
        Vertex::new(origin.x, origin.y, color),
        Vertex::new(max.x, origin.y, color),
        Vertex::new(origin.x, max.y, color),
        Vertex::new(origin.x, max.y, color),
        Vertex::new(max.x, origin.y, color),
        Vertex::new(max.x, max.y, color),
    ]
}

/// Triangles for a whole frame: hands first, then objects in registry order
pub fn frame_vertices(frame: &Frame) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(
        frame.hands.len() * 6 + frame.objects.len() * (CIRCLE_SEGMENTS * 3) as usize,
    );
    for hand in &frame.hands {
        vertices.extend(rect(hand.pos, hand.size, colors::HAND));
    }
    for &pos in &frame.objects {
        vertices.extend(circle(pos, OBJECT_RADIUS, colors::OBJECT, CIRCLE_SEGMENTS));
    }
    vertices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::vertex::as_bytes;
    use crate::render::HandRect;
    use crate::sim::Hand;

    #[test]
    fn test_circle_vertex_count() {
        let verts = circle(Vec2::ZERO, 5.0, colors::OBJECT, 8);
        assert_eq!(verts.len(), 24);
        // Every rim vertex sits on the radius
        for v in verts.iter().skip(1).step_by(3) {
            let r = Vec2::from(v.position).length();
            assert!((r - 5.0).abs() < 1e-4);
        }
    }

    #[test]
    fn test_circle_fan_closes() {
        let center = Vec2::new(40.0, -20.0);
        let verts = circle(center, 3.0, colors::HAND, 6);
        for wedge in verts.chunks(3) {
            assert_eq!(wedge[0].position, [40.0, -20.0]);
        }
        // Each wedge starts where the previous one ended
        for pair in verts.chunks(3).collect::<Vec<_>>().windows(2) {
            assert_eq!(pair[0][2].position, pair[1][1].position);
        }
        let first = Vec2::from(verts[1].position);
        let last = Vec2::from(verts[verts.len() - 1].position);
        assert!(first.distance(last) < 1e-4);
        assert!(first.distance(center + Vec2::new(3.0, 0.0)) < 1e-4);
    }

    #[test]
    fn test_frame_vertices() {
        let hands = [
            HandRect {
                hand: Hand::Left,
                pos: Vec2::new(250.0, 100.0),
                size: Vec2::new(20.0, 10.0),
            },
            HandRect {
                hand: Hand::Right,
                pos: Vec2::new(650.0, 100.0),
                size: Vec2::new(20.0, 10.0),
            },
        ];
        let frame = Frame {
            tick: 1,
            beat: 0,
            time: 0.1,
            objects: vec![Vec2::new(300.0, 150.0), Vec2::new(400.0, 180.0)],
            hands,
        };

        let verts = frame_vertices(&frame);
        assert_eq!(verts.len(), 12 + 2 * (CIRCLE_SEGMENTS * 3) as usize);
        assert_eq!(verts[0].position, [250.0, 100.0]);
        assert_eq!(verts[5].position, [270.0, 110.0]);
        assert_eq!(verts[12].position, [300.0, 150.0]);
        assert_eq!(as_bytes(&verts).len(), verts.len() * std::mem::size_of::<Vertex>());
    }
}
