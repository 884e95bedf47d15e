//! Juggled objects and the arena that owns them
//!
//! Objects are never destroyed. Hand queues and the flight set refer to them
//! by [`ObjectId`], which is a stable index into [`ObjectRegistry`].

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::hand::Hand;

/// Stable index of a juggled object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ObjectId(pub u32);

impl ObjectId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for ObjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "O{}", self.0)
    }
}

/// Airborne leg of an object, from the throwing hand to the catching hand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flight {
    pub object: ObjectId,
    pub from: Hand,
    pub to: Hand,
    pub launch_beat: i64,
    pub arrival_beat: i64,
}

/// Lifecycle of a juggled object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObjectState {
    /// Held in a hand, waiting for that hand's next throw
    Resting { hand: Hand },
    /// In the air
    InFlight(Flight),
}

/// A juggled object
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JuggledObject {
    pub id: ObjectId,
    pub pos: Vec2,
    pub state: ObjectState,
}

impl JuggledObject {
    pub fn new(id: ObjectId, hand: Hand, pos: Vec2) -> Self {
        Self {
            id,
            pos,
            state: ObjectState::Resting { hand },
        }
    }
}

/// Growth-only arena of juggled objects
#[derive(Debug, Clone, Default)]
pub struct ObjectRegistry {
    objects: Vec<JuggledObject>,
}

impl ObjectRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a new object resting in `hand` at `pos`
    pub fn create(&mut self, hand: Hand, pos: Vec2) -> ObjectId {
        let id = ObjectId(self.objects.len() as u32);
        self.objects.push(JuggledObject::new(id, hand, pos));
        id
    }

    /// Panics if `id` was not produced by this registry
    #[inline]
    pub fn get(&self, id: ObjectId) -> &JuggledObject {
        &self.objects[id.index()]
    }

    /// Panics if `id` was not produced by this registry
    #[inline]
    pub fn get_mut(&mut self, id: ObjectId) -> &mut JuggledObject {
        &mut self.objects[id.index()]
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &JuggledObject> {
        self.objects.iter()
    }

    /// Current positions in index order
    pub fn positions(&self) -> Vec<Vec2> {
        self.objects.iter().map(|o| o.pos).collect()
    }

    pub fn clear(&mut self) {
        self.objects.clear();
    }
}
