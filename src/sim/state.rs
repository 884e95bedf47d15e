//! Simulation state
//!
//! Everything the tick driver mutates lives in [`JugglerState`]. Hand queues
//! and the flight set only hold [`ObjectId`]s; the registry owns the objects.

use glam::Vec2;

use super::flight::FlightSet;
use super::hand::{Hand, HandLayout};
use super::queues::HandQueues;
use super::registry::{ObjectId, ObjectRegistry, ObjectState};
use super::sequence::SequenceStore;
use super::trajectory::TrajectoryModel;
use crate::consts::BEAT_EPSILON;
use crate::error::SimResult;
use crate::render::{Frame, HandRect};
use crate::settings::SimSettings;

/// Simulated time. One beat lasts one second.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Clock {
    /// Seconds since start
    pub elapsed: f64,
    /// Ticks since start
    pub ticks: u64,
    /// Last beat whose throw was scheduled
    pub last_processed_beat: Option<i64>,
}

impl Clock {
    pub fn advance(&mut self, dt: f64) {
        self.ticks += 1;
        self.elapsed += dt;
        // Keep 0.1 steps from landing just short of a beat
        let nearest = self.elapsed.round();
        if (self.elapsed - nearest).abs() < BEAT_EPSILON {
            self.elapsed = nearest;
        }
    }

    #[inline]
    pub fn current_beat(&self) -> i64 {
        self.elapsed.floor() as i64
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct JugglerState {
    pub settings: SimSettings,
    pub sequence: SequenceStore,
    pub model: TrajectoryModel,
    pub clock: Clock,
    pub objects: ObjectRegistry,
    pub hands: HandQueues,
    pub flights: FlightSet,
}

impl JugglerState {
    pub fn new(settings: SimSettings) -> SimResult<Self> {
        settings.validate()?;
        let sequence = SequenceStore::load(&settings.sequence)?;
        if settings.validate_pattern {
            sequence.validate()?;
        }

        let layout = HandLayout::new(
            settings.left_hand(),
            settings.right_hand(),
            Vec2::from(settings.hand_size),
        );
        let model = TrajectoryModel::new(layout, settings.scaled_gravity());

        log::info!(
            "Juggling {} (period {}, average height {:.2})",
            sequence,
            sequence.period(),
            sequence.average()
        );

        Ok(Self {
            settings,
            sequence,
            model,
            clock: Clock::default(),
            objects: ObjectRegistry::new(),
            hands: HandQueues::new(),
            flights: FlightSet::new(),
        })
    }

    /// Shorthand for default settings with the given pattern
    pub fn with_sequence(sequence: &str) -> SimResult<Self> {
        Self::new(SimSettings::with_sequence(sequence))
    }

    /// Back to time zero with no objects
    pub fn reset(&mut self) {
        self.clock.reset();
        self.objects.clear();
        self.hands.clear();
        self.flights.clear();
        log::info!("Simulation reset");
    }

    #[inline]
    pub fn layout(&self) -> &HandLayout {
        &self.model.layout
    }

    #[inline]
    pub fn current_beat(&self) -> i64 {
        self.clock.current_beat()
    }

    /// Snapshot handed to the renderer
    pub fn frame(&self) -> Frame {
        let layout = self.layout();
        Frame {
            tick: self.clock.ticks,
            beat: self.current_beat(),
            time: self.clock.elapsed,
            objects: self.objects.positions(),
            hands: Hand::BOTH.map(|hand| HandRect {
                hand,
                pos: layout.position(hand),
                size: layout.size,
            }),
        }
    }

    /// Objects not in exactly one of {left hand, right hand, air}, or whose
    /// recorded state disagrees with where they are
    pub fn misplaced_objects(&self) -> Vec<ObjectId> {
        self.objects
            .iter()
            .filter(|obj| {
                let left = self.hands.iter(Hand::Left).filter(|&id| id == obj.id).count();
                let right = self.hands.iter(Hand::Right).filter(|&id| id == obj.id).count();
                let air = self.flights.iter().filter(|f| f.object == obj.id).count();
                let consistent = match obj.state {
                    ObjectState::Resting { hand: Hand::Left } => left == 1,
                    ObjectState::Resting { hand: Hand::Right } => right == 1,
                    ObjectState::InFlight(flight) => self.flights.get(obj.id) == Some(&flight),
                };
                left + right + air != 1 || !consistent
            })
            .map(|obj| obj.id)
            .collect()
    }

    /// Every object is held by one hand or airborne, never both or neither
    pub fn check_conservation(&self) -> bool {
        self.hands.total() + self.flights.len() == self.objects.len()
            && self.misplaced_objects().is_empty()
    }
}
