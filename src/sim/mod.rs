//! Deterministic juggling simulation
//!
//! All scheduling logic lives here. This module must be pure and deterministic:
//! - Time advances only through `tick`
//! - Stable iteration order (launch order for flights, index order for objects)
//! - No rendering or platform dependencies beyond handing out frames

pub mod flight;
pub mod hand;
pub mod queues;
pub mod registry;
pub mod sequence;
pub mod state;
pub mod tick;
pub mod trajectory;

pub use flight::FlightSet;
pub use hand::{Hand, HandLayout};
pub use queues::HandQueues;
pub use registry::{Flight, JuggledObject, ObjectId, ObjectRegistry, ObjectState};
pub use sequence::SequenceStore;
pub use state::{Clock, JugglerState};
pub use tick::{TickEvent, TickReport, run_ticks, tick};
pub use trajectory::TrajectoryModel;
