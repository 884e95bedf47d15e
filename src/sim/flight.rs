//! Objects currently in the air

use super::registry::{Flight, ObjectId, ObjectRegistry};
use super::trajectory::TrajectoryModel;
use crate::error::SimResult;

/// Airborne objects in launch order
#[derive(Debug, Clone, Default)]
pub struct FlightSet {
    flights: Vec<Flight>,
}

impl FlightSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, flight: Flight) {
        debug_assert!(!self.contains(flight.object), "{} already airborne", flight.object);
        self.flights.push(flight);
    }

    /// Move every member to its position at time `t` and return the flights
    /// due by `floor(t)`, in launch order.
    ///
    /// Landed flights stay in the set; the caller removes them before handing
    /// the objects to their catching hand.
    pub fn advance(
        &self,
        t: f64,
        model: &TrajectoryModel,
        registry: &mut ObjectRegistry,
    ) -> SimResult<Vec<Flight>> {
        let beat = t.floor() as i64;
        let mut landed = Vec::new();
        for flight in &self.flights {
            registry.get_mut(flight.object).pos = model.flight_position(flight, t)?;
            if flight.arrival_beat <= beat {
                landed.push(*flight);
            }
        }
        Ok(landed)
    }

    /// Remove an object's flight, keeping the others in launch order
    pub fn remove(&mut self, id: ObjectId) -> Option<Flight> {
        let idx = self.flights.iter().position(|f| f.object == id)?;
        Some(self.flights.remove(idx))
    }

    pub fn get(&self, id: ObjectId) -> Option<&Flight> {
        self.flights.iter().find(|f| f.object == id)
    }

    pub fn contains(&self, id: ObjectId) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.flights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flights.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Flight> {
        self.flights.iter()
    }

    pub fn clear(&mut self) {
        self.flights.clear();
    }
}
