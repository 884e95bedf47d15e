//! Fixed timestep simulation tick
//!
//! Each tick advances the clock, lands due flights, schedules at most one
//! throw per beat and hands the resulting frame to the renderer.

use serde::Serialize;

use super::hand::Hand;
use super::registry::{Flight, ObjectId, ObjectState};
use super::state::JugglerState;
use crate::consts::{MAX_CATCHUP_BEATS, MAX_ELAPSED};
use crate::error::{SimError, SimResult};
use crate::render::RenderSink;

/// Something that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TickEvent {
    /// An object reached its catching hand
    Caught { object: ObjectId, hand: Hand, beat: i64 },
    /// A hand threw an object
    Thrown {
        object: ObjectId,
        from: Hand,
        to: Hand,
        height: u32,
        beat: i64,
        /// The hand was empty so a new object was created
        created: bool,
    },
    /// Height 0: the hand due to throw stays idle
    Idle { hand: Hand, beat: i64 },
}

/// Outcome of one tick
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TickReport {
    pub tick: u64,
    pub beat: i64,
    pub events: Vec<TickEvent>,
}

impl TickReport {
    pub fn throws(&self) -> impl Iterator<Item = &TickEvent> {
        self.events
            .iter()
            .filter(|e| matches!(e, TickEvent::Thrown { .. }))
    }

    pub fn catches(&self) -> impl Iterator<Item = &TickEvent> {
        self.events
            .iter()
            .filter(|e| matches!(e, TickEvent::Caught { .. }))
    }
}

/// Advance the simulation by `dt` seconds
pub fn tick<S: RenderSink + ?Sized>(
    state: &mut JugglerState,
    dt: f64,
    sink: &mut S,
) -> SimResult<TickReport> {
    if !(dt.is_finite() && dt > 0.0) {
        return Err(SimError::Config(format!("tick step must be positive, got {dt}")));
    }

    if state.clock.elapsed + dt > MAX_ELAPSED {
        return Err(SimError::Config(format!(
            "tick step {dt} would run past {MAX_ELAPSED} seconds of simulated time"
        )));
    }

    state.clock.advance(dt);
    let now = state.clock.elapsed;
    let current_beat = state.clock.current_beat();
    let mut events = Vec::new();

    // Every beat crossed since the last tick gets its landings and its throw,
    // oldest first. With steps under one beat this is at most one beat.
    let mut first_pending = state.clock.last_processed_beat.map_or(0, |b| b + 1);
    let oldest_allowed = current_beat - MAX_CATCHUP_BEATS + 1;
    if first_pending < oldest_allowed {
        log::warn!(
            "tick {} crossed {} beats, skipping throws for beats {}..{}",
            state.clock.ticks,
            current_beat - first_pending + 1,
            first_pending,
            oldest_allowed
        );
        first_pending = oldest_allowed;
    }
    for beat in first_pending..=current_beat {
        land_flights(state, beat as f64, &mut events)?;
        schedule_throw(state, beat, &mut events);
        state.clock.last_processed_beat = Some(beat);
    }

    // Move everything still airborne to the current time
    land_flights(state, now, &mut events)?;

    debug_assert!(
        state.check_conservation(),
        "objects misplaced after tick {}: {:?}",
        state.clock.ticks,
        state.misplaced_objects()
    );
    log::trace!(
        "tick {} t={:.3} beat {}: {} airborne, {} held",
        state.clock.ticks,
        now,
        current_beat,
        state.flights.len(),
        state.hands.total()
    );

    sink.present(&state.frame());

    Ok(TickReport {
        tick: state.clock.ticks,
        beat: current_beat,
        events,
    })
}

/// Run `n` ticks at the configured interval
pub fn run_ticks<S: RenderSink + ?Sized>(
    state: &mut JugglerState,
    n: u64,
    sink: &mut S,
) -> SimResult<Vec<TickReport>> {
    let dt = state.settings.tick_interval;
    (0..n).map(|_| tick(state, dt, sink)).collect()
}

/// Update flight positions at time `t` and move landed objects into their
/// catching hand
fn land_flights(state: &mut JugglerState, t: f64, events: &mut Vec<TickEvent>) -> SimResult<()> {
    let landed = state.flights.advance(t, &state.model, &mut state.objects)?;
    for flight in landed {
        state.flights.remove(flight.object);

        let obj = state.objects.get_mut(flight.object);
        obj.state = ObjectState::Resting { hand: flight.to };
        obj.pos = state.model.layout.position(flight.to);
        state.hands.give(flight.to, flight.object);

        log::debug!(
            "beat {}: {} caught by {} hand",
            flight.arrival_beat,
            flight.object,
            flight.to
        );
        events.push(TickEvent::Caught {
            object: flight.object,
            hand: flight.to,
            beat: flight.arrival_beat,
        });
    }
    Ok(())
}

/// Throw for `beat`: left on even beats, right on odd, reusing the most
/// recently caught object in that hand or creating one
fn schedule_throw(state: &mut JugglerState, beat: i64, events: &mut Vec<TickEvent>) {
    let from = Hand::for_beat(beat);
    let height = state.sequence.height_at(beat);

    if height == 0 {
        events.push(TickEvent::Idle { hand: from, beat });
        return;
    }

    let (object, created) = match state.hands.try_take(from) {
        Some(id) => (id, false),
        None => {
            let pos = state.model.layout.position(from);
            (state.objects.create(from, pos), true)
        }
    };

    let flight = Flight {
        object,
        from,
        to: from.catcher(height),
        launch_beat: beat,
        arrival_beat: beat + height as i64,
    };
    state.objects.get_mut(object).state = ObjectState::InFlight(flight);
    state.flights.insert(flight);

    if created {
        log::debug!("beat {beat}: created {object} in {from} hand");
    }
    log::debug!(
        "beat {}: {} throws {} ({}) to {} hand, lands beat {}",
        beat,
        from,
        object,
        height,
        flight.to,
        flight.arrival_beat
    );
    events.push(TickEvent::Thrown {
        object,
        from,
        to: flight.to,
        height,
        beat,
        created,
    });
}
