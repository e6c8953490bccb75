//! Event types and sinks for observing probability computations.
//!
//! [`crate::engine::ProbabilityEngine::compute_with_events`] reports each object type it
//! evaluates or skips, then a closing summary. Skipping is a normal outcome (nothing left
//! to find, or no placement fits), not a failure.
use crate::objects::ObjectType;

/// Why an object type contributed nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkipReason {
    /// Every instance has already been found.
    NoneRemaining,
    /// No placement fits the board without touching an opened cell.
    NoValidPlacement,
}

/// Describes events emitted by the probability engine.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    /// An object type contributed coverage.
    ObjectEvaluated {
        /// Position in the object list.
        index: usize,
        /// The object type as evaluated.
        object: ObjectType,
        /// Valid placements across all orientations.
        placements: usize,
    },

    /// An object type was skipped.
    ObjectSkipped {
        /// Position in the object list.
        index: usize,
        /// The object type as given.
        object: ObjectType,
        reason: SkipReason,
    },

    /// Emitted once after the opened-cell override.
    Finished {
        /// Object types that contributed.
        evaluated: usize,
        /// Object types that were skipped.
        skipped: usize,
        /// Largest probability on the resulting grid.
        max_probability: f64,
    },
}

/// Discriminant of [`EngineEvent`], used for filtering.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EngineEventKind {
    ObjectEvaluated,
    ObjectSkipped,
    Finished,
}

impl EngineEvent {
    pub fn kind(&self) -> EngineEventKind {
        match self {
            EngineEvent::ObjectEvaluated { .. } => EngineEventKind::ObjectEvaluated,
            EngineEvent::ObjectSkipped { .. } => EngineEventKind::ObjectSkipped,
            EngineEvent::Finished { .. } => EngineEventKind::Finished,
        }
    }
}

/// A generic event sink that accepts [`EngineEvent`]s.
pub trait EventSink {
    fn send(&mut self, event: EngineEvent);

    /// Whether events of `kind` should be built and sent at all.
    #[inline]
    fn wants(&self, _kind: EngineEventKind) -> bool {
        true
    }
}

/// A no-op event sink.
impl EventSink for () {
    #[inline]
    fn send(&mut self, _event: EngineEvent) {}

    #[inline]
    fn wants(&self, _kind: EngineEventKind) -> bool {
        false
    }
}

/// An event sink that forwards to a user-provided closure.
pub struct FnSink<F>
where
    F: FnMut(EngineEvent),
{
    f: F,
}

impl<F> FnSink<F>
where
    F: FnMut(EngineEvent),
{
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> EventSink for FnSink<F>
where
    F: FnMut(EngineEvent),
{
    #[inline]
    fn send(&mut self, event: EngineEvent) {
        (self.f)(event);
    }
}

/// An event sink that collects all events in a `Vec`.
#[derive(Default)]
pub struct VecSink {
    events: Vec<EngineEvent>,
}

impl VecSink {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn into_inner(self) -> Vec<EngineEvent> {
        self.events
    }

    pub fn as_slice(&self) -> &[EngineEvent] {
        &self.events
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl EventSink for VecSink {
    #[inline]
    fn send(&mut self, event: EngineEvent) {
        self.events.push(event);
    }
}
