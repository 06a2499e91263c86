//! Immutable traces and the recorder that builds them.
//!
//! A generator owns a [`Recorder`] while the algorithm runs and calls
//! [`Recorder::record`] at each transition. Recording snapshots the working
//! state once, through [`Snapshot`], so later mutation of that state cannot
//! reach steps already recorded. [`Recorder::finish`] appends the terminal
//! step and seals everything into a [`Trace`].
//!
//! # Sharing
//!
//! A sealed trace keeps its steps in an `Arc<[Step]>`. Cloning a trace is a
//! reference-count bump, and every holder sees the same read-only steps.

use std::sync::Arc;

use serde::{Serialize, Serializer};

use crate::snapshot::Snapshot;
use crate::step::{Step, StepKind};

/// Anything playback can navigate: an indexed sequence of known length.
pub trait Timeline {
    /// Number of steps. Traces are never empty, so this is at least 1.
    fn len(&self) -> usize;

    /// Index of the final step.
    fn last_index(&self) -> usize {
        self.len().saturating_sub(1)
    }
}

/// The complete, ordered, immutable record of one algorithm run.
#[derive(Debug, Clone, PartialEq)]
pub struct Trace<K, S> {
    steps: Arc<[Step<K, S>]>,
}

impl<K: StepKind, S> Trace<K, S> {
    /// A trace holding a single explanatory terminal step.
    ///
    /// Used for degenerate input ("empty input, nothing to do").
    pub fn single(kind: K, state: S, description: impl Into<String>) -> Self {
        let mut recorder = Recorder::new();
        recorder.record_frozen(kind, state, description);
        recorder.seal()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Always `false` for traces produced by a [`Recorder`].
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Step<K, S>> {
        self.steps.get(index)
    }

    pub fn first(&self) -> Option<&Step<K, S>> {
        self.steps.first()
    }

    pub fn last(&self) -> Option<&Step<K, S>> {
        self.steps.last()
    }

    pub fn steps(&self) -> &[Step<K, S>] {
        &self.steps
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Step<K, S>> {
        self.steps.iter()
    }

    /// The kind of every step, in order.
    pub fn kinds(&self) -> Vec<K> {
        self.steps.iter().map(|s| s.kind).collect()
    }

    /// Steps of one kind, in order.
    pub fn steps_of(&self, kind: K) -> impl Iterator<Item = &Step<K, S>> {
        self.steps.iter().filter(move |s| s.kind == kind)
    }

    /// Whether the trace ends on a terminal step.
    pub fn is_complete(&self) -> bool {
        self.last().is_some_and(Step::is_terminal)
    }
}

impl<K: StepKind, S: Serialize> Trace<K, S> {
    /// Content digest of the trace.
    ///
    /// Step states hold only ordered containers, so their JSON form, and
    /// therefore this hash, is identical for identical runs.
    pub fn fingerprint(&self) -> blake3::Hash {
        let mut hasher = blake3::Hasher::new();
        for step in self.steps.iter() {
            let bytes =
                serde_json::to_vec(step).expect("step serialization should never fail");
            hasher.update(&(bytes.len() as u64).to_le_bytes());
            hasher.update(&bytes);
        }
        hasher.finalize()
    }
}

impl<K, S> Timeline for Trace<K, S> {
    fn len(&self) -> usize {
        self.steps.len()
    }
}

impl<'a, K, S> IntoIterator for &'a Trace<K, S> {
    type Item = &'a Step<K, S>;
    type IntoIter = std::slice::Iter<'a, Step<K, S>>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

impl<K: Serialize, S: Serialize> Serialize for Trace<K, S> {
    fn serialize<Ser: Serializer>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error> {
        serializer.collect_seq(self.steps.iter())
    }
}

/// Append-only step buffer owned by a generator while it runs.
#[derive(Debug)]
pub struct Recorder<K, S> {
    steps: Vec<Step<K, S>>,
}

impl<K: StepKind, S> Default for Recorder<K, S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: StepKind, S> Recorder<K, S> {
    pub fn new() -> Self {
        Recorder { steps: Vec::new() }
    }

    /// Snapshots `working` and appends a step.
    pub fn record<W>(&mut self, kind: K, working: &W, description: impl Into<String>)
    where
        W: Snapshot<Frozen = S> + ?Sized,
    {
        self.record_frozen(kind, working.snapshot(), description);
    }

    /// Appends a step whose state the caller has already built by value.
    pub fn record_frozen(&mut self, kind: K, state: S, description: impl Into<String>) {
        let index = self.steps.len();
        self.steps.push(Step {
            index,
            kind,
            description: description.into(),
            state,
        });
    }

    /// Number of steps recorded so far.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// The most recently recorded step.
    pub fn last(&self) -> Option<&Step<K, S>> {
        self.steps.last()
    }

    /// Records the terminal step and seals the trace.
    pub fn finish<W>(mut self, kind: K, working: &W, description: impl Into<String>) -> Trace<K, S>
    where
        W: Snapshot<Frozen = S> + ?Sized,
    {
        debug_assert!(kind.is_terminal(), "trace finished on non-terminal kind {kind:?}");
        self.record(kind, working, description);
        self.seal()
    }

    /// Like [`finish`](Self::finish) with an already owned state.
    pub fn finish_frozen(mut self, kind: K, state: S, description: impl Into<String>) -> Trace<K, S> {
        debug_assert!(kind.is_terminal(), "trace finished on non-terminal kind {kind:?}");
        self.record_frozen(kind, state, description);
        self.seal()
    }

    fn seal(self) -> Trace<K, S> {
        Trace {
            steps: self.steps.into(),
        }
    }
}
