//! In-memory store of generated traces.
//!
//! Traces are immutable, so the store hands out `Arc`s. It is bounded: once
//! `capacity` traces are held, the oldest is evicted on insert.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use dashmap::DashMap;
use uuid::Uuid;

use algotrace_gen::DynTrace;

pub const DEFAULT_CAPACITY: usize = 256;

pub struct TraceStore {
    traces: DashMap<Uuid, Arc<DynTrace>>,
    order: Mutex<VecDeque<Uuid>>,
    capacity: usize,
}

impl TraceStore {
    pub fn new(capacity: usize) -> Self {
        TraceStore {
            traces: DashMap::new(),
            order: Mutex::new(VecDeque::new()),
            capacity: capacity.max(1),
        }
    }

    /// Stores `trace` under a fresh id.
    pub fn insert(&self, trace: Arc<DynTrace>) -> Uuid {
        let id = Uuid::new_v4();
        self.traces.insert(id, trace);

        let mut order = self.order.lock().unwrap_or_else(|e| e.into_inner());
        order.push_back(id);
        while order.len() > self.capacity {
            if let Some(old) = order.pop_front() {
                self.traces.remove(&old);
                tracing::debug!(%old, "evicted trace");
            }
        }
        id
    }

    pub fn get(&self, id: &Uuid) -> Option<Arc<DynTrace>> {
        self.traces.get(id).map(|entry| Arc::clone(entry.value()))
    }

    pub fn len(&self) -> usize {
        self.traces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.traces.is_empty()
    }
}

impl Default for TraceStore {
    fn default() -> Self {
        TraceStore::new(DEFAULT_CAPACITY)
    }
}
