//! Session parameter store.
//!
//! Single owned container for the current request parameters, the latest
//! result and the request status. Consumers read through accessors, write
//! through the mutating methods, and can subscribe to change events.
//!
//! Every simulate call is tagged with a sequence number. Only the completion
//! carrying the highest number issued so far is applied; anything older is
//! dropped, so overlapping requests never let an old result overwrite a
//! newer one.

use aero_client::{ClientResult, SimulationApi};
use aero_core::{ParamsPatch, SimParams, SimResponse};
use chrono::{DateTime, Local};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SimStatus {
    #[default]
    Idle,
    Loading,
    Ready,
    Error,
}

impl SimStatus {
    pub fn label(&self) -> &'static str {
        match self {
            SimStatus::Idle => "idle",
            SimStatus::Loading => "loading",
            SimStatus::Ready => "ready",
            SimStatus::Error => "error",
        }
    }
}

/// Handle for one issued simulate call.
#[derive(Debug, Clone, PartialEq)]
pub struct SimTicket {
    pub seq: u64,
    /// Parameters as they were when the call was issued
    pub params: SimParams,
}

/// What happened to a completion handed back to the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Applied,
    Stale,
}

#[derive(Debug, Clone, PartialEq)]
pub enum StoreEvent {
    ParamsChanged(SimParams),
    Loading { seq: u64 },
    Ready { seq: u64 },
    Failed { seq: u64, message: String },
    StaleDiscarded { seq: u64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&StoreEvent)>;

pub struct SimStore {
    params: SimParams,
    data: Option<SimResponse>,
    status: SimStatus,
    error: Option<String>,
    last_issued: u64,
    updated_at: Option<DateTime<Local>>,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl Default for SimStore {
    fn default() -> Self {
        Self::new(SimParams::default())
    }
}

impl SimStore {
    pub fn new(params: SimParams) -> Self {
        Self {
            params,
            data: None,
            status: SimStatus::Idle,
            error: None,
            last_issued: 0,
            updated_at: None,
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    pub fn params(&self) -> &SimParams {
        &self.params
    }

    pub fn data(&self) -> Option<&SimResponse> {
        self.data.as_ref()
    }

    pub fn status(&self) -> SimStatus {
        self.status
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.status == SimStatus::Loading
    }

    /// Sequence number of the most recently issued simulate call (0 if none).
    pub fn last_issued(&self) -> u64 {
        self.last_issued
    }

    /// Local time the current result was applied.
    pub fn updated_at(&self) -> Option<DateTime<Local>> {
        self.updated_at
    }

    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&StoreEvent) + 'static,
    {
        self.next_subscription += 1;
        let id = SubscriptionId(self.next_subscription);
        self.listeners.push((id, Box::new(listener)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sid, _)| *sid != id);
        before != self.listeners.len()
    }

    fn emit(&mut self, event: StoreEvent) {
        for (_, listener) in self.listeners.iter_mut() {
            listener(&event);
        }
    }

    /// Merge a partial update into the current parameters.
    pub fn set_params(&mut self, patch: ParamsPatch) {
        if patch.is_empty() {
            return;
        }
        self.params.merge(patch);
        let snapshot = self.params.clone();
        self.emit(StoreEvent::ParamsChanged(snapshot));
    }

    /// Issue a new simulate call: status goes to loading and the error is
    /// cleared immediately. The caller runs the request and hands the
    /// outcome back through [`SimStore::complete`].
    pub fn begin_simulate(&mut self) -> SimTicket {
        self.last_issued += 1;
        let seq = self.last_issued;
        self.status = SimStatus::Loading;
        self.error = None;
        tracing::debug!(seq, "simulate issued");
        self.emit(StoreEvent::Loading { seq });
        SimTicket {
            seq,
            params: self.params.clone(),
        }
    }

    /// Apply the outcome of call `seq` if it is still the newest one.
    pub fn complete(&mut self, seq: u64, result: ClientResult<SimResponse>) -> Completion {
        if seq != self.last_issued {
            tracing::debug!(seq, newest = self.last_issued, "discarding stale result");
            self.emit(StoreEvent::StaleDiscarded { seq });
            return Completion::Stale;
        }

        match result {
            Ok(data) => {
                self.data = Some(data);
                self.status = SimStatus::Ready;
                self.updated_at = Some(Local::now());
                self.emit(StoreEvent::Ready { seq });
            }
            Err(err) => {
                let message = err.to_string();
                tracing::warn!(seq, error = %message, "simulate failed");
                self.error = Some(message.clone());
                self.status = SimStatus::Error;
                self.emit(StoreEvent::Failed { seq, message });
            }
        }
        Completion::Applied
    }

    /// Issue and run a call on the current thread.
    pub fn simulate_with(&mut self, api: &dyn SimulationApi) -> Completion {
        let ticket = self.begin_simulate();
        let result = api.simulate(&ticket.params);
        self.complete(ticket.seq, result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aero_client::ClientError;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn response(cl: f64) -> SimResponse {
        SimResponse {
            cp: vec![1.0, 0.0],
            xc: vec![0.0, 1.0],
            yc: vec![0.0, 0.0],
            cl,
            gamma: 0.1,
            chord: 1.0,
        }
    }

    #[test]
    fn starts_idle_with_defaults() {
        let store = SimStore::default();
        assert_eq!(store.status(), SimStatus::Idle);
        assert!(store.data().is_none());
        assert!(store.error().is_none());
        assert_eq!(store.params(), &SimParams::default());
    }

    #[test]
    fn begin_is_synchronous_loading() {
        let mut store = SimStore::default();
        let ticket = store.begin_simulate();
        assert_eq!(store.status(), SimStatus::Loading);
        assert_eq!(ticket.seq, 1);
        assert_eq!(ticket.params, SimParams::default());
    }

    #[test]
    fn success_sets_ready_and_data() {
        let mut store = SimStore::default();
        let ticket = store.begin_simulate();
        assert_eq!(store.complete(ticket.seq, Ok(response(0.5))), Completion::Applied);
        assert_eq!(store.status(), SimStatus::Ready);
        assert_eq!(store.data().map(|d| d.cl), Some(0.5));
        assert!(store.updated_at().is_some());
    }

    #[test]
    fn failure_stores_message_and_keeps_previous_data() {
        let mut store = SimStore::default();
        let first = store.begin_simulate();
        store.complete(first.seq, Ok(response(0.5)));

        let second = store.begin_simulate();
        store.complete(
            second.seq,
            Err(ClientError::Protocol {
                status: 500,
                body: "internal error".to_string(),
            }),
        );
        assert_eq!(store.status(), SimStatus::Error);
        assert_eq!(store.error(), Some("HTTP 500: internal error"));
        assert_eq!(store.data().map(|d| d.cl), Some(0.5));
    }

    #[test]
    fn new_call_clears_error() {
        let mut store = SimStore::default();
        let t = store.begin_simulate();
        store.complete(
            t.seq,
            Err(ClientError::Transport {
                message: "offline".to_string(),
            }),
        );
        assert_eq!(store.error(), Some("offline"));
        store.begin_simulate();
        assert!(store.error().is_none());
        assert!(store.is_loading());
    }

    #[test]
    fn older_completion_is_discarded() {
        let mut store = SimStore::default();
        let old = store.begin_simulate();
        let new = store.begin_simulate();

        assert_eq!(store.complete(new.seq, Ok(response(2.0))), Completion::Applied);
        assert_eq!(store.complete(old.seq, Ok(response(1.0))), Completion::Stale);
        assert_eq!(store.data().map(|d| d.cl), Some(2.0));
        assert_eq!(store.status(), SimStatus::Ready);
    }

    #[test]
    fn stale_completion_does_not_end_loading() {
        let mut store = SimStore::default();
        let old = store.begin_simulate();
        let _new = store.begin_simulate();
        store.complete(
            old.seq,
            Err(ClientError::Transport {
                message: "late".to_string(),
            }),
        );
        assert!(store.is_loading());
        assert!(store.error().is_none());
    }

    #[test]
    fn listeners_see_events_in_order() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut store = SimStore::default();
        let sink = Rc::clone(&seen);
        let id = store.subscribe(move |e| sink.borrow_mut().push(e.clone()));

        store.set_params(ParamsPatch::aoa_deg(7.0));
        let t = store.begin_simulate();
        store.complete(t.seq, Ok(response(0.3)));

        let events = seen.borrow().clone();
        assert_eq!(events.len(), 3);
        assert!(matches!(&events[0], StoreEvent::ParamsChanged(p) if p.aoa_deg == 7.0));
        assert_eq!(events[1], StoreEvent::Loading { seq: 1 });
        assert_eq!(events[2], StoreEvent::Ready { seq: 1 });

        assert!(store.unsubscribe(id));
        store.set_params(ParamsPatch::aoa_deg(8.0));
        assert_eq!(seen.borrow().len(), 3);
    }

    #[test]
    fn empty_patch_emits_nothing() {
        let seen = Rc::new(RefCell::new(0usize));
        let mut store = SimStore::default();
        let sink = Rc::clone(&seen);
        store.subscribe(move |_| *sink.borrow_mut() += 1);
        store.set_params(ParamsPatch::default());
        assert_eq!(*seen.borrow(), 0);
    }
}
