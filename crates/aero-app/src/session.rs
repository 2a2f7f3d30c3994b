//! One interactive session: store, control inputs and background worker.
//!
//! Frontends call [`SimSession::tick`] once per frame (or loop iteration).
//! Tick applies finished calls to the store and pushes settled control
//! inputs, all on the caller's thread.

use crate::controls::{ControlInputs, ControlsModel, DEFAULT_DEBOUNCE};
use crate::error::{AppError, AppResult};
use crate::store::{Completion, SimStore};
use crate::worker::{SimWorker, WorkerMessage};
use aero_client::SimulationApi;
use aero_core::{AirfoilShape, ParamsPatch, SimParams};
use std::sync::Arc;
use std::time::{Duration, Instant};

pub struct SimSession {
    store: SimStore,
    controls: ControlsModel,
    worker: SimWorker,
}

impl SimSession {
    pub fn new(api: Arc<dyn SimulationApi>) -> Self {
        Self::with_params(api, SimParams::default(), DEFAULT_DEBOUNCE)
    }

    pub fn with_params(api: Arc<dyn SimulationApi>, params: SimParams, debounce: Duration) -> Self {
        let controls = ControlsModel::with_delay(&params, debounce);
        Self {
            store: SimStore::new(params),
            controls,
            worker: SimWorker::new(api),
        }
    }

    pub fn store(&self) -> &SimStore {
        &self.store
    }

    /// Mutable access, e.g. to subscribe listeners.
    pub fn store_mut(&mut self) -> &mut SimStore {
        &mut self.store
    }

    pub fn controls(&self) -> &ControlsModel {
        &self.controls
    }

    pub fn api_description(&self) -> String {
        self.worker.api().describe()
    }

    pub fn in_flight(&self) -> usize {
        self.worker.in_flight()
    }

    pub fn set_notifier<F>(&mut self, notify: F)
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.worker.set_notifier(notify);
    }

    /// Issue a call with the current parameters. Returns its sequence number.
    pub fn simulate(&mut self) -> u64 {
        let ticket = self.store.begin_simulate();
        let seq = ticket.seq;
        self.worker.start(ticket);
        seq
    }

    /// Shape changes skip the debounce.
    pub fn set_shape(&mut self, shape: AirfoilShape) {
        if self.store.params().shape == shape {
            return;
        }
        tracing::info!(shape = %shape, "shape changed");
        self.store.set_params(ParamsPatch::shape(shape));
        if !self.store.is_loading() {
            self.simulate();
        }
    }

    pub fn edit_inputs(&mut self, inputs: ControlInputs, now: Instant) -> bool {
        self.controls.edit(inputs, now)
    }

    /// Apply finished calls and settled inputs. Returns true when anything
    /// in the store changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut changed = false;
        for message in self.worker.drain() {
            changed |= self.apply(message) == Completion::Applied;
        }

        if let Some(patch) = self.controls.poll(now) {
            tracing::debug!(?patch, "controls settled");
            self.store.set_params(patch);
            if !self.store.is_loading() {
                self.simulate();
            }
            changed = true;
        }
        changed
    }

    fn apply(&mut self, message: WorkerMessage) -> Completion {
        match message {
            WorkerMessage::Finished { seq, result } => self.store.complete(seq, result),
        }
    }

    /// How long the caller may sleep before the next tick has work to do.
    pub fn next_wakeup(&self, now: Instant) -> Option<Duration> {
        self.controls.time_remaining(now)
    }

    /// Block until every outstanding call has reported back, applying each
    /// result as it arrives.
    pub fn wait_for_completions(&mut self, timeout: Duration) -> AppResult<()> {
        let deadline = Instant::now() + timeout;
        while self.worker.in_flight() > 0 {
            let left = deadline.saturating_duration_since(Instant::now());
            if left.is_zero() {
                return Err(AppError::Timeout(format!(
                    "{} simulate call(s)",
                    self.worker.in_flight()
                )));
            }
            if let Some(message) = self.worker.wait_one(left) {
                self.apply(message);
            }
        }
        Ok(())
    }
}
