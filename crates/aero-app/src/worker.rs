//! Background dispatch of simulate calls.
//!
//! Each call runs on its own thread and reports back over a channel. The
//! owner of the store drains the channel and applies results itself, so the
//! store is only ever touched from one thread.

use crate::store::SimTicket;
use aero_client::{ClientResult, SimulationApi};
use aero_core::SimResponse;
use std::sync::Arc;
use std::sync::mpsc::{Receiver, RecvTimeoutError, Sender, channel};
use std::thread;
use std::time::Duration;

#[derive(Debug, Clone)]
pub enum WorkerMessage {
    Finished {
        seq: u64,
        result: ClientResult<SimResponse>,
    },
}

type Notifier = Arc<dyn Fn() + Send + Sync>;

pub struct SimWorker {
    api: Arc<dyn SimulationApi>,
    tx: Sender<WorkerMessage>,
    rx: Receiver<WorkerMessage>,
    in_flight: usize,
    notifier: Option<Notifier>,
}

impl SimWorker {
    pub fn new(api: Arc<dyn SimulationApi>) -> Self {
        let (tx, rx) = channel();
        Self {
            api,
            tx,
            rx,
            in_flight: 0,
            notifier: None,
        }
    }

    /// Called from the worker thread after each message is sent; the UI
    /// uses it to request a repaint.
    pub fn set_notifier<F>(&mut self, notify: F)
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.notifier = Some(Arc::new(notify));
    }

    pub fn api(&self) -> &Arc<dyn SimulationApi> {
        &self.api
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    pub fn start(&mut self, ticket: SimTicket) {
        let api = Arc::clone(&self.api);
        let tx = self.tx.clone();
        let notifier = self.notifier.clone();
        self.in_flight += 1;

        thread::spawn(move || {
            let result = api.simulate(&ticket.params);
            // The receiver is gone only when the session was dropped.
            let _ = tx.send(WorkerMessage::Finished {
                seq: ticket.seq,
                result,
            });
            if let Some(notify) = notifier {
                notify();
            }
        });
    }

    /// Everything that has arrived so far, without blocking.
    pub fn drain(&mut self) -> Vec<WorkerMessage> {
        let messages: Vec<_> = self.rx.try_iter().collect();
        self.in_flight = self.in_flight.saturating_sub(messages.len());
        messages
    }

    /// Block up to `timeout` for the next message.
    pub fn wait_one(&mut self, timeout: Duration) -> Option<WorkerMessage> {
        match self.rx.recv_timeout(timeout) {
            Ok(msg) => {
                self.in_flight = self.in_flight.saturating_sub(1);
                Some(msg)
            }
            Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => None,
        }
    }
}
