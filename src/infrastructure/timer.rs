//! One-shot timers that deliver a message when they elapse

use std::collections::HashMap;
use std::time::Duration;

use tokio::{sync::mpsc, task::JoinHandle};

use crate::core::{cmd::TimerId, msg::Msg};

/// Owns every pending timer task. Starting a timer with an id that is already
/// pending replaces it; dropping the service aborts everything still pending.
#[derive(Debug)]
pub struct TimerService {
    msg_tx: mpsc::UnboundedSender<Msg>,
    timers: HashMap<TimerId, JoinHandle<()>>,
}

impl TimerService {
    pub fn new(msg_tx: mpsc::UnboundedSender<Msg>) -> Self {
        Self {
            msg_tx,
            timers: HashMap::new(),
        }
    }

    pub fn start(&mut self, id: TimerId, after: Duration) {
        let tx = self.msg_tx.clone();
        let handle = tokio::spawn(async move {
            tokio::time::sleep(after).await;
            if tx.send(Msg::timer_elapsed(id)).is_err() {
                log::debug!("Timer {id:?} elapsed after the update loop closed");
            }
        });
        if let Some(previous) = self.timers.insert(id, handle) {
            previous.abort();
        }
    }

    pub fn cancel(&mut self, id: TimerId) {
        if let Some(handle) = self.timers.remove(&id) {
            handle.abort();
        }
    }

    pub fn cancel_all(&mut self) {
        for (_, handle) in self.timers.drain() {
            handle.abort();
        }
    }

    pub fn is_pending(&self, id: TimerId) -> bool {
        self.timers
            .get(&id)
            .is_some_and(|handle| !handle.is_finished())
    }

    pub fn pending_count(&self) -> usize {
        self.timers
            .values()
            .filter(|handle| !handle.is_finished())
            .count()
    }
}

impl Drop for TimerService {
    fn drop(&mut self) {
        self.cancel_all();
    }
}
