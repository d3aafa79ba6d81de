use std::collections::VecDeque;
use std::time::Duration;

use color_eyre::eyre::{eyre, Result};
use tokio::sync::mpsc;

use crate::{
    core::{
        cmd::Cmd, cmd_executor::CmdExecutor, msg::Msg, raw_msg::RawMsg, state::AppState,
        translator::translate_raw_to_domain, update::update,
    },
    domain::location::Location,
    infrastructure::catalog::Catalog,
};

/// Drives the update loop: translates raw input, applies `update` and hands the
/// resulting commands to the executor
pub struct Runtime {
    state: AppState,
    msg_queue: VecDeque<Msg>,
    raw_msg_queue: VecDeque<RawMsg>,
    cmd_queue: VecDeque<Cmd>,
    msg_tx: mpsc::UnboundedSender<Msg>,
    msg_rx: mpsc::UnboundedReceiver<Msg>,
    raw_msg_tx: mpsc::UnboundedSender<RawMsg>,
    raw_msg_rx: mpsc::UnboundedReceiver<RawMsg>,
    cmd_executor: Option<CmdExecutor>,
}

impl Runtime {
    /// Create a new Runtime without side effects; commands only queue up
    pub fn new(initial_state: AppState) -> Self {
        let (msg_tx, msg_rx) = mpsc::unbounded_channel();
        let (raw_msg_tx, raw_msg_rx) = mpsc::unbounded_channel();

        Self {
            state: initial_state,
            msg_queue: VecDeque::new(),
            raw_msg_queue: VecDeque::new(),
            cmd_queue: VecDeque::new(),
            msg_tx,
            msg_rx,
            raw_msg_tx,
            raw_msg_rx,
            cmd_executor: None,
        }
    }

    /// Create a new Runtime whose commands fetch from `catalog` and navigate from `initial`
    pub fn new_with_executor(initial_state: AppState, catalog: Catalog, initial: Location) -> Self {
        let mut runtime = Self::new(initial_state);
        runtime.cmd_executor = Some(CmdExecutor::new(runtime.msg_tx.clone(), catalog, initial));
        runtime
    }

    /// Get sender for message transmission
    pub fn get_sender(&self) -> mpsc::UnboundedSender<Msg> {
        self.msg_tx.clone()
    }

    /// Get raw message sender
    pub fn get_raw_sender(&self) -> mpsc::UnboundedSender<RawMsg> {
        self.raw_msg_tx.clone()
    }

    /// Get current state (read-only)
    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn executor(&self) -> Option<&CmdExecutor> {
        self.cmd_executor.as_ref()
    }

    /// Send message directly (for testing)
    pub fn send_msg(&mut self, msg: Msg) {
        self.msg_queue.push_back(msg);
    }

    /// Send raw message (for integration with external systems)
    pub fn send_raw_msg(&mut self, raw_msg: RawMsg) {
        self.raw_msg_queue.push_back(raw_msg);
    }

    /// Loads the initial location, which triggers the first fetch
    pub fn start(&mut self) -> Result<()> {
        match &self.cmd_executor {
            Some(executor) => executor.announce_current(),
            None => Err(eyre!("No command executor available")),
        }
    }

    /// Get pending commands
    pub fn pending_commands(&mut self) -> Vec<Cmd> {
        self.cmd_queue.drain(..).collect()
    }

    /// Execute all pending commands using the command executor
    pub fn execute_pending_commands(&mut self) -> Result<Vec<String>> {
        if self.cmd_executor.is_none() {
            return Err(eyre!("No command executor available"));
        }
        let commands = self.pending_commands();
        match self.cmd_executor.as_mut() {
            Some(executor) if !commands.is_empty() => Ok(executor.execute_commands(&commands)),
            _ => Ok(vec![]),
        }
    }

    /// Process a single message
    pub fn process_message(&mut self, msg: Msg) -> Vec<Cmd> {
        if !msg.is_frequent() {
            log::debug!("Update: {msg:?}");
        }
        let (new_state, commands) = update(msg, std::mem::take(&mut self.state));
        self.state = new_state;
        self.cmd_queue.extend(commands.iter().cloned());
        commands
    }

    /// Process all messages in queue
    ///
    /// Domain messages go first. Raw messages are then translated one at a time,
    /// each against the state left by the previous one.
    pub fn process_all_messages(&mut self) -> Vec<Cmd> {
        let mut all_commands = Vec::new();

        while let Ok(msg) = self.msg_rx.try_recv() {
            self.msg_queue.push_back(msg);
        }
        while let Some(msg) = self.msg_queue.pop_front() {
            all_commands.extend(self.process_message(msg));
        }

        while let Ok(raw_msg) = self.raw_msg_rx.try_recv() {
            self.raw_msg_queue.push_back(raw_msg);
        }
        while let Some(raw_msg) = self.raw_msg_queue.pop_front() {
            for msg in translate_raw_to_domain(raw_msg, &self.state) {
                all_commands.extend(self.process_message(msg));
            }
        }

        all_commands
    }

    /// Process all messages and execute commands in one step
    pub fn run_update_cycle(&mut self) -> Result<Vec<String>> {
        self.process_all_messages();
        self.execute_pending_commands()
    }

    /// Waits until a fetch result, timer or external raw message arrives and queues it.
    /// Cancel safe.
    pub async fn wait_external(&mut self) {
        tokio::select! {
            Some(msg) = self.msg_rx.recv() => self.msg_queue.push_back(msg),
            Some(raw_msg) = self.raw_msg_rx.recv() => self.raw_msg_queue.push_back(raw_msg),
        }
    }

    /// Runs update cycles until `done` holds for the state or `timeout` passes.
    /// Returns whether `done` was reached.
    pub async fn run_until(
        &mut self,
        mut done: impl FnMut(&AppState) -> bool,
        timeout: Duration,
    ) -> Result<bool> {
        let deadline = tokio::time::Instant::now() + timeout;
        loop {
            self.run_update_cycle()?;
            if done(&self.state) {
                return Ok(true);
            }
            if tokio::time::timeout_at(deadline, self.wait_external())
                .await
                .is_err()
            {
                return Ok(false);
            }
        }
    }

    /// Tears the components down and cancels whatever the executor still has pending
    pub fn shutdown(&mut self) -> Result<()> {
        let commands = self.state.teardown();
        self.cmd_queue.extend(commands);
        if self.cmd_executor.is_some() {
            self.execute_pending_commands()?;
        }
        if let Some(executor) = self.cmd_executor.as_mut() {
            executor.shutdown();
        }
        Ok(())
    }

    /// Get runtime statistics
    pub fn get_stats(&self) -> RuntimeStats {
        RuntimeStats {
            queued_messages: self.msg_queue.len(),
            queued_commands: self.cmd_queue.len(),
            products_count: self.state.grid.products().len(),
            current_page: self.state.grid.page(),
            is_loading: self.state.grid.is_loading(),
            has_executor: self.cmd_executor.is_some(),
            pending_timers: self
                .cmd_executor
                .as_ref()
                .map_or(0, |executor| executor.get_stats().pending_timers),
        }
    }
}

/// Runtime statistics
#[derive(Debug, Clone)]
pub struct RuntimeStats {
    pub queued_messages: usize,
    pub queued_commands: usize,
    pub products_count: usize,
    pub current_page: u32,
    pub is_loading: bool,
    pub has_executor: bool,
    pub pending_timers: usize,
}
