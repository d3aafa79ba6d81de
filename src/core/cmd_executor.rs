use color_eyre::eyre::Result;
use tokio::sync::mpsc;

use crate::{
    core::{
        cmd::Cmd,
        msg::{grid::GridMsg, Msg},
    },
    domain::location::Location,
    infrastructure::{catalog::Catalog, router::History, timer::TimerService},
};

/// Command executor that performs the side effects requested by `update`
///
/// Results come back to the update loop as [`Msg`]s on `msg_tx`.
pub struct CmdExecutor {
    msg_tx: mpsc::UnboundedSender<Msg>,
    catalog: Catalog,
    timers: TimerService,
    history: History,
}

impl CmdExecutor {
    pub fn new(msg_tx: mpsc::UnboundedSender<Msg>, catalog: Catalog, initial: Location) -> Self {
        Self {
            timers: TimerService::new(msg_tx.clone()),
            msg_tx,
            catalog,
            history: History::new(initial),
        }
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn timers(&self) -> &TimerService {
        &self.timers
    }

    /// Delivers the current location to the update loop, as navigation would
    pub fn announce_current(&self) -> Result<()> {
        self.announce(self.history.current().clone())
    }

    /// Execute a single command
    pub fn execute_command(&mut self, cmd: &Cmd) -> Result<()> {
        match cmd {
            Cmd::None => {
                // No-op command, nothing to execute
            }

            Cmd::FetchProducts {
                request,
                generation,
                online,
            } => {
                let catalog = self.catalog.clone();
                let tx = self.msg_tx.clone();
                let request = request.clone();
                let (generation, online) = (*generation, *online);
                tokio::spawn(async move {
                    let msg = match catalog.fetch_page(&request, online).await {
                        Ok(products) => GridMsg::FetchSucceeded {
                            generation,
                            products,
                        },
                        Err(e) => GridMsg::FetchFailed {
                            generation,
                            reason: e.to_string(),
                        },
                    };
                    if tx.send(Msg::Grid(msg)).is_err() {
                        log::debug!("Fetch {generation} finished after the update loop closed");
                    }
                });
            }

            Cmd::Navigate { location } => {
                log::debug!("Navigate to {location}");
                let location = self.history.push(location.clone()).clone();
                self.announce(location)?;
            }

            Cmd::NavigateBack => match self.history.back() {
                Some(location) => {
                    let location = location.clone();
                    log::debug!("Navigate back to {location}");
                    self.announce(location)?;
                }
                None => log::debug!("NavigateBack ignored: already at the first location"),
            },

            Cmd::StartTimer { id, after } => {
                log::debug!("Start timer {id:?} for {}ms", after.as_millis());
                self.timers.start(*id, *after);
            }

            Cmd::CancelTimer { id } => {
                log::debug!("Cancel timer {id:?}");
                self.timers.cancel(*id);
            }

            Cmd::LogError { message } => {
                log::error!("{message}");
            }

            Cmd::LogInfo { message } => {
                log::info!("{message}");
            }

            Cmd::Batch(commands) => {
                for cmd in commands {
                    self.execute_command(cmd)?;
                }
            }
        }

        Ok(())
    }

    /// Execute multiple commands
    pub fn execute_commands(&mut self, commands: &[Cmd]) -> Vec<String> {
        let mut execution_log = Vec::new();

        for cmd in commands {
            match self.execute_command(cmd) {
                Ok(()) => {
                    execution_log.push(format!("✓ Executed: {}", cmd.name()));
                }
                Err(e) => {
                    let error_msg = format!("✗ Failed to execute {}: {}", cmd.name(), e);
                    log::error!("{error_msg}");
                    execution_log.push(error_msg);
                }
            }
        }

        execution_log
    }

    /// Cancels every pending timer. In-flight fetches finish and are ignored.
    pub fn shutdown(&mut self) {
        self.timers.cancel_all();
    }

    /// Get execution statistics
    pub fn get_stats(&self) -> CmdExecutorStats {
        CmdExecutorStats {
            is_msg_sender_closed: self.msg_tx.is_closed(),
            pending_timers: self.timers.pending_count(),
            history_len: self.history.len(),
        }
    }

    fn announce(&self, location: Location) -> Result<()> {
        self.msg_tx
            .send(Msg::Grid(GridMsg::LocationChanged(location)))?;
        Ok(())
    }
}

/// Command executor statistics
#[derive(Debug, Clone)]
pub struct CmdExecutorStats {
    pub is_msg_sender_closed: bool,
    pub pending_timers: usize,
    pub history_len: usize,
}
