use std::sync::Arc;

use color_eyre::eyre::Result;
use ratatui::prelude::Rect;
use tokio::sync::Mutex;
use tokio_util::sync::CancellationToken;

use crate::{
    core::raw_msg::RawMsg,
    infrastructure::tui::{Event, TuiLike},
    integration::{renderer::Renderer, runtime::Runtime},
};

/// Host loop: terminal events and background results in, frames out
///
/// Every iteration runs one update cycle and draws one frame, then waits for the
/// next terminal event or the next fetch/timer/probe message, whichever comes first.
pub struct AppRunner {
    runtime: Runtime,
    tui: Arc<Mutex<dyn TuiLike + Send>>,
    renderer: Renderer,
    monitor: Option<CancellationToken>,
}

impl AppRunner {
    pub fn new(runtime: Runtime, tui: Arc<Mutex<dyn TuiLike + Send>>) -> Self {
        Self {
            runtime,
            tui,
            renderer: Renderer::new(),
            monitor: None,
        }
    }

    /// Background probe to stop when the runner exits
    pub fn with_monitor(mut self, token: CancellationToken) -> Self {
        self.monitor = Some(token);
        self
    }

    pub fn runtime(&self) -> &Runtime {
        &self.runtime
    }

    pub fn runtime_mut(&mut self) -> &mut Runtime {
        &mut self.runtime
    }

    /// Run the main loop until the state asks to quit
    pub async fn run(&mut self) -> Result<()> {
        self.tui.lock().await.enter()?;

        let result = match self.runtime.start() {
            Ok(()) => self.event_loop().await,
            Err(e) => Err(e),
        };

        if let Err(e) = self.runtime.shutdown() {
            log::error!("Runtime shutdown failed: {e}");
        }
        if let Some(token) = &self.monitor {
            token.cancel();
        }
        self.tui.lock().await.exit()?;
        result
    }

    async fn event_loop(&mut self) -> Result<()> {
        loop {
            if let Err(e) = self.runtime.run_update_cycle() {
                log::error!("Update cycle failed: {e}");
                self.runtime
                    .send_raw_msg(RawMsg::Error(format!("Update cycle failed: {e}")));
            }

            self.renderer.render(&self.tui, self.runtime.state()).await?;

            if self.runtime.state().system.should_quit {
                return Ok(());
            }

            let event = {
                let mut tui = self.tui.lock().await;
                tokio::select! {
                    biased;
                    () = self.runtime.wait_external() => None,
                    event = tui.next() => Some(event),
                }
            };
            if let Some(event) = event {
                self.handle_event(event).await?;
            }
        }
    }

    async fn handle_event(&mut self, event: Option<Event>) -> Result<()> {
        let raw_msg = match event {
            None | Some(Event::Quit) | Some(Event::Closed) => RawMsg::Quit,
            Some(Event::Tick) => RawMsg::Tick,
            Some(Event::Render) => RawMsg::Render,
            Some(Event::Key(key)) => RawMsg::Key(key),
            Some(Event::Resize(w, h)) => {
                self.tui.lock().await.resize(Rect::new(0, 0, w, h))?;
                RawMsg::Resize(w, h)
            }
            Some(Event::Error) => RawMsg::Error("Terminal event stream failed".to_string()),
            Some(Event::Init | Event::FocusGained | Event::FocusLost | Event::Paste(_)) => {
                return Ok(());
            }
        };
        self.runtime.send_raw_msg(raw_msg);
        Ok(())
    }
}
