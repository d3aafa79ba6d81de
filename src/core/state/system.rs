use crate::core::{cmd::Cmd, msg::system::SystemMsg};

/// System-related state
#[derive(Debug, Clone)]
pub struct SystemState {
    pub should_quit: bool,
    pub is_online: bool,
    pub new_version: Option<String>,
    pub status_message: Option<String>,
    pub ticks: u64,
}

impl Default for SystemState {
    fn default() -> Self {
        Self {
            should_quit: false,
            is_online: true,
            new_version: None,
            status_message: None,
            ticks: 0,
        }
    }
}

impl SystemState {
    pub fn new_version_available(&self) -> bool {
        self.new_version.is_some()
    }

    /// System-specific update function
    /// Returns: Generated commands
    ///
    /// `Reload` needs the whole application state and is handled by `update`.
    pub fn update(&mut self, msg: SystemMsg) -> Vec<Cmd> {
        match msg {
            // System control
            SystemMsg::Quit => {
                self.should_quit = true;
                vec![]
            }

            SystemMsg::Tick => {
                self.ticks = self.ticks.wrapping_add(1);
                vec![]
            }

            SystemMsg::Reload => vec![],

            // External signals
            SystemMsg::ConnectivityChanged(online) => {
                if self.is_online == online {
                    return vec![];
                }
                self.is_online = online;
                let message = if online {
                    "Back online"
                } else {
                    "Offline: showing saved listings"
                };
                self.status_message = Some(message.to_string());
                vec![Cmd::LogInfo {
                    message: format!("Connectivity changed: online={online}"),
                }]
            }

            SystemMsg::NewVersionDetected(version) => {
                self.new_version = Some(version);
                vec![]
            }

            // Status management
            SystemMsg::UpdateStatusMessage(message) => {
                self.status_message = Some(message);
                vec![]
            }

            SystemMsg::ClearStatusMessage => {
                self.status_message = None;
                vec![]
            }

            SystemMsg::ShowError(error) => {
                self.status_message = Some(format!("Error: {error}"));
                vec![]
            }
        }
    }
}
