//! Remote control that runs undoable commands against appliances.
//!
//! A [`RemoteControl`] has a single command slot. Pressing the button runs
//! whatever command is in the slot and records it; pressing undo reverts
//! the most recently run command, walking back through the history.

pub mod appliance;

pub use appliance::Appliance;

use crate::error::{HubError, Result};
use log::{debug, info};
use std::sync::Arc;

/// An action bound to a receiver that knows how to revert itself.
pub trait Command: Send + Sync {
    fn execute(&self);

    /// Revert the effect of [`execute`](Command::execute).
    fn undo(&self);

    /// Short human readable label, used in logs.
    fn describe(&self) -> String;
}

/// Switch an appliance on; undo switches it off.
pub struct TurnOn {
    appliance: Arc<Appliance>,
}

impl TurnOn {
    pub fn new(appliance: Arc<Appliance>) -> Self {
        Self { appliance }
    }
}

impl Command for TurnOn {
    fn execute(&self) {
        self.appliance.turn_on();
    }

    fn undo(&self) {
        self.appliance.turn_off();
    }

    fn describe(&self) -> String {
        format!("{} on", self.appliance.name())
    }
}

/// Switch an appliance off; undo switches it back on.
pub struct TurnOff {
    appliance: Arc<Appliance>,
}

impl TurnOff {
    pub fn new(appliance: Arc<Appliance>) -> Self {
        Self { appliance }
    }
}

impl Command for TurnOff {
    fn execute(&self) {
        self.appliance.turn_off();
    }

    fn undo(&self) {
        self.appliance.turn_on();
    }

    fn describe(&self) -> String {
        format!("{} off", self.appliance.name())
    }
}

/// Invoker holding one command slot and an undo history.
#[derive(Default)]
pub struct RemoteControl {
    slot: Option<Arc<dyn Command>>,
    history: Vec<Arc<dyn Command>>,
}

impl RemoteControl {
    pub fn new() -> Self {
        Self::default()
    }

    /// Put `command` in the slot, replacing the previous one.
    pub fn set_command(&mut self, command: Arc<dyn Command>) {
        debug!("Remote slot set to '{}'", command.describe());
        self.slot = Some(command);
    }

    /// Execute the slot command and record it for undo.
    pub fn press_button(&mut self) -> Result<()> {
        let command = self.slot.clone().ok_or(HubError::NoCommand)?;
        info!("Remote: {}", command.describe());
        command.execute();
        self.history.push(command);
        Ok(())
    }

    /// Undo the most recently executed command.
    ///
    /// Returns `false` when there is nothing left to undo.
    pub fn press_undo(&mut self) -> bool {
        match self.history.pop() {
            Some(command) => {
                info!("Remote: undo {}", command.describe());
                command.undo();
                true
            }
            None => false,
        }
    }

    /// Number of executed commands that can still be undone.
    pub fn history_len(&self) -> usize {
        self.history.len()
    }
}
