//! Watch session
//!
//! Glue between the host callbacks and the core: the host forwards button
//! clicks and inbox payloads, the session runs them through the
//! [`Controller`] and replays the resulting [`Reaction`] on the presenter.

use thermowatch_core::config::AppConfig;
use thermowatch_core::traits::{Outbox, Presentation};
use thermowatch_core::{Controller, Reaction};
use thermowatch_protocol::ButtonEvent;

pub struct WatchSession<O: Outbox, P: Presentation> {
    controller: Controller<O>,
    presenter: P,
}

impl<O: Outbox, P: Presentation> WatchSession<O, P> {
    pub fn new(config: AppConfig, outbox: O, presenter: P) -> Self {
        Self {
            controller: Controller::new(config, outbox),
            presenter,
        }
    }

    /// Draw the placeholder record
    pub fn start(&mut self) {
        let reaction = self.controller.boot();
        self.present(reaction);
    }

    /// Button click callback
    pub fn on_button(&mut self, event: ButtonEvent) -> Reaction {
        let reaction = self.controller.process_input(event);
        self.present(reaction);
        reaction
    }

    /// Inbox received callback
    pub fn on_inbox(&mut self, bytes: &[u8]) -> Reaction {
        let reaction = self.controller.process_inbox(bytes);
        self.present(reaction);
        reaction
    }

    pub fn controller(&self) -> &Controller<O> {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut Controller<O> {
        &mut self.controller
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    fn present(&mut self, reaction: Reaction) {
        reaction.apply(self.controller.active_record(), &mut self.presenter);
    }
}
