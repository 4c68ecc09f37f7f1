//! # Viewer widget lifecycle
//!
//! Mount registers the viewer, a fixed five second cadence polls the count
//! while mounted, unmount deregisters. Both lifecycle calls are fire and
//! forget: failures are logged, never shown, and a teardown racing the
//! decrement can lose it, so the server-side count may drift upward over many
//! visits.

use std::time::Duration;

use tokio::{task::JoinHandle, time::interval};
use tracing::warn;

use crate::{
    api::{Action, CounterApi},
    display::{Display, DisplayState},
};

/// Client-visible refresh contract. Not configurable.
pub const POLL_INTERVAL: Duration = Duration::from_secs(5);

pub struct ViewerWidget {
    api: CounterApi,
    display: DisplayState,
}

impl ViewerWidget {
    /// Registers this viewer and starts in the loading state. Rendering does
    /// not wait on the increment.
    pub fn mount(api: CounterApi) -> Self {
        let register = api.clone();
        tokio::spawn(async move {
            if let Err(error) = register.mutate(Action::Increment).await {
                warn!("Error incrementing viewer count: {error}");
            }
        });

        Self {
            api,
            display: DisplayState::new(),
        }
    }

    /// One poll tick. Success updates the display, failure flips it into the
    /// error state until the next tick recovers it.
    pub async fn poll_once(&mut self) {
        match self.api.fetch().await {
            Ok(count) => self.display.observe(count),
            Err(error) => {
                warn!("Error fetching viewer count: {error}");
                self.display.fail();
            }
        }
    }

    /// Polls on the fixed cadence until the caller drops the future. Each tick
    /// is an independent request; ticks are not sequenced against one another.
    pub async fn run(&mut self) {
        let mut ticks = interval(POLL_INTERVAL);

        loop {
            ticks.tick().await;
            self.poll_once().await;
            println!("{}", self.render());
        }
    }

    pub fn display(&self) -> Display {
        self.display.display()
    }

    pub fn render(&self) -> String {
        self.display.render()
    }

    /// Deregisters this viewer and discards all state. The request is spawned
    /// and its result ignored; callers that need the decrement to land before
    /// proceeding can await the returned handle.
    pub fn unmount(self) -> JoinHandle<()> {
        tokio::spawn(async move {
            if let Err(error) = self.api.mutate(Action::Decrement).await {
                warn!("Error decrementing viewer count: {error}");
            }
        })
    }
}
