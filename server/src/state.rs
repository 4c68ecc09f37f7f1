use std::sync::Arc;

use super::{config::Config, counter::Counter};

pub struct State {
    pub config: Config,
    pub counter: Counter,
}

impl State {
    pub fn new() -> Arc<Self> {
        let config = Config::load();

        Arc::new(Self {
            config,
            counter: Counter::new(),
        })
    }
}
