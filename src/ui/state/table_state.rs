use dioxus::prelude::{use_signal, Signal};

use crate::usecase::services::sort_engine::SortEngine;

/// Per-instance table state. Created fresh by each mounted table and dropped
/// with it.
pub struct TableState {
    pub engine: Signal<SortEngine>,
}

impl TableState {
    pub fn new() -> Self {
        Self {
            engine: use_signal(SortEngine::new),
        }
    }
}
