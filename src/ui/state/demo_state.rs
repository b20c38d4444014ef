use dioxus::prelude::{use_signal, Signal};

use crate::domain::entities::column::ColumnDef;
use crate::domain::entities::config::PresentationConfig;
use crate::domain::entities::row::Row;

pub struct DemoState {
    pub columns: Signal<Vec<ColumnDef>>,
    pub rows: Signal<Vec<Row>>,
    pub dev_defaults: Signal<PresentationConfig>,
    pub api_config: Signal<Option<PresentationConfig>>,
    pub user_overrides: Signal<Option<PresentationConfig>>,
    pub busy: Signal<bool>,
    pub status: Signal<String>,
}

impl DemoState {
    pub fn new(columns: Vec<ColumnDef>, rows: Vec<Row>, dev_defaults: PresentationConfig) -> Self {
        Self {
            columns: use_signal(move || columns),
            rows: use_signal(move || rows),
            dev_defaults: use_signal(move || dev_defaults),
            api_config: use_signal(|| None::<PresentationConfig>),
            user_overrides: use_signal(|| None::<PresentationConfig>),
            busy: use_signal(|| false),
            status: use_signal(|| "Ready".to_string()),
        }
    }
}
