use dioxus::prelude::*;

use crate::domain::entities::column::ColumnDef;
use crate::domain::entities::config::PresentationConfig;
use crate::domain::entities::row::Row;
use crate::ui::components::{TableBody, TableHeader};
use crate::ui::state::table_state::TableState;
use crate::ui::styles::{error_banner_style, table_container_style, table_style};
use crate::ui::view::TableView;

/// Table with optional click-to-sort headers.
///
/// Sort state lives in this instance and starts unsorted. `config` is an
/// already merged presentation config; it narrows the columns and supplies
/// style rules.
#[component]
pub fn DataTable(
    columns: Vec<ColumnDef>,
    data: Vec<Row>,
    #[props(default)] enable_sorting: bool,
    config: Option<PresentationConfig>,
) -> Element {
    let TableState { mut engine } = TableState::new();

    let view = TableView::build(
        &columns,
        &data,
        &engine.read(),
        enable_sorting,
        config.as_ref(),
    );

    match view {
        TableView::Invalid { message } => rsx! {
            div { role: "alert", style: "{error_banner_style()}", "{message}" }
        },
        TableView::Table { headers, rows } => {
            let column_count = headers.len();
            rsx! {
                div { style: "{table_container_style()}",
                    table { style: "{table_style()}",
                        TableHeader {
                            headers,
                            on_sort: move |id: String| engine.write().on_sort(&columns, &id),
                        }
                        TableBody { rows, column_count }
                    }
                }
            }
        }
    }
}
