use std::sync::Arc;

use dioxus::prelude::*;
use rfd::FileDialog;

use datatable::domain::entities::column::ColumnDef;
use datatable::domain::entities::config::{
    ConfigLayers, PresentationConfig, RuleCondition, StyleRule,
};
use datatable::domain::entities::row::Row;
use datatable::infra::config::json::load_layer;
use datatable::ui::components::DataTable;
use datatable::ui::state::demo_state::DemoState;
use datatable::usecase::services::config_merger::{merge_config, MergeMeta};
use datatable::usecase::services::import_service::{ImportFormat, ImportService};

const DEMO_CSS: &str = "
.high-earner { font-weight: 600; }
.senior { color: #1d4ed8; }
";

fn employee_columns() -> Vec<ColumnDef> {
    vec![
        ColumnDef::keyed("id", "ID").always_visible(),
        ColumnDef::keyed("name", "Name"),
        ColumnDef::keyed("email", "Email").sorting(false),
        ColumnDef::keyed("age", "Age"),
        ColumnDef::keyed("salary", "Salary"),
        ColumnDef::keyed("department", "Department"),
    ]
}

fn employee(id: i64, name: &str, email: &str, age: i64, salary: i64, department: &str) -> Row {
    Row::new()
        .with("id", id)
        .with("name", name)
        .with("email", email)
        .with("age", age)
        .with("salary", salary)
        .with("department", department)
}

fn employee_rows() -> Vec<Row> {
    vec![
        employee(1, "John Doe", "john@example.com", 30, 75000, "Engineering"),
        employee(2, "Jane Smith", "jane@example.com", 25, 62000, "Marketing"),
        employee(3, "Robert Johnson", "robert@example.com", 35, 95000, "Sales"),
        employee(4, "Emily Davis", "emily@example.com", 28, 58000, "HR"),
        employee(5, "Michael Wilson", "michael@example.com", 40, 110000, "Engineering"),
        employee(6, "Sarah Brown", "sarah@example.com", 32, 82000, "Finance"),
        employee(7, "David Miller", "david@example.com", 29, 71000, "Marketing"),
        employee(8, "Lisa Taylor", "lisa@example.com", 33, 88000, "Engineering"),
    ]
}

fn employee_defaults() -> PresentationConfig {
    let row_rules: Arc<[StyleRule]> = Arc::new([StyleRule::new(
        "high-earner",
        RuleCondition::GreaterThan {
            field: "salary".to_string(),
            value: 100000.0,
        },
        "high-earner",
    )]);
    let cell_rules: Arc<[StyleRule]> = Arc::new([StyleRule::new(
        "senior",
        RuleCondition::GreaterThan {
            field: "age".to_string(),
            value: 34.0,
        },
        "senior",
    )
    .for_column("age")]);

    PresentationConfig::default()
        .with_visible_columns(["id", "name", "age", "salary", "department"])
        .with_row_style_rules(row_rules)
        .with_cell_style_rules(cell_rules)
        .with_default_page_size(25)
}

/// Visible ids after toggling `id`, starting from the merged visibility.
fn toggled_visibility(columns: &[ColumnDef], current: Option<&[String]>, id: &str) -> Vec<String> {
    let mut visible: Vec<String> = match current {
        Some(ids) => ids.to_vec(),
        None => columns.iter().map(|c| c.id.clone()).collect(),
    };
    if let Some(pos) = visible.iter().position(|v| v == id) {
        visible.remove(pos);
    } else {
        visible.push(id.to_string());
    }
    visible
}

#[component]
fn ColumnVisibilityDropdown(
    columns: Vec<ColumnDef>,
    #[props(!optional)] visible: Option<Vec<String>>,
    on_toggle: EventHandler<String>,
) -> Element {
    let mut open = use_signal(|| false);

    rsx! {
        div {
            style: "position: relative; display: inline-flex; align-items: center; gap: 6px;",
            button {
                style: "border: 1px solid #bbb; background: #fff; padding: 4px 10px; border-radius: 6px; cursor: pointer;",
                onclick: move |event| {
                    event.stop_propagation();
                    open.set(!open());
                },
                "Columns"
            }
            if open() {
                div {
                    style: "position: absolute; top: 32px; left: 0; min-width: 220px; background: #fff; border: 1px solid #bbb; border-radius: 8px; box-shadow: 0 10px 24px rgba(0,0,0,0.15); z-index: 1200; padding: 6px;",
                    onclick: move |event| event.stop_propagation(),
                    for column in columns {
                        label {
                            key: "{column.id}",
                            style: "display: flex; align-items: center; gap: 8px; padding: 6px 4px; cursor: pointer;",
                            input {
                                r#type: "checkbox",
                                checked: column.always_visible
                                    || visible.as_ref().map_or(true, |ids| ids.contains(&column.id)),
                                disabled: column.always_visible,
                                onclick: {
                                    let id = column.id.clone();
                                    move |_| on_toggle.call(id.clone())
                                }
                            }
                            span { "{column.header}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn MergeDiagnostics(meta: MergeMeta) -> Element {
    let overridden = meta
        .overridden_keys
        .iter()
        .map(|key| key.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    let enforced = meta.hidden_always_visible_columns.join(", ");

    rsx! {
        div {
            style: "margin: 12px 0; padding: 8px 12px; background: #eff6ff; border: 1px solid #bfdbfe; border-radius: 8px; font-size: 13px;",
            div { "Config source: {meta.source}" }
            div { "Overridden keys: {overridden}" }
            if !meta.hidden_always_visible_columns.is_empty() {
                div { "Always-visible columns restored: {enforced}" }
            }
        }
    }
}

#[component]
pub fn App() -> Element {
    let DemoState {
        mut columns,
        mut rows,
        dev_defaults,
        mut api_config,
        mut user_overrides,
        mut busy,
        mut status,
    } = DemoState::new(employee_columns(), employee_rows(), employee_defaults());

    let layers = ConfigLayers {
        dev_defaults: dev_defaults(),
        api_config: api_config(),
        user_overrides: user_overrides(),
    };
    let current_columns = columns();
    let outcome = merge_config(&layers, &current_columns);
    let merged_visible = outcome
        .merged
        .visible_columns
        .as_deref()
        .map(|ids| ids.to_vec());
    let columns_for_toggle = current_columns.clone();
    let visible_for_toggle = merged_visible.clone();

    rsx! {
        style { "{DEMO_CSS}" }
        div {
            style: "font-family: sans-serif; padding: 24px; max-width: 1200px; margin: 0 auto;",
            h1 { style: "font-size: 22px; margin-bottom: 16px;", "DataTable Demo" }
            nav {
                style: "display: flex; gap: 12px; align-items: center; flex-wrap: wrap; padding: 8px 0;",
                button {
                    disabled: busy(),
                    onclick: move |_| {
                        let Some(file_path) = FileDialog::new()
                            .add_filter("Data", &ImportFormat::EXTENSIONS)
                            .pick_file() else {
                            *status.write() = "Import cancelled".to_string();
                            return;
                        };

                        *busy.write() = true;
                        match ImportService::new().import(&file_path) {
                            Ok(data) => {
                                let (loaded_columns, loaded_rows) = data.into_table();
                                *status.write() = format!(
                                    "Imported {} rows from {}",
                                    loaded_rows.len(),
                                    file_path.display()
                                );
                                columns.set(loaded_columns);
                                rows.set(loaded_rows);
                                user_overrides.set(None);
                            }
                            Err(err) => {
                                *status.write() = format!("Import failed: {err:#}");
                            }
                        }
                        *busy.write() = false;
                    },
                    "Import data…"
                }
                button {
                    disabled: busy(),
                    onclick: move |_| {
                        let Some(file_path) = FileDialog::new()
                            .add_filter("Presentation config", &["json"])
                            .pick_file() else {
                            return;
                        };
                        match load_layer(&file_path) {
                            Ok(layer) => {
                                api_config.set(Some(layer));
                                *status.write() = format!("Loaded API config from {}", file_path.display());
                            }
                            Err(err) => {
                                *status.write() = format!("Config load failed: {err:#}");
                            }
                        }
                    },
                    "Load API config…"
                }
                button {
                    onclick: move |_| {
                        api_config.set(None);
                        *status.write() = "API config cleared".to_string();
                    },
                    "Clear API config"
                }
                button {
                    onclick: move |_| {
                        user_overrides.set(None);
                        *status.write() = "User overrides reset".to_string();
                    },
                    "Reset overrides"
                }
                ColumnVisibilityDropdown {
                    columns: current_columns.clone(),
                    visible: merged_visible,
                    on_toggle: move |id: String| {
                        let next = toggled_visibility(
                            &columns_for_toggle,
                            visible_for_toggle.as_deref(),
                            &id,
                        );
                        let mut layer = user_overrides().unwrap_or_default();
                        layer.visible_columns = Some(next.into());
                        user_overrides.set(Some(layer));
                    },
                }
                span { style: "color: #555;", "{status}" }
            }

            MergeDiagnostics { meta: outcome.meta.clone() }

            DataTable {
                columns: current_columns.clone(),
                data: rows(),
                enable_sorting: true,
                config: outcome.merged.clone(),
            }

            div {
                style: "margin-top: 48px; display: flex; flex-direction: column; gap: 32px;",
                div {
                    h2 { style: "font-size: 16px; margin-bottom: 8px;", "Empty data" }
                    DataTable { columns: employee_columns(), data: Vec::new() }
                }
                div {
                    h2 { style: "font-size: 16px; margin-bottom: 8px;", "No columns" }
                    DataTable { columns: Vec::new(), data: employee_rows() }
                }
                div {
                    h2 { style: "font-size: 16px; margin-bottom: 8px;", "Missing accessor" }
                    DataTable {
                        columns: vec![
                            ColumnDef::keyed("name", "Name"),
                            ColumnDef::new("empty", "Empty Column"),
                        ],
                        data: vec![Row::new().with("name", "Test User")],
                        enable_sorting: true,
                    }
                }
            }
        }
    }
}
