use dioxus::prelude::*;

use crate::ui::styles::{body_cell_style, body_row_style, empty_placeholder_style};
use crate::ui::view::{BodyRow, EMPTY_DATA_MESSAGE};

#[component]
pub fn TableBody(rows: Vec<BodyRow>, column_count: usize) -> Element {
    if rows.is_empty() {
        return rsx! {
            tbody {
                tr {
                    td { colspan: "{column_count}", style: "{empty_placeholder_style()}",
                        "{EMPTY_DATA_MESSAGE}"
                    }
                }
            }
        };
    }

    rsx! {
        tbody {
            for row in rows {
                tr {
                    key: "{row.index}",
                    class: row.classes.join(" "),
                    style: "{body_row_style(row.striped)}",
                    for cell in row.cells {
                        td {
                            key: "{row.index}-{cell.column_id}",
                            class: cell.classes.join(" "),
                            style: "{body_cell_style()}",
                            "{cell.text}"
                        }
                    }
                }
            }
        }
    }
}
