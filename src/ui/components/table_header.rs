use dioxus::prelude::*;

use crate::ui::components::SortIndicator;
use crate::ui::styles::{header_cell_style, header_content_style};
use crate::ui::view::HeaderCell;

#[component]
pub fn TableHeader(headers: Vec<HeaderCell>, on_sort: EventHandler<String>) -> Element {
    rsx! {
        thead {
            tr {
                for cell in headers {
                    th {
                        key: "{cell.id}",
                        style: "{header_cell_style(cell.sortable, cell.is_sorted())}",
                        "aria-sort": cell.aria_sort().unwrap_or("none"),
                        onclick: {
                            let id = cell.id.clone();
                            let sortable = cell.sortable;
                            move |_| {
                                if sortable {
                                    on_sort.call(id.clone());
                                }
                            }
                        },
                        div { style: "{header_content_style()}",
                            "{cell.header}"
                            if cell.sortable {
                                SortIndicator { direction: cell.direction }
                            }
                        }
                    }
                }
            }
        }
    }
}
