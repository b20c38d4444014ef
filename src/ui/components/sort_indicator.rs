use dioxus::prelude::*;

use crate::domain::entities::sorting::SortDirection;
use crate::ui::styles::{indicator_arrow_style, indicator_style};

#[component]
pub fn SortIndicator(#[props(!optional)] direction: Option<SortDirection>) -> Element {
    let up_lit = direction == Some(SortDirection::Asc);
    let down_lit = direction == Some(SortDirection::Desc);

    rsx! {
        span { style: "{indicator_style()}",
            span { style: "{indicator_arrow_style(up_lit)}", "▲" }
            span { style: "{indicator_arrow_style(down_lit)}", "▼" }
        }
    }
}
