//! Inline styles for the table components.

pub fn table_container_style() -> &'static str {
    "overflow: auto; flex: 1; min-height: 0; border: 1px solid #e5e7eb; border-radius: 8px;"
}

pub fn table_style() -> &'static str {
    "min-width: 100%; border-collapse: separate; border-spacing: 0; font-size: 14px;"
}

pub fn header_cell_style(sortable: bool, sorted: bool) -> String {
    format!(
        "position: sticky; top: 0; z-index: 1; padding: 12px 24px; text-align: left; font-size: 12px; font-weight: 600; text-transform: uppercase; letter-spacing: 0.05em; color: #fff; border-right: 1px solid #374151; background: {};{}",
        if sorted { "#111827" } else { "#1f2937" },
        if sortable { " cursor: pointer; user-select: none;" } else { "" }
    )
}

pub fn header_content_style() -> &'static str {
    "display: flex; align-items: center;"
}

pub fn body_row_style(striped: bool) -> &'static str {
    if striped {
        "background: #f9fafb;"
    } else {
        "background: #fff;"
    }
}

pub fn body_cell_style() -> &'static str {
    "padding: 16px 24px; white-space: nowrap; color: #111827; border-bottom: 1px solid #e5e7eb;"
}

pub fn empty_placeholder_style() -> &'static str {
    "padding: 32px; text-align: center; color: #6b7280; background: #f9fafb; border-top: 1px solid #e5e7eb;"
}

pub fn error_banner_style() -> &'static str {
    "padding: 16px; background: #fef2f2; border: 1px solid #fecaca; border-radius: 6px; color: #991b1b;"
}

pub fn indicator_style() -> &'static str {
    "margin-left: 8px; display: inline-flex; flex-direction: column; line-height: 1;"
}

/// One arrow of the sort indicator; `lit` marks the active direction.
pub fn indicator_arrow_style(lit: bool) -> &'static str {
    if lit {
        "font-size: 10px; color: #60a5fa;"
    } else {
        "font-size: 10px; color: #9ca3af;"
    }
}
