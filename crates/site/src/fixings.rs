//! Shared page scaffolding for the documentation pages.

use bootstrap_ui::class_names::{BORDER, MB_3, MT_4, P_3, ROUNDED};
use bootstrap_ui::layout::ColumnWidth;
use bootstrap_ui::prelude::lead;
use leptos::*;

/// Page heading with a lead paragraph under it.
#[component]
pub fn PageTitle(title: &'static str, lede: &'static str) -> impl IntoView {
    view! {
        <h1>{title}</h1>
        {lead(None, move || lede)}
    }
}

/// Section heading within a page.
#[component]
pub fn ContentTitle(title: &'static str) -> impl IntoView {
    view! { <h2 class=MT_4>{title}</h2> }
}

/// Bordered panel holding a rendered example.
#[component]
pub fn LiveExample(children: Children) -> impl IntoView {
    let class = format!("{BORDER} {ROUNDED} {P_3} {MB_3}");
    view! { <div class=class>{children()}</div> }
}

/// Source listing paired with a live example.
#[component]
pub fn CodeExample(code: &'static str) -> impl IntoView {
    view! {
        <pre class=MB_3>
            <code>{code}</code>
        </pre>
    }
}

/// Grid span helper for page layouts. Falls back to an equal-width column
/// if a listing ever asks for a span the grid cannot hold.
pub fn span(columns: u8) -> ColumnWidth {
    ColumnWidth::columns(columns).unwrap_or_else(|err| {
        logging::warn!("site layout requested an invalid grid span: {err}");
        ColumnWidth::EQUAL
    })
}
