//! Typography builders.

use leptos::*;

use crate::helpers::{join_classes, split_classes};

/// Creates a styled blockquote.
pub fn blockquote<V: IntoView>(
    classes: Option<&str>,
    children: impl FnOnce() -> V + 'static,
) -> impl IntoView {
    let class = join_classes(["blockquote"], &split_classes(classes));
    view! { <blockquote class=class>{children()}</blockquote> }
}

/// Creates a source attribution footer for a blockquote.
pub fn blockquote_footer<V: IntoView>(
    classes: Option<&str>,
    children: impl FnOnce() -> V + 'static,
) -> impl IntoView {
    let class = join_classes(["blockquote-footer"], &split_classes(classes));
    view! { <footer class=class>{children()}</footer> }
}

/// Creates a lead paragraph that stands out from running text.
pub fn lead<V: IntoView>(
    classes: Option<&str>,
    children: impl FnOnce() -> V + 'static,
) -> impl IntoView {
    let class = join_classes(["lead"], &split_classes(classes));
    view! { <p class=class>{children()}</p> }
}
