//! Alert builders: one entry point per theme color, plus the alert-scoped
//! link and heading helpers.
//!
//! Dismissible alerts own their dismissal state in a local signal; the
//! optional `on_close` callback fires when the user dismisses the alert.

use std::collections::BTreeSet;

use leptos::ev::MouseEvent;
use leptos::*;

use crate::helpers::{join_classes, split_classes};
use crate::theme::ThemeColor;

/// Style modifiers shared by every alert, all off by default.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlertStyle {
    /// Adds the dismiss button and the `alert-dismissible` class.
    pub dismissible: bool,
    /// Fades the alert in and out, `fade show`.
    pub fade: bool,
    /// Space separated free-form CSS classes.
    pub classes: Option<String>,
}

/// Assembled attribute record for an alert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertProps {
    /// Resolved color variant.
    pub variant: ThemeColor,
    /// Dismiss button requested.
    pub dismissible: bool,
    /// Fade transition requested.
    pub fade: bool,
    /// Deduplicated free-form class tokens.
    pub classes: BTreeSet<String>,
}

impl AlertProps {
    /// Assembles the props record. Total and side-effect free.
    pub fn assemble(variant: ThemeColor, style: AlertStyle) -> Self {
        Self {
            variant,
            dismissible: style.dismissible,
            fade: style.fade,
            classes: split_classes(style.classes.as_deref()),
        }
    }

    /// The single CSS class the color variant resolves to.
    pub fn variant_class(&self) -> &'static str {
        match self.variant {
            ThemeColor::Danger => "alert-danger",
            ThemeColor::Dark => "alert-dark",
            ThemeColor::Info => "alert-info",
            ThemeColor::Light => "alert-light",
            ThemeColor::Primary => "alert-primary",
            ThemeColor::Secondary => "alert-secondary",
            ThemeColor::Success => "alert-success",
            ThemeColor::Warning => "alert-warning",
        }
    }

    /// The full `class` attribute value.
    pub fn class_attribute(&self) -> String {
        let mut tokens = vec!["alert", self.variant_class()];
        if self.dismissible {
            tokens.push("alert-dismissible");
        }
        if self.fade {
            tokens.push("fade");
            tokens.push("show");
        }
        join_classes(tokens, &self.classes)
    }
}

fn alert<V: IntoView>(
    variant: ThemeColor,
    style: AlertStyle,
    on_close: Option<Callback<MouseEvent>>,
    children: impl Fn() -> V + 'static,
) -> impl IntoView {
    let props = AlertProps::assemble(variant, style);
    let class = props.class_attribute();
    let dismissible = props.dismissible;
    let dismissed = create_rw_signal(false);
    view! {
        <Show when=move || !dismissed.get() fallback=|| ()>
            <div class=class.clone() role="alert">
                {children()}
                {dismissible.then(|| view! {
                    <button
                        type="button"
                        class="close"
                        aria-label="Close"
                        on:click=move |ev| {
                            dismissed.set(true);
                            if let Some(on_close) = on_close.as_ref() {
                                on_close.call(ev);
                            }
                        }
                    >
                        <span aria-hidden="true">"\u{d7}"</span>
                    </button>
                })}
            </div>
        </Show>
    }
}

/// Creates a danger alert.
pub fn danger<V: IntoView>(
    style: AlertStyle,
    on_close: Option<Callback<MouseEvent>>,
    children: impl Fn() -> V + 'static,
) -> impl IntoView {
    alert(ThemeColor::Danger, style, on_close, children)
}

/// Creates a dark alert.
pub fn dark<V: IntoView>(
    style: AlertStyle,
    on_close: Option<Callback<MouseEvent>>,
    children: impl Fn() -> V + 'static,
) -> impl IntoView {
    alert(ThemeColor::Dark, style, on_close, children)
}

/// Creates an info alert.
pub fn info<V: IntoView>(
    style: AlertStyle,
    on_close: Option<Callback<MouseEvent>>,
    children: impl Fn() -> V + 'static,
) -> impl IntoView {
    alert(ThemeColor::Info, style, on_close, children)
}

/// Creates a light alert.
pub fn light<V: IntoView>(
    style: AlertStyle,
    on_close: Option<Callback<MouseEvent>>,
    children: impl Fn() -> V + 'static,
) -> impl IntoView {
    alert(ThemeColor::Light, style, on_close, children)
}

/// Creates a primary alert.
pub fn primary<V: IntoView>(
    style: AlertStyle,
    on_close: Option<Callback<MouseEvent>>,
    children: impl Fn() -> V + 'static,
) -> impl IntoView {
    alert(ThemeColor::Primary, style, on_close, children)
}

/// Creates a secondary alert.
pub fn secondary<V: IntoView>(
    style: AlertStyle,
    on_close: Option<Callback<MouseEvent>>,
    children: impl Fn() -> V + 'static,
) -> impl IntoView {
    alert(ThemeColor::Secondary, style, on_close, children)
}

/// Creates a success alert.
pub fn success<V: IntoView>(
    style: AlertStyle,
    on_close: Option<Callback<MouseEvent>>,
    children: impl Fn() -> V + 'static,
) -> impl IntoView {
    alert(ThemeColor::Success, style, on_close, children)
}

/// Creates a warning alert.
pub fn warning<V: IntoView>(
    style: AlertStyle,
    on_close: Option<Callback<MouseEvent>>,
    children: impl Fn() -> V + 'static,
) -> impl IntoView {
    alert(ThemeColor::Warning, style, on_close, children)
}

/// Creates a matching-colored link for use inside an alert body.
pub fn alert_link<V: IntoView>(
    href: Option<String>,
    classes: Option<&str>,
    children: impl FnOnce() -> V + 'static,
) -> impl IntoView {
    let class = join_classes(["alert-link"], &split_classes(classes));
    view! {
        <a class=class href=href>
            {children()}
        </a>
    }
}

/// Creates a heading for use inside an alert body.
pub fn alert_heading<V: IntoView>(
    classes: Option<&str>,
    children: impl FnOnce() -> V + 'static,
) -> impl IntoView {
    let class = join_classes(["alert-heading"], &split_classes(classes));
    view! { <h4 class=class>{children()}</h4> }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn every_color_resolves_its_own_class() {
        for color in ThemeColor::ALL {
            let props = AlertProps::assemble(color, AlertStyle::default());
            assert_eq!(
                props.variant_class(),
                format!("alert-{}", color.token()).as_str()
            );
        }
    }

    #[test]
    fn static_alert_classes() {
        let props = AlertProps::assemble(ThemeColor::Success, AlertStyle::default());
        assert_eq!(props.class_attribute(), "alert alert-success");
    }

    #[test]
    fn dismissible_alert_classes() {
        let props = AlertProps::assemble(
            ThemeColor::Warning,
            AlertStyle {
                dismissible: true,
                fade: true,
                ..Default::default()
            },
        );
        assert_eq!(
            props.class_attribute(),
            "alert alert-warning alert-dismissible fade show"
        );
    }

    #[test]
    fn free_form_classes_are_deduplicated() {
        let props = AlertProps::assemble(
            ThemeColor::Info,
            AlertStyle {
                classes: Some(" mb-0  mb-0 shadow ".to_string()),
                ..Default::default()
            },
        );
        assert_eq!(props.class_attribute(), "alert alert-info mb-0 shadow");
    }
}
