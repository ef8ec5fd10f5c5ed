//! Nav builders: four container tags, nav items, and nav links.
//!
//! A nav container may carry an [`ActiveLinkPredicate`]. The builders store
//! and forward it untouched; each rendered link re-applies it per render
//! pass to decide whether it is the active one. Nothing is cached.

use std::collections::BTreeSet;
use std::rc::Rc;

use leptos::*;

use crate::helpers::{join_classes, split_classes};

/// Visual appearance of a nav.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Appearance {
    /// Tabbed navigation, `nav-tabs`.
    Tabs,
    /// Pill-shaped navigation, `nav-pills`.
    Pills,
}

impl Appearance {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Tabs => "nav-tabs",
            Self::Pills => "nav-pills",
        }
    }
}

/// How nav items share the container's horizontal space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidthHandling {
    /// Items fill available space proportionally, `nav-fill`.
    Fill,
    /// Items get equal widths, `nav-justified`.
    Justify,
}

impl WidthHandling {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Fill => "nav-fill",
            Self::Justify => "nav-justified",
        }
    }
}

/// Decides, per rendered link, whether that link is marked active.
///
/// Supplied by the caller and evaluated during rendering; the nav builders
/// themselves never invoke it.
pub type ActiveLinkPredicate = Rc<dyn Fn(&NavLinkProps) -> bool>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NavTag {
    Ul,
    Ol,
    Nav,
    Div,
}

#[derive(Clone)]
struct NavContext {
    tag: NavTag,
    active_link_predicate: Option<ActiveLinkPredicate>,
}

/// Configuration for nav containers, every field optional with defaults.
#[derive(Clone, Default)]
pub struct NavConfig {
    /// Visual appearance, plain nav when absent.
    pub appearance: Option<Appearance>,
    /// Width handling, content-sized when absent.
    pub width_handling: Option<WidthHandling>,
    /// Active-link predicate forwarded to the rendered links.
    pub active_link_predicate: Option<ActiveLinkPredicate>,
    /// Space separated free-form CSS classes.
    pub classes: Option<String>,
}

/// Assembled attribute record for a nav container.
#[derive(Clone)]
pub struct NavProps {
    /// Visual appearance.
    pub appearance: Option<Appearance>,
    /// Width handling.
    pub width_handling: Option<WidthHandling>,
    /// Deduplicated free-form class tokens.
    pub classes: BTreeSet<String>,
    /// The forwarded predicate, untouched.
    pub active_link_predicate: Option<ActiveLinkPredicate>,
}

impl NavProps {
    /// Assembles the props record from its configuration.
    pub fn assemble(nav: NavConfig) -> Self {
        Self {
            appearance: nav.appearance,
            width_handling: nav.width_handling,
            classes: split_classes(nav.classes.as_deref()),
            active_link_predicate: nav.active_link_predicate,
        }
    }

    /// The full `class` attribute value.
    pub fn class_attribute(&self) -> String {
        let mut tokens = vec!["nav"];
        if let Some(appearance) = self.appearance {
            tokens.push(appearance.token());
        }
        if let Some(width_handling) = self.width_handling {
            tokens.push(width_handling.token());
        }
        join_classes(tokens, &self.classes)
    }
}

#[component]
fn NavContainer(tag: NavTag, props: NavProps, children: Children) -> impl IntoView {
    let class = props.class_attribute();
    provide_context(NavContext {
        tag,
        active_link_predicate: props.active_link_predicate.clone(),
    });
    match tag {
        NavTag::Ul => view! { <ul class=class>{children()}</ul> }.into_view(),
        NavTag::Ol => view! { <ol class=class>{children()}</ol> }.into_view(),
        NavTag::Nav => view! { <nav class=class>{children()}</nav> }.into_view(),
        NavTag::Div => view! { <div class=class>{children()}</div> }.into_view(),
    }
}

fn build_nav<V: IntoView>(
    tag: NavTag,
    nav: NavConfig,
    children: impl FnOnce() -> V + 'static,
) -> impl IntoView {
    let props = NavProps::assemble(nav);
    view! { <NavContainer tag=tag props=props>{children()}</NavContainer> }
}

/// Creates a nav based on an `<ul>` element.
pub fn ul<V: IntoView>(nav: NavConfig, children: impl FnOnce() -> V + 'static) -> impl IntoView {
    build_nav(NavTag::Ul, nav, children)
}

/// Creates a nav based on an `<ol>` element.
pub fn ol<V: IntoView>(nav: NavConfig, children: impl FnOnce() -> V + 'static) -> impl IntoView {
    build_nav(NavTag::Ol, nav, children)
}

/// Creates a nav based on a `<nav>` element.
pub fn nav<V: IntoView>(nav: NavConfig, children: impl FnOnce() -> V + 'static) -> impl IntoView {
    build_nav(NavTag::Nav, nav, children)
}

/// Creates a nav based on a `<div>` element.
pub fn div<V: IntoView>(nav: NavConfig, children: impl FnOnce() -> V + 'static) -> impl IntoView {
    build_nav(NavTag::Div, nav, children)
}

/// Creates a nav item inside the surrounding nav.
///
/// List navs wrap their items in `<li>`; the `<nav>` and `<div>` containers
/// use `<div>` items instead, matching the container's content model.
pub fn nav_item<V: IntoView>(
    classes: Option<&str>,
    children: impl FnOnce() -> V + 'static,
) -> impl IntoView {
    let class = join_classes(["nav-item"], &split_classes(classes));
    let tag = use_context::<NavContext>().map(|cx| cx.tag);
    match tag {
        Some(NavTag::Nav) | Some(NavTag::Div) => {
            view! { <div class=class>{children()}</div> }.into_view()
        }
        _ => view! { <li class=class>{children()}</li> }.into_view(),
    }
}

/// Configuration for [`nav_link`], every field optional with defaults.
#[derive(Clone, Default)]
pub struct NavLinkConfig {
    /// `href` attribute.
    pub href: Option<String>,
    /// `target` attribute.
    pub target: Option<String>,
    /// Explicit active override. When absent the surrounding nav's
    /// predicate decides.
    pub active: Option<bool>,
    /// Renders the link as disabled.
    pub disabled: bool,
    /// Invoked when the link resolves as active.
    pub on_active: Option<Callback<()>>,
    /// Space separated free-form CSS classes.
    pub classes: Option<String>,
}

/// The attribute record a nav link exposes to the active-link predicate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavLinkProps {
    /// `href` attribute, absent when never set.
    pub href: Option<String>,
    /// `target` attribute, absent when never set.
    pub target: Option<String>,
    /// Explicit active override.
    pub active: Option<bool>,
    /// Disabled state.
    pub disabled: bool,
    /// Deduplicated free-form class tokens.
    pub classes: BTreeSet<String>,
}

impl NavLinkProps {
    /// Assembles the props record from its configuration.
    pub fn assemble(link: &NavLinkConfig) -> Self {
        Self {
            href: link.href.clone(),
            target: link.target.clone(),
            active: link.active,
            disabled: link.disabled,
            classes: split_classes(link.classes.as_deref()),
        }
    }

    /// Resolves the active state: an explicit override wins, then the
    /// predicate, then inactive.
    pub fn resolve_active(&self, predicate: Option<&ActiveLinkPredicate>) -> bool {
        match self.active {
            Some(active) => active,
            None => predicate
                .map(|predicate| predicate(self))
                .unwrap_or(false),
        }
    }

    /// The full `class` attribute value for the resolved active state.
    pub fn class_attribute(&self, active: bool) -> String {
        let mut tokens = vec!["nav-link"];
        if active {
            tokens.push("active");
        }
        if self.disabled {
            tokens.push("disabled");
        }
        join_classes(tokens, &self.classes)
    }
}

/// Creates a nav link inside the surrounding nav.
///
/// The active state is re-resolved on every render pass from the explicit
/// override or the surrounding nav's predicate.
pub fn nav_link<V: IntoView>(
    link: NavLinkConfig,
    children: impl FnOnce() -> V + 'static,
) -> impl IntoView {
    let props = NavLinkProps::assemble(&link);
    let predicate = use_context::<NavContext>().and_then(|cx| cx.active_link_predicate);
    let resolve = {
        let props = props.clone();
        move || props.resolve_active(predicate.as_ref())
    };
    if let Some(on_active) = link.on_active {
        let resolve = resolve.clone();
        create_effect(move |_| {
            if resolve() {
                on_active.call(());
            }
        });
    }
    let class = {
        let props = props.clone();
        let resolve = resolve.clone();
        move || props.class_attribute(resolve())
    };
    view! {
        <a
            class=class
            href=props.href.clone()
            target=props.target.clone()
            aria-disabled=props.disabled.then_some("true")
        >
            {children()}
        </a>
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn container_classes_cover_appearance_and_width() {
        let props = NavProps::assemble(NavConfig {
            appearance: Some(Appearance::Tabs),
            width_handling: Some(WidthHandling::Fill),
            ..Default::default()
        });
        assert_eq!(props.class_attribute(), "nav nav-tabs nav-fill");

        let justified = NavProps::assemble(NavConfig {
            appearance: Some(Appearance::Pills),
            width_handling: Some(WidthHandling::Justify),
            classes: Some("flex-column".to_string()),
            ..Default::default()
        });
        assert_eq!(
            justified.class_attribute(),
            "nav nav-pills nav-justified flex-column"
        );
    }

    #[test]
    fn plain_nav_has_only_the_base_class() {
        let props = NavProps::assemble(NavConfig::default());
        assert_eq!(props.class_attribute(), "nav");
        assert!(props.active_link_predicate.is_none());
    }

    #[test]
    fn predicate_is_forwarded_without_being_invoked() {
        let calls = Rc::new(Cell::new(0u32));
        let witness = Rc::clone(&calls);
        let predicate: ActiveLinkPredicate = Rc::new(move |_| {
            witness.set(witness.get() + 1);
            true
        });

        let props = NavProps::assemble(NavConfig {
            active_link_predicate: Some(predicate),
            ..Default::default()
        });
        assert!(props.active_link_predicate.is_some());
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn explicit_active_override_beats_the_predicate() {
        let predicate: ActiveLinkPredicate = Rc::new(|_| true);
        let explicit_off = NavLinkProps {
            active: Some(false),
            ..Default::default()
        };
        assert!(!explicit_off.resolve_active(Some(&predicate)));

        let deferred = NavLinkProps::default();
        assert!(deferred.resolve_active(Some(&predicate)));
        assert!(!deferred.resolve_active(None));
    }

    #[test]
    fn predicate_sees_the_link_props() {
        let predicate: ActiveLinkPredicate =
            Rc::new(|link| link.href.as_deref() == Some("/docs/navs"));
        let matching = NavLinkProps {
            href: Some("/docs/navs".to_string()),
            ..Default::default()
        };
        let other = NavLinkProps {
            href: Some("/docs/alerts".to_string()),
            ..Default::default()
        };
        assert!(matching.resolve_active(Some(&predicate)));
        assert!(!other.resolve_active(Some(&predicate)));
    }

    #[test]
    fn link_classes_reflect_state() {
        let link = NavLinkProps::default();
        assert_eq!(link.class_attribute(false), "nav-link");
        assert_eq!(link.class_attribute(true), "nav-link active");

        let disabled = NavLinkProps {
            disabled: true,
            ..Default::default()
        };
        assert_eq!(disabled.class_attribute(false), "nav-link disabled");
    }

    #[test]
    fn unset_link_attributes_stay_absent() {
        let props = NavLinkProps::assemble(&NavLinkConfig::default());
        assert_eq!(props.href, None);
        assert_eq!(props.target, None);
        assert_eq!(props.active, None);
    }
}
