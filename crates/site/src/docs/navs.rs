//! Navs documentation page.

use std::rc::Rc;

use bootstrap_ui::prelude::*;
use leptos::*;

use crate::fixings::{CodeExample, ContentTitle, LiveExample, PageTitle};

fn demo_links<V: IntoView>(link: impl Fn(&'static str, &'static str) -> V) -> impl IntoView {
    view! {
        {link("#home", "Home")}
        {link("#profile", "Profile")}
        {link("#messages", "Messages")}
    }
}

fn plain_link(href: &'static str, label: &'static str) -> impl IntoView {
    nav_item(None, move || {
        nav_link(
            NavLinkConfig {
                href: Some(href.to_string()),
                ..Default::default()
            },
            move || label,
        )
    })
}

#[component]
/// Documentation for nav containers, items, and links.
pub fn NavsDoc() -> impl IntoView {
    let current = create_rw_signal("#home".to_string());
    let predicate: ActiveLinkPredicate = Rc::new(move |link: &NavLinkProps| {
        link.href.as_deref() == Some(current.get().as_str())
    });

    view! {
        <PageTitle
            title="Navs"
            lede="One container builder per underlying tag, sharing items, links, and an active-link predicate."
        />

        <ContentTitle title="Base nav" />
        <p>
            "The "
            <code>"ul"</code>
            " container wraps each link in a list item. The "
            <code>"ol"</code>
            ", "
            <code>"nav"</code>
            " and "
            <code>"div"</code>
            " containers emit the same class vocabulary over their own tags."
        </p>
        <LiveExample>
            {navs::ul(NavConfig::default(), || demo_links(plain_link))}
        </LiveExample>
        <CodeExample code=r##"navs::ul(NavConfig::default(), || view! {
    {nav_item(None, || nav_link(
        NavLinkConfig { href: Some("#home".to_string()), ..Default::default() },
        || "Home",
    ))}
})"## />

        <ContentTitle title="Tabs and pills" />
        <LiveExample>
            {navs::ul(
                NavConfig { appearance: Some(Appearance::Tabs), ..Default::default() },
                || demo_links(plain_link),
            )}
            {navs::ul(
                NavConfig { appearance: Some(Appearance::Pills), ..Default::default() },
                || demo_links(plain_link),
            )}
        </LiveExample>
        <CodeExample code=r#"NavConfig { appearance: Some(Appearance::Tabs), ..Default::default() }
NavConfig { appearance: Some(Appearance::Pills), ..Default::default() }"# />

        <ContentTitle title="Fill and justify" />
        <p>
            "Width handling stretches the items across the container: \
             proportionally with fill, equally with justify."
        </p>
        <LiveExample>
            {navs::ul(
                NavConfig {
                    appearance: Some(Appearance::Pills),
                    width_handling: Some(WidthHandling::Fill),
                    ..Default::default()
                },
                || demo_links(plain_link),
            )}
            {navs::ul(
                NavConfig {
                    appearance: Some(Appearance::Pills),
                    width_handling: Some(WidthHandling::Justify),
                    ..Default::default()
                },
                || demo_links(plain_link),
            )}
        </LiveExample>

        <ContentTitle title="Active-link predicate" />
        <p>
            "A nav forwards its predicate to every link it contains; each link \
             re-applies it on render to decide whether it carries the active \
             class. The buttons below move the selection without touching the \
             links themselves."
        </p>
        <LiveExample>
            {navs::ul(
                NavConfig {
                    appearance: Some(Appearance::Tabs),
                    active_link_predicate: Some(predicate),
                    ..Default::default()
                },
                || demo_links(plain_link),
            )}
            {buttons::outline::secondary(
                PushButton::default(),
                ButtonStyle { size: Some(ButtonSize::Sm), classes: Some("mr-2 mt-3".to_string()), ..Default::default() },
                Some(Callback::new(move |_| current.set("#home".to_string()))),
                || "Select Home",
            )}
            {buttons::outline::secondary(
                PushButton::default(),
                ButtonStyle { size: Some(ButtonSize::Sm), classes: Some("mt-3".to_string()), ..Default::default() },
                Some(Callback::new(move |_| current.set("#profile".to_string()))),
                || "Select Profile",
            )}
        </LiveExample>
        <CodeExample code=r##"let current = create_rw_signal("#home".to_string());
let predicate: ActiveLinkPredicate =
    Rc::new(move |link| link.href.as_deref() == Some(current.get().as_str()));

navs::ul(
    NavConfig { active_link_predicate: Some(predicate), ..Default::default() },
    || /* nav items */,
)"## />

        <ContentTitle title="Disabled links" />
        <LiveExample>
            {navs::ul(NavConfig::default(), || view! {
                {plain_link("#home", "Home")}
                {nav_item(None, || nav_link(
                    NavLinkConfig { disabled: true, ..Default::default() },
                    || "Disabled",
                ))}
            })}
        </LiveExample>
        <CodeExample code=r#"nav_link(NavLinkConfig { disabled: true, ..Default::default() }, || "Disabled")"# />
    }
}
