//! Site shell: router, meta tags, and the sidebar navigation.

use std::rc::Rc;

use bootstrap_ui::class_names::FLEX_COLUMN;
use bootstrap_ui::layout::{col, container, row, ColumnSpec};
use bootstrap_ui::navs::{
    self, nav_item, nav_link, ActiveLinkPredicate, Appearance, NavConfig, NavLinkConfig,
    NavLinkProps,
};
use bootstrap_ui::prelude::{alerts, AlertStyle};
use leptos::*;
use leptos_meta::*;
use leptos_router::*;

use crate::docs::alerts::AlertsDoc;
use crate::docs::button_group::ButtonGroupDoc;
use crate::docs::buttons::ButtonsDoc;
use crate::docs::grid::GridDoc;
use crate::docs::navs::NavsDoc;
use crate::docs::typography::TypographyDoc;
use crate::fixings::{span, PageTitle};

#[component]
/// Root of the documentation site.
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="bootstrap_ui" />
        <Meta
            name="description"
            content="Typed Bootstrap component builders for Leptos, documented with themselves."
        />

        <Router>
            <main>
                {container(true, None, || row(None, || view! {
                    {col(
                        ColumnSpec { md: Some(span(3)), lg: Some(span(2)), ..Default::default() },
                        None,
                        || view! { <SideNav /> },
                    )}
                    {col(ColumnSpec::default(), None, || view! {
                        <Routes>
                            <Route path="" view=Home />
                            <Route path="/components/alerts" view=AlertsDoc />
                            <Route path="/components/buttons" view=ButtonsDoc />
                            <Route path="/components/button-group" view=ButtonGroupDoc />
                            <Route path="/components/navs" view=NavsDoc />
                            <Route path="/layout/grid" view=GridDoc />
                            <Route path="/content/typography" view=TypographyDoc />
                        </Routes>
                    })}
                }))}
            </main>
        </Router>
    }
}

const LINKS: [(&str, &str); 7] = [
    ("/", "Overview"),
    ("/components/alerts", "Alerts"),
    ("/components/buttons", "Buttons"),
    ("/components/button-group", "Button group"),
    ("/components/navs", "Navs"),
    ("/layout/grid", "Grid"),
    ("/content/typography", "Typography"),
];

#[component]
fn SideNav() -> impl IntoView {
    let location = use_location();
    let predicate: ActiveLinkPredicate = Rc::new(move |link: &NavLinkProps| {
        link.href.as_deref() == Some(location.pathname.get().as_str())
    });

    navs::ul(
        NavConfig {
            appearance: Some(Appearance::Pills),
            active_link_predicate: Some(predicate),
            classes: Some(FLEX_COLUMN.to_string()),
            ..Default::default()
        },
        || {
            LINKS
                .into_iter()
                .map(|(href, label)| {
                    nav_item(None, move || {
                        nav_link(
                            NavLinkConfig {
                                href: Some(href.to_string()),
                                ..Default::default()
                            },
                            move || label,
                        )
                    })
                })
                .collect_view()
        },
    )
}

#[component]
fn Home() -> impl IntoView {
    view! {
        <PageTitle
            title="bootstrap_ui"
            lede="Typed builders for Bootstrap's component vocabulary, rendered through Leptos."
        />
        <p>
            "Every builder resolves a closed variant constant, fixes an element \
             shape, and projects both into a flat props record before the view \
             layer sees it. The sidebar, the page grid, and each example below \
             are produced by the same functions the pages document."
        </p>
        {alerts::info(AlertStyle::default(), None, || {
            "Pick a component family from the sidebar to see its builders and \
             the markup they produce."
        })}
    }
}
