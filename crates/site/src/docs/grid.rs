//! Grid documentation page.

use bootstrap_ui::class_names::{
    BORDER, P_3, TABLE, TABLE_BORDERED, TABLE_STRIPED, TEXT_CENTER, TEXT_NOWRAP,
};
use bootstrap_ui::prelude::*;
use leptos::*;

use crate::fixings::{span, CodeExample, ContentTitle, LiveExample, PageTitle};

fn demo_cell(label: &'static str) -> impl IntoView {
    view! { <div class=format!("{BORDER} {P_3}")>{label}</div> }
}

#[component]
/// Documentation for the container, row, and column builders.
pub fn GridDoc() -> impl IntoView {
    view! {
        <PageTitle
            title="Grid"
            lede="A twelve-column flexbox grid with five responsive tiers."
        />

        <ContentTitle title="Grid options" />
        <p>
            "Column widths are validated on construction, so a held width is \
             always a legal grid span. The tiers mirror Bootstrap's \
             breakpoints."
        </p>
        <table class=format!("{TABLE} {TABLE_BORDERED} {TABLE_STRIPED}")>
            <thead>
                <tr>
                    <th></th>
                    <th class=TEXT_CENTER>"Extra small" <br/> <small>"<576px"</small></th>
                    <th class=TEXT_CENTER>"Small" <br/> <small>"\u{2265}576px"</small></th>
                    <th class=TEXT_CENTER>"Medium" <br/> <small>"\u{2265}768px"</small></th>
                    <th class=TEXT_CENTER>"Large" <br/> <small>"\u{2265}992px"</small></th>
                    <th class=TEXT_CENTER>"Extra large" <br/> <small>"\u{2265}1200px"</small></th>
                </tr>
            </thead>
            <tbody>
                <tr>
                    <th scope="row" class=TEXT_NOWRAP>"Max container width"</th>
                    <td>"None (auto)"</td>
                    <td>"540px"</td>
                    <td>"720px"</td>
                    <td>"960px"</td>
                    <td>"1140px"</td>
                </tr>
                <tr>
                    <th scope="row" class=TEXT_NOWRAP>"Spec field"</th>
                    <td><code>"col"</code></td>
                    <td><code>"sm"</code></td>
                    <td><code>"md"</code></td>
                    <td><code>"lg"</code></td>
                    <td><code>"xl"</code></td>
                </tr>
                <tr>
                    <th scope="row" class=TEXT_NOWRAP>"# of columns"</th>
                    <td colspan="5">"12"</td>
                </tr>
            </tbody>
        </table>

        <ContentTitle title="Equal-width columns" />
        <p>"Columns with no width share the row evenly."</p>
        <LiveExample>
            {container(false, None, || row(None, || view! {
                {col(ColumnSpec::default(), None, || demo_cell("1 of 3"))}
                {col(ColumnSpec::default(), None, || demo_cell("2 of 3"))}
                {col(ColumnSpec::default(), None, || demo_cell("3 of 3"))}
            }))}
        </LiveExample>
        <CodeExample code=r#"container(false, None, || row(None, || view! {
    {col(ColumnSpec::default(), None, || "1 of 3")}
    {col(ColumnSpec::default(), None, || "2 of 3")}
    {col(ColumnSpec::default(), None, || "3 of 3")}
}))"# />

        <ContentTitle title="Responsive widths" />
        <p>
            "Each tier takes effect from its breakpoint up. These columns stack \
             full-width on phones and split six-and-six from the medium tier."
        </p>
        <LiveExample>
            {container(false, None, || row(None, || view! {
                {col(
                    ColumnSpec { col: Some(span(12)), md: Some(span(6)), ..Default::default() },
                    None,
                    || demo_cell("col-12 col-md-6"),
                )}
                {col(
                    ColumnSpec { col: Some(span(12)), md: Some(span(6)), ..Default::default() },
                    None,
                    || demo_cell("col-12 col-md-6"),
                )}
            }))}
        </LiveExample>
        <CodeExample code=r#"let spec = ColumnSpec {
    col: Some(ColumnWidth::columns(12)?),
    md: Some(ColumnWidth::columns(6)?),
    ..Default::default()
};
col(spec, None, || "col-12 col-md-6")"# />

        <ContentTitle title="Auto-sized columns" />
        <LiveExample>
            {container(false, None, || row(None, || view! {
                {col(
                    ColumnSpec { lg: Some(ColumnWidth::AUTO), ..Default::default() },
                    None,
                    || demo_cell("col-lg-auto"),
                )}
                {col(ColumnSpec::default(), None, || demo_cell("col"))}
            }))}
        </LiveExample>
        <CodeExample code=r#"ColumnSpec { lg: Some(ColumnWidth::AUTO), ..Default::default() }"# />
    }
}
