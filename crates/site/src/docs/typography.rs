//! Typography documentation page.

use bootstrap_ui::class_names::{TEXT_CENTER, TEXT_RIGHT};
use bootstrap_ui::prelude::*;
use leptos::*;

use crate::fixings::{CodeExample, ContentTitle, LiveExample, PageTitle};

#[component]
/// Documentation for the typography builders.
pub fn TypographyDoc() -> impl IntoView {
    view! {
        <PageTitle
            title="Typography"
            lede="Blockquotes and lead paragraphs on top of Bootstrap's text utilities."
        />

        <ContentTitle title="Blockquotes" />
        <LiveExample>
            {blockquote(None, || view! {
                <p>"For quoting blocks of content from another source within your document."</p>
            })}
        </LiveExample>
        <CodeExample code=r#"blockquote(None, || view! {
    <p>"For quoting blocks of content from another source within your document."</p>
})"# />

        <ContentTitle title="Naming a source" />
        <LiveExample>
            {blockquote(None, || view! {
                <p>"Someone famous once observed something quotable."</p>
                {blockquote_footer(None, || view! {
                    "Someone famous in " <cite title="Source Title">"Source Title"</cite>
                })}
            })}
        </LiveExample>
        <CodeExample code=r#"blockquote(None, || view! {
    <p>"Someone famous once observed something quotable."</p>
    {blockquote_footer(None, || view! {
        "Someone famous in " <cite title="Source Title">"Source Title"</cite>
    })}
})"# />

        <ContentTitle title="Alignment" />
        <p>"The free-form class hook takes any of the text utilities."</p>
        <LiveExample>
            {blockquote(Some(TEXT_CENTER), || view! {
                <p>"Centered quote."</p>
            })}
            {blockquote(Some(TEXT_RIGHT), || view! {
                <p>"Right-aligned quote."</p>
            })}
        </LiveExample>
        <CodeExample code=r#"blockquote(Some(class_names::TEXT_CENTER), || view! { <p>"Centered quote."</p> })"# />

        <ContentTitle title="Lead paragraphs" />
        <LiveExample>
            {lead(None, || "Make a paragraph stand out from its neighbors.")}
        </LiveExample>
        <CodeExample code=r#"lead(None, || "Make a paragraph stand out from its neighbors.")"# />
    }
}
