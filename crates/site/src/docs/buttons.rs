//! Buttons documentation page.

use bootstrap_ui::class_names::MR_2;
use bootstrap_ui::prelude::*;
use leptos::*;

use crate::fixings::{CodeExample, ContentTitle, LiveExample, PageTitle};

fn spaced() -> ButtonStyle {
    ButtonStyle {
        classes: Some(MR_2.to_string()),
        ..Default::default()
    }
}

#[component]
/// Documentation for the solid and outline button families.
pub fn ButtonsDoc() -> impl IntoView {
    let pressed = create_rw_signal(false);

    view! {
        <PageTitle
            title="Buttons"
            lede="One builder per color and element shape, split into a solid and an outline family."
        />

        <ContentTitle title="Solid buttons" />
        <p>
            "The solid family fills each button with its theme color. The "
            <code>"link"</code>
            " builder is part of this family only; it styles a button like an \
             inline link and deliberately has no outline counterpart."
        </p>
        <LiveExample>
            {buttons::solid::danger(PushButton::default(), spaced(), None, || "Danger")}
            {buttons::solid::dark(PushButton::default(), spaced(), None, || "Dark")}
            {buttons::solid::info(PushButton::default(), spaced(), None, || "Info")}
            {buttons::solid::light(PushButton::default(), spaced(), None, || "Light")}
            {buttons::solid::primary(PushButton::default(), spaced(), None, || "Primary")}
            {buttons::solid::secondary(PushButton::default(), spaced(), None, || "Secondary")}
            {buttons::solid::success(PushButton::default(), spaced(), None, || "Success")}
            {buttons::solid::warning(PushButton::default(), spaced(), None, || "Warning")}
            {buttons::solid::link(PushButton::default(), spaced(), None, || "Link")}
        </LiveExample>
        <CodeExample code=r#"buttons::solid::primary(
    PushButton::default(),
    ButtonStyle::default(),
    None,
    || "Primary",
)"# />

        <ContentTitle title="Outline buttons" />
        <p>
            "The outline family swaps the fill for a border in the same color. \
             Both families cover the same eight colors."
        </p>
        <LiveExample>
            {buttons::outline::danger(PushButton::default(), spaced(), None, || "Danger")}
            {buttons::outline::dark(PushButton::default(), spaced(), None, || "Dark")}
            {buttons::outline::info(PushButton::default(), spaced(), None, || "Info")}
            {buttons::outline::light(PushButton::default(), spaced(), None, || "Light")}
            {buttons::outline::primary(PushButton::default(), spaced(), None, || "Primary")}
            {buttons::outline::secondary(PushButton::default(), spaced(), None, || "Secondary")}
            {buttons::outline::success(PushButton::default(), spaced(), None, || "Success")}
            {buttons::outline::warning(PushButton::default(), spaced(), None, || "Warning")}
        </LiveExample>
        <CodeExample code=r#"buttons::outline::danger(
    PushButton::default(),
    ButtonStyle::default(),
    None,
    || "Danger",
)"# />

        <ContentTitle title="Sizes and block buttons" />
        <LiveExample>
            {buttons::solid::primary(
                PushButton::default(),
                ButtonStyle { size: Some(ButtonSize::Lg), classes: Some(MR_2.to_string()), ..Default::default() },
                None,
                || "Large",
            )}
            {buttons::solid::primary(
                PushButton::default(),
                ButtonStyle { size: Some(ButtonSize::Sm), ..Default::default() },
                None,
                || "Small",
            )}
            {buttons::solid::secondary(
                PushButton::default(),
                ButtonStyle { block_sized: true, ..Default::default() },
                None,
                || "Block level",
            )}
        </LiveExample>
        <CodeExample code=r#"ButtonStyle { size: Some(ButtonSize::Lg), ..Default::default() }
ButtonStyle { block_sized: true, ..Default::default() }"# />

        <ContentTitle title="States" />
        <p>
            "The pressed look and the disabled state are plain style modifiers. \
             Anchors cannot carry the "
            <code>"disabled"</code>
            " attribute, so link-shaped buttons receive the class and \
             aria markup instead."
        </p>
        <LiveExample>
            {buttons::solid::success(
                PushButton::default(),
                ButtonStyle { active: true, classes: Some(MR_2.to_string()), ..Default::default() },
                None,
                || "Active",
            )}
            {buttons::solid::success(
                PushButton::default(),
                ButtonStyle { disabled: true, ..Default::default() },
                None,
                || "Disabled",
            )}
        </LiveExample>

        <ContentTitle title="Element shapes" />
        <p>
            "Each color builds in three shapes: a plain "
            <code>"<button>"</code>
            ", an anchor styled as a button, and an "
            <code>"<input>"</code>
            " form control whose label travels in its value."
        </p>
        <LiveExample>
            {buttons::outline::primary_link(
                LinkButton::default().href("/x").target("_blank"),
                spaced(),
                || "Anchor",
            )}
            {buttons::solid::danger_input(InputButton::new("Go"), spaced())}
            {buttons::solid::primary(
                PushButton::default().button_type(ButtonType::Submit),
                ButtonStyle::default(),
                None,
                || "Submit",
            )}
        </LiveExample>
        <CodeExample code=r#"buttons::outline::primary_link(
    LinkButton::default().href("/x").target("_blank"),
    ButtonStyle::default(),
    || "Anchor",
)
buttons::solid::danger_input(InputButton::new("Go"), ButtonStyle::default())"# />

        <ContentTitle title="Toggling state" />
        <p>
            "Props records are immutable; interactive state lives with the \
             caller, which rebuilds the button on every change."
        </p>
        <LiveExample>
            {move || buttons::solid::primary(
                PushButton::default(),
                ButtonStyle { active: pressed.get(), ..Default::default() },
                Some(Callback::new(move |_| pressed.update(|pressed| *pressed = !*pressed))),
                move || if pressed.get_untracked() { "Pressed" } else { "Press me" },
            )}
        </LiveExample>
        <CodeExample code=r#"let pressed = create_rw_signal(false);
move || buttons::solid::primary(
    PushButton::default(),
    ButtonStyle { active: pressed.get(), ..Default::default() },
    Some(Callback::new(move |_| pressed.update(|pressed| *pressed = !*pressed))),
    || "Press me",
)"# />
    }
}
