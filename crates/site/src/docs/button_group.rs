//! Button group documentation page.

use bootstrap_ui::class_names::MR_2;
use bootstrap_ui::prelude::*;
use leptos::*;

use crate::fixings::{CodeExample, ContentTitle, LiveExample, PageTitle};

#[component]
/// Documentation for button groups and toolbars.
pub fn ButtonGroupDoc() -> impl IntoView {
    view! {
        <PageTitle
            title="Button group"
            lede="Series of buttons grouped on a single line, with optional toolbar composition."
        />

        <ContentTitle title="Basic group" />
        <LiveExample>
            {button_group(
                ButtonGroupConfig {
                    label: Some("Basic example".to_string()),
                    ..Default::default()
                },
                || view! {
                    {buttons::solid::secondary(PushButton::default(), ButtonStyle::default(), None, || "Left")}
                    {buttons::solid::secondary(PushButton::default(), ButtonStyle::default(), None, || "Middle")}
                    {buttons::solid::secondary(PushButton::default(), ButtonStyle::default(), None, || "Right")}
                },
            )}
        </LiveExample>
        <CodeExample code=r#"button_group(
    ButtonGroupConfig { label: Some("Basic example".to_string()), ..Default::default() },
    || view! {
        {buttons::solid::secondary(PushButton::default(), ButtonStyle::default(), None, || "Left")}
        {buttons::solid::secondary(PushButton::default(), ButtonStyle::default(), None, || "Middle")}
        {buttons::solid::secondary(PushButton::default(), ButtonStyle::default(), None, || "Right")}
    },
)"# />

        <ContentTitle title="Toolbar" />
        <p>"Combine sets of groups into a toolbar; the label describes the whole toolbar for assistive tech."</p>
        <LiveExample>
            {button_toolbar(Some("Toolbar with two groups".to_string()), None, || view! {
                {button_group(
                    ButtonGroupConfig {
                        classes: Some(MR_2.to_string()),
                        label: Some("First group".to_string()),
                        ..Default::default()
                    },
                    || view! {
                        {buttons::outline::primary(PushButton::default(), ButtonStyle::default(), None, || "1")}
                        {buttons::outline::primary(PushButton::default(), ButtonStyle::default(), None, || "2")}
                    },
                )}
                {button_group(
                    ButtonGroupConfig {
                        label: Some("Second group".to_string()),
                        ..Default::default()
                    },
                    || view! {
                        {buttons::outline::secondary(PushButton::default(), ButtonStyle::default(), None, || "3")}
                    },
                )}
            })}
        </LiveExample>

        <ContentTitle title="Sizing and orientation" />
        <LiveExample>
            {button_group(
                ButtonGroupConfig {
                    size: Some(GroupSize::Lg),
                    classes: Some(MR_2.to_string()),
                    label: Some("Large group".to_string()),
                    ..Default::default()
                },
                || view! {
                    {buttons::solid::dark(PushButton::default(), ButtonStyle::default(), None, || "Left")}
                    {buttons::solid::dark(PushButton::default(), ButtonStyle::default(), None, || "Right")}
                },
            )}
            {button_group(
                ButtonGroupConfig {
                    appearance: GroupAppearance::Vertical,
                    label: Some("Vertical group".to_string()),
                    ..Default::default()
                },
                || view! {
                    {buttons::solid::secondary(PushButton::default(), ButtonStyle::default(), None, || "Top")}
                    {buttons::solid::secondary(PushButton::default(), ButtonStyle::default(), None, || "Bottom")}
                },
            )}
        </LiveExample>
        <CodeExample code=r#"ButtonGroupConfig { size: Some(GroupSize::Lg), ..Default::default() }
ButtonGroupConfig { appearance: GroupAppearance::Vertical, ..Default::default() }"# />

        <ContentTitle title="Toggle groups" />
        <p>
            "Checkbox and radio behaviour mark the group with "
            <code>"data-toggle"</code>
            " so Bootstrap's toggle plugin can manage the pressed states."
        </p>
        <LiveExample>
            {button_group(
                ButtonGroupConfig {
                    behaviour: Some(GroupBehaviour::Radio),
                    label: Some("Radio toggle group".to_string()),
                    ..Default::default()
                },
                || view! {
                    {buttons::outline::success(PushButton::default(), ButtonStyle { active: true, ..Default::default() }, None, || "On")}
                    {buttons::outline::success(PushButton::default(), ButtonStyle::default(), None, || "Off")}
                },
            )}
        </LiveExample>
    }
}
