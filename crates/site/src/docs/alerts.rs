//! Alerts documentation page.

use bootstrap_ui::prelude::*;
use leptos::*;

use crate::fixings::{CodeExample, ContentTitle, LiveExample, PageTitle};

#[component]
/// Documentation for the alert builders.
pub fn AlertsDoc() -> impl IntoView {
    let visible = create_rw_signal(true);

    view! {
        <PageTitle
            title="Alerts"
            lede="Contextual feedback messages in the eight theme colors, with an optional dismiss button."
        />

        <ContentTitle title="Examples" />
        <LiveExample>
            {alerts::danger(AlertStyle::default(), None, || "A simple danger alert.")}
            {alerts::dark(AlertStyle::default(), None, || "A simple dark alert.")}
            {alerts::info(AlertStyle::default(), None, || "A simple info alert.")}
            {alerts::light(AlertStyle::default(), None, || "A simple light alert.")}
            {alerts::primary(AlertStyle::default(), None, || "A simple primary alert.")}
            {alerts::secondary(AlertStyle::default(), None, || "A simple secondary alert.")}
            {alerts::success(AlertStyle::default(), None, || "A simple success alert.")}
            {alerts::warning(AlertStyle::default(), None, || "A simple warning alert.")}
        </LiveExample>
        <CodeExample code=r#"alerts::success(AlertStyle::default(), None, || "A simple success alert.")"# />

        <ContentTitle title="Link color and additional content" />
        <p>
            "Use the alert-scoped link and heading helpers inside an alert body \
             to keep the colors matched."
        </p>
        <LiveExample>
            {alerts::success(AlertStyle::default(), None, || view! {
                {alert_heading(None, || "Well done!")}
                <p>
                    "That operation went through. "
                    {alert_link(Some("#details".to_string()), None, || "Read the details")}
                    " whenever convenient."
                </p>
            })}
        </LiveExample>
        <CodeExample code=r##"alerts::success(AlertStyle::default(), None, || view! {
    {alert_heading(None, || "Well done!")}
    <p>
        "That operation went through. "
        {alert_link(Some("#details".to_string()), None, || "Read the details")}
    </p>
})"## />

        <ContentTitle title="Dismissing" />
        <p>
            "A dismissible alert owns its dismissal state and removes itself \
             from the page. The caller only learns about it through "
            <code>"on_close"</code>
            "; here that resets the toggle driving the example."
        </p>
        <LiveExample>
            {move || visible.get().then(|| alerts::warning(
                AlertStyle { dismissible: true, fade: true, ..Default::default() },
                Some(Callback::new(move |_| {
                    logging::log!("warning alert dismissed");
                    visible.set(false);
                })),
                || "Holy guacamole! Check yourself before you wreck yourself.",
            ))}
            {move || (!visible.get()).then(|| buttons::outline::secondary(
                PushButton::default(),
                ButtonStyle { size: Some(ButtonSize::Sm), ..Default::default() },
                Some(Callback::new(move |_| visible.set(true))),
                || "Show the alert again",
            ))}
        </LiveExample>
        <CodeExample code=r#"alerts::warning(
    AlertStyle { dismissible: true, fade: true, ..Default::default() },
    Some(Callback::new(move |_| visible.set(false))),
    || "Holy guacamole! Check yourself before you wreck yourself.",
)"# />
    }
}
