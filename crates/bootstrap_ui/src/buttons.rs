//! Button builders: solid and outline color families over three element
//! shapes, plus button groups and toolbars.
//!
//! Every entry point resolves a variant constant from its family module,
//! fixes the element shape, and hands the assembled [`ButtonProps`] to the
//! rendering layer. Assembly is total; nothing in this module can fail.

use std::collections::BTreeSet;

use leptos::ev::MouseEvent;
use leptos::*;

use crate::class_names::TEXT_NOWRAP;
use crate::helpers::{join_classes, split_classes};
use crate::theme::ThemeColor;

pub mod outline;
pub mod solid;

/// HTML `type` attribute values for `<button>` elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonType {
    /// A plain button with no form behavior.
    Button,
    /// Submits the surrounding form.
    Submit,
    /// Resets the surrounding form.
    Reset,
}

impl Default for ButtonType {
    fn default() -> Self {
        Self::Button
    }
}

impl ButtonType {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Button => "button",
            Self::Submit => "submit",
            Self::Reset => "reset",
        }
    }
}

/// HTML `type` attribute values for `<input>` buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputButtonType {
    /// A plain input button.
    Button,
    /// Submits the surrounding form.
    Submit,
    /// Resets the surrounding form.
    Reset,
}

impl Default for InputButtonType {
    fn default() -> Self {
        Self::Button
    }
}

impl InputButtonType {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Button => "button",
            Self::Submit => "submit",
            Self::Reset => "reset",
        }
    }
}

/// HTML `formenctype` attribute values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormEncType {
    /// `application/x-www-form-urlencoded`.
    UrlEncoded,
    /// `multipart/form-data`.
    Multipart,
    /// `text/plain`.
    Plain,
}

impl FormEncType {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::UrlEncoded => "application/x-www-form-urlencoded",
            Self::Multipart => "multipart/form-data",
            Self::Plain => "text/plain",
        }
    }
}

/// HTML `formmethod` attribute values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMethod {
    /// `get`.
    Get,
    /// `post`.
    Post,
}

impl FormMethod {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Get => "get",
            Self::Post => "post",
        }
    }
}

/// Button sizing tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonSize {
    /// Dense button, `btn-sm`.
    Sm,
    /// Large button, `btn-lg`.
    Lg,
}

impl ButtonSize {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Sm => "btn-sm",
            Self::Lg => "btn-lg",
        }
    }
}

/// Which CSS class family a button receives.
///
/// The solid and outline tables are independent and total over the same
/// color set. [`ButtonVariant::Link`] belongs to the solid table only and
/// has no outline counterpart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Filled button, `btn-{color}`.
    Solid(ThemeColor),
    /// Outlined button, `btn-outline-{color}`.
    Outline(ThemeColor),
    /// Button that renders like an inline link, `btn-link`.
    Link,
}

impl ButtonVariant {
    /// The single CSS class this variant resolves to.
    pub fn class_name(self) -> &'static str {
        match self {
            Self::Solid(color) => match color {
                ThemeColor::Danger => "btn-danger",
                ThemeColor::Dark => "btn-dark",
                ThemeColor::Info => "btn-info",
                ThemeColor::Light => "btn-light",
                ThemeColor::Primary => "btn-primary",
                ThemeColor::Secondary => "btn-secondary",
                ThemeColor::Success => "btn-success",
                ThemeColor::Warning => "btn-warning",
            },
            Self::Outline(color) => match color {
                ThemeColor::Danger => "btn-outline-danger",
                ThemeColor::Dark => "btn-outline-dark",
                ThemeColor::Info => "btn-outline-info",
                ThemeColor::Light => "btn-outline-light",
                ThemeColor::Primary => "btn-outline-primary",
                ThemeColor::Secondary => "btn-outline-secondary",
                ThemeColor::Success => "btn-outline-success",
                ThemeColor::Warning => "btn-outline-warning",
            },
            Self::Link => "btn-link",
        }
    }
}

/// Shape parameters for a button realized as an HTML `<button>`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PushButton {
    /// `type` attribute. Defaults to [`ButtonType::Button`].
    pub button_type: ButtonType,
    /// `formenctype` attribute.
    pub form_enc_type: Option<FormEncType>,
    /// `formmethod` attribute.
    pub form_method: Option<FormMethod>,
}

impl PushButton {
    /// Sets the `type` attribute.
    pub fn button_type(mut self, button_type: ButtonType) -> Self {
        self.button_type = button_type;
        self
    }

    /// Sets the `formenctype` attribute.
    pub fn form_enc_type(mut self, form_enc_type: FormEncType) -> Self {
        self.form_enc_type = Some(form_enc_type);
        self
    }

    /// Sets the `formmethod` attribute.
    pub fn form_method(mut self, form_method: FormMethod) -> Self {
        self.form_method = Some(form_method);
        self
    }
}

/// Shape parameters for a button realized as an anchor.
///
/// An absent `href` is legal and renders a styleable, non-navigating anchor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkButton {
    /// `href` attribute.
    pub href: Option<String>,
    /// `target` attribute.
    pub target: Option<String>,
}

impl LinkButton {
    /// Sets the `href` attribute.
    pub fn href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }

    /// Sets the `target` attribute.
    pub fn target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }
}

/// Shape parameters for a button realized as an `<input>` form control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputButton {
    /// `value` attribute, doubles as the visible label.
    pub value: String,
    /// `name` attribute.
    pub name: Option<String>,
    /// `title` attribute.
    pub title: Option<String>,
    /// `type` attribute. Defaults to [`InputButtonType::Button`].
    pub input_type: InputButtonType,
    /// `formenctype` attribute.
    pub form_enc_type: Option<FormEncType>,
    /// `formmethod` attribute.
    pub form_method: Option<FormMethod>,
}

impl InputButton {
    /// Creates input-button parameters with the required `value`.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            name: None,
            title: None,
            input_type: InputButtonType::Button,
            form_enc_type: None,
            form_method: None,
        }
    }

    /// Sets the `name` attribute.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the `title` attribute.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the `type` attribute.
    pub fn input_type(mut self, input_type: InputButtonType) -> Self {
        self.input_type = input_type;
        self
    }

    /// Sets the `formenctype` attribute.
    pub fn form_enc_type(mut self, form_enc_type: FormEncType) -> Self {
        self.form_enc_type = Some(form_enc_type);
        self
    }

    /// Sets the `formmethod` attribute.
    pub fn form_method(mut self, form_method: FormMethod) -> Self {
        self.form_method = Some(form_method);
        self
    }
}

/// Which underlying markup tag and attribute subset realize a button.
///
/// Exactly one shape is active per builder invocation; each alternative only
/// exposes its own fields, so contradictory combinations cannot be spelled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ButtonShape {
    /// `<button>`.
    Push(PushButton),
    /// `<a role="button">`.
    Link(LinkButton),
    /// `<input>`.
    Input(InputButton),
}

/// Style modifiers applied uniformly regardless of shape or variant.
///
/// The default value turns every modifier off and carries no extra classes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ButtonStyle {
    /// Renders the button in a pressed look.
    pub active: bool,
    /// Renders the button as disabled.
    pub disabled: bool,
    /// Disables text wrapping inside the button.
    pub nowrap: bool,
    /// Optional size token.
    pub size: Option<ButtonSize>,
    /// Stretches the button across its parent's width.
    pub block_sized: bool,
    /// Space separated free-form CSS classes.
    pub classes: Option<String>,
}

/// The flattened record handed to the rendering layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonProps {
    /// Resolved variant constant.
    pub variant: ButtonVariant,
    /// Element shape.
    pub shape: ButtonShape,
    /// Pressed look.
    pub active: bool,
    /// Disabled state.
    pub disabled: bool,
    /// Text wrapping disabled.
    pub nowrap: bool,
    /// Size token.
    pub size: Option<ButtonSize>,
    /// Block sizing.
    pub block_sized: bool,
    /// Deduplicated free-form class tokens.
    pub classes: BTreeSet<String>,
}

impl ButtonProps {
    /// Assembles the props record. Total and side-effect free.
    pub fn assemble(variant: ButtonVariant, shape: ButtonShape, style: ButtonStyle) -> Self {
        Self {
            variant,
            shape,
            active: style.active,
            disabled: style.disabled,
            nowrap: style.nowrap,
            size: style.size,
            block_sized: style.block_sized,
            classes: split_classes(style.classes.as_deref()),
        }
    }

    /// The full `class` attribute value for the rendered element.
    ///
    /// Anchors carry the `disabled` class since the attribute does not apply
    /// to them; the other shapes use the attribute instead.
    pub fn class_attribute(&self) -> String {
        let mut tokens = vec!["btn", self.variant.class_name()];
        if let Some(size) = self.size {
            tokens.push(size.token());
        }
        if self.block_sized {
            tokens.push("btn-block");
        }
        if self.nowrap {
            tokens.push(TEXT_NOWRAP);
        }
        if self.active {
            tokens.push("active");
        }
        if self.disabled && matches!(self.shape, ButtonShape::Link(_)) {
            tokens.push("disabled");
        }
        join_classes(tokens, &self.classes)
    }
}

fn button<V: IntoView>(
    variant: ButtonVariant,
    shape: ButtonShape,
    style: ButtonStyle,
    on_click: Option<Callback<MouseEvent>>,
    children: impl FnOnce() -> V + 'static,
) -> impl IntoView {
    let props = ButtonProps::assemble(variant, shape, style);
    let class = props.class_attribute();
    match props.shape {
        ButtonShape::Push(push) => view! {
            <button
                type=push.button_type.token()
                class=class
                formenctype=push.form_enc_type.map(FormEncType::token)
                formmethod=push.form_method.map(FormMethod::token)
                disabled=props.disabled
                on:click=move |ev| {
                    if let Some(on_click) = on_click.as_ref() {
                        on_click.call(ev);
                    }
                }
            >
                {children()}
            </button>
        }
        .into_view(),
        ButtonShape::Link(link) => view! {
            <a
                class=class
                role="button"
                href=link.href
                target=link.target
                aria-disabled=props.disabled.then_some("true")
                tabindex=props.disabled.then_some(-1)
            >
                {children()}
            </a>
        }
        .into_view(),
        ButtonShape::Input(input) => view! {
            <input
                type=input.input_type.token()
                class=class
                value=input.value
                name=input.name
                title=input.title
                formenctype=input.form_enc_type.map(FormEncType::token)
                formmethod=input.form_method.map(FormMethod::token)
                disabled=props.disabled
            />
        }
        .into_view(),
    }
}

/// Orientation of a button group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupAppearance {
    /// Buttons side by side, `btn-group`.
    Horizontal,
    /// Buttons stacked, `btn-group-vertical`.
    Vertical,
}

impl Default for GroupAppearance {
    fn default() -> Self {
        Self::Horizontal
    }
}

impl GroupAppearance {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Horizontal => "btn-group",
            Self::Vertical => "btn-group-vertical",
        }
    }
}

/// Toggle behaviour of a button group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupBehaviour {
    /// Multi-select toggle group.
    Checkbox,
    /// Single-select toggle group.
    Radio,
}

/// Size tokens for a whole button group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupSize {
    /// `btn-group-sm`.
    Sm,
    /// `btn-group-lg`.
    Lg,
}

impl GroupSize {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Sm => "btn-group-sm",
            Self::Lg => "btn-group-lg",
        }
    }
}

/// Configuration for [`button_group`], every field optional with defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ButtonGroupConfig {
    /// Orientation. Defaults to horizontal.
    pub appearance: GroupAppearance,
    /// Toggle behaviour, off by default.
    pub behaviour: Option<GroupBehaviour>,
    /// Group-wide size token.
    pub size: Option<GroupSize>,
    /// `aria-label` describing the group.
    pub label: Option<String>,
    /// Space separated free-form CSS classes.
    pub classes: Option<String>,
}

/// Assembled attribute record for a button group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonGroupProps {
    /// Orientation.
    pub appearance: GroupAppearance,
    /// Toggle behaviour.
    pub behaviour: Option<GroupBehaviour>,
    /// Size token.
    pub size: Option<GroupSize>,
    /// Group label.
    pub label: Option<String>,
    /// Deduplicated free-form class tokens.
    pub classes: BTreeSet<String>,
}

impl ButtonGroupProps {
    /// Assembles the props record from its configuration.
    pub fn assemble(group: ButtonGroupConfig) -> Self {
        Self {
            appearance: group.appearance,
            behaviour: group.behaviour,
            size: group.size,
            label: group.label,
            classes: split_classes(group.classes.as_deref()),
        }
    }

    /// The full `class` attribute value.
    pub fn class_attribute(&self) -> String {
        let mut tokens = vec![self.appearance.token()];
        if let Some(size) = self.size {
            tokens.push(size.token());
        }
        if self.behaviour.is_some() {
            tokens.push("btn-group-toggle");
        }
        join_classes(tokens, &self.classes)
    }

    /// The `aria-label` attribute, absent when never set.
    pub fn aria_label(&self) -> Option<&str> {
        self.label.as_deref()
    }
}

/// Creates a button group wrapping the buttons populated by `children`.
pub fn button_group<V: IntoView>(
    group: ButtonGroupConfig,
    children: impl FnOnce() -> V + 'static,
) -> impl IntoView {
    let props = ButtonGroupProps::assemble(group);
    let class = props.class_attribute();
    view! {
        <div
            class=class
            role="group"
            aria-label=props.label
            data-toggle=props.behaviour.is_some().then_some("buttons")
        >
            {children()}
        </div>
    }
}

/// Creates a button toolbar for combining sets of button groups.
pub fn button_toolbar<V: IntoView>(
    label: Option<String>,
    classes: Option<&str>,
    children: impl FnOnce() -> V + 'static,
) -> impl IntoView {
    let class = join_classes(["btn-toolbar"], &split_classes(classes));
    view! {
        <div class=class role="toolbar" aria-label=label>
            {children()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn assembly_round_trips_variant_and_shape() {
        let variant = ButtonVariant::Outline(ThemeColor::Warning);
        let shape = ButtonShape::Push(PushButton::default().button_type(ButtonType::Submit));
        let props = ButtonProps::assemble(variant, shape.clone(), ButtonStyle::default());
        assert_eq!(props.variant, variant);
        assert_eq!(props.shape, shape);
    }

    #[test]
    fn every_family_and_shape_pair_round_trips() {
        let variants = ThemeColor::ALL
            .into_iter()
            .flat_map(|color| [ButtonVariant::Solid(color), ButtonVariant::Outline(color)])
            .chain([ButtonVariant::Link]);
        for variant in variants {
            let shapes = [
                ButtonShape::Push(PushButton::default()),
                ButtonShape::Link(LinkButton::default()),
                ButtonShape::Input(InputButton::new("label")),
            ];
            for shape in shapes {
                let props = ButtonProps::assemble(variant, shape.clone(), ButtonStyle::default());
                assert_eq!(props.variant, variant);
                assert_eq!(props.shape, shape);
            }
        }
    }

    #[test]
    fn default_style_leaves_every_modifier_off() {
        let props = ButtonProps::assemble(
            ButtonVariant::Solid(ThemeColor::Primary),
            ButtonShape::Push(PushButton::default()),
            ButtonStyle::default(),
        );
        assert!(!props.active);
        assert!(!props.disabled);
        assert!(!props.nowrap);
        assert_eq!(props.size, None);
        assert!(!props.block_sized);
        assert!(props.classes.is_empty());
        assert_eq!(props.class_attribute(), "btn btn-primary");
    }

    #[test]
    fn solid_danger_input_scenario() {
        let props = ButtonProps::assemble(
            ButtonVariant::Solid(ThemeColor::Danger),
            ButtonShape::Input(InputButton::new("Go")),
            ButtonStyle::default(),
        );
        match &props.shape {
            ButtonShape::Input(input) => {
                assert_eq!(input.value, "Go");
                assert_eq!(input.name, None);
                assert_eq!(input.input_type, InputButtonType::Button);
            }
            other => panic!("expected input shape, got {other:?}"),
        }
        assert_eq!(props.variant, ButtonVariant::Solid(ThemeColor::Danger));
        assert!(props.classes.is_empty());
    }

    #[test]
    fn outline_primary_link_scenario() {
        let props = ButtonProps::assemble(
            ButtonVariant::Outline(ThemeColor::Primary),
            ButtonShape::Link(LinkButton::default().href("/x").target("_blank")),
            ButtonStyle::default(),
        );
        match &props.shape {
            ButtonShape::Link(link) => {
                assert_eq!(link.href.as_deref(), Some("/x"));
                assert_eq!(link.target.as_deref(), Some("_blank"));
            }
            other => panic!("expected link shape, got {other:?}"),
        }
        assert_eq!(props.variant, ButtonVariant::Outline(ThemeColor::Primary));
    }

    #[test]
    fn class_attribute_orders_modifiers_after_variant() {
        let props = ButtonProps::assemble(
            ButtonVariant::Outline(ThemeColor::Primary),
            ButtonShape::Push(PushButton::default()),
            ButtonStyle {
                active: true,
                nowrap: true,
                size: Some(ButtonSize::Sm),
                block_sized: true,
                classes: Some("shadow shadow".to_string()),
                ..Default::default()
            },
        );
        assert_eq!(
            props.class_attribute(),
            "btn btn-outline-primary btn-sm btn-block text-nowrap active shadow"
        );
    }

    #[test]
    fn disabled_class_only_applies_to_anchors() {
        let style = ButtonStyle {
            disabled: true,
            ..Default::default()
        };
        let anchor = ButtonProps::assemble(
            ButtonVariant::Link,
            ButtonShape::Link(LinkButton::default()),
            style.clone(),
        );
        assert_eq!(anchor.class_attribute(), "btn btn-link disabled");

        let push = ButtonProps::assemble(
            ButtonVariant::Solid(ThemeColor::Secondary),
            ButtonShape::Push(PushButton::default()),
            style,
        );
        assert_eq!(push.class_attribute(), "btn btn-secondary");
    }

    #[test]
    fn solid_and_outline_tables_are_disjoint_and_total() {
        for color in ThemeColor::ALL {
            let solid = ButtonVariant::Solid(color).class_name();
            let outline = ButtonVariant::Outline(color).class_name();
            assert_ne!(solid, outline);
            assert_eq!(solid, format!("btn-{}", color.token()));
            assert_eq!(outline, format!("btn-outline-{}", color.token()));
        }
        // The link variant has no outline counterpart.
        assert_eq!(ButtonVariant::Link.class_name(), "btn-link");
    }

    #[test]
    fn group_classes_cover_orientation_size_and_toggle() {
        let props = ButtonGroupProps::assemble(ButtonGroupConfig {
            appearance: GroupAppearance::Vertical,
            behaviour: Some(GroupBehaviour::Radio),
            size: Some(GroupSize::Lg),
            ..Default::default()
        });
        assert_eq!(
            props.class_attribute(),
            "btn-group-vertical btn-group-lg btn-group-toggle"
        );
    }

    #[test]
    fn group_label_is_absent_until_set() {
        let unset = ButtonGroupProps::assemble(ButtonGroupConfig::default());
        assert_eq!(unset.aria_label(), None);

        let set = ButtonGroupProps::assemble(ButtonGroupConfig {
            label: Some("Toolbar actions".to_string()),
            ..Default::default()
        });
        assert_eq!(set.aria_label(), Some("Toolbar actions"));
    }
}
