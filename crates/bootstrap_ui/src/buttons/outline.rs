//! The outline button family.
//!
//! Each color resolves to its `btn-outline-{color}` variant constant; the
//! three functions per color fix the element shape.

use leptos::ev::MouseEvent;
use leptos::*;

use super::{button, ButtonShape, ButtonStyle, ButtonVariant, InputButton, LinkButton, PushButton};
use crate::theme::ThemeColor;

/// Creates a danger outline button rendered as an HTML `<button>`.
pub fn danger<V: IntoView>(
    form: PushButton,
    style: ButtonStyle,
    on_click: Option<Callback<MouseEvent>>,
    children: impl FnOnce() -> V + 'static,
) -> impl IntoView {
    button(
        ButtonVariant::Outline(ThemeColor::Danger),
        ButtonShape::Push(form),
        style,
        on_click,
        children,
    )
}

/// Creates a danger outline button rendered as an anchor styled as a button.
pub fn danger_link<V: IntoView>(
    link: LinkButton,
    style: ButtonStyle,
    children: impl FnOnce() -> V + 'static,
) -> impl IntoView {
    button(
        ButtonVariant::Outline(ThemeColor::Danger),
        ButtonShape::Link(link),
        style,
        None,
        children,
    )
}

/// Creates a danger outline button rendered as an `<input>` form control.
pub fn danger_input(input: InputButton, style: ButtonStyle) -> impl IntoView {
    button(
        ButtonVariant::Outline(ThemeColor::Danger),
        ButtonShape::Input(input),
        style,
        None,
        || (),
    )
}

/// Creates a dark outline button rendered as an HTML `<button>`.
pub fn dark<V: IntoView>(
    form: PushButton,
    style: ButtonStyle,
    on_click: Option<Callback<MouseEvent>>,
    children: impl FnOnce() -> V + 'static,
) -> impl IntoView {
    button(
        ButtonVariant::Outline(ThemeColor::Dark),
        ButtonShape::Push(form),
        style,
        on_click,
        children,
    )
}

/// Creates a dark outline button rendered as an anchor styled as a button.
pub fn dark_link<V: IntoView>(
    link: LinkButton,
    style: ButtonStyle,
    children: impl FnOnce() -> V + 'static,
) -> impl IntoView {
    button(
        ButtonVariant::Outline(ThemeColor::Dark),
        ButtonShape::Link(link),
        style,
        None,
        children,
    )
}

/// Creates a dark outline button rendered as an `<input>` form control.
pub fn dark_input(input: InputButton, style: ButtonStyle) -> impl IntoView {
    button(
        ButtonVariant::Outline(ThemeColor::Dark),
        ButtonShape::Input(input),
        style,
        None,
        || (),
    )
}

/// Creates an info outline button rendered as an HTML `<button>`.
pub fn info<V: IntoView>(
    form: PushButton,
    style: ButtonStyle,
    on_click: Option<Callback<MouseEvent>>,
    children: impl FnOnce() -> V + 'static,
) -> impl IntoView {
    button(
        ButtonVariant::Outline(ThemeColor::Info),
        ButtonShape::Push(form),
        style,
        on_click,
        children,
    )
}

/// Creates an info outline button rendered as an anchor styled as a button.
pub fn info_link<V: IntoView>(
    link: LinkButton,
    style: ButtonStyle,
    children: impl FnOnce() -> V + 'static,
) -> impl IntoView {
    button(
        ButtonVariant::Outline(ThemeColor::Info),
        ButtonShape::Link(link),
        style,
        None,
        children,
    )
}

/// Creates an info outline button rendered as an `<input>` form control.
pub fn info_input(input: InputButton, style: ButtonStyle) -> impl IntoView {
    button(
        ButtonVariant::Outline(ThemeColor::Info),
        ButtonShape::Input(input),
        style,
        None,
        || (),
    )
}

/// Creates a light outline button rendered as an HTML `<button>`.
pub fn light<V: IntoView>(
    form: PushButton,
    style: ButtonStyle,
    on_click: Option<Callback<MouseEvent>>,
    children: impl FnOnce() -> V + 'static,
) -> impl IntoView {
    button(
        ButtonVariant::Outline(ThemeColor::Light),
        ButtonShape::Push(form),
        style,
        on_click,
        children,
    )
}

/// Creates a light outline button rendered as an anchor styled as a button.
pub fn light_link<V: IntoView>(
    link: LinkButton,
    style: ButtonStyle,
    children: impl FnOnce() -> V + 'static,
) -> impl IntoView {
    button(
        ButtonVariant::Outline(ThemeColor::Light),
        ButtonShape::Link(link),
        style,
        None,
        children,
    )
}

/// Creates a light outline button rendered as an `<input>` form control.
pub fn light_input(input: InputButton, style: ButtonStyle) -> impl IntoView {
    button(
        ButtonVariant::Outline(ThemeColor::Light),
        ButtonShape::Input(input),
        style,
        None,
        || (),
    )
}

/// Creates a primary outline button rendered as an HTML `<button>`.
pub fn primary<V: IntoView>(
    form: PushButton,
    style: ButtonStyle,
    on_click: Option<Callback<MouseEvent>>,
    children: impl FnOnce() -> V + 'static,
) -> impl IntoView {
    button(
        ButtonVariant::Outline(ThemeColor::Primary),
        ButtonShape::Push(form),
        style,
        on_click,
        children,
    )
}

/// Creates a primary outline button rendered as an anchor styled as a button.
pub fn primary_link<V: IntoView>(
    link: LinkButton,
    style: ButtonStyle,
    children: impl FnOnce() -> V + 'static,
) -> impl IntoView {
    button(
        ButtonVariant::Outline(ThemeColor::Primary),
        ButtonShape::Link(link),
        style,
        None,
        children,
    )
}

/// Creates a primary outline button rendered as an `<input>` form control.
pub fn primary_input(input: InputButton, style: ButtonStyle) -> impl IntoView {
    button(
        ButtonVariant::Outline(ThemeColor::Primary),
        ButtonShape::Input(input),
        style,
        None,
        || (),
    )
}

/// Creates a secondary outline button rendered as an HTML `<button>`.
pub fn secondary<V: IntoView>(
    form: PushButton,
    style: ButtonStyle,
    on_click: Option<Callback<MouseEvent>>,
    children: impl FnOnce() -> V + 'static,
) -> impl IntoView {
    button(
        ButtonVariant::Outline(ThemeColor::Secondary),
        ButtonShape::Push(form),
        style,
        on_click,
        children,
    )
}

/// Creates a secondary outline button rendered as an anchor styled as a button.
pub fn secondary_link<V: IntoView>(
    link: LinkButton,
    style: ButtonStyle,
    children: impl FnOnce() -> V + 'static,
) -> impl IntoView {
    button(
        ButtonVariant::Outline(ThemeColor::Secondary),
        ButtonShape::Link(link),
        style,
        None,
        children,
    )
}

/// Creates a secondary outline button rendered as an `<input>` form control.
pub fn secondary_input(input: InputButton, style: ButtonStyle) -> impl IntoView {
    button(
        ButtonVariant::Outline(ThemeColor::Secondary),
        ButtonShape::Input(input),
        style,
        None,
        || (),
    )
}

/// Creates a success outline button rendered as an HTML `<button>`.
pub fn success<V: IntoView>(
    form: PushButton,
    style: ButtonStyle,
    on_click: Option<Callback<MouseEvent>>,
    children: impl FnOnce() -> V + 'static,
) -> impl IntoView {
    button(
        ButtonVariant::Outline(ThemeColor::Success),
        ButtonShape::Push(form),
        style,
        on_click,
        children,
    )
}

/// Creates a success outline button rendered as an anchor styled as a button.
pub fn success_link<V: IntoView>(
    link: LinkButton,
    style: ButtonStyle,
    children: impl FnOnce() -> V + 'static,
) -> impl IntoView {
    button(
        ButtonVariant::Outline(ThemeColor::Success),
        ButtonShape::Link(link),
        style,
        None,
        children,
    )
}

/// Creates a success outline button rendered as an `<input>` form control.
pub fn success_input(input: InputButton, style: ButtonStyle) -> impl IntoView {
    button(
        ButtonVariant::Outline(ThemeColor::Success),
        ButtonShape::Input(input),
        style,
        None,
        || (),
    )
}

/// Creates a warning outline button rendered as an HTML `<button>`.
pub fn warning<V: IntoView>(
    form: PushButton,
    style: ButtonStyle,
    on_click: Option<Callback<MouseEvent>>,
    children: impl FnOnce() -> V + 'static,
) -> impl IntoView {
    button(
        ButtonVariant::Outline(ThemeColor::Warning),
        ButtonShape::Push(form),
        style,
        on_click,
        children,
    )
}

/// Creates a warning outline button rendered as an anchor styled as a button.
pub fn warning_link<V: IntoView>(
    link: LinkButton,
    style: ButtonStyle,
    children: impl FnOnce() -> V + 'static,
) -> impl IntoView {
    button(
        ButtonVariant::Outline(ThemeColor::Warning),
        ButtonShape::Link(link),
        style,
        None,
        children,
    )
}

/// Creates a warning outline button rendered as an `<input>` form control.
pub fn warning_input(input: InputButton, style: ButtonStyle) -> impl IntoView {
    button(
        ButtonVariant::Outline(ThemeColor::Warning),
        ButtonShape::Input(input),
        style,
        None,
        || (),
    )
}
