//! The solid button family.
//!
//! Each color resolves to its filled `btn-{color}` variant constant. This
//! family also carries the `link` variant, which renders a button that looks
//! like an inline link and exists only on the solid side.

use leptos::ev::MouseEvent;
use leptos::*;

use super::{button, ButtonShape, ButtonStyle, ButtonVariant, InputButton, LinkButton, PushButton};
use crate::theme::ThemeColor;

/// Creates a danger button rendered as an HTML `<button>`.
pub fn danger<V: IntoView>(
    form: PushButton,
    style: ButtonStyle,
    on_click: Option<Callback<MouseEvent>>,
    children: impl FnOnce() -> V + 'static,
) -> impl IntoView {
    button(
        ButtonVariant::Solid(ThemeColor::Danger),
        ButtonShape::Push(form),
        style,
        on_click,
        children,
    )
}

/// Creates a danger button rendered as an anchor styled as a button.
pub fn danger_link<V: IntoView>(
    link: LinkButton,
    style: ButtonStyle,
    children: impl FnOnce() -> V + 'static,
) -> impl IntoView {
    button(
        ButtonVariant::Solid(ThemeColor::Danger),
        ButtonShape::Link(link),
        style,
        None,
        children,
    )
}

/// Creates a danger button rendered as an `<input>` form control.
pub fn danger_input(input: InputButton, style: ButtonStyle) -> impl IntoView {
    button(
        ButtonVariant::Solid(ThemeColor::Danger),
        ButtonShape::Input(input),
        style,
        None,
        || (),
    )
}

/// Creates a dark button rendered as an HTML `<button>`.
pub fn dark<V: IntoView>(
    form: PushButton,
    style: ButtonStyle,
    on_click: Option<Callback<MouseEvent>>,
    children: impl FnOnce() -> V + 'static,
) -> impl IntoView {
    button(
        ButtonVariant::Solid(ThemeColor::Dark),
        ButtonShape::Push(form),
        style,
        on_click,
        children,
    )
}

/// Creates a dark button rendered as an anchor styled as a button.
pub fn dark_link<V: IntoView>(
    link: LinkButton,
    style: ButtonStyle,
    children: impl FnOnce() -> V + 'static,
) -> impl IntoView {
    button(
        ButtonVariant::Solid(ThemeColor::Dark),
        ButtonShape::Link(link),
        style,
        None,
        children,
    )
}

/// Creates a dark button rendered as an `<input>` form control.
pub fn dark_input(input: InputButton, style: ButtonStyle) -> impl IntoView {
    button(
        ButtonVariant::Solid(ThemeColor::Dark),
        ButtonShape::Input(input),
        style,
        None,
        || (),
    )
}

/// Creates an info button rendered as an HTML `<button>`.
pub fn info<V: IntoView>(
    form: PushButton,
    style: ButtonStyle,
    on_click: Option<Callback<MouseEvent>>,
    children: impl FnOnce() -> V + 'static,
) -> impl IntoView {
    button(
        ButtonVariant::Solid(ThemeColor::Info),
        ButtonShape::Push(form),
        style,
        on_click,
        children,
    )
}

/// Creates an info button rendered as an anchor styled as a button.
pub fn info_link<V: IntoView>(
    link: LinkButton,
    style: ButtonStyle,
    children: impl FnOnce() -> V + 'static,
) -> impl IntoView {
    button(
        ButtonVariant::Solid(ThemeColor::Info),
        ButtonShape::Link(link),
        style,
        None,
        children,
    )
}

/// Creates an info button rendered as an `<input>` form control.
pub fn info_input(input: InputButton, style: ButtonStyle) -> impl IntoView {
    button(
        ButtonVariant::Solid(ThemeColor::Info),
        ButtonShape::Input(input),
        style,
        None,
        || (),
    )
}

/// Creates a light button rendered as an HTML `<button>`.
pub fn light<V: IntoView>(
    form: PushButton,
    style: ButtonStyle,
    on_click: Option<Callback<MouseEvent>>,
    children: impl FnOnce() -> V + 'static,
) -> impl IntoView {
    button(
        ButtonVariant::Solid(ThemeColor::Light),
        ButtonShape::Push(form),
        style,
        on_click,
        children,
    )
}

/// Creates a light button rendered as an anchor styled as a button.
pub fn light_link<V: IntoView>(
    link: LinkButton,
    style: ButtonStyle,
    children: impl FnOnce() -> V + 'static,
) -> impl IntoView {
    button(
        ButtonVariant::Solid(ThemeColor::Light),
        ButtonShape::Link(link),
        style,
        None,
        children,
    )
}

/// Creates a light button rendered as an `<input>` form control.
pub fn light_input(input: InputButton, style: ButtonStyle) -> impl IntoView {
    button(
        ButtonVariant::Solid(ThemeColor::Light),
        ButtonShape::Input(input),
        style,
        None,
        || (),
    )
}

/// Creates a primary button rendered as an HTML `<button>`.
pub fn primary<V: IntoView>(
    form: PushButton,
    style: ButtonStyle,
    on_click: Option<Callback<MouseEvent>>,
    children: impl FnOnce() -> V + 'static,
) -> impl IntoView {
    button(
        ButtonVariant::Solid(ThemeColor::Primary),
        ButtonShape::Push(form),
        style,
        on_click,
        children,
    )
}

/// Creates a primary button rendered as an anchor styled as a button.
pub fn primary_link<V: IntoView>(
    link: LinkButton,
    style: ButtonStyle,
    children: impl FnOnce() -> V + 'static,
) -> impl IntoView {
    button(
        ButtonVariant::Solid(ThemeColor::Primary),
        ButtonShape::Link(link),
        style,
        None,
        children,
    )
}

/// Creates a primary button rendered as an `<input>` form control.
pub fn primary_input(input: InputButton, style: ButtonStyle) -> impl IntoView {
    button(
        ButtonVariant::Solid(ThemeColor::Primary),
        ButtonShape::Input(input),
        style,
        None,
        || (),
    )
}

/// Creates a secondary button rendered as an HTML `<button>`.
pub fn secondary<V: IntoView>(
    form: PushButton,
    style: ButtonStyle,
    on_click: Option<Callback<MouseEvent>>,
    children: impl FnOnce() -> V + 'static,
) -> impl IntoView {
    button(
        ButtonVariant::Solid(ThemeColor::Secondary),
        ButtonShape::Push(form),
        style,
        on_click,
        children,
    )
}

/// Creates a secondary button rendered as an anchor styled as a button.
pub fn secondary_link<V: IntoView>(
    link: LinkButton,
    style: ButtonStyle,
    children: impl FnOnce() -> V + 'static,
) -> impl IntoView {
    button(
        ButtonVariant::Solid(ThemeColor::Secondary),
        ButtonShape::Link(link),
        style,
        None,
        children,
    )
}

/// Creates a secondary button rendered as an `<input>` form control.
pub fn secondary_input(input: InputButton, style: ButtonStyle) -> impl IntoView {
    button(
        ButtonVariant::Solid(ThemeColor::Secondary),
        ButtonShape::Input(input),
        style,
        None,
        || (),
    )
}

/// Creates a success button rendered as an HTML `<button>`.
pub fn success<V: IntoView>(
    form: PushButton,
    style: ButtonStyle,
    on_click: Option<Callback<MouseEvent>>,
    children: impl FnOnce() -> V + 'static,
) -> impl IntoView {
    button(
        ButtonVariant::Solid(ThemeColor::Success),
        ButtonShape::Push(form),
        style,
        on_click,
        children,
    )
}

/// Creates a success button rendered as an anchor styled as a button.
pub fn success_link<V: IntoView>(
    link: LinkButton,
    style: ButtonStyle,
    children: impl FnOnce() -> V + 'static,
) -> impl IntoView {
    button(
        ButtonVariant::Solid(ThemeColor::Success),
        ButtonShape::Link(link),
        style,
        None,
        children,
    )
}

/// Creates a success button rendered as an `<input>` form control.
pub fn success_input(input: InputButton, style: ButtonStyle) -> impl IntoView {
    button(
        ButtonVariant::Solid(ThemeColor::Success),
        ButtonShape::Input(input),
        style,
        None,
        || (),
    )
}

/// Creates a warning button rendered as an HTML `<button>`.
pub fn warning<V: IntoView>(
    form: PushButton,
    style: ButtonStyle,
    on_click: Option<Callback<MouseEvent>>,
    children: impl FnOnce() -> V + 'static,
) -> impl IntoView {
    button(
        ButtonVariant::Solid(ThemeColor::Warning),
        ButtonShape::Push(form),
        style,
        on_click,
        children,
    )
}

/// Creates a warning button rendered as an anchor styled as a button.
pub fn warning_link<V: IntoView>(
    link: LinkButton,
    style: ButtonStyle,
    children: impl FnOnce() -> V + 'static,
) -> impl IntoView {
    button(
        ButtonVariant::Solid(ThemeColor::Warning),
        ButtonShape::Link(link),
        style,
        None,
        children,
    )
}

/// Creates a warning button rendered as an `<input>` form control.
pub fn warning_input(input: InputButton, style: ButtonStyle) -> impl IntoView {
    button(
        ButtonVariant::Solid(ThemeColor::Warning),
        ButtonShape::Input(input),
        style,
        None,
        || (),
    )
}

/// Creates a link-styled button rendered as an HTML `<button>`.
pub fn link<V: IntoView>(
    form: PushButton,
    style: ButtonStyle,
    on_click: Option<Callback<MouseEvent>>,
    children: impl FnOnce() -> V + 'static,
) -> impl IntoView {
    button(
        ButtonVariant::Link,
        ButtonShape::Push(form),
        style,
        on_click,
        children,
    )
}

/// Creates a link-styled button rendered as an anchor styled as a button.
pub fn link_link<V: IntoView>(
    link: LinkButton,
    style: ButtonStyle,
    children: impl FnOnce() -> V + 'static,
) -> impl IntoView {
    button(
        ButtonVariant::Link,
        ButtonShape::Link(link),
        style,
        None,
        children,
    )
}

/// Creates a link-styled button rendered as an `<input>` form control.
pub fn link_input(input: InputButton, style: ButtonStyle) -> impl IntoView {
    button(
        ButtonVariant::Link,
        ButtonShape::Input(input),
        style,
        None,
        || (),
    )
}
