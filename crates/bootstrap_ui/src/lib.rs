//! Typed Bootstrap 4 component builders for Leptos.
//!
//! The crate maps fluent, keyword-style builder calls onto Leptos element
//! trees: each entry point resolves a closed variant constant, fixes an
//! element shape, projects both into a flat props record, and hands that
//! record to the view layer together with a caller-supplied child scope.
//! Styling stays in Bootstrap's CSS; this crate only emits the class
//! vocabulary and attributes.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod alerts;
pub mod buttons;
pub mod class_names;
pub mod content;
mod helpers;
pub mod layout;
pub mod navs;
mod theme;

pub use helpers::{append_class, split_classes};
pub use theme::ThemeColor;

/// Convenience imports for crates consuming the builder set.
pub mod prelude {
    pub use crate::alerts::{self, alert_heading, alert_link, AlertProps, AlertStyle};
    pub use crate::buttons::{
        self, button_group, button_toolbar, ButtonGroupConfig, ButtonGroupProps, ButtonProps,
        ButtonShape, ButtonSize, ButtonStyle, ButtonType, ButtonVariant, FormEncType, FormMethod,
        GroupAppearance, GroupBehaviour, GroupSize, InputButton, InputButtonType, LinkButton,
        PushButton,
    };
    pub use crate::content::{blockquote, blockquote_footer, lead};
    pub use crate::layout::{
        col, container, row, Breakpoint, ColumnSpec, ColumnWidth, ColumnWidthError,
    };
    pub use crate::navs::{
        self, nav_item, nav_link, ActiveLinkPredicate, Appearance, NavConfig, NavLinkConfig,
        NavLinkProps, NavProps, WidthHandling,
    };
    pub use crate::theme::ThemeColor;
    pub use crate::{append_class, split_classes};
}
