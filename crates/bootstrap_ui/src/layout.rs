//! Grid layout builders: containers, rows, and the twelve-column system.

use std::collections::BTreeSet;

use leptos::*;
use thiserror::Error;

use crate::helpers::{join_classes, split_classes};

/// Error raised when a column span falls outside the grid.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColumnWidthError {
    /// The grid has twelve columns; spans outside 1..=12 cannot exist.
    #[error("column span must be between 1 and 12, got {0}")]
    OutOfRange(u8),
}

/// How wide a column renders at one breakpoint.
///
/// Numeric spans are validated on construction, so a held value is always a
/// legal grid width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnWidth(Width);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Width {
    Equal,
    Auto,
    Span(u8),
}

impl ColumnWidth {
    /// Equal share of the remaining row width, a bare `col` class.
    pub const EQUAL: Self = Self(Width::Equal);
    /// Sized to the column's content, `col-auto`.
    pub const AUTO: Self = Self(Width::Auto);

    /// A fixed span of grid columns, 1 through 12.
    pub fn columns(span: u8) -> Result<Self, ColumnWidthError> {
        if (1..=12).contains(&span) {
            Ok(Self(Width::Span(span)))
        } else {
            Err(ColumnWidthError::OutOfRange(span))
        }
    }

    fn suffix(self) -> Option<String> {
        match self.0 {
            Width::Equal => None,
            Width::Auto => Some("auto".to_string()),
            Width::Span(span) => Some(span.to_string()),
        }
    }
}

/// Responsive breakpoints above the default extra-small tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Breakpoint {
    /// ≥576px.
    Sm,
    /// ≥768px.
    Md,
    /// ≥992px.
    Lg,
    /// ≥1200px.
    Xl,
}

impl Breakpoint {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Xl => "xl",
        }
    }
}

/// Per-breakpoint widths for one column, all tiers optional.
///
/// A spec with no tier set renders the bare `col` class.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColumnSpec {
    /// Width from the extra-small tier up.
    pub col: Option<ColumnWidth>,
    /// Width from `sm` up.
    pub sm: Option<ColumnWidth>,
    /// Width from `md` up.
    pub md: Option<ColumnWidth>,
    /// Width from `lg` up.
    pub lg: Option<ColumnWidth>,
    /// Width from `xl` up.
    pub xl: Option<ColumnWidth>,
}

impl ColumnSpec {
    /// The grid class tokens this spec resolves to.
    pub fn class_tokens(&self) -> Vec<String> {
        let tiers = [
            (None, self.col),
            (Some(Breakpoint::Sm), self.sm),
            (Some(Breakpoint::Md), self.md),
            (Some(Breakpoint::Lg), self.lg),
            (Some(Breakpoint::Xl), self.xl),
        ];
        let mut tokens = Vec::new();
        for (breakpoint, width) in tiers {
            let Some(width) = width else { continue };
            let mut token = "col".to_string();
            if let Some(breakpoint) = breakpoint {
                token.push('-');
                token.push_str(breakpoint.token());
            }
            if let Some(suffix) = width.suffix() {
                token.push('-');
                token.push_str(&suffix);
            }
            tokens.push(token);
        }
        if tokens.is_empty() {
            tokens.push("col".to_string());
        }
        tokens
    }
}

/// Creates a fixed-width or fluid container.
pub fn container<V: IntoView>(
    fluid: bool,
    classes: Option<&str>,
    children: impl FnOnce() -> V + 'static,
) -> impl IntoView {
    let base = if fluid { "container-fluid" } else { "container" };
    let class = join_classes([base], &split_classes(classes));
    view! { <div class=class>{children()}</div> }
}

/// Creates a grid row.
pub fn row<V: IntoView>(
    classes: Option<&str>,
    children: impl FnOnce() -> V + 'static,
) -> impl IntoView {
    let class = join_classes(["row"], &split_classes(classes));
    view! { <div class=class>{children()}</div> }
}

/// Creates a grid column sized by `spec` at each breakpoint.
pub fn col<V: IntoView>(
    spec: ColumnSpec,
    classes: Option<&str>,
    children: impl FnOnce() -> V + 'static,
) -> impl IntoView {
    let tokens = spec.class_tokens();
    let class = join_classes(
        tokens.iter().map(String::as_str),
        &split_classes(classes),
    );
    view! { <div class=class>{children()}</div> }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn spans_outside_the_grid_are_rejected() {
        assert_eq!(
            ColumnWidth::columns(0),
            Err(ColumnWidthError::OutOfRange(0))
        );
        assert_eq!(
            ColumnWidth::columns(13),
            Err(ColumnWidthError::OutOfRange(13))
        );
        assert!(ColumnWidth::columns(1).is_ok());
        assert!(ColumnWidth::columns(12).is_ok());
    }

    #[test]
    fn empty_spec_renders_the_bare_column_class() {
        assert_eq!(ColumnSpec::default().class_tokens(), vec!["col"]);
    }

    #[test]
    fn tokens_follow_breakpoint_order() {
        let spec = ColumnSpec {
            col: Some(ColumnWidth::columns(12).unwrap()),
            md: Some(ColumnWidth::columns(6).unwrap()),
            lg: Some(ColumnWidth::AUTO),
            ..Default::default()
        };
        assert_eq!(spec.class_tokens(), vec!["col-12", "col-md-6", "col-lg-auto"]);
    }

    #[test]
    fn equal_width_tiers_have_no_suffix() {
        let spec = ColumnSpec {
            sm: Some(ColumnWidth::EQUAL),
            ..Default::default()
        };
        assert_eq!(spec.class_tokens(), vec!["col-sm"]);
    }
}
