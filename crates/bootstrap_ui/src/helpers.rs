//! Class-string utilities shared by every component family.

use std::collections::BTreeSet;

/// Splits a space separated list of CSS classes into a deduplicated token set.
///
/// Empty tokens are dropped and an absent input yields an empty set, so the
/// output is always a usable set and never an absent value.
pub fn split_classes(classes: Option<&str>) -> BTreeSet<String> {
    classes
        .map(|classes| {
            classes
                .split_whitespace()
                .map(str::to_owned)
                .collect::<BTreeSet<_>>()
        })
        .unwrap_or_default()
}

/// Appends a class token to an optional class string.
pub fn append_class(classes: Option<&str>, class_name: &str) -> String {
    match classes {
        Some(classes) => format!("{classes} {class_name}"),
        None => class_name.to_string(),
    }
}

pub(crate) fn join_classes<'a>(
    tokens: impl IntoIterator<Item = &'a str>,
    extra: &BTreeSet<String>,
) -> String {
    let mut out = tokens.into_iter().map(str::to_owned).collect::<Vec<_>>();
    out.extend(extra.iter().cloned());
    out.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn set(tokens: &[&str]) -> BTreeSet<String> {
        tokens.iter().map(|token| token.to_string()).collect()
    }

    #[test]
    fn split_classes_deduplicates_and_ignores_whitespace() {
        assert_eq!(split_classes(Some("  a  a b ")), set(&["a", "b"]));
    }

    #[test]
    fn split_classes_of_absent_input_is_empty() {
        assert_eq!(split_classes(None), BTreeSet::new());
        assert_eq!(split_classes(Some("   ")), BTreeSet::new());
    }

    #[test]
    fn split_classes_is_idempotent() {
        let first = split_classes(Some("btn  btn-lg btn shadow"));
        let rejoined = first.iter().cloned().collect::<Vec<_>>().join(" ");
        assert_eq!(split_classes(Some(&rejoined)), first);
    }

    #[test]
    fn append_class_handles_absent_base() {
        assert_eq!(append_class(None, "active"), "active");
        assert_eq!(append_class(Some("btn"), "active"), "btn active");
    }

    #[test]
    fn join_classes_orders_fixed_tokens_before_free_form() {
        assert_eq!(
            join_classes(["btn", "btn-danger"], &set(&["shadow", "m-1"])),
            "btn btn-danger m-1 shadow"
        );
    }
}
