//! Conditional class-name resolution shared by every component.
//!
//! Components layer their styling as ordered [`ClassFragment`] values (base
//! classes, token lookups, state flags, caller overrides) and merge them with
//! [`resolve_classes`] or the [`classes!`](crate::classes!) macro. The merge
//! splits multi-token strings, drops absent fragments, and deduplicates with
//! last-occurrence-wins so a later fragment can override an earlier one
//! without emitting two copies of the same token.

use std::collections::HashSet;

/// Nesting depth beyond which groups are ignored rather than recursed into.
const MAX_GROUP_DEPTH: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq)]
/// One conditional piece of class-name input to [`resolve_classes`].
pub enum ClassFragment {
    /// Nothing; skipped during resolution.
    None,
    /// A borrowed class string, possibly holding several whitespace-separated
    /// tokens.
    Str(&'static str),
    /// An owned class string.
    Owned(String),
    /// An ordered group of fragments, flattened in place.
    Group(Vec<ClassFragment>),
}

impl ClassFragment {
    /// Wraps an ordered set of fragments so they flatten as one unit.
    pub fn group<I, T>(fragments: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<ClassFragment>,
    {
        Self::Group(fragments.into_iter().map(Into::into).collect())
    }
}

impl Default for ClassFragment {
    fn default() -> Self {
        Self::None
    }
}

impl From<&'static str> for ClassFragment {
    fn from(text: &'static str) -> Self {
        Self::Str(text)
    }
}

impl From<String> for ClassFragment {
    fn from(text: String) -> Self {
        Self::Owned(text)
    }
}

impl<T: Into<ClassFragment>> From<Option<T>> for ClassFragment {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => value.into(),
            None => Self::None,
        }
    }
}

impl From<Vec<ClassFragment>> for ClassFragment {
    fn from(group: Vec<ClassFragment>) -> Self {
        Self::Group(group)
    }
}

/// Merges ordered class fragments into one deduplicated class string.
///
/// Fragments flatten in order; each whitespace-separated token is kept
/// exactly once, at the position of its last occurrence, so later fragments
/// win the cascade-relevant slot. Absent fragments and empty strings are
/// skipped. The result joins the surviving tokens with single spaces.
///
/// Resolution is pure: same input order, same output, no shared state.
pub fn resolve_classes<I>(fragments: I) -> String
where
    I: IntoIterator<Item = ClassFragment>,
{
    let mut tokens = Vec::new();
    for fragment in fragments {
        flatten_into(fragment, 0, &mut tokens);
    }

    let mut seen = HashSet::with_capacity(tokens.len());
    let mut kept = Vec::with_capacity(tokens.len());
    for token in tokens.into_iter().rev() {
        if seen.insert(token.clone()) {
            kept.push(token);
        }
    }
    kept.reverse();
    kept.join(" ")
}

fn flatten_into(fragment: ClassFragment, depth: usize, tokens: &mut Vec<String>) {
    if depth > MAX_GROUP_DEPTH {
        return;
    }
    match fragment {
        ClassFragment::None => {}
        ClassFragment::Str(text) => push_tokens(text, tokens),
        ClassFragment::Owned(text) => push_tokens(&text, tokens),
        ClassFragment::Group(group) => {
            for child in group {
                flatten_into(child, depth + 1, tokens);
            }
        }
    }
}

fn push_tokens(text: &str, tokens: &mut Vec<String>) {
    for token in text.split_whitespace() {
        tokens.push(token.to_string());
    }
}

/// Merges a variadic list of conditional class fragments.
///
/// Each argument converts through [`ClassFragment::from`], so call sites can
/// mix borrowed and owned strings, `Option`s (including `bool::then_some`
/// guards), and [`ClassFragment::group`] nesting:
///
/// ```
/// use clinic_ui::classes;
///
/// let emergency = true;
/// let merged = classes!["btn", emergency.then_some("btn-emergency"), "btn"];
/// assert_eq!(merged, "btn-emergency btn");
/// ```
#[macro_export]
macro_rules! classes {
    () => {
        ::std::string::String::new()
    };
    ($($fragment:expr),+ $(,)?) => {
        $crate::classes::resolve_classes([
            $($crate::classes::ClassFragment::from($fragment)),+
        ])
    };
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn resolves_fragments_in_order() {
        let cases = [
            (vec![], ""),
            (vec![ClassFragment::from("btn")], "btn"),
            (
                vec![ClassFragment::from("flex"), ClassFragment::from("gap-2")],
                "flex gap-2",
            ),
            (
                vec![
                    ClassFragment::from("flex items-center"),
                    ClassFragment::from("justify-between"),
                ],
                "flex items-center justify-between",
            ),
        ];
        for (input, expected) in cases {
            assert_eq!(resolve_classes(input.clone()), expected, "input={input:?}");
        }
    }

    #[test]
    fn skips_absent_fragments() {
        let merged = classes![
            "a",
            false.then_some("skipped"),
            Option::<String>::None,
            "",
            "b",
        ];
        assert_eq!(merged, "a b");

        assert_eq!(classes![Option::<&'static str>::None, ""], "");
        assert_eq!(classes![], "");
    }

    #[test]
    fn splits_multi_token_strings_before_dedup() {
        assert_eq!(
            classes!["flex items-center", "items-center"],
            "flex items-center"
        );
        assert_eq!(classes!["a a b"], "a b");
    }

    #[test]
    fn last_occurrence_wins_position() {
        assert_eq!(classes!["a", "a"], "a");
        assert_eq!(classes!["a b c", "b"], "a c b");
        // Distinct strings both survive even when they target the same
        // underlying style property.
        assert_eq!(
            classes!["text-red-500", "text-blue-500"],
            "text-red-500 text-blue-500"
        );
    }

    #[test]
    fn flattens_nested_groups() {
        let merged = classes![
            ClassFragment::group([
                ClassFragment::from("a"),
                ClassFragment::group([
                    ClassFragment::from("b"),
                    ClassFragment::group([ClassFragment::from("c")]),
                ]),
            ]),
            "d",
        ];
        assert_eq!(merged, "a b c d");

        let empty_groups = classes![
            ClassFragment::group(Vec::<ClassFragment>::new()),
            "kept",
            ClassFragment::group([ClassFragment::None]),
        ];
        assert_eq!(empty_groups, "kept");
    }

    #[test]
    fn conditional_groups_flatten_like_plain_fragments() {
        let interactive = true;
        let merged = classes![
            "card",
            interactive.then(|| ClassFragment::group(["cursor-pointer", "hover:shadow-md"])),
        ];
        assert_eq!(merged, "card cursor-pointer hover:shadow-md");
    }

    #[test]
    fn resolution_is_deterministic_and_idempotent() {
        let build = || {
            vec![
                ClassFragment::from("btn btn-primary"),
                ClassFragment::from(Some("w-full")),
                ClassFragment::group(["focus:ring-2", "btn"]),
            ]
        };
        let first = resolve_classes(build());
        let second = resolve_classes(build());
        assert_eq!(first, second);

        let re_resolved = resolve_classes([ClassFragment::from(first.clone())]);
        assert_eq!(re_resolved, first);
    }

    #[test]
    fn pathological_nesting_is_dropped_not_recursed() {
        let mut deep = ClassFragment::from("too-deep");
        for _ in 0..(MAX_GROUP_DEPTH + 10) {
            deep = ClassFragment::Group(vec![deep]);
        }
        assert_eq!(resolve_classes([ClassFragment::from("kept"), deep]), "kept");
    }
}
