//! Generation of the `:root` custom-property stylesheet from the token
//! tables.
//!
//! The output covers every color scale step, the semantic emphasis aliases,
//! and the spacing lengths, so consuming pages can inject one `<style>`
//! block instead of maintaining a hand-written token sheet.

use super::color::{ColorAlias, ColorFamily, Shade};
use super::Spacing;

/// Renders the full design-token palette as a `:root { … }` block.
///
/// Pure string assembly over the static tables; the same call always yields
/// the same stylesheet.
pub fn design_token_stylesheet() -> String {
    let mut css = String::from(":root {\n");

    for family in ColorFamily::ALL {
        css.push_str(&format!("  /* {} */\n", family.token()));
        for shade in Shade::ALL {
            css.push_str(&format!(
                "  --color-{}-{}: {};\n",
                family.token(),
                shade.token(),
                family.hex(shade)
            ));
        }
        for alias in ColorAlias::ALL {
            let value = family.hex(alias.shade());
            match alias.suffix() {
                Some(suffix) => css.push_str(&format!(
                    "  --color-{}-{}: {};\n",
                    family.token(),
                    suffix,
                    value
                )),
                None => css.push_str(&format!("  --color-{}: {};\n", family.token(), value)),
            }
        }
    }

    css.push_str("  /* spacing */\n");
    for spacing in Spacing::ALL {
        css.push_str(&format!(
            "  --space-{}: {};\n",
            spacing.token(),
            spacing.rem()
        ));
    }

    css.push_str("}\n");
    css
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stylesheet_is_one_root_block() {
        let css = design_token_stylesheet();
        assert!(css.starts_with(":root {\n"));
        assert!(css.ends_with("}\n"));
        assert_eq!(css.matches(":root").count(), 1);
    }

    #[test]
    fn stylesheet_carries_scales_aliases_and_spacing() {
        let css = design_token_stylesheet();
        assert!(css.contains("--color-danger-600: #dc2626;"));
        assert!(css.contains("--color-primary: #2563eb;"));
        assert!(css.contains("--color-primary-dark: #1d4ed8;"));
        assert!(css.contains("--color-caution-lighter: #fefce8;"));
        assert!(css.contains("--space-4: 1rem;"));
        assert!(css.contains("--space-0: 0px;"));
    }

    #[test]
    fn generation_is_deterministic() {
        assert_eq!(design_token_stylesheet(), design_token_stylesheet());
    }
}
