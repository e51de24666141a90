//! Per-size class tables shared by controls and inline icons.

use super::ComponentSize;

/// Class fragments a sized control composes, one field per concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeClasses {
    /// Control height.
    pub height: &'static str,
    /// Horizontal and vertical padding.
    pub padding: &'static str,
    /// Label text size.
    pub text: &'static str,
    /// Gap between the label and adjacent glyphs.
    pub gap: &'static str,
    /// Corner radius.
    pub radius: &'static str,
    /// Square sizing for an inline icon.
    pub icon: &'static str,
}

const XS: SizeClasses = SizeClasses {
    height: "h-6",
    padding: "px-2 py-1",
    text: "text-xs",
    gap: "gap-1",
    radius: "rounded-md",
    icon: "w-3 h-3",
};

const SM: SizeClasses = SizeClasses {
    height: "h-8",
    padding: "px-3 py-1.5",
    text: "text-sm",
    gap: "gap-1.5",
    radius: "rounded",
    icon: "w-4 h-4",
};

const MD: SizeClasses = SizeClasses {
    height: "h-10",
    padding: "px-4 py-2",
    text: "text-base",
    gap: "gap-2",
    radius: "rounded-md",
    icon: "w-5 h-5",
};

const LG: SizeClasses = SizeClasses {
    height: "h-12",
    padding: "px-6 py-3",
    text: "text-lg",
    gap: "gap-2.5",
    radius: "rounded-lg",
    icon: "w-6 h-6",
};

const XL: SizeClasses = SizeClasses {
    height: "h-14",
    padding: "px-8 py-4",
    text: "text-xl",
    gap: "gap-3",
    radius: "rounded-xl",
    icon: "w-7 h-7",
};

impl ComponentSize {
    /// Class table for this size step.
    pub fn classes(self) -> &'static SizeClasses {
        match self {
            Self::Xs => &XS,
            Self::Sm => &SM,
            Self::Md => &MD,
            Self::Lg => &LG,
            Self::Xl => &XL,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn size_table_is_total_and_distinct() {
        let mut heights = Vec::new();
        for size in ComponentSize::ALL {
            let classes = size.classes();
            assert!(!classes.height.is_empty(), "size={size:?}");
            assert!(!classes.padding.is_empty(), "size={size:?}");
            assert!(!classes.text.is_empty(), "size={size:?}");
            assert!(!classes.gap.is_empty(), "size={size:?}");
            assert!(!classes.radius.is_empty(), "size={size:?}");
            assert!(!classes.icon.is_empty(), "size={size:?}");
            heights.push(classes.height);
        }
        heights.dedup();
        assert_eq!(heights.len(), ComponentSize::ALL.len());
    }

    #[test]
    fn default_size_keeps_base_text() {
        assert_eq!(ComponentSize::default().classes().text, "text-base");
    }
}
