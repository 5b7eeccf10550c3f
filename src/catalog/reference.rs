// Read-only reference tokens shown by the tokens panel

/// A documented token and its reference value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReferenceToken {
    pub name: &'static str,
    pub value: &'static str,
}

/// A titled group of reference tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReferenceGroup {
    pub title: &'static str,
    pub tokens: &'static [ReferenceToken],
}

const fn token(name: &'static str, value: &'static str) -> ReferenceToken {
    ReferenceToken { name, value }
}

pub const BORDER_GROUPS: &[ReferenceGroup] = &[
    ReferenceGroup {
        title: "Border Radius",
        tokens: &[
            token("$border-radius-none", "0px"),
            token("$border-radius-xs", "4px"),
            token("$border-radius-sm", "12px"),
            token("$border-radius-md", "24px"),
            token("$border-radius-lg", "32px"),
            token("$border-radius-circle", "50%"),
            token("$border-radius-pill", "500px"),
        ],
    },
    ReferenceGroup {
        title: "Border Width",
        tokens: &[
            token("$border-width-none", "0px"),
            token("$border-width-thin", "1px"),
            token("$border-width-medium", "2px"),
            token("$border-width-thick", "4px"),
        ],
    },
];

pub const TYPOGRAPHY_GROUPS: &[ReferenceGroup] = &[
    ReferenceGroup {
        title: "Font Family",
        tokens: &[
            token("$font-family-base", "Roboto"),
            token("$font-family-highlight", "AMX"),
            token("$font-family-code", "monospace"),
        ],
    },
    ReferenceGroup {
        title: "Font Size",
        tokens: &[
            token("$font-size-xxxxs", "12px"),
            token("$font-size-xxs", "14px"),
            token("$font-size-xs", "16px"),
            token("$font-size-sm", "20px"),
            token("$font-size-md", "24px"),
            token("$font-size-lg", "28px"),
            token("$font-size-xl", "32px"),
            token("$font-size-xxl", "36px"),
            token("$font-size-xxxl", "48px"),
        ],
    },
    ReferenceGroup {
        title: "Font Line Height",
        tokens: &[
            token("$font-line-height-none", "0"),
            token("$font-line-height-sm", "100%"),
            token("$font-line-height-md", "130%"),
            token("$font-line-height-lg", "140%"),
        ],
    },
    ReferenceGroup {
        title: "Font Weight",
        tokens: &[
            token("$font-weight-light", "300"),
            token("$font-weight-regular", "400"),
            token("$font-weight-medium", "500"),
            token("$font-weight-bold", "700"),
            token("$font-weight-black", "800"),
        ],
    },
    ReferenceGroup {
        title: "Text Effect",
        tokens: &[
            token("$text-underline", "Underline"),
            token("$text-strike", "Line-through"),
            token("$text-uppercase", "Uppercase"),
        ],
    },
];

pub const SPACING_GROUPS: &[ReferenceGroup] = &[
    ReferenceGroup {
        title: "Spacing Squish",
        tokens: &[
            token("$spacing-squish-xxxs", "4px 8px"),
            token("$spacing-squish-xxs", "4px 16px"),
            token("$spacing-squish-xs", "8px 16px"),
            token("$spacing-squish-sm", "8px 24px"),
            token("$spacing-squish-md", "16px 24px"),
            token("$spacing-squish-lg", "16px 32px"),
            token("$spacing-squish-xl", "24px 32px"),
            token("$spacing-squish-xxl", "32px 48px"),
        ],
    },
    ReferenceGroup {
        title: "Spacing Inset",
        tokens: &[
            token("$spacing-inset-xxxs", "4px"),
            token("$spacing-inset-xxs", "8px"),
            token("$spacing-inset-xs", "12px"),
            token("$spacing-inset-sm", "16px"),
            token("$spacing-inset-md", "24px"),
            token("$spacing-inset-lg", "32px"),
            token("$spacing-inset-xl", "48px"),
        ],
    },
    ReferenceGroup {
        title: "Spacing Stack",
        tokens: &[
            token("$spacing-stack-xxxs", "4px"),
            token("$spacing-stack-xxs", "8px"),
            token("$spacing-stack-xs", "12px"),
            token("$spacing-stack-sm", "16px"),
            token("$spacing-stack-md", "24px"),
            token("$spacing-stack-lg", "32px"),
            token("$spacing-stack-xl", "48px"),
            token("$spacing-stack-xxl", "64px"),
            token("$spacing-stack-xxxl", "96px"),
        ],
    },
    ReferenceGroup {
        title: "Spacing Inline",
        tokens: &[
            token("$spacing-inline-xxxs", "8px"),
            token("$spacing-inline-xxs", "12px"),
            token("$spacing-inline-xs", "16px"),
            token("$spacing-inline-sm", "24px"),
            token("$spacing-inline-md", "32px"),
            token("$spacing-inline-lg", "48px"),
            token("$spacing-inline-xl", "64px"),
            token("$spacing-inline-xxl", "96px"),
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_names_use_dollar_prefix() {
        for group in BORDER_GROUPS
            .iter()
            .chain(TYPOGRAPHY_GROUPS)
            .chain(SPACING_GROUPS)
        {
            assert!(!group.tokens.is_empty(), "{}", group.title);
            for t in group.tokens {
                assert!(t.name.starts_with('$'), "{}", t.name);
            }
        }
    }
}
