//! Built-in Fluent UI scale (Teams dark theme)

use crate::scale::Token;

/// Radius used by Fluent to mean "fully rounded"
pub(crate) const CIRCULAR_RADIUS: u32 = 10000;

pub(crate) fn border_radius() -> Vec<Token> {
    vec![
        Token::new("none", "borderRadiusNone", 0),
        Token::new("small", "borderRadiusSmall", 2),
        Token::new("medium", "borderRadiusMedium", 4),
        Token::new("large", "borderRadiusLarge", 6),
        Token::new("xLarge", "borderRadiusXLarge", 8),
        Token::circular("circular", "borderRadiusCircular", CIRCULAR_RADIUS),
    ]
}

pub(crate) fn spacing() -> Vec<Token> {
    vec![
        Token::new("none", "spacingNone", 0),
        Token::new("xxs", "spacingXXS", 2),
        Token::new("xs", "spacingXS", 4),
        Token::new("sNudge", "spacingSNudge", 6),
        Token::new("s", "spacingS", 8),
        Token::new("mNudge", "spacingMNudge", 10),
        Token::new("m", "spacingM", 12),
        Token::new("l", "spacingL", 16),
        Token::new("xl", "spacingXL", 20),
        Token::new("xxl", "spacingXXL", 24),
        Token::new("xxxl", "spacingXXXL", 32),
    ]
}

pub(crate) fn stroke_width() -> Vec<Token> {
    vec![
        Token::new("thin", "strokeWidthThin", 1),
        Token::new("thick", "strokeWidthThick", 2),
        Token::new("thicker", "strokeWidthThicker", 3),
        Token::new("thickest", "strokeWidthThickest", 4),
    ]
}
