//! Deterministic explanation text and documentation links

use crate::context::ExplanationContext;
use crate::report::ObservedValue;
use crate::types::ViolationKind;

/// Documentation page for a violation kind
pub fn documentation_link(kind: ViolationKind) -> &'static str {
    match kind {
        ViolationKind::Radius => "https://fluent2.microsoft.design/shapes",
        ViolationKind::Spacing => "https://fluent2.microsoft.design/spacing",
        ViolationKind::Stroke => "https://fluent2.microsoft.design/shapes#strokes",
        ViolationKind::Fill => "https://fluent2.microsoft.design/color",
        ViolationKind::Text => "https://fluent2.microsoft.design/typography",
        ViolationKind::Effect => "https://fluent2.microsoft.design/elevation",
    }
}

/// Render the explanation for a context.
///
/// Numeric kinds need a numeric observed value; anything less falls back to
/// a generic sentence instead of failing.
pub fn explain(ctx: &ExplanationContext) -> String {
    let system = ctx.system.as_str();

    let value = match (&ctx.kind, &ctx.value) {
        (ViolationKind::Fill | ViolationKind::Text | ViolationKind::Effect, _) => {
            return "This layer is missing a style. Applying styles (design tokens) ensures \
                    your colors, typography, and effects stay consistent and themeable across \
                    light and dark modes."
                .to_string();
        }
        (_, ObservedValue::Number(v)) => *v,
        _ => return fallback(system),
    };

    let suggested = ctx
        .suggestion
        .as_ref()
        .map(|s| (s.token_name.as_str(), s.value));

    match ctx.kind {
        ViolationKind::Radius => {
            let advice = match suggested {
                Some((name, v)) => format!(
                    "The closest {} token is {} ({}px), which maintains consistency with {}'s corner radius scale.",
                    system, name, v, system
                ),
                None => format!("Consider using one of {}'s standard radius values.", system),
            };
            format!(
                "This layer uses a {}px border radius, which isn't part of the {} design system. {}",
                value, system, advice
            )
        }
        ViolationKind::Spacing => {
            let advice = match suggested {
                Some((name, v)) => format!(
                    "Try {} ({}px) instead to maintain consistent spacing throughout your design.",
                    name, v
                ),
                None => format!("Use {}'s spacing tokens for consistent layouts.", system),
            };
            format!(
                "The current spacing value of {}px doesn't align with {}'s spacing scale. {}",
                value, system, advice
            )
        }
        ViolationKind::Stroke => {
            let scale_size = ctx.tokens.as_ref().map(|t| t.tokens.len()).unwrap_or(0);
            let advice = match suggested {
                Some((name, v)) => format!(
                    "Use {} ({}px) to ensure strokes scale consistently across your interface.",
                    name, v
                ),
                None if scale_size > 0 => format!(
                    "{} provides {} standard stroke widths for different use cases.",
                    system, scale_size
                ),
                None => return fallback(system),
            };
            format!(
                "This stroke width ({}px) isn't a {} token. {}",
                value, system, advice
            )
        }
        ViolationKind::Fill | ViolationKind::Text | ViolationKind::Effect => fallback(system),
    }
}

fn fallback(system: &str) -> String {
    format!(
        "Apply the suggested {} token to maintain design system consistency.",
        system
    )
}
