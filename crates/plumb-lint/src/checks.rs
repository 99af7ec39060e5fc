//! Property checks, one per rule.
//!
//! Every check reads a node and the token registry and appends zero or more
//! violations to the caller's collection. Checks never fail: a property the
//! host did not export simply makes the check not applicable.

use crate::config::Rule;
use crate::report::{ObservedValue, Suggestion, Violation};
use crate::types::{LintProperty, ViolationKind};
use plumb_core::{BoundProperty, Corner, NodeKind, NodeRecord, StrokeWeight};
use plumb_tokens::{find_closest, TokenCategory, TokenRegistry};
use tracing::debug;

/// Run a single rule against a node
pub fn run_rule(
    rule: Rule,
    node: &NodeRecord,
    registry: &TokenRegistry,
    violations: &mut Vec<Violation>,
) {
    match rule {
        Rule::Radius => check_radius(node, registry, violations),
        Rule::Spacing => check_spacing(node, registry, violations),
        Rule::StrokeWidth => check_stroke_width(node, registry, violations),
        Rule::FillStyle => check_fill_style(node, violations),
        Rule::StrokeStyle => check_stroke_style(node, violations),
        Rule::TextStyle => check_text_style(node, violations),
        Rule::EffectStyle => check_effect_style(node, violations),
    }
}

/// Corner radius must be on the border-radius scale.
///
/// Radius 0 and radius equal to the node height (a pill or circle) always
/// pass, as does any radius with a bound corner. With differing corners only
/// the first off-scale corner is reported.
pub fn check_radius(node: &NodeRecord, registry: &TokenRegistry, violations: &mut Vec<Violation>) {
    let Some(radius) = node.corner_radius else {
        return;
    };

    if let Some(value) = radius.uniform_value() {
        if value == 0.0 || Some(value) == node.height {
            debug!(node = %node.id, value, "radius is square or fully rounded");
            return;
        }
    }

    if Corner::ALL
        .iter()
        .any(|corner| node.is_bound(corner.bound_property()))
    {
        debug!(node = %node.id, "radius bound to a variable");
        return;
    }

    let system = registry.system();
    let scale = registry.scale(TokenCategory::BorderRadius);

    match radius.uniform_value() {
        Some(value) => {
            if !scale.contains(value) {
                violations.push(numeric_violation(
                    node,
                    registry,
                    ViolationKind::Radius,
                    LintProperty::CornerRadius,
                    format!("Non-{} border radius", system),
                    value,
                ));
            }
        }
        None => {
            for corner in Corner::ALL {
                let value = radius.corner(corner);
                if !scale.contains(value) {
                    violations.push(numeric_violation(
                        node,
                        registry,
                        ViolationKind::Radius,
                        LintProperty::Corner(corner),
                        format!("Non-{} {} Radius", system, corner.label()),
                        value,
                    ));
                    return;
                }
            }
        }
    }
}

/// Auto-layout padding and gap must be on the spacing scale.
///
/// Only frames and components are checked. A value of 0 counts as unset, so
/// it is never reported even though it also equals the "none" token.
pub fn check_spacing(node: &NodeRecord, registry: &TokenRegistry, violations: &mut Vec<Violation>) {
    let Some(layout) = node.container_layout() else {
        return;
    };

    let system = registry.system();
    let scale = registry.scale(TokenCategory::Spacing);
    let checks = [
        (LintProperty::PaddingHorizontal, layout.padding_left, "horizontal padding"),
        (LintProperty::PaddingVertical, layout.padding_top, "vertical padding"),
        (LintProperty::ItemSpacing, layout.item_spacing, "item spacing"),
    ];

    for (property, value, label) in checks {
        let Some(value) = value.filter(|v| *v != 0.0) else {
            continue;
        };
        if scale.contains(value) {
            continue;
        }

        violations.push(numeric_violation(
            node,
            registry,
            ViolationKind::Spacing,
            property,
            format!("Non-{} {}", system, label),
            value,
        ));
    }
}

/// A single stroke weight must be on the stroke-width scale
pub fn check_stroke_width(
    node: &NodeRecord,
    registry: &TokenRegistry,
    violations: &mut Vec<Violation>,
) {
    if node.strokes.is_empty() {
        return;
    }

    let weight = match node.stroke_weight {
        Some(StrokeWeight::Uniform(weight)) => weight,
        Some(StrokeWeight::Mixed) => {
            debug!(node = %node.id, "stroke weight is mixed");
            return;
        }
        None => return,
    };

    if node.is_bound(BoundProperty::Strokes) || node.is_bound(BoundProperty::StrokeWeight) {
        debug!(node = %node.id, "stroke bound to a variable");
        return;
    }

    if weight == 0.0 || registry.contains(TokenCategory::StrokeWidth, weight) {
        return;
    }

    violations.push(numeric_violation(
        node,
        registry,
        ViolationKind::Stroke,
        LintProperty::StrokeWeight,
        format!("Non-{} stroke width", registry.system()),
        weight,
    ));
}

/// Visible fills must come from a fill style
pub fn check_fill_style(node: &NodeRecord, violations: &mut Vec<Violation>) {
    if node.fill_style_id.is_some() || node.is_bound(BoundProperty::Fills) {
        return;
    }

    let Some(fill) = node.fills.iter().find(|f| f.visible) else {
        return;
    };
    // image fills are content, not color
    if fill.kind == "IMAGE" {
        return;
    }

    violations.push(style_violation(
        node,
        ViolationKind::Fill,
        LintProperty::FillStyle,
        "Missing fill style",
        ObservedValue::Label(fill.label()),
    ));
}

/// Strokes must come from a stroke style
pub fn check_stroke_style(node: &NodeRecord, violations: &mut Vec<Violation>) {
    if node.stroke_style_id.is_some() || node.is_bound(BoundProperty::Strokes) {
        return;
    }

    let Some(stroke) = node.strokes.iter().find(|s| s.visible) else {
        return;
    };

    violations.push(style_violation(
        node,
        ViolationKind::Stroke,
        LintProperty::StrokeStyle,
        "Missing stroke style",
        ObservedValue::Label(stroke.label()),
    ));
}

/// Text layers must use a text style
pub fn check_text_style(node: &NodeRecord, violations: &mut Vec<Violation>) {
    if node.kind != NodeKind::Text || node.text_style_id.is_some() {
        return;
    }

    let value = match &node.font {
        Some(font) => ObservedValue::Label(font.clone()),
        None => ObservedValue::Missing,
    };

    violations.push(style_violation(
        node,
        ViolationKind::Text,
        LintProperty::TextStyle,
        "Missing text style",
        value,
    ));
}

/// Visible effects must come from an effect style
pub fn check_effect_style(node: &NodeRecord, violations: &mut Vec<Violation>) {
    if node.effect_style_id.is_some() || node.is_bound(BoundProperty::Effects) {
        return;
    }

    let Some(effect) = node.effects.iter().find(|e| e.visible) else {
        return;
    };

    violations.push(style_violation(
        node,
        ViolationKind::Effect,
        LintProperty::EffectStyle,
        "Missing effects style",
        ObservedValue::Label(effect.label()),
    ));
}

fn numeric_violation(
    node: &NodeRecord,
    registry: &TokenRegistry,
    kind: ViolationKind,
    property: LintProperty,
    title: String,
    value: f64,
) -> Violation {
    let suggestion = property
        .token_category()
        .and_then(|category| find_closest(registry, category, value))
        .map(|m| {
            let reason = match kind {
                ViolationKind::Spacing => format!("Use {} spacing token", registry.system()),
                _ => format!("Closest {} token ({}px away)", registry.system(), m.distance),
            };
            Suggestion::from_match(m, reason)
        });

    debug!(node = %node.id, %kind, value, title = %title, "violation");

    Violation {
        node_id: node.id.clone(),
        node_name: node.name.clone(),
        node_kind: node.kind,
        kind,
        property,
        title,
        value: ObservedValue::Number(value),
        severity: None,
        suggestions: suggestion.into_iter().collect(),
    }
}

fn style_violation(
    node: &NodeRecord,
    kind: ViolationKind,
    property: LintProperty,
    title: &str,
    value: ObservedValue,
) -> Violation {
    debug!(node = %node.id, %kind, title, "violation");

    Violation {
        node_id: node.id.clone(),
        node_name: node.name.clone(),
        node_kind: node.kind,
        kind,
        property,
        title: title.to_string(),
        value,
        severity: None,
        suggestions: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use plumb_core::{AutoLayout, CornerRadius, Effect, Paint};
    use plumb_tokens::{Token, TokenScale};

    fn fluent() -> TokenRegistry {
        TokenRegistry::fluent_teams()
    }

    fn rect(radius: CornerRadius) -> NodeRecord {
        let mut node = NodeRecord::new("1:1", "Card", NodeKind::Rectangle);
        node.width = Some(120.0);
        node.height = Some(40.0);
        node.corner_radius = Some(radius);
        node
    }

    fn radius_registry() -> TokenRegistry {
        TokenRegistry::from_scales(
            "Fluent",
            TokenScale::new(
                TokenCategory::BorderRadius,
                vec![
                    Token::new("none", "borderRadiusNone", 0),
                    Token::new("medium", "borderRadiusMedium", 4),
                    Token::new("large", "borderRadiusLarge", 6),
                    Token::circular("circular", "borderRadiusCircular", 10000),
                ],
            )
            .unwrap(),
            TokenScale::empty(TokenCategory::Spacing),
            TokenScale::empty(TokenCategory::StrokeWidth),
        )
        .unwrap()
    }

    fn spacing_registry() -> TokenRegistry {
        let spacing = [0, 4, 8, 12, 16, 20, 24, 32]
            .iter()
            .map(|v| Token::new(format!("s{}", v), format!("spacing{}", v), *v))
            .collect();
        TokenRegistry::from_scales(
            "Fluent",
            TokenScale::empty(TokenCategory::BorderRadius),
            TokenScale::new(TokenCategory::Spacing, spacing).unwrap(),
            TokenScale::empty(TokenCategory::StrokeWidth),
        )
        .unwrap()
    }

    fn frame(layout: AutoLayout) -> NodeRecord {
        let mut node = NodeRecord::new("2:1", "Stack", NodeKind::Frame);
        node.layout = Some(layout);
        node
    }

    fn stroked(weight: StrokeWeight) -> NodeRecord {
        let mut node = NodeRecord::new("3:1", "Divider", NodeKind::Line);
        node.strokes.push(Paint::solid("#d6d6d6"));
        node.stroke_weight = Some(weight);
        node
    }

    #[test]
    fn test_radius_zero_passes() {
        let mut violations = Vec::new();
        check_radius(&rect(CornerRadius::Uniform(0.0)), &fluent(), &mut violations);
        assert!(violations.is_empty());
    }

    #[test]
    fn test_radius_equal_to_height_passes() {
        let mut violations = Vec::new();
        check_radius(&rect(CornerRadius::Uniform(40.0)), &fluent(), &mut violations);
        assert!(violations.is_empty());
    }

    #[test]
    fn test_radius_on_scale_passes() {
        let mut violations = Vec::new();
        check_radius(&rect(CornerRadius::Uniform(8.0)), &fluent(), &mut violations);
        check_radius(&rect(CornerRadius::Uniform(10000.0)), &fluent(), &mut violations);
        assert!(violations.is_empty());
    }

    #[test]
    fn test_uniform_radius_violation() {
        let mut violations = Vec::new();
        check_radius(&rect(CornerRadius::Uniform(5.0)), &radius_registry(), &mut violations);

        assert_eq!(violations.len(), 1);
        let v = &violations[0];
        assert_eq!(v.kind, ViolationKind::Radius);
        assert_eq!(v.property, LintProperty::CornerRadius);
        assert_eq!(v.title, "Non-Fluent border radius");
        assert_eq!(v.value, ObservedValue::Number(5.0));
        assert_eq!(v.severity, None);

        let s = v.suggestion().unwrap();
        assert_eq!(s.value, 4);
        assert_eq!(s.token_name, "borderRadiusMedium");
        assert_eq!(s.distance, 1.0);
        assert_eq!(s.reason, "Closest Fluent token (1px away)");
    }

    #[test]
    fn test_large_radius_never_suggests_circular() {
        let mut node = rect(CornerRadius::Uniform(9999.0));
        node.height = None;
        let mut violations = Vec::new();
        check_radius(&node, &fluent(), &mut violations);

        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].suggestion().unwrap().token_name, "borderRadiusXLarge");
    }

    #[test]
    fn test_per_corner_reports_first_offender_only() {
        let node = rect(CornerRadius::PerCorner {
            top_left: 4.0,
            top_right: 3.0,
            bottom_left: 5.0,
            bottom_right: 7.0,
        });
        let mut violations = Vec::new();
        check_radius(&node, &fluent(), &mut violations);

        assert_eq!(violations.len(), 1);
        let v = &violations[0];
        assert_eq!(v.property, LintProperty::Corner(Corner::TopRight));
        assert_eq!(v.title, "Non-Fluent Top Right Radius");
        assert_eq!(v.value, ObservedValue::Number(3.0));
        let s = v.suggestion().unwrap();
        assert_eq!(s.value, 2);
        assert_eq!(s.distance, 1.0);
    }

    #[test]
    fn test_per_corner_all_on_scale_passes() {
        let node = rect(CornerRadius::PerCorner {
            top_left: 8.0,
            top_right: 8.0,
            bottom_left: 0.0,
            bottom_right: 0.0,
        });
        let mut violations = Vec::new();
        check_radius(&node, &fluent(), &mut violations);
        assert!(violations.is_empty());
    }

    #[test]
    fn test_bound_corner_skips_radius() {
        let mut node = rect(CornerRadius::Uniform(5.0));
        node.bound_variables.insert(BoundProperty::TopRightRadius);
        let mut violations = Vec::new();
        check_radius(&node, &fluent(), &mut violations);
        assert!(violations.is_empty());

        let mut node = rect(CornerRadius::PerCorner {
            top_left: 3.0,
            top_right: 5.0,
            bottom_left: 7.0,
            bottom_right: 0.0,
        });
        node.bound_variables.insert(BoundProperty::BottomRightRadius);
        check_radius(&node, &fluent(), &mut violations);
        assert!(violations.is_empty());
    }

    #[test]
    fn test_missing_radius_is_not_applicable() {
        let node = NodeRecord::new("1:9", "Label", NodeKind::Text);
        let mut violations = Vec::new();
        check_radius(&node, &fluent(), &mut violations);
        assert!(violations.is_empty());
    }

    #[test]
    fn test_spacing_violations() {
        let node = frame(AutoLayout {
            padding_left: Some(10.0),
            padding_top: Some(0.0),
            item_spacing: Some(16.0),
            ..Default::default()
        });
        let mut violations = Vec::new();
        check_spacing(&node, &spacing_registry(), &mut violations);

        assert_eq!(violations.len(), 1);
        let v = &violations[0];
        assert_eq!(v.kind, ViolationKind::Spacing);
        assert_eq!(v.property, LintProperty::PaddingHorizontal);
        assert_eq!(v.title, "Non-Fluent horizontal padding");
        let s = v.suggestion().unwrap();
        assert_eq!(s.value, 8);
        assert_eq!(s.distance, 2.0);
        assert_eq!(s.reason, "Use Fluent spacing token");
    }

    #[test]
    fn test_spacing_checks_do_not_stop_early() {
        let node = frame(AutoLayout {
            padding_left: Some(5.0),
            padding_top: Some(7.0),
            item_spacing: Some(13.0),
            ..Default::default()
        });
        let mut violations = Vec::new();
        check_spacing(&node, &fluent(), &mut violations);

        let properties: Vec<_> = violations.iter().map(|v| v.property).collect();
        assert_eq!(
            properties,
            vec![
                LintProperty::PaddingHorizontal,
                LintProperty::PaddingVertical,
                LintProperty::ItemSpacing,
            ]
        );
        assert_eq!(violations[2].suggestion().unwrap().token_name, "spacingM");
    }

    #[test]
    fn test_spacing_ignores_right_and_bottom_padding() {
        let node = frame(AutoLayout {
            padding_right: Some(7.0),
            padding_bottom: Some(7.0),
            ..Default::default()
        });
        let mut violations = Vec::new();
        check_spacing(&node, &fluent(), &mut violations);
        assert!(violations.is_empty());
    }

    #[test]
    fn test_spacing_only_for_containers() {
        let mut node = frame(AutoLayout {
            padding_left: Some(7.0),
            ..Default::default()
        });
        node.kind = NodeKind::Instance;
        let mut violations = Vec::new();
        check_spacing(&node, &fluent(), &mut violations);
        assert!(violations.is_empty());

        node.kind = NodeKind::Component;
        check_spacing(&node, &fluent(), &mut violations);
        assert_eq!(violations.len(), 1);
    }

    #[test]
    fn test_stroke_width_violation() {
        let mut violations = Vec::new();
        check_stroke_width(&stroked(StrokeWeight::Uniform(1.5)), &fluent(), &mut violations);

        assert_eq!(violations.len(), 1);
        let v = &violations[0];
        assert_eq!(v.title, "Non-Fluent stroke width");
        assert_eq!(v.property, LintProperty::StrokeWeight);
        let s = v.suggestion().unwrap();
        assert_eq!(s.value, 1);
        assert_eq!(s.token_name, "strokeWidthThin");
        assert_eq!(s.distance, 0.5);
        assert_eq!(s.reason, "Closest Fluent token (0.5px away)");
    }

    #[test]
    fn test_stroke_width_skips() {
        let mut violations = Vec::new();

        check_stroke_width(&stroked(StrokeWeight::Mixed), &fluent(), &mut violations);
        check_stroke_width(&stroked(StrokeWeight::Uniform(0.0)), &fluent(), &mut violations);
        check_stroke_width(&stroked(StrokeWeight::Uniform(2.0)), &fluent(), &mut violations);

        let mut bound = stroked(StrokeWeight::Uniform(1.5));
        bound.bound_variables.insert(BoundProperty::Strokes);
        check_stroke_width(&bound, &fluent(), &mut violations);

        let mut weight_bound = stroked(StrokeWeight::Uniform(1.5));
        weight_bound.bound_variables.insert(BoundProperty::StrokeWeight);
        check_stroke_width(&weight_bound, &fluent(), &mut violations);

        let mut unstroked = stroked(StrokeWeight::Uniform(1.5));
        unstroked.strokes.clear();
        check_stroke_width(&unstroked, &fluent(), &mut violations);

        assert!(violations.is_empty());
    }

    #[test]
    fn test_fill_style() {
        let mut node = NodeRecord::new("4:1", "Badge", NodeKind::Rectangle);
        node.fills.push(Paint::solid("#115ea3"));
        let mut violations = Vec::new();
        check_fill_style(&node, &mut violations);

        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].kind, ViolationKind::Fill);
        assert_eq!(violations[0].value, ObservedValue::Label("#115ea3".to_string()));
        assert!(violations[0].suggestions.is_empty());

        node.fill_style_id = Some("S:brand".to_string());
        violations.clear();
        check_fill_style(&node, &mut violations);
        assert!(violations.is_empty());
    }

    #[test]
    fn test_fill_style_skips_hidden_and_image_fills() {
        let mut node = NodeRecord::new("4:2", "Hero", NodeKind::Rectangle);
        node.fills.push(Paint {
            kind: "SOLID".to_string(),
            color: Some("#000000".to_string()),
            visible: false,
        });
        node.fills.push(Paint {
            kind: "IMAGE".to_string(),
            color: None,
            visible: true,
        });
        let mut violations = Vec::new();
        check_fill_style(&node, &mut violations);
        assert!(violations.is_empty());
    }

    #[test]
    fn test_stroke_style() {
        let node = stroked(StrokeWeight::Uniform(1.0));
        let mut violations = Vec::new();
        check_stroke_style(&node, &mut violations);

        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].kind, ViolationKind::Stroke);
        assert_eq!(violations[0].property, LintProperty::StrokeStyle);
        assert_eq!(violations[0].title, "Missing stroke style");
    }

    #[test]
    fn test_text_style() {
        let mut node = NodeRecord::new("5:1", "Heading", NodeKind::Text);
        node.font = Some("Segoe UI Semibold 20".to_string());
        let mut violations = Vec::new();
        check_text_style(&node, &mut violations);
        assert_eq!(violations.len(), 1);
        assert_eq!(
            violations[0].value,
            ObservedValue::Label("Segoe UI Semibold 20".to_string())
        );

        node.text_style_id = Some("S:title".to_string());
        violations.clear();
        check_text_style(&node, &mut violations);
        assert!(violations.is_empty());
    }

    #[test]
    fn test_effect_style() {
        let mut node = NodeRecord::new("6:1", "Dialog", NodeKind::Frame);
        node.effects.push(Effect {
            kind: "DROP_SHADOW".to_string(),
            radius: 8.0,
            visible: true,
        });
        let mut violations = Vec::new();
        check_effect_style(&node, &mut violations);

        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].title, "Missing effects style");
        assert_eq!(
            violations[0].value,
            ObservedValue::Label("DROP_SHADOW (8)".to_string())
        );
    }

    #[test]
    fn test_run_rule_dispatch() {
        let node = rect(CornerRadius::Uniform(5.0));
        let mut violations = Vec::new();
        run_rule(Rule::Spacing, &node, &fluent(), &mut violations);
        assert!(violations.is_empty());
        run_rule(Rule::Radius, &node, &fluent(), &mut violations);
        assert_eq!(violations.len(), 1);
    }
}
