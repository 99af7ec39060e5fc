//! Read-only design node records as exported by the host tool

use crate::id::NodeId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// The kind of a design node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NodeKind {
    Frame,
    Component,
    Instance,
    Group,
    Rectangle,
    Ellipse,
    Polygon,
    Star,
    Vector,
    Line,
    Text,
    #[serde(other)]
    Other,
}

impl NodeKind {
    /// Container nodes own an auto-layout and are subject to spacing checks
    pub fn is_container(&self) -> bool {
        matches!(self, NodeKind::Frame | NodeKind::Component)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Frame => "FRAME",
            NodeKind::Component => "COMPONENT",
            NodeKind::Instance => "INSTANCE",
            NodeKind::Group => "GROUP",
            NodeKind::Rectangle => "RECTANGLE",
            NodeKind::Ellipse => "ELLIPSE",
            NodeKind::Polygon => "POLYGON",
            NodeKind::Star => "STAR",
            NodeKind::Vector => "VECTOR",
            NodeKind::Line => "LINE",
            NodeKind::Text => "TEXT",
            NodeKind::Other => "OTHER",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One of the four corners of a node, in checking order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Corner {
    pub const ALL: [Corner; 4] = [
        Corner::TopLeft,
        Corner::TopRight,
        Corner::BottomLeft,
        Corner::BottomRight,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Corner::TopLeft => "Top Left",
            Corner::TopRight => "Top Right",
            Corner::BottomLeft => "Bottom Left",
            Corner::BottomRight => "Bottom Right",
        }
    }

    /// The bound-variable slot governing this corner
    pub fn bound_property(&self) -> BoundProperty {
        match self {
            Corner::TopLeft => BoundProperty::TopLeftRadius,
            Corner::TopRight => BoundProperty::TopRightRadius,
            Corner::BottomLeft => BoundProperty::BottomLeftRadius,
            Corner::BottomRight => BoundProperty::BottomRightRadius,
        }
    }
}

/// Corner radius of a node: one value for all corners, or one per corner.
///
/// Serialized as a bare number or as a `{ top_left, top_right, bottom_left,
/// bottom_right }` table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CornerRadius {
    Uniform(f64),
    PerCorner {
        top_left: f64,
        top_right: f64,
        bottom_left: f64,
        bottom_right: f64,
    },
}

impl CornerRadius {
    /// The single radius shared by all corners, if there is one
    pub fn uniform_value(&self) -> Option<f64> {
        match *self {
            CornerRadius::Uniform(v) => Some(v),
            CornerRadius::PerCorner {
                top_left,
                top_right,
                bottom_left,
                bottom_right,
            } => {
                if top_left == top_right && top_left == bottom_left && top_left == bottom_right {
                    Some(top_left)
                } else {
                    None
                }
            }
        }
    }

    pub fn corner(&self, corner: Corner) -> f64 {
        match *self {
            CornerRadius::Uniform(v) => v,
            CornerRadius::PerCorner {
                top_left,
                top_right,
                bottom_left,
                bottom_right,
            } => match corner {
                Corner::TopLeft => top_left,
                Corner::TopRight => top_right,
                Corner::BottomLeft => bottom_left,
                Corner::BottomRight => bottom_right,
            },
        }
    }

    /// Return a copy with one corner replaced, splitting a uniform radius if needed
    pub fn with_corner(&self, corner: Corner, value: f64) -> Self {
        let mut values = Corner::ALL.map(|c| self.corner(c));
        let idx = Corner::ALL.iter().position(|c| *c == corner).unwrap_or(0);
        values[idx] = value;
        let [top_left, top_right, bottom_left, bottom_right] = values;
        CornerRadius::PerCorner {
            top_left,
            top_right,
            bottom_left,
            bottom_right,
        }
    }
}

/// Stroke weight of a node: a single value, or mixed across strokes
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "StrokeWeightRepr", into = "StrokeWeightRepr")]
pub enum StrokeWeight {
    Uniform(f64),
    Mixed,
}

#[derive(Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum StrokeWeightRepr {
    Number(f64),
    Marker(String),
}

impl TryFrom<StrokeWeightRepr> for StrokeWeight {
    type Error = String;

    fn try_from(repr: StrokeWeightRepr) -> std::result::Result<Self, Self::Error> {
        match repr {
            StrokeWeightRepr::Number(v) => Ok(StrokeWeight::Uniform(v)),
            StrokeWeightRepr::Marker(s) if s.eq_ignore_ascii_case("mixed") => {
                Ok(StrokeWeight::Mixed)
            }
            StrokeWeightRepr::Marker(s) => Err(format!(
                "stroke_weight must be a number or \"mixed\", got \"{}\"",
                s
            )),
        }
    }
}

impl From<StrokeWeight> for StrokeWeightRepr {
    fn from(weight: StrokeWeight) -> Self {
        match weight {
            StrokeWeight::Uniform(v) => StrokeWeightRepr::Number(v),
            StrokeWeight::Mixed => StrokeWeightRepr::Marker("mixed".to_string()),
        }
    }
}

/// Auto-layout spacing of a container node
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AutoLayout {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding_left: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding_right: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding_top: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding_bottom: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_spacing: Option<f64>,
}

/// Node properties that can be governed by a variable binding
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoundProperty {
    TopLeftRadius,
    TopRightRadius,
    BottomLeftRadius,
    BottomRightRadius,
    Strokes,
    StrokeWeight,
    Fills,
    Effects,
}

/// A fill or stroke paint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paint {
    /// Paint type as reported by the host (`SOLID`, `GRADIENT_LINEAR`, `IMAGE`, ...)
    #[serde(rename = "type")]
    pub kind: String,
    /// Hex color for solid paints
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default = "default_visible")]
    pub visible: bool,
}

impl Paint {
    pub fn solid(color: impl Into<String>) -> Self {
        Self {
            kind: "SOLID".to_string(),
            color: Some(color.into()),
            visible: true,
        }
    }

    /// Short label used as the observed value of style violations
    pub fn label(&self) -> String {
        match &self.color {
            Some(color) => color.clone(),
            None => self.kind.clone(),
        }
    }
}

/// A layer effect (shadow or blur)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Effect {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub radius: f64,
    #[serde(default = "default_visible")]
    pub visible: bool,
}

impl Effect {
    pub fn label(&self) -> String {
        format!("{} ({})", self.kind, self.radius)
    }
}

fn default_visible() -> bool {
    true
}

/// A design node as visited by the host traversal.
///
/// Every property is optional; a field the host did not export means the
/// check reading it does not apply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeRecord {
    pub id: NodeId,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub corner_radius: Option<CornerRadius>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub strokes: Vec<Paint>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke_weight: Option<StrokeWeight>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<AutoLayout>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fills: Vec<Paint>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub effects: Vec<Effect>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill_style_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke_style_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_style_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effect_style_id: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub bound_variables: BTreeSet<BoundProperty>,
}

impl NodeRecord {
    /// Create a bare node with no exported properties
    pub fn new(id: impl Into<String>, name: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            id: NodeId::new(id),
            name: name.into(),
            kind,
            width: None,
            height: None,
            corner_radius: None,
            strokes: Vec::new(),
            stroke_weight: None,
            layout: None,
            fills: Vec::new(),
            effects: Vec::new(),
            font: None,
            fill_style_id: None,
            stroke_style_id: None,
            text_style_id: None,
            effect_style_id: None,
            bound_variables: BTreeSet::new(),
        }
    }

    pub fn is_bound(&self, property: BoundProperty) -> bool {
        self.bound_variables.contains(&property)
    }

    /// Auto-layout of a container node; leaf nodes never expose one
    pub fn container_layout(&self) -> Option<&AutoLayout> {
        if self.kind.is_container() {
            self.layout.as_ref()
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_radius_from_number() {
        let r: CornerRadius = serde_json::from_str("4").unwrap();
        assert_eq!(r, CornerRadius::Uniform(4.0));
        assert_eq!(r.uniform_value(), Some(4.0));
    }

    #[test]
    fn test_per_corner_radius_from_table() {
        let r: CornerRadius = serde_json::from_str(
            r#"{"top_left": 4, "top_right": 4, "bottom_left": 0, "bottom_right": 0}"#,
        )
        .unwrap();
        assert_eq!(r.uniform_value(), None);
        assert_eq!(r.corner(Corner::TopRight), 4.0);
        assert_eq!(r.corner(Corner::BottomLeft), 0.0);
    }

    #[test]
    fn test_equal_corners_are_uniform() {
        let r = CornerRadius::PerCorner {
            top_left: 6.0,
            top_right: 6.0,
            bottom_left: 6.0,
            bottom_right: 6.0,
        };
        assert_eq!(r.uniform_value(), Some(6.0));
    }

    #[test]
    fn test_with_corner_splits_uniform() {
        let r = CornerRadius::Uniform(4.0).with_corner(Corner::BottomRight, 8.0);
        assert_eq!(r.corner(Corner::TopLeft), 4.0);
        assert_eq!(r.corner(Corner::BottomRight), 8.0);
        assert_eq!(r.uniform_value(), None);
    }

    #[test]
    fn test_stroke_weight_mixed_marker() {
        let w: StrokeWeight = serde_json::from_str("\"mixed\"").unwrap();
        assert_eq!(w, StrokeWeight::Mixed);
        let w: StrokeWeight = serde_json::from_str("1.5").unwrap();
        assert_eq!(w, StrokeWeight::Uniform(1.5));
        assert!(serde_json::from_str::<StrokeWeight>("\"thick\"").is_err());
        assert_eq!(serde_json::to_string(&StrokeWeight::Mixed).unwrap(), "\"mixed\"");
    }

    #[test]
    fn test_node_from_toml() {
        let node: NodeRecord = toml::from_str(
            r#"
id = "1:2"
name = "Card"
type = "FRAME"
height = 40
corner_radius = 5
bound_variables = ["strokes"]

[layout]
padding_left = 10
item_spacing = 16
"#,
        )
        .unwrap();
        assert_eq!(node.kind, NodeKind::Frame);
        assert_eq!(node.corner_radius, Some(CornerRadius::Uniform(5.0)));
        assert!(node.is_bound(BoundProperty::Strokes));
        assert_eq!(node.container_layout().and_then(|l| l.padding_left), Some(10.0));
        assert!(node.strokes.is_empty());
    }

    #[test]
    fn test_unknown_kind_is_other() {
        let kind: NodeKind = serde_json::from_str("\"BOOLEAN_OPERATION\"").unwrap();
        assert_eq!(kind, NodeKind::Other);
    }

    #[test]
    fn test_leaf_has_no_container_layout() {
        let mut node = NodeRecord::new("1:1", "Box", NodeKind::Rectangle);
        node.layout = Some(AutoLayout {
            padding_left: Some(10.0),
            ..Default::default()
        });
        assert!(node.container_layout().is_none());
    }
}
