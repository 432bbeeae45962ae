use super::{Point, Rect};

pub const DEFAULT_LEVEL: f64 = 70.0;
pub const GLOW_RADIUS: f64 = 100.0;
pub const HOVER_RADIUS: f64 = 10.0;
pub const HOVER_SHADOW_BLUR: f64 = 20.0;
/// Layout is still settling right after load, so the web is redrawn once more after this.
pub const SETTLE_DELAY_MS: u32 = 500;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SkillNode {
    pub position: Point,
    pub level: f64,
}

impl SkillNode {
    /// Center of `node` relative to the canvas box.
    pub fn from_rects(node: Rect, canvas: Rect, level: f64) -> Self {
        let center = node.center();
        Self {
            position: Point::new(center.x - canvas.left, center.y - canvas.top),
            level,
        }
    }
}

/// Reads the leading integer of a `data-level` attribute (`"90%"` is 90, `"85.5"` is 85),
/// falling back to the default for missing, non-numeric or zero values.
pub fn parse_level(raw: Option<&str>) -> f64 {
    raw.and_then(leading_integer)
        .filter(|level| *level != 0)
        .map(|level| level as f64)
        .unwrap_or(DEFAULT_LEVEL)
}

fn leading_integer(text: &str) -> Option<i64> {
    let text = text.trim_start();
    let sign = usize::from(text.starts_with(['+', '-']));
    let digits = text[sign..].bytes().take_while(u8::is_ascii_digit).count();
    text[..sign + digits].parse().ok()
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
    pub alpha: f64,
    pub width: f64,
}

impl Segment {
    pub fn stroke_style(&self) -> String {
        format!("rgba(255, 255, 255, {})", self.alpha)
    }
}

pub fn spoke_alpha(level: f64) -> f64 {
    0.1 + level / 500.0
}

/// Base web: a spoke from the center to every node, then a faint line for every node pair.
pub fn web_segments(center: Point, nodes: &[SkillNode]) -> Vec<Segment> {
    let spokes = nodes.iter().map(|node| Segment {
        from: center,
        to: node.position,
        alpha: spoke_alpha(node.level),
        width: 1.5,
    });

    let mut segments: Vec<Segment> = spokes.collect();
    for (i, a) in nodes.iter().enumerate() {
        for b in &nodes[i + 1..] {
            segments.push(Segment {
                from: a.position,
                to: b.position,
                alpha: 0.05,
                width: 1.0,
            });
        }
    }
    segments
}

pub fn highlight_segment(center: Point, node: &SkillNode) -> Segment {
    Segment {
        from: center,
        to: node.position,
        alpha: 0.5,
        width: 2.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(x: f64, y: f64, level: f64) -> SkillNode {
        SkillNode {
            position: Point::new(x, y),
            level,
        }
    }

    #[test]
    fn level_defaults_when_missing_or_invalid() {
        assert_eq!(parse_level(Some("90")), 90.0);
        assert_eq!(parse_level(Some("abc")), DEFAULT_LEVEL);
        assert_eq!(parse_level(Some("0")), DEFAULT_LEVEL);
        assert_eq!(parse_level(None), DEFAULT_LEVEL);
    }

    #[test]
    fn level_reads_leading_integer() {
        assert_eq!(parse_level(Some("90%")), 90.0);
        assert_eq!(parse_level(Some("85.5")), 85.0);
        assert_eq!(parse_level(Some("  60 pts")), 60.0);
        assert_eq!(parse_level(Some("-20")), -20.0);
        assert_eq!(parse_level(Some("%90")), DEFAULT_LEVEL);
        assert_eq!(parse_level(Some("-")), DEFAULT_LEVEL);
    }

    #[test]
    fn node_center_is_relative_to_canvas() {
        let canvas = Rect::new(100.0, 200.0, 600.0, 400.0);
        let badge = Rect::new(150.0, 260.0, 40.0, 20.0);
        let node = SkillNode::from_rects(badge, canvas, 80.0);
        assert_eq!(node.position, Point::new(70.0, 70.0));
    }

    #[test]
    fn web_has_spokes_then_pairs() {
        let center = Point::new(50.0, 50.0);
        let nodes = [node(0.0, 0.0, 100.0), node(100.0, 0.0, 50.0), node(50.0, 100.0, 70.0)];
        let segments = web_segments(center, &nodes);

        assert_eq!(segments.len(), 3 + 3);
        assert!((segments[0].alpha - 0.3).abs() < 1e-12);
        assert!((segments[1].alpha - 0.2).abs() < 1e-12);
        assert!(segments[..3].iter().all(|s| s.from == center && s.width == 1.5));
        assert!(segments[3..].iter().all(|s| s.alpha == 0.05 && s.width == 1.0));
    }

    #[test]
    fn empty_web_draws_nothing() {
        assert!(web_segments(Point::default(), &[]).is_empty());
    }
}
