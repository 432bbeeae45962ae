//! DOM-free motion math shared by the page effects.
//!
//! Everything here is plain data plus step functions so the frame-by-frame
//! behaviour can be exercised without a browser.

pub mod bento;
pub mod contact;
pub mod particle_field;
pub mod scroll;
pub mod skill_tiles;
pub mod skills_web;
pub mod stats;
pub mod tilt;

/// Per-frame blend of `current` toward `target`.
pub fn lerp(current: f64, target: f64, factor: f64) -> f64 {
    current + (target - current) * factor
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Axis-aligned box in client coordinates, as reported by `getBoundingClientRect`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn center(&self) -> Point {
        Point::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.left
            && point.x <= self.right()
            && point.y >= self.top
            && point.y <= self.bottom()
    }

    /// Pointer position relative to the top-left corner of the box.
    pub fn local(&self, client: Point) -> Point {
        Point::new(client.x - self.left, client.y - self.top)
    }

    /// Offset of `client` from the box center, normalized so the edges map to ±1.
    pub fn normalized_offset(&self, client: Point) -> Point {
        let center = self.center();
        let half_width = self.width / 2.0;
        let half_height = self.height / 2.0;
        let nx = if half_width > 0.0 {
            (client.x - center.x) / half_width
        } else {
            0.0
        };
        let ny = if half_height > 0.0 {
            (client.y - center.y) / half_height
        } else {
            0.0
        };
        Point::new(nx, ny)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lerp_moves_fraction_of_remaining_gap() {
        assert_eq!(lerp(0.0, 10.0, 0.15), 1.5);
        assert_eq!(lerp(10.0, 10.0, 0.3), 10.0);
    }

    #[test]
    fn normalized_offset_maps_edges_to_unit() {
        let rect = Rect::new(100.0, 50.0, 200.0, 100.0);
        assert_eq!(rect.normalized_offset(Point::new(300.0, 50.0)), Point::new(1.0, -1.0));
        assert_eq!(rect.normalized_offset(Point::new(200.0, 100.0)), Point::new(0.0, 0.0));
    }

    #[test]
    fn degenerate_rect_has_zero_offset() {
        let rect = Rect::new(10.0, 10.0, 0.0, 0.0);
        assert_eq!(rect.normalized_offset(Point::new(40.0, 40.0)), Point::default());
    }

    #[test]
    fn contains_is_inclusive_of_edges() {
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(rect.contains(Point::new(10.0, 0.0)));
        assert!(!rect.contains(Point::new(10.1, 5.0)));
    }
}
