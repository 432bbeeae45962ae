//! Fixed skill tiles shown in the 3D grid menu.

pub const TILE_SIZE: u32 = 800;
pub const GRID_STEP: u32 = 80;
pub const RESIZE_DEBOUNCE_MS: u32 = 250;
pub const ACTIVE_CLASS: &str = "active";
pub const INACTIVE_CLASS: &str = "inactive";
/// The menu mounts on the page's own canvas with this id.
pub const MENU_CANVAS_ID: &str = "infinite-grid-menu-canvas";
pub const FACE_TITLE_SELECTOR: &str = ".face-title";
pub const FACE_DESCRIPTION_SELECTOR: &str = ".face-description";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SkillTile {
    pub emoji: &'static str,
    pub title: &'static str,
    pub color: &'static str,
    pub link: &'static str,
    pub description: &'static str,
}

pub const SKILL_TILES: [SkillTile; 6] = [
    SkillTile {
        emoji: "🎨",
        title: "Graphic Design",
        color: "#667eea",
        link: "#",
        description: "Adobe Photoshop, Illustrator, Premiere Pro - 90% proficiency",
    },
    SkillTile {
        emoji: "📱",
        title: "Social Media",
        color: "#764ba2",
        link: "#",
        description: "Content Strategy, SMM, SMO - 90% proficiency",
    },
    SkillTile {
        emoji: "🎬",
        title: "Video Editing",
        color: "#f093fb",
        link: "#",
        description: "After Effects, Premiere Pro - 85% proficiency",
    },
    SkillTile {
        emoji: "🤖",
        title: "AI & Development",
        color: "#4facfe",
        link: "#",
        description: "AI in Healthcare, Web Dev - 80% proficiency",
    },
    SkillTile {
        emoji: "📸",
        title: "Photography",
        color: "#43e97b",
        link: "#",
        description: "Visual Storytelling - 85% proficiency",
    },
    SkillTile {
        emoji: "💼",
        title: "Digital Marketing",
        color: "#fa709a",
        link: "#",
        description: "SEM, Market Research - 80% proficiency",
    },
];

/// Tile for an index reported by the menu; out-of-range indices yield `None`.
pub fn tile_at(index: f64) -> Option<&'static SkillTile> {
    if !index.is_finite() || index < 0.0 {
        return None;
    }
    SKILL_TILES.get(index as usize)
}

/// Grid line offsets drawn across the tile background.
pub fn grid_lines() -> impl Iterator<Item = f64> {
    (0..TILE_SIZE).step_by(GRID_STEP as usize).map(f64::from)
}

/// Face text class pair `(added, removed)` for the menu's movement state.
pub fn motion_classes(is_moving: bool) -> (&'static str, &'static str) {
    if is_moving {
        (INACTIVE_CLASS, ACTIVE_CLASS)
    } else {
        (ACTIVE_CLASS, INACTIVE_CLASS)
    }
}

/// Where the rendered face text goes relative to the page markup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FacePlacement {
    /// In place of the page's face text elements.
    ReplaceFace,
    /// No face text on the page: an empty host right after the canvas.
    AfterCanvas,
}

impl FacePlacement {
    pub fn for_page(has_title: bool, has_description: bool) -> Self {
        if has_title || has_description {
            Self::ReplaceFace
        } else {
            Self::AfterCanvas
        }
    }

    pub fn renders_face(self) -> bool {
        self == Self::ReplaceFace
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn six_tiles_with_distinct_titles() {
        let mut titles: Vec<_> = SKILL_TILES.iter().map(|tile| tile.title).collect();
        titles.sort_unstable();
        titles.dedup();
        assert_eq!(titles.len(), 6);
    }

    #[test]
    fn index_lookup_rejects_out_of_range() {
        assert_eq!(tile_at(3.0).map(|tile| tile.title), Some("AI & Development"));
        assert!(tile_at(6.0).is_none());
        assert!(tile_at(-1.0).is_none());
        assert!(tile_at(f64::NAN).is_none());
    }

    #[test]
    fn grid_has_ten_lines() {
        let lines: Vec<f64> = grid_lines().collect();
        assert_eq!(lines.len(), 10);
        assert_eq!(lines.last(), Some(&720.0));
    }

    #[test]
    fn moving_dims_the_face() {
        assert_eq!(motion_classes(true), ("inactive", "active"));
        assert_eq!(motion_classes(false), ("active", "inactive"));
    }

    #[test]
    fn menu_mounts_on_page_canvas() {
        assert_eq!(MENU_CANVAS_ID, "infinite-grid-menu-canvas");
    }

    #[test]
    fn face_replaces_page_text_when_present() {
        assert_eq!(FacePlacement::for_page(true, true), FacePlacement::ReplaceFace);
        assert_eq!(FacePlacement::for_page(false, true), FacePlacement::ReplaceFace);
        assert!(FacePlacement::for_page(true, false).renders_face());
    }

    #[test]
    fn bare_canvas_gets_empty_host() {
        let placement = FacePlacement::for_page(false, false);
        assert_eq!(placement, FacePlacement::AfterCanvas);
        assert!(!placement.renders_face());
    }
}
