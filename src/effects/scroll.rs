pub const SCROLLED_THRESHOLD: f64 = 100.0;
pub const SECTION_LOOKAHEAD: f64 = 200.0;
pub const PARALLAX_FACTOR: f64 = 0.3;
pub const REVEAL_THRESHOLD: f64 = 0.15;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";
pub const SCROLLED_CLASS: &str = "scrolled";
pub const ACTIVE_CLASS: &str = "active";
pub const REVEALED_CLASS: &str = "revealed";
pub const CARD_STAGGER_SECONDS: f64 = 0.1;

pub fn navbar_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLLED_THRESHOLD
}

/// Id of the last section (in document order) whose top, minus the lookahead, has been scrolled past.
pub fn active_section<'a, I>(scroll_y: f64, sections: I) -> Option<&'a str>
where
    I: IntoIterator<Item = (&'a str, f64)>,
{
    sections
        .into_iter()
        .filter(|(_, top)| scroll_y >= top - SECTION_LOOKAHEAD)
        .last()
        .map(|(id, _)| id)
}

/// Whether a nav link `href` (e.g. `#about`) points at the active section.
pub fn link_targets(href: &str, section_id: &str) -> bool {
    href.strip_prefix('#') == Some(section_id)
}

pub fn parallax_translate(scroll_y: f64, container_top: f64) -> f64 {
    (scroll_y - container_top) * PARALLAX_FACTOR
}

pub fn parallax_transform(scroll_y: f64, container_top: f64) -> String {
    format!("translateY({}px)", parallax_translate(scroll_y, container_top))
}

/// One-way reveal: once latched it stays revealed whatever later intersections report.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RevealLatch {
    revealed: bool,
}

impl RevealLatch {
    /// Feeds one intersection report; returns true only on the transition into revealed.
    pub fn observe(&mut self, intersecting: bool) -> bool {
        if intersecting && !self.revealed {
            self.revealed = true;
            return true;
        }
        false
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }
}

pub fn card_animation_delay(index: usize) -> String {
    format!("{}s", index as f64 * CARD_STAGGER_SECONDS)
}

/// Menu and hamburger share one open flag; link clicks always close it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }
}
