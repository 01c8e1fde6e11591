//! Star rating widget state.
//!
//! Five stars, 1-based. Fill follows the committed rating; color follows
//! the hover preview while the pointer is over the widget, and the
//! committed rating otherwise.

pub const STAR_COUNT: u8 = 5;

pub const FILLED_GLYPH: &str = "\u{2605}";
pub const EMPTY_GLYPH: &str = "\u{2606}";
pub const LIT_COLOR: &str = "#ffc107";
pub const UNLIT_COLOR: &str = "#ddd";

/// One rendered star.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Star {
    pub index: u8,
    pub filled: bool,
    pub lit: bool,
}

impl Star {
    pub fn glyph(&self) -> &'static str {
        if self.filled { FILLED_GLYPH } else { EMPTY_GLYPH }
    }

    pub fn color(&self) -> &'static str {
        if self.lit { LIT_COLOR } else { UNLIT_COLOR }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StarRating {
    committed: u8,
    hover: Option<u8>,
    interactive: bool,
}

impl StarRating {
    /// Read-only stars for a (possibly fractional) average.
    pub fn display(rating: f64) -> Self {
        Self {
            committed: whole_stars(rating),
            hover: None,
            interactive: false,
        }
    }

    /// Clickable stars starting at `rating`.
    pub fn interactive(rating: u8) -> Self {
        Self {
            committed: rating.min(STAR_COUNT),
            hover: None,
            interactive: true,
        }
    }

    pub fn value(&self) -> u8 {
        self.committed
    }

    pub fn is_interactive(&self) -> bool {
        self.interactive
    }

    /// Commit star `index`. Returns the new value when it was accepted.
    pub fn click(&mut self, index: u8) -> Option<u8> {
        if !self.interactive || !(1..=STAR_COUNT).contains(&index) {
            return None;
        }
        self.committed = index;
        self.hover = None;
        Some(index)
    }

    /// Preview star `index` without committing it.
    pub fn hover(&mut self, index: u8) {
        if self.interactive && (1..=STAR_COUNT).contains(&index) {
            self.hover = Some(index);
        }
    }

    /// Pointer left the widget: colors go back to the committed value.
    pub fn leave(&mut self) {
        self.hover = None;
    }

    pub fn stars(&self) -> [Star; STAR_COUNT as usize] {
        let lit_up_to = self.hover.unwrap_or(self.committed);
        std::array::from_fn(|i| {
            let index = i as u8 + 1;
            Star {
                index,
                filled: index <= self.committed,
                lit: index <= lit_up_to,
            }
        })
    }
}

/// Number of whole stars for an average rating, clamped to `0..=5`.
pub fn whole_stars(rating: f64) -> u8 {
    if rating.is_nan() || rating <= 0.0 {
        0
    } else {
        rating.floor().min(f64::from(STAR_COUNT)) as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn glyphs(rating: &StarRating) -> String {
        rating.stars().iter().map(Star::glyph).collect()
    }

    #[test]
    fn test_three_of_five() {
        let rating = StarRating::display(3.0);
        assert_eq!(glyphs(&rating), "★★★☆☆");
        let lit: Vec<bool> = rating.stars().iter().map(|s| s.lit).collect();
        assert_eq!(lit, [true, true, true, false, false]);
    }

    #[test]
    fn test_fractional_and_out_of_range() {
        assert_eq!(StarRating::display(4.6).value(), 4);
        assert_eq!(StarRating::display(7.0).value(), 5);
        assert_eq!(StarRating::display(-1.0).value(), 0);
        assert_eq!(StarRating::display(f64::NAN).value(), 0);
    }

    #[test]
    fn test_display_ignores_clicks() {
        let mut rating = StarRating::display(2.0);
        assert_eq!(rating.click(5), None);
        rating.hover(5);
        assert_eq!(rating.value(), 2);
        assert!(rating.stars().iter().all(|s| s.lit == s.filled));
    }

    #[test]
    fn test_hover_previews_color_only() {
        let mut rating = StarRating::interactive(2);
        rating.hover(4);
        let stars = rating.stars();
        assert_eq!(glyphs(&rating), "★★☆☆☆");
        assert!(stars[3].lit);
        assert!(!stars[4].lit);
        assert_eq!(stars[3].color(), LIT_COLOR);
        assert_eq!(rating.value(), 2);
    }

    #[test]
    fn test_leave_restores_committed() {
        let mut rating = StarRating::interactive(2);
        rating.hover(5);
        rating.leave();
        let lit = rating.stars().iter().filter(|s| s.lit).count();
        assert_eq!(lit, 2);
    }

    #[test]
    fn test_click_commits() {
        let mut rating = StarRating::interactive(0);
        rating.hover(3);
        assert_eq!(rating.click(4), Some(4));
        assert_eq!(glyphs(&rating), "★★★★☆");
        assert_eq!(rating.click(6), None);
        assert_eq!(rating.value(), 4);
    }
}
