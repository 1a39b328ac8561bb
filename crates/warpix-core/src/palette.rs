//! Ordered color palettes with a transparent sentinel
//!
//! A [`Palette`] is a non-empty ordered list of [`Color`]s. Element 0
//! is always the transparent sentinel: nearest-color search never
//! returns it for an opaque query, out-of-range index lookups fall back
//! to it, and remapping a color that is not on the source palette
//! yields the target's sentinel.
//!
//! Every entry shares one precision mode. The constructor converts all
//! entries to the mode of element 0, so mixed-mode input is normalized
//! rather than rejected.

use crate::color::Color;
use crate::error::{Error, Result};

/// An ordered, non-empty color set; element 0 is the transparent
/// sentinel.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    colors: Vec<Color>,
    legacy: bool,
}

impl Palette {
    /// Create a palette from an ordered list of colors.
    ///
    /// Entries are converted to the precision mode of the first color.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyPalette`] when `colors` is empty.
    pub fn new(colors: Vec<Color>) -> Result<Self> {
        let Some(first) = colors.first() else {
            return Err(Error::EmptyPalette);
        };
        let legacy = first.is_legacy();
        let colors = colors
            .iter()
            .map(|c| if legacy { c.to_legacy() } else { c.to_full() })
            .collect();
        Ok(Self { colors, legacy })
    }

    /// Number of colors, sentinel included.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always false; a palette holds at least the sentinel.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Whether entries are in legacy precision.
    pub fn is_legacy(&self) -> bool {
        self.legacy
    }

    /// All entries, sentinel first.
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// The transparent sentinel (element 0).
    pub fn sentinel(&self) -> &Color {
        &self.colors[0]
    }

    /// Entry at `index`, falling back to the sentinel when the index is
    /// out of range.
    pub fn get(&self, index: usize) -> &Color {
        self.colors.get(index).unwrap_or(&self.colors[0])
    }

    /// The palette entry closest to `color`.
    ///
    /// A fully transparent query returns the sentinel unconditionally.
    /// Otherwise the query is converted to the palette's precision mode
    /// and entries after the sentinel are scanned with
    /// [`Color::distance_sq`]; the first entry at the minimum distance
    /// wins. A palette holding only the sentinel returns the sentinel.
    pub fn nearest(&self, color: &Color) -> &Color {
        if color.is_blank() {
            return self.sentinel();
        }
        let query = if self.legacy {
            color.to_legacy()
        } else {
            color.to_full()
        };

        let mut best: Option<(&Color, u32)> = None;
        for candidate in &self.colors[1..] {
            let dist = candidate.distance_sq(&query);
            if best.is_none_or(|(_, d)| dist < d) {
                best = Some((candidate, dist));
            }
        }
        best.map_or(self.sentinel(), |(c, _)| c)
    }

    /// Index of the entry exactly matching `color` (mode-converting
    /// comparison), or `None`.
    pub fn index_of(&self, color: &Color) -> Option<usize> {
        self.colors.iter().position(|c| c.matches(color))
    }

    /// Carry `color` from this palette to the same position in
    /// `target`.
    ///
    /// Exact-match lookup, not nearest-match: a color that is not on
    /// this palette maps to the target's sentinel. A target shorter
    /// than this palette also falls back to its sentinel.
    pub fn remap(&self, color: &Color, target: &Palette) -> Color {
        match self.index_of(color) {
            Some(index) => *target.get(index),
            None => *target.sentinel(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rgb_palette() -> Palette {
        Palette::new(vec![
            Color::transparent(),
            Color::rgb(255, 0, 0),
            Color::rgb(0, 255, 0),
            Color::rgb(0, 0, 255),
        ])
        .unwrap()
    }

    #[test]
    fn test_empty_palette_fails() {
        assert!(matches!(Palette::new(vec![]), Err(Error::EmptyPalette)));
    }

    #[test]
    fn test_mode_follows_first_color() {
        let p = Palette::new(vec![Color::legacy(0, 0, 0), Color::rgb(248, 252, 248)]).unwrap();
        assert!(p.is_legacy());
        // The full-precision entry was quantized on the way in
        assert_eq!(p.colors()[1], Color::legacy(31, 63, 31));
    }

    #[test]
    fn test_get_out_of_range_falls_back_to_sentinel() {
        let p = rgb_palette();
        assert_eq!(p.get(2), &Color::rgb(0, 255, 0));
        assert_eq!(p.get(99), p.sentinel());
    }

    #[test]
    fn test_nearest_transparent_returns_sentinel() {
        let p = rgb_palette();
        assert_eq!(p.nearest(&Color::transparent()), p.sentinel());
        assert_eq!(p.nearest(&Color::rgba(200, 200, 200, 0)), p.sentinel());
    }

    #[test]
    fn test_nearest_excludes_sentinel() {
        // The query is closest to the sentinel by the metric, but the
        // sentinel is never a candidate for an opaque query.
        let p = Palette::new(vec![Color::transparent(), Color::rgb(255, 255, 255)]).unwrap();
        assert_eq!(p.nearest(&Color::rgb(1, 1, 1)), &Color::rgb(255, 255, 255));
    }

    #[test]
    fn test_nearest_picks_closest() {
        let p = rgb_palette();
        assert_eq!(p.nearest(&Color::rgb(10, 240, 10)), &Color::rgb(0, 255, 0));
        assert_eq!(p.nearest(&Color::rgb(10, 10, 240)), &Color::rgb(0, 0, 255));
    }

    #[test]
    fn test_nearest_tie_prefers_first() {
        let p = Palette::new(vec![
            Color::transparent(),
            Color::rgb(0, 100, 0),
            Color::rgb(0, 140, 0),
        ])
        .unwrap();
        // Equidistant in green from both entries
        let picked = p.nearest(&Color::rgb(0, 120, 0));
        assert_eq!(picked, &Color::rgb(0, 100, 0));
    }

    #[test]
    fn test_nearest_sentinel_only_palette() {
        let p = Palette::new(vec![Color::transparent()]).unwrap();
        assert_eq!(p.nearest(&Color::rgb(1, 2, 3)), p.sentinel());
    }

    #[test]
    fn test_index_of_converts_modes() {
        let p = Palette::new(vec![Color::legacy(0, 0, 0), Color::legacy(31, 63, 31)]).unwrap();
        assert_eq!(p.index_of(&Color::rgb(248, 252, 248)), Some(1));
        assert_eq!(p.index_of(&Color::rgb(1, 2, 3)), None);
    }

    #[test]
    fn test_remap_same_index() {
        let from = rgb_palette();
        let to = Palette::new(vec![
            Color::transparent(),
            Color::rgb(10, 10, 10),
            Color::rgb(20, 20, 20),
            Color::rgb(30, 30, 30),
        ])
        .unwrap();
        assert_eq!(
            from.remap(&Color::rgb(0, 255, 0), &to),
            Color::rgb(20, 20, 20)
        );
    }

    #[test]
    fn test_remap_unknown_color_hits_target_sentinel() {
        let from = rgb_palette();
        let to = rgb_palette();
        assert_eq!(from.remap(&Color::rgb(7, 7, 7), &to), *to.sentinel());
    }

    #[test]
    fn test_remap_short_target_falls_back() {
        let from = rgb_palette();
        let to = Palette::new(vec![Color::transparent(), Color::rgb(1, 1, 1)]).unwrap();
        // Index 3 in the source has no counterpart in the target
        assert_eq!(from.remap(&Color::rgb(0, 0, 255), &to), *to.sentinel());
    }
}
