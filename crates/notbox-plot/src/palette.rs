//! Colors for summary elements and tie-ordered raw data

use serde::Serialize;

/// RGB color with channels in `[0, 1]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    pub const RED: Self = Self::rgb(1.0, 0.0, 0.0);

    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Move each channel `amount` of the way toward white
    pub fn lighten(&self, amount: f64) -> Self {
        let mix = |c: f64| c + (1.0 - c) * amount;
        Self::rgb(mix(self.r), mix(self.g), mix(self.b))
    }

    /// Scale every channel by `factor`
    pub fn scale(&self, factor: f64) -> Self {
        Self::rgb(self.r * factor, self.g * factor, self.b * factor)
    }

    /// 8-bit channels, clamped
    pub fn to_rgb8(&self) -> (u8, u8, u8) {
        let quantize = |c: f64| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        (quantize(self.r), quantize(self.g), quantize(self.b))
    }

    /// Fully saturated, full-value color at `hue` in `[0, 1)`
    pub fn from_hue(hue: f64) -> Self {
        let h = hue.rem_euclid(1.0) * 6.0;
        let f = h - h.floor();
        match h.floor() as u8 {
            0 => Self::rgb(1.0, f, 0.0),
            1 => Self::rgb(1.0 - f, 1.0, 0.0),
            2 => Self::rgb(0.0, 1.0, f),
            3 => Self::rgb(0.0, 1.0 - f, 1.0),
            4 => Self::rgb(f, 0.0, 1.0),
            _ => Self::rgb(1.0, 0.0, 1.0 - f),
        }
    }
}

/// Fill of the SD box
pub const SD_FILL: Color = Color::rgb(0.6, 0.6, 1.0);
/// Fill of the interval box
pub const INTERVAL_FILL: Color = Color::rgb(1.0, 0.6, 0.6);
/// SD segment under the line styles
pub const SD_LINE: Color = Color::rgb(0.2, 0.2, 1.0);
/// Mean and interval lines and markers
pub const SUMMARY: Color = Color::RED;
/// Median line and marker
pub const MEDIAN: Color = Color::rgb(0.8, 0.0, 0.0);

/// How far marker faces are lightened from their edge color
pub const MARKER_FACE_LIGHTEN: f64 = 0.65;

/// Edge color for the raw data of a group, by its rank among groups
/// sharing one x position
///
/// The first group is black; later groups take evenly spaced hues at half
/// brightness. Assignment follows order of appearance within a call, so the
/// same key can get a different color when groups are reordered.
pub fn tie_color(tie_rank: usize, ties: usize) -> Color {
    if tie_rank == 0 {
        return Color::BLACK;
    }
    let hue = tie_rank as f64 / (ties.max(1) + 1) as f64;
    Color::from_hue(hue).scale(0.5)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_tie_is_black() {
        assert_eq!(tie_color(0, 1), Color::BLACK);
        assert_eq!(tie_color(0, 5), Color::BLACK);
    }

    #[test]
    fn test_later_ties_are_distinct_and_dark() {
        let colors: Vec<Color> = (0..4).map(|rank| tie_color(rank, 4)).collect();
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
            assert!(a.r <= 0.5 && a.g <= 0.5 && a.b <= 0.5);
        }
    }

    #[test]
    fn test_hues() {
        assert_eq!(Color::from_hue(0.0), Color::RED);
        assert_eq!(Color::from_hue(1.0 / 3.0).to_rgb8(), (0, 255, 0));
        assert_eq!(Color::from_hue(2.0 / 3.0).to_rgb8(), (0, 0, 255));
    }

    #[test]
    fn test_lighten() {
        let face = Color::BLACK.lighten(MARKER_FACE_LIGHTEN);
        assert!((face.r - 0.65).abs() < 1e-12);
        assert_eq!(Color::WHITE.lighten(0.5), Color::WHITE);
    }
}
