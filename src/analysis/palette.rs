use colorgrad::Gradient;
use serde::{Deserialize, Serialize};

use crate::config::PALETTE;
use crate::error::PairError;

/// Which ramp to sample
#[derive(
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    Default,
    Debug,
    Serialize,
    Deserialize,
    strum_macros::EnumIter,
    strum_macros::EnumString,
    strum_macros::Display,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    /// Distinguishes discrete pairs
    #[default]
    Categorical,
    /// Ordered emphasis, e.g. border overlays
    Sequential,
}

/// An RGB color with channels in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Every channel is rounded the same way: round(clamp(c) * 255).
    pub fn to_rgb8(&self) -> [u8; 3] {
        [channel_to_u8(self.r), channel_to_u8(self.g), channel_to_u8(self.b)]
    }

    /// "#rrggbb"
    pub fn to_hex(&self) -> String {
        let [r, g, b] = self.to_rgb8();
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    }
}

impl From<colorgrad::Color> for Rgb {
    fn from(color: colorgrad::Color) -> Self {
        Rgb::new(color.r, color.g, color.b)
    }
}

fn channel_to_u8(c: f32) -> u8 {
    (c.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Hands out `n` evenly spaced colors from a fixed ramp per scheme.
///
/// The categorical ramp is a listed colormap: position t picks entry
/// `floor(t * len)`, clamped to the last entry. The sequential ramp is a
/// linear gradient through its anchor colors.
pub struct PaletteAssigner {
    categorical: Vec<Rgb>,
    sequential: colorgrad::LinearGradient,
}

impl PaletteAssigner {
    pub fn new(categorical_html: &[&str], sequential_html: &[&str]) -> Result<Self, PairError> {
        if categorical_html.is_empty() {
            return Err(PairError::InvalidRamp(
                "categorical ramp has no colors".to_string(),
            ));
        }
        let categorical = categorical_html
            .iter()
            .map(|html| {
                colorgrad::Color::from_html(html)
                    .map(Rgb::from)
                    .map_err(|e| PairError::InvalidRamp(format!("{}: {}", html, e)))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let sequential = colorgrad::GradientBuilder::new()
            .html_colors(sequential_html)
            .build::<colorgrad::LinearGradient>()
            .map_err(|e| PairError::InvalidRamp(e.to_string()))?;

        Ok(Self {
            categorical,
            sequential,
        })
    }

    /// Built from the ramps in `config::PALETTE`.
    pub fn from_config() -> Result<Self, PairError> {
        Self::new(PALETTE.categorical_colors, PALETTE.sequential_colors)
    }

    pub fn colors(&self, n: usize, scheme: ColorScheme) -> Vec<Rgb> {
        sample_positions(n)
            .map(|t| self.at(t, scheme))
            .collect()
    }

    /// Signed entry point for counts that come from outside (CLI, UI).
    pub fn colors_for_count(&self, n: i64, scheme: ColorScheme) -> Result<Vec<Rgb>, PairError> {
        let n = usize::try_from(n).map_err(|_| PairError::NegativeColorCount(n))?;
        Ok(self.colors(n, scheme))
    }

    pub fn hex_colors(&self, n: usize, scheme: ColorScheme) -> Vec<String> {
        self.colors(n, scheme).iter().map(Rgb::to_hex).collect()
    }

    fn at(&self, t: f64, scheme: ColorScheme) -> Rgb {
        match scheme {
            ColorScheme::Categorical => {
                let len = self.categorical.len();
                let idx = ((t * len as f64).floor() as usize).min(len - 1);
                self.categorical[idx]
            }
            ColorScheme::Sequential => Rgb::from(self.sequential.at(t as f32)),
        }
    }
}

// n evenly spaced points across [0, 1], endpoints included; a single point sits at 0.
fn sample_positions(n: usize) -> impl Iterator<Item = f64> {
    (0..n).map(move |i| {
        if n <= 1 {
            0.0
        } else {
            i as f64 / (n - 1) as f64
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    fn assigner() -> PaletteAssigner {
        PaletteAssigner::from_config().unwrap()
    }

    #[test]
    fn test_sizes() {
        let palette = assigner();
        for scheme in ColorScheme::iter() {
            assert!(palette.colors(0, scheme).is_empty());
            assert_eq!(palette.colors(1, scheme).len(), 1);
            assert_eq!(palette.colors(7, scheme).len(), 7);
        }
    }

    #[test]
    fn test_deterministic() {
        let palette = assigner();
        assert_eq!(
            palette.colors(5, ColorScheme::Categorical),
            palette.colors(5, ColorScheme::Categorical)
        );
        assert_eq!(
            assigner().hex_colors(12, ColorScheme::Sequential),
            assigner().hex_colors(12, ColorScheme::Sequential)
        );
    }

    #[test]
    fn test_categorical_matches_listed_ramp() {
        let palette = assigner();
        // t = 0, 0.25, 0.5, 0.75, 1.0 -> entries 0, 2, 5, 7, 9
        assert_eq!(
            palette.hex_colors(5, ColorScheme::Categorical),
            vec!["#1f77b4", "#2ca02c", "#8c564b", "#7f7f7f", "#17becf"]
        );
        assert_eq!(
            palette.hex_colors(1, ColorScheme::Categorical),
            vec!["#1f77b4"]
        );
    }

    #[test]
    fn test_sequential_hits_both_ends() {
        let hex = assigner().hex_colors(2, ColorScheme::Sequential);
        assert_eq!(hex, vec!["#440154", "#fde725"]);
    }

    #[test]
    fn test_negative_count_is_rejected() {
        let err = assigner()
            .colors_for_count(-1, ColorScheme::Categorical)
            .unwrap_err();
        assert_eq!(err, PairError::NegativeColorCount(-1));
        assert_eq!(
            assigner()
                .colors_for_count(3, ColorScheme::Sequential)
                .unwrap()
                .len(),
            3
        );
    }

    #[test]
    fn test_hex_rounds_each_channel() {
        // 0.5 * 255 = 127.5 -> 128; 0.1 * 255 = 25.5 -> 26
        assert_eq!(Rgb::new(0.5, 0.1, 1.0).to_hex(), "#801aff");
        assert_eq!(Rgb::new(-0.2, 0.0, 1.4).to_rgb8(), [0, 0, 255]);
    }

    #[test]
    fn test_scheme_parsing() {
        assert_eq!(
            "Sequential".parse::<ColorScheme>().unwrap(),
            ColorScheme::Sequential
        );
        assert_eq!(ColorScheme::Categorical.to_string(), "categorical");
        assert!("rainbow".parse::<ColorScheme>().is_err());
    }

    #[test]
    fn test_bad_ramp_is_rejected() {
        assert!(PaletteAssigner::new(&[], PALETTE.sequential_colors).is_err());
        assert!(PaletteAssigner::new(&["#zzzzzz"], PALETTE.sequential_colors).is_err());
    }
}
