//! Color ramp configuration

pub struct PaletteConfig {
    /// Listed qualitative ramp used to tell discrete pairs apart (matplotlib "tab10")
    pub categorical_colors: &'static [&'static str],
    /// Anchor colors for the continuous ramp (viridis, low to high)
    pub sequential_colors: &'static [&'static str],
}

pub const PALETTE: PaletteConfig = PaletteConfig {
    categorical_colors: &[
        "#1f77b4", // Blue
        "#ff7f0e", // Orange
        "#2ca02c", // Green
        "#d62728", // Red
        "#9467bd", // Purple
        "#8c564b", // Brown
        "#e377c2", // Pink
        "#7f7f7f", // Grey
        "#bcbd22", // Olive
        "#17becf", // Cyan
    ],
    sequential_colors: &[
        "#440154", "#482878", "#3e4989", "#31688e", "#26828e", "#1f9e89", "#35b779", "#6ece58",
        "#b5de2b", "#fde725",
    ],
};
