//! Map overlay styling handed to the rendering layer

pub struct OverlayConfig {
    /// Stroke width of a hub-to-zone route line
    pub route_line_weight: f32,
    /// Route line opacity (0.0 = invisible, 1.0 = fully opaque)
    pub route_line_opacity: f32,
    /// Marker color names for the rendering layer
    pub origin_marker_color: &'static str,
    pub destination_marker_color: &'static str,
    /// Initial zoom level suggested to the map widget
    pub initial_zoom: u8,
}

pub const OVERLAY: OverlayConfig = OverlayConfig {
    route_line_weight: 5.0,
    route_line_opacity: 0.7,
    origin_marker_color: "blue",
    destination_marker_color: "red",
    initial_zoom: 10,
};
