use crate::*;

/// The page the board is drawn on. Every html string handed over has already been sanitized.
pub trait RenderSurface {
    fn render_header(&self, titles: &[String]);

    fn render_body(&self, layout: &BoardLayout);

    fn update_cell(&self, coord: Coord, html: &str);

    /// Toggles the loading indicator, including its `aria-busy` flag.
    fn set_loading(&self, loading: bool);

    fn set_start_enabled(&self, enabled: bool);
}
