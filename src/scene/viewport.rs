//! Viewport into the infinite scene

use crate::math::Span;

/// Visible window, anchored at `cursor_x` on its left edge
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub cursor_x: f64,
    pub width: f64,
    pub height: f64,
    pub zoom: f64,
}

impl Viewport {
    pub fn new(cursor_x: f64, width: f64, height: f64, zoom: f64) -> Self {
        Self { cursor_x, width, height, zoom }
    }

    pub fn min(&self) -> f64 {
        self.cursor_x
    }

    pub fn max(&self) -> f64 {
        self.cursor_x + self.width
    }

    /// Horizontal extent covered by the viewport
    pub fn span(&self) -> Span {
        Span::new(self.min(), self.max())
    }

    /// SVG view rectangle: `x y width/zoom height/zoom`
    pub fn view_box(&self) -> String {
        format!(
            "{} 0 {} {}",
            self.cursor_x,
            self.width / self.zoom,
            self.height / self.zoom
        )
    }

    /// Wrap rendered markup in a fixed-size SVG frame blended with multiply
    pub fn wrap_document(&self, body: &str) -> String {
        format!(
            "<svg xmlns='http://www.w3.org/2000/svg' width='{}' height='{}' \
             style='mix-blend-mode:multiply;' viewBox='{}'>\
             <g transform='translate(0,0)'>{}</g></svg>",
            self.width,
            self.height,
            self.view_box(),
            body
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds() {
        let viewport = Viewport::new(100.0, 3000.0, 800.0, 1.0);
        assert_eq!(viewport.min(), 100.0);
        assert_eq!(viewport.max(), 3100.0);
        assert_eq!(viewport.span(), Span::new(100.0, 3100.0));
    }

    #[test]
    fn test_view_box() {
        let viewport = Viewport::new(-250.0, 3000.0, 800.0, 2.0);
        assert_eq!(viewport.view_box(), "-250 0 1500 400");
    }

    #[test]
    fn test_wrap_document() {
        let viewport = Viewport::new(0.0, 300.0, 100.0, 1.0);
        let doc = viewport.wrap_document("<circle/>");
        let open = "<svg xmlns='http://www.w3.org/2000/svg' width='300' height='100'";
        assert!(doc.starts_with(open));
        assert!(doc.contains("mix-blend-mode:multiply;"));
        assert!(doc.contains("viewBox='0 0 300 100'"));
        assert!(doc.ends_with("<g transform='translate(0,0)'><circle/></g></svg>"));
    }
}
