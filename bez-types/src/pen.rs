/// Receives the outline of a glyph as drawing commands.
///
/// Coordinates are y-up, as in the program text. [`Glyph`](crate::Glyph)
/// implements this trait to build an outline and can replay its own outline
/// into any other implementation.
pub trait Pen {
    fn move_to(&mut self, x: f32, y: f32);
    fn line_to(&mut self, x: f32, y: f32);
    /// Quadratic segment. Bez programs only hold cubics, so builders raise
    /// these.
    fn quad_to(&mut self, cx0: f32, cy0: f32, x: f32, y: f32);
    fn curve_to(&mut self, cx0: f32, cy0: f32, cx1: f32, cy1: f32, x: f32, y: f32);
    fn close(&mut self);
}

#[cfg(feature = "kurbo")]
impl Pen for kurbo::BezPath {
    fn move_to(&mut self, x: f32, y: f32) {
        kurbo::BezPath::move_to(self, (x as f64, y as f64));
    }

    fn line_to(&mut self, x: f32, y: f32) {
        kurbo::BezPath::line_to(self, (x as f64, y as f64));
    }

    fn quad_to(&mut self, cx0: f32, cy0: f32, x: f32, y: f32) {
        kurbo::BezPath::quad_to(self, (cx0 as f64, cy0 as f64), (x as f64, y as f64));
    }

    fn curve_to(&mut self, cx0: f32, cy0: f32, cx1: f32, cy1: f32, x: f32, y: f32) {
        kurbo::BezPath::curve_to(
            self,
            (cx0 as f64, cy0 as f64),
            (cx1 as f64, cy1 as f64),
            (x as f64, y as f64),
        );
    }

    fn close(&mut self) {
        self.close_path();
    }
}
