/// The drawable seam between the simulation and whatever rasterizes it.
///
/// The four operations the backdrop needs from a 2D raster target, so
/// the field can be driven against a GPU renderer or a recording test
/// double interchangeably.
pub trait Surface {
    /// Wipes the whole surface back to the page background.
    fn clear(&mut self);

    /// Sets the fill color (linear RGB) for subsequent circles.
    fn set_fill_color(&mut self, color: [f32; 3]);

    /// Sets the alpha applied to subsequent draws.
    fn set_global_alpha(&mut self, alpha: f32);

    /// Draws a filled circle at (`x`, `y`) with the current fill color
    /// and global alpha.
    fn fill_circle(&mut self, x: f32, y: f32, radius: f32);
}
