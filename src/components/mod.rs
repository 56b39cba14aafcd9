mod brush_setting;
pub use brush_setting::*;

mod stroke_controls;
pub use stroke_controls::*;

mod drawing_surface;
pub use drawing_surface::*;
