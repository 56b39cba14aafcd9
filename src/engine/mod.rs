mod stroke;
pub use stroke::*;

mod gesture;
pub use gesture::*;

mod pen;
pub use pen::*;
