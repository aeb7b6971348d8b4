mod grid;
mod page;
mod palette;
mod sector;
mod state;
mod stroke;

pub use grid::*;
pub use page::*;
pub use palette::*;
pub use sector::*;
pub use state::*;
pub use stroke::*;
