pub mod festival;
pub mod style;

pub use festival::{Festival, FestivalDisplay};
pub use style::Style;
