pub mod festival;

pub use festival::{Festival, FestivalReport};
