pub mod error;
pub mod logic;
pub mod models;

pub use error::GridError;
pub use logic::matcher::{exists, exists_in_rows, find_path, search};
pub use models::{
    grid::LetterGrid,
    search::{SearchOptions, SearchOutcome, SearchReport},
    Coordinate,
};
