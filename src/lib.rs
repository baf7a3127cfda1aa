pub mod books;
pub mod cards;
pub mod catalog;
pub mod core;
pub mod genres;
pub mod utils;
