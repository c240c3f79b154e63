pub mod book;
pub mod context;
