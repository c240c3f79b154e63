pub mod entity;
pub mod repository;

pub use entity::Book;
pub use repository::BookStore;
