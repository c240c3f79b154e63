use super::entity::Book;
use async_trait::async_trait;

#[async_trait]
pub trait BookStore: Send + Sync {
    async fn list(&self) -> Vec<Book>;
    async fn find(&self, id: &str) -> Option<Book>;
    /// Insert or overwrite the book stored under `id`, returning the previous one.
    async fn put(&self, id: &str, book: Book) -> Option<Book>;
    async fn remove(&self, id: &str) -> Option<Book>;
}
