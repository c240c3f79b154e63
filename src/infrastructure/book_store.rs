// src/infrastructure/book_store.rs
use crate::domain::book::{Book, BookStore};
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryBookStore {
    books: RwLock<HashMap<String, Book>>,
}

impl InMemoryBookStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BookStore for InMemoryBookStore {
    async fn list(&self) -> Vec<Book> {
        let mut books: Vec<Book> = self.books.read().await.values().cloned().collect();
        books.sort_by(|a, b| a.id.cmp(&b.id));
        books
    }

    async fn find(&self, id: &str) -> Option<Book> {
        self.books.read().await.get(id).cloned()
    }

    async fn put(&self, id: &str, book: Book) -> Option<Book> {
        self.books.write().await.insert(id.to_string(), book)
    }

    async fn remove(&self, id: &str) -> Option<Book> {
        self.books.write().await.remove(id)
    }
}
