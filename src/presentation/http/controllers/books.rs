// src/presentation/http/controllers/books.rs
//! Book catalog endpoints.
use crate::application::{HandlerError, HandlerResult};
use crate::domain::{
    book::{Book, BookStore},
    context::IdentityContext,
};
use crate::presentation::http::{
    adapter::Arguments,
    endpoint::{BodyParameter, EndpointDeclaration, UrlParameter},
    error::RegistrationResult,
    registrar::Registrar,
};
use serde_json::Value;
use std::sync::Arc;

pub const AUTH_HEADER: &str = "x-auth";
pub const WRITER_ROLE: &str = "WRITER";
const TAG: &str = "Books";

pub fn register_book_routes(
    registrar: &mut Registrar,
    store: Arc<dyn BookStore>,
) -> RegistrationResult<()> {
    let book_ref = registrar.define_schema_for::<Book>()?;
    let book_id_param = || UrlParameter::new("book_id", "Book id");

    let list_store = Arc::clone(&store);
    registrar.get(
        EndpointDeclaration::new("/books")
            .operation_id("getBooks")
            .description("Get all books")
            .tag(TAG)
            .success(&book_ref),
        move |args, ctx| list_books(Arc::clone(&list_store), args, ctx),
    )?;

    let create_store = Arc::clone(&store);
    registrar.post(
        EndpointDeclaration::new("/books")
            .operation_id("createNewBook")
            .description("Create new book")
            .tag(TAG)
            .auth(AUTH_HEADER)
            .body(
                BodyParameter::new("book", "New book")
                    .required(true)
                    .schema_ref(&book_ref),
            )
            .success(&book_ref),
        move |args, ctx| create_book(Arc::clone(&create_store), args, ctx),
    )?;

    let get_store = Arc::clone(&store);
    registrar.get(
        EndpointDeclaration::new("/books/{book_id}")
            .operation_id("getBookById")
            .description("Get one book")
            .tag(TAG)
            .parameter(book_id_param())
            .success(&book_ref),
        move |args, ctx| get_book(Arc::clone(&get_store), args, ctx),
    )?;

    let update_store = Arc::clone(&store);
    registrar.put(
        EndpointDeclaration::new("/books/{book_id}")
            .operation_id("updateBook")
            .description("Update a book")
            .tag(TAG)
            .auth(AUTH_HEADER)
            .parameter(book_id_param())
            .body(
                BodyParameter::new("update", "New book")
                    .required(true)
                    .schema_ref(&book_ref),
            )
            .success(&book_ref),
        move |args, ctx| update_book(Arc::clone(&update_store), args, ctx),
    )?;

    let delete_store = store;
    registrar.delete(
        EndpointDeclaration::new("/books/{book_id}")
            .operation_id("deleteBook")
            .description("Delete a book")
            .tag(TAG)
            .auth(AUTH_HEADER)
            .parameter(book_id_param()),
        move |args, ctx| delete_book(Arc::clone(&delete_store), args, ctx),
    )?;

    Ok(())
}

fn require_writer(ctx: Option<&IdentityContext>) -> HandlerResult<()> {
    match ctx {
        Some(ctx) if ctx.has_role(WRITER_ROLE) => Ok(()),
        _ => Err(HandlerError::forbidden(format!("{WRITER_ROLE} role required"))),
    }
}

fn book_id(args: &Arguments) -> HandlerResult<&str> {
    args.str("book_id")
        .ok_or_else(|| HandlerError::bad_request("book_id is required"))
}

async fn list_books(
    store: Arc<dyn BookStore>,
    _args: Arguments,
    _ctx: Option<IdentityContext>,
) -> HandlerResult {
    Ok(serde_json::to_value(store.list().await)?)
}

async fn create_book(
    store: Arc<dyn BookStore>,
    args: Arguments,
    ctx: Option<IdentityContext>,
) -> HandlerResult {
    require_writer(ctx.as_ref())?;
    let book: Book = args
        .decode("book")?
        .ok_or_else(|| HandlerError::internal("No book provided"))?;

    store.put(&book.id, book.clone()).await;
    Ok(serde_json::to_value(book)?)
}

async fn get_book(
    store: Arc<dyn BookStore>,
    args: Arguments,
    _ctx: Option<IdentityContext>,
) -> HandlerResult {
    let id = book_id(&args)?;
    // An unknown id yields null, which is answered with 404.
    Ok(serde_json::to_value(store.find(id).await)?)
}

async fn update_book(
    store: Arc<dyn BookStore>,
    args: Arguments,
    ctx: Option<IdentityContext>,
) -> HandlerResult {
    require_writer(ctx.as_ref())?;
    let id = book_id(&args)?;
    let update: Book = args
        .decode("update")?
        .ok_or_else(|| HandlerError::bad_request("No update provided"))?;

    if store.find(id).await.is_none() {
        return Err(HandlerError::not_found("Book not found"));
    }

    let previous = store.put(id, update).await;
    Ok(serde_json::to_value(previous)?)
}

async fn delete_book(
    store: Arc<dyn BookStore>,
    args: Arguments,
    ctx: Option<IdentityContext>,
) -> HandlerResult {
    require_writer(ctx.as_ref())?;
    let id = book_id(&args)?;
    store.remove(id).await;
    Ok(Value::Null)
}
