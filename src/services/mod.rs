mod product_repository;
mod product_service;

#[cfg(test)]
pub(crate) mod mock;

pub use product_repository::{PgProductRepository, ProductRepository};
pub use product_service::ProductService;
