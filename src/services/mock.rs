//! Scripted in-memory repository for unit tests.

use crate::db::DbError;
use crate::models::{NewProduct, Product, ProductChanges};
use crate::services::ProductRepository;
use async_trait::async_trait;
use chrono::Utc;
use std::collections::VecDeque;
use std::sync::Mutex;

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    FindAll,
    FindOne(i32),
    Create(NewProduct),
    Update(i32, ProductChanges),
    Delete(i32),
}

pub enum Reply {
    Products(Vec<Product>),
    Product(Product),
    Deleted,
    Fail(DbError),
}

/// Answers calls with queued replies, in order, and records every call.
#[derive(Default)]
pub struct MockProductRepository {
    calls: Mutex<Vec<Call>>,
    replies: Mutex<VecDeque<Reply>>,
}

impl MockProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(self, reply: Reply) -> Self {
        self.replies.lock().unwrap().push_back(reply);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn answer(&self, call: Call) -> Reply {
        self.calls.lock().unwrap().push(call.clone());
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| panic!("no reply queued for {:?}", call))
    }
}

pub fn product(id: i32) -> Product {
    let now = Utc::now();
    Product {
        id,
        name: format!("Test Product {}", id),
        description: Some(format!("Test description for product {}", id)),
        price: 99,
        created_at: now,
        updated_at: now,
    }
}

#[async_trait]
impl ProductRepository for MockProductRepository {
    async fn find_all(&self) -> Result<Vec<Product>, DbError> {
        match self.answer(Call::FindAll) {
            Reply::Products(products) => Ok(products),
            Reply::Fail(err) => Err(err),
            _ => panic!("find_all expects Products or Fail"),
        }
    }

    async fn find_one(&self, id: i32) -> Result<Product, DbError> {
        match self.answer(Call::FindOne(id)) {
            Reply::Product(product) => Ok(product),
            Reply::Fail(err) => Err(err),
            _ => panic!("find_one expects Product or Fail"),
        }
    }

    async fn create(&self, product: NewProduct) -> Result<Product, DbError> {
        match self.answer(Call::Create(product)) {
            Reply::Product(product) => Ok(product),
            Reply::Fail(err) => Err(err),
            _ => panic!("create expects Product or Fail"),
        }
    }

    async fn update(&self, id: i32, changes: ProductChanges) -> Result<Product, DbError> {
        match self.answer(Call::Update(id, changes)) {
            Reply::Product(product) => Ok(product),
            Reply::Fail(err) => Err(err),
            _ => panic!("update expects Product or Fail"),
        }
    }

    async fn delete(&self, id: i32) -> Result<(), DbError> {
        match self.answer(Call::Delete(id)) {
            Reply::Deleted => Ok(()),
            Reply::Fail(err) => Err(err),
            _ => panic!("delete expects Deleted or Fail"),
        }
    }
}
