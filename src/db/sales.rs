use async_trait::async_trait;
use chrono::{DateTime, Utc};
use futures::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId, Document},
    Client, Collection,
};
use std::sync::Arc;
use thiserror::Error;

use crate::models::booking::Booking;
use crate::models::contact::ContactSubmission;

pub const SALES_DB: &str = "Sales";

#[derive(Debug, Error)]
pub enum SalesError {
    #[error("sales query failed: {0}")]
    Query(#[from] mongodb::error::Error),
    #[error("sales store unavailable: {0}")]
    Unavailable(String),
    #[error("insert did not return an object id")]
    MalformedInsertId,
}

/// Write and reporting access to completed sales.
#[async_trait]
pub trait SalesStore: Send + Sync {
    async fn insert_booking(&self, booking: &Booking) -> Result<ObjectId, SalesError>;
    async fn bookings_between(
        &self,
        start: Option<DateTime<Utc>>,
        end: Option<DateTime<Utc>>,
    ) -> Result<Vec<Booking>, SalesError>;
    async fn insert_contact(&self, contact: &ContactSubmission)
        -> Result<ObjectId, SalesError>;
}

pub struct MongoSales {
    client: Arc<Client>,
}

impl MongoSales {
    pub fn new(client: Arc<Client>) -> Self {
        Self { client }
    }

    fn bookings_col(&self) -> Collection<Booking> {
        self.client.database(SALES_DB).collection("Bookings")
    }

    fn contacts_col(&self) -> Collection<ContactSubmission> {
        self.client.database(SALES_DB).collection("Contacts")
    }
}

#[async_trait]
impl SalesStore for MongoSales {
    async fn insert_booking(&self, booking: &Booking) -> Result<ObjectId, SalesError> {
        let result = self.bookings_col().insert_one(booking).await?;
        result
            .inserted_id
            .as_object_id()
            .ok_or(SalesError::MalformedInsertId)
    }

    async fn bookings_between(
        &self,
        start: Option<DateTime<Utc>>,
        end: Option<DateTime<Utc>>,
    ) -> Result<Vec<Booking>, SalesError> {
        let mut range = Document::new();
        if let Some(start) = start {
            range.insert("$gte", mongodb::bson::DateTime::from_chrono(start));
        }
        if let Some(end) = end {
            range.insert("$lte", mongodb::bson::DateTime::from_chrono(end));
        }
        let filter = if range.is_empty() {
            doc! {}
        } else {
            doc! { "created_at": range }
        };
        let cursor = self
            .bookings_col()
            .find(filter)
            .sort(doc! { "created_at": -1 })
            .await?;
        Ok(cursor.try_collect().await?)
    }

    async fn insert_contact(
        &self,
        contact: &ContactSubmission,
    ) -> Result<ObjectId, SalesError> {
        let result = self.contacts_col().insert_one(contact).await?;
        result
            .inserted_id
            .as_object_id()
            .ok_or(SalesError::MalformedInsertId)
    }
}
