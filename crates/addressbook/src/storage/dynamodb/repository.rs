//! DynamoDB repository implementation.
//!
//! Implements `ContactRepository` from `addressbook_core::storage` using DynamoDB.

use async_trait::async_trait;
use aws_sdk_dynamodb::config::Region;
use aws_sdk_dynamodb::Client;

use addressbook_core::contact::{Contact, ContactDetails};
use addressbook_core::storage::{ContactRepository, Result};

use super::conversions::{
    contact_to_item, details_to_values, item_to_contact, phone_key, PHONE_ABSENT, PHONE_PRESENT,
    UPDATE_DETAILS_EXPRESSION,
};
use super::error::{
    map_delete_item_error, map_get_item_error, map_put_item_error, map_scan_error,
    map_update_item_error,
};
use crate::config::Config;

/// DynamoDB-based repository implementation.
pub struct DynamoDbRepository {
    client: Client,
    table_name: String,
}

impl DynamoDbRepository {
    /// Creates a new repository with the given DynamoDB client and table name.
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    /// Creates a new repository from process configuration.
    ///
    /// Uses the AWS SDK default credential chain with the configured region.
    pub async fn from_config(config: &Config) -> Self {
        let sdk_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(Region::new(config.region.clone()))
            .load()
            .await;

        Self::new(Client::new(&sdk_config), config.table_name.clone())
    }

    /// Get the table name.
    pub fn table_name(&self) -> &str {
        &self.table_name
    }
}

#[async_trait]
impl ContactRepository for DynamoDbRepository {
    async fn get_contact(&self, phone: &str) -> Result<Option<Contact>> {
        let result = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .set_key(Some(phone_key(phone)))
            .send()
            .await
            .map_err(map_get_item_error)?;

        match result.item {
            Some(item) => Ok(Some(item_to_contact(&item)?)),
            None => Ok(None),
        }
    }

    async fn list_contacts(&self) -> Result<Vec<Contact>> {
        // Follows LastEvaluatedKey until the whole table has been read
        let items: Vec<_> = self
            .client
            .scan()
            .table_name(&self.table_name)
            .into_paginator()
            .items()
            .send()
            .collect::<std::result::Result<Vec<_>, _>>()
            .await
            .map_err(map_scan_error)?;

        items.iter().map(item_to_contact).collect()
    }

    async fn create_contact(&self, contact: &Contact) -> Result<()> {
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(contact_to_item(contact)))
            .condition_expression(PHONE_ABSENT)
            .send()
            .await
            .map_err(|e| map_put_item_error(e, &contact.phone))?;

        Ok(())
    }

    async fn update_contact(&self, phone: &str, details: &ContactDetails) -> Result<()> {
        self.client
            .update_item()
            .table_name(&self.table_name)
            .set_key(Some(phone_key(phone)))
            .update_expression(UPDATE_DETAILS_EXPRESSION)
            .set_expression_attribute_values(Some(details_to_values(details)))
            .condition_expression(PHONE_PRESENT)
            .send()
            .await
            .map_err(|e| map_update_item_error(e, phone))?;

        Ok(())
    }

    async fn delete_contact(&self, phone: &str) -> Result<()> {
        self.client
            .delete_item()
            .table_name(&self.table_name)
            .set_key(Some(phone_key(phone)))
            .condition_expression(PHONE_PRESENT)
            .send()
            .await
            .map_err(|e| map_delete_item_error(e, phone))?;

        Ok(())
    }
}
