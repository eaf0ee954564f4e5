//! CRUD command table for the categories resource
//!
//! Each mutating UI action maps to exactly one command. The command knows
//! its HTTP verb, resource path, body and the toast shown on success.

use super::aggregate::{Category, CategoryId, CategoryPayload};
use crate::domain::common::{AggregateId, AggregateRoot};

/// HTTP verbs used against the remote service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Path of the collection endpoint (`GET /categories`)
pub fn list_path() -> String {
    format!("/{}", Category::collection_name())
}

/// Path of a single record (`PUT`/`DELETE /categories/{id}`)
pub fn item_path(id: CategoryId) -> String {
    format!(
        "/{}/{}",
        Category::collection_name(),
        urlencoding::encode(&id.as_string())
    )
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryCommand {
    Create(CategoryPayload),
    Update { id: CategoryId, payload: CategoryPayload },
    Delete { id: CategoryId },
}

impl CategoryCommand {
    pub fn method(&self) -> HttpMethod {
        match self {
            CategoryCommand::Create(_) => HttpMethod::Post,
            CategoryCommand::Update { .. } => HttpMethod::Put,
            CategoryCommand::Delete { .. } => HttpMethod::Delete,
        }
    }

    pub fn path(&self) -> String {
        match self {
            // The remote expects the trailing slash on create
            CategoryCommand::Create(_) => format!("{}/", list_path()),
            CategoryCommand::Update { id, .. } | CategoryCommand::Delete { id } => item_path(*id),
        }
    }

    /// Full URL against an already normalised base (no trailing slash)
    pub fn url(&self, base: &str) -> String {
        format!("{}{}", base, self.path())
    }

    pub fn payload(&self) -> Option<&CategoryPayload> {
        match self {
            CategoryCommand::Create(payload) | CategoryCommand::Update { payload, .. } => {
                Some(payload)
            }
            CategoryCommand::Delete { .. } => None,
        }
    }

    pub fn success_message(&self) -> &'static str {
        match self {
            CategoryCommand::Create(_) => "Se agregó la categoría",
            CategoryCommand::Update { .. } => "Se actualizó la categoría",
            CategoryCommand::Delete { .. } => "Se eliminó la categoría",
        }
    }
}

/// Command for an answered delete confirmation; only "yes" deletes
pub fn delete_plan(confirmed: bool, id: CategoryId) -> Option<CategoryCommand> {
    confirmed.then_some(CategoryCommand::Delete { id })
}
