use crate::domain::common::{AggregateId, AggregateRoot};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::commands::CategoryCommand;

// ============================================================================
// ID Type
// ============================================================================

/// Category identifier assigned by the remote service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(pub i64);

impl CategoryId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl AggregateId for CategoryId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        <i64 as AggregateId>::from_string(s).map(CategoryId::new)
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Category as returned by `GET /categories`
///
/// The remote owns the record; the UI only keeps a cached copy for rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub image: String,

    #[serde(rename = "updatedAt", default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Category {
    /// Copy this record into an edit buffer
    pub fn to_dto(&self) -> CategoryDto {
        CategoryDto {
            id: Some(self.id.as_string()),
            name: self.name.clone(),
            image: self.image.clone(),
        }
    }
}

impl AggregateRoot for Category {
    fn collection_name() -> &'static str {
        "categories"
    }

    fn element_name() -> &'static str {
        "Categoría"
    }

    fn list_name() -> &'static str {
        "Categorías"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Create/edit mode of the shared category modal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormMode {
    #[default]
    Create,
    Edit,
}

impl FormMode {
    pub fn title(&self) -> &'static str {
        match self {
            FormMode::Create => "Registrar Categoria",
            FormMode::Edit => "Editar Categoria",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self {
            FormMode::Create => "Agregar",
            FormMode::Edit => "Guardar Cambios",
        }
    }
}

/// Local validation failures; none of them reach the network
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Por favor, complete todos los campos")]
    MissingFields,
    #[error("Identificador de categoría inválido: {0}")]
    InvalidId(String),
}

/// Edit buffer behind the modal form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CategoryDto {
    pub id: Option<String>,
    pub name: String,
    pub image: String,
}

impl CategoryDto {
    pub fn mode(&self) -> FormMode {
        if self.id.is_some() {
            FormMode::Edit
        } else {
            FormMode::Create
        }
    }

    /// Both fields must be non-blank
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty() && !self.image.trim().is_empty()
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.is_complete() {
            return Err(ValidationError::MissingFields);
        }
        if let Some(id) = &self.id {
            CategoryId::from_string(id).map_err(|_| ValidationError::InvalidId(id.clone()))?;
        }
        Ok(())
    }

    /// Wire body; values are sent as typed
    pub fn payload(&self) -> CategoryPayload {
        CategoryPayload {
            name: self.name.clone(),
            image: self.image.clone(),
        }
    }

    /// Turn the buffer into the single request a submit should issue
    pub fn plan_submission(&self) -> Result<CategoryCommand, ValidationError> {
        self.validate()?;
        let payload = self.payload();
        match &self.id {
            None => Ok(CategoryCommand::Create(payload)),
            Some(id) => {
                let id = CategoryId::from_string(id)
                    .map_err(|_| ValidationError::InvalidId(id.clone()))?;
                Ok(CategoryCommand::Update { id, payload })
            }
        }
    }
}

/// Body of `POST /categories/` and `PUT /categories/{id}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryPayload {
    pub name: String,
    pub image: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto(id: Option<&str>, name: &str, image: &str) -> CategoryDto {
        CategoryDto {
            id: id.map(str::to_string),
            name: name.to_string(),
            image: image.to_string(),
        }
    }

    #[test]
    fn test_decodes_remote_category() {
        let json = r#"{
            "id": 7,
            "name": "Clothes",
            "slug": "clothes",
            "image": "https://i.imgur.com/QkIa5tT.jpeg",
            "creationAt": "2024-03-15T14:02:26.000Z",
            "updatedAt": "2024-03-16T09:00:00.000Z"
        }"#;
        let category: Category = serde_json::from_str(json).unwrap();
        assert_eq!(category.id, CategoryId(7));
        assert_eq!(category.name, "Clothes");
        assert_eq!(
            category.updated_at.unwrap().to_rfc3339(),
            "2024-03-16T09:00:00+00:00"
        );
    }

    #[test]
    fn test_decodes_minimal_category() {
        let json = r#"[{"id": 1, "name": "A", "image": "http://x/a.png", "extra": true}]"#;
        let list: Vec<Category> = serde_json::from_str(json).unwrap();
        assert_eq!(list.len(), 1);
        assert!(list[0].updated_at.is_none());
    }

    #[test]
    fn test_mode_follows_id() {
        assert_eq!(dto(None, "a", "b").mode(), FormMode::Create);
        assert_eq!(dto(Some("3"), "a", "b").mode(), FormMode::Edit);
    }

    #[test]
    fn test_mode_labels() {
        assert_eq!(FormMode::Create.title(), "Registrar Categoria");
        assert_eq!(FormMode::Create.submit_label(), "Agregar");
        assert_eq!(FormMode::Edit.title(), "Editar Categoria");
        assert_eq!(FormMode::Edit.submit_label(), "Guardar Cambios");
    }

    #[test]
    fn test_blank_fields_plan_no_request() {
        for form in [
            dto(None, "", "http://x/a.png"),
            dto(None, "Shoes", "   "),
            dto(Some("4"), "  ", ""),
        ] {
            assert_eq!(form.plan_submission(), Err(ValidationError::MissingFields));
        }
        assert_eq!(
            ValidationError::MissingFields.to_string(),
            "Por favor, complete todos los campos"
        );
    }

    #[test]
    fn test_create_plan_keeps_values_as_typed() {
        let command = dto(None, " Shoes ", "http://x/s.png").plan_submission().unwrap();
        assert_eq!(
            command,
            CategoryCommand::Create(CategoryPayload {
                name: " Shoes ".to_string(),
                image: "http://x/s.png".to_string(),
            })
        );
    }

    #[test]
    fn test_edit_plan_targets_record() {
        let command = dto(Some("12"), "Shoes", "http://x/s.png")
            .plan_submission()
            .unwrap();
        match command {
            CategoryCommand::Update { id, payload } => {
                assert_eq!(id, CategoryId(12));
                assert_eq!(payload.name, "Shoes");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_edit_plan_rejects_bad_id() {
        let err = dto(Some("x1"), "Shoes", "http://x/s.png")
            .plan_submission()
            .unwrap_err();
        assert_eq!(err, ValidationError::InvalidId("x1".to_string()));
    }

    #[test]
    fn test_to_dto_prefills_edit_buffer() {
        let category = Category {
            id: CategoryId(5),
            name: "Toys".to_string(),
            image: "http://x/t.png".to_string(),
            updated_at: None,
        };
        let form = category.to_dto();
        assert_eq!(form.mode(), FormMode::Edit);
        assert_eq!(form.id.as_deref(), Some("5"));
        assert_eq!(form.payload().image, "http://x/t.png");
    }

    #[test]
    fn test_payload_wire_shape() {
        let body = serde_json::to_value(dto(None, "A", "B").payload()).unwrap();
        assert_eq!(body, serde_json::json!({ "name": "A", "image": "B" }));
    }
}
