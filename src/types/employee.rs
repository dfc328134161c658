use serde::{Deserialize, Serialize};

use crate::types::error::AppError;

/// Create/update request body. Responses serialize the entity model
/// directly since every column is public.
#[derive(Clone, Serialize, Deserialize)]
pub struct REmployee {
    pub name: String,
    pub age: i32,
    pub department: String,
    pub position: String,
}

impl REmployee {
    pub fn validated(self) -> Result<Self, AppError> {
        if self.name.trim().is_empty()
            || self.department.trim().is_empty()
            || self.position.trim().is_empty()
        {
            return Err(AppError::Validation(
                "Invalid input, please ensure no fields are empty or null.".to_string(),
            ));
        }
        if self.age < 0 {
            return Err(AppError::Validation("age must be non-negative".to_string()));
        }
        Ok(self)
    }
}

#[derive(Deserialize)]
pub struct ListQuery {
    pub skip: Option<u64>,
    pub limit: Option<u64>,
}
