use serde::{Deserialize, Serialize};

/// En text som studeras, med eget ordförråd
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Text {
    pub id: i64,
    pub name: String,
}

impl Text {
    /// Trimma och validera ett textnamn
    pub fn normalize_name(name: &str) -> Result<String, TextValidationError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(TextValidationError::EmptyName);
        }
        Ok(trimmed.to_string())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TextValidationError {
    #[error("Textnamn får inte vara tomt")]
    EmptyName,
}

impl From<TextValidationError> for crate::utils::error::AppError {
    fn from(err: TextValidationError) -> Self {
        Self::validation(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_name() {
        assert_eq!(Text::normalize_name("  Ilias I ").unwrap(), "Ilias I");
        assert!(matches!(
            Text::normalize_name("   "),
            Err(TextValidationError::EmptyName)
        ));
    }
}
