use serde::{Deserialize, Serialize};

/// Ett ordförrådsinlägg kopplat till en text
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Word {
    pub id: Option<i64>,
    pub text_id: Option<i64>,
    pub lemma: String,
    pub forms: Option<String>,
    pub translation: Option<String>,
    pub comments: Option<String>,
}

impl Word {
    pub fn new(text_id: i64, lemma: impl Into<String>) -> Self {
        Self {
            text_id: Some(text_id),
            lemma: lemma.into(),
            ..Default::default()
        }
    }

    pub fn with_forms(mut self, forms: impl Into<String>) -> Self {
        self.forms = Some(forms.into());
        self
    }

    pub fn with_translation(mut self, translation: impl Into<String>) -> Self {
        self.translation = Some(translation.into());
        self
    }

    pub fn with_comments(mut self, comments: impl Into<String>) -> Self {
        self.comments = Some(comments.into());
        self
    }

    /// Rubrik för den expanderbara panelen: "lemma - översättning"
    pub fn headline(&self) -> String {
        match self.translation.as_deref() {
            Some(t) if !t.is_empty() => format!("{} - {}", self.lemma, t),
            _ => self.lemma.clone(),
        }
    }

    /// Trimma lemmat och gör tomma valfria fält till None
    pub fn normalize(&mut self) {
        self.lemma = self.lemma.trim().to_string();
        for field in [&mut self.forms, &mut self.translation, &mut self.comments] {
            if field.as_deref().is_some_and(|s| s.trim().is_empty()) {
                *field = None;
            }
        }
    }

    pub fn validate(&self) -> Result<(), WordValidationError> {
        if self.lemma.trim().is_empty() {
            return Err(WordValidationError::EmptyLemma);
        }
        Ok(())
    }

    /// Skiftlägesokänslig delsträngsmatchning på lemma eller översättning.
    /// Diakritiska tecken viks inte: "ω" matchar inte "ώ".
    pub fn matches_search(&self, term: &str) -> bool {
        let needle = term.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }

        self.lemma.to_lowercase().contains(&needle)
            || self
                .translation
                .as_deref()
                .is_some_and(|t| t.to_lowercase().contains(&needle))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum WordValidationError {
    #[error("Lemma krävs")]
    EmptyLemma,
}

impl From<WordValidationError> for crate::utils::error::AppError {
    fn from(err: WordValidationError) -> Self {
        Self::validation(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headline() {
        let word = Word::new(1, "λύω").with_translation("to free");
        assert_eq!(word.headline(), "λύω - to free");
        assert_eq!(Word::new(1, "γράφω").headline(), "γράφω");
    }

    #[test]
    fn test_normalize() {
        let mut word = Word::new(1, "  λύω ")
            .with_forms("λύσω, ἔλυσα")
            .with_translation("   ")
            .with_comments("");
        word.normalize();

        assert_eq!(word.lemma, "λύω");
        assert_eq!(word.forms.as_deref(), Some("λύσω, ἔλυσα"));
        assert_eq!(word.translation, None);
        assert_eq!(word.comments, None);
    }

    #[test]
    fn test_validation() {
        assert!(Word::new(1, "λόγος").validate().is_ok());
        assert!(matches!(
            Word::new(1, "  ").validate(),
            Err(WordValidationError::EmptyLemma)
        ));
    }

    #[test]
    fn test_matches_search_folds_greek_case() {
        let luo = Word::new(1, "λύω").with_translation("to free");
        let grapho = Word::new(1, "γράφω").with_translation("to write");

        assert!(luo.matches_search("FREE"));
        assert!(!grapho.matches_search("FREE"));
        assert!(luo.matches_search("Ω"));
        assert!(grapho.matches_search("Ω"));
        assert!(grapho.matches_search(""));
        // Accentvikning görs inte: ύ (U+03CD) matchar inte υ (U+03C5)
        let accented = Word::new(1, "\u{03bb}\u{03cd}\u{03c9}");
        assert!(!accented.matches_search("\u{03c5}"));
    }
}
