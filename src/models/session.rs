//! Sessionsläge för redigering/visning
//!
//! Ett `Session`-objekt lever lika länge som fönstret och skickas till varje
//! vy. Det finns ingen global flagga och ingen serverlagring.

use crate::utils::error::{AppError, AppResult};

/// Läge för aktuell session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionMode {
    #[default]
    Unauthenticated,
    Viewer,
    Editor,
}

impl SessionMode {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Unauthenticated => "Ej inloggad",
            Self::Viewer => "VISNINGSLÄGE",
            Self::Editor => "REDIGERINGSLÄGE",
        }
    }
}

/// Konfigurerat redigeringslösenord. Saknas det kan inget lösenord matcha.
#[derive(Clone, Default)]
pub struct EditorSecret(Option<String>);

impl EditorSecret {
    pub fn new(secret: Option<String>) -> Self {
        Self(secret.filter(|s| !s.is_empty()))
    }

    pub fn is_configured(&self) -> bool {
        self.0.is_some()
    }

    /// Ren likhetsjämförelse i klartext
    fn matches(&self, candidate: &str) -> bool {
        self.0.as_deref() == Some(candidate)
    }
}

impl std::fmt::Debug for EditorSecret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let shown = if self.is_configured() { "<satt>" } else { "<saknas>" };
        f.debug_tuple("EditorSecret").field(&shown).finish()
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("Fel lösenord")]
    WrongPassword,
    #[error("Inget redigeringslösenord är konfigurerat")]
    NoPasswordConfigured,
}

#[derive(Debug, Clone, Default)]
pub struct Session {
    mode: SessionMode,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> SessionMode {
        self.mode
    }

    pub fn is_authenticated(&self) -> bool {
        self.mode != SessionMode::Unauthenticated
    }

    pub fn can_edit(&self) -> bool {
        self.mode == SessionMode::Editor
    }

    /// Logga in i redigeringsläge. Fel lösenord lämnar sessionen oförändrad.
    pub fn sign_in_editor(&mut self, password: &str, secret: &EditorSecret) -> Result<(), AuthError> {
        if !secret.is_configured() {
            tracing::warn!("Inloggningsförsök utan konfigurerat lösenord");
            return Err(AuthError::NoPasswordConfigured);
        }

        if !secret.matches(password) {
            tracing::info!("Inloggning nekad: fel lösenord");
            return Err(AuthError::WrongPassword);
        }

        self.mode = SessionMode::Editor;
        tracing::info!("Inloggad i redigeringsläge");
        Ok(())
    }

    /// Endast visning, inget lösenord krävs
    pub fn browse_only(&mut self) {
        self.mode = SessionMode::Viewer;
        tracing::info!("Session i visningsläge");
    }

    pub fn sign_out(&mut self) {
        self.mode = SessionMode::Unauthenticated;
        tracing::info!("Utloggad");
    }

    /// Kontroll före varje ändrande operation
    pub fn require_editor(&self) -> AppResult<()> {
        if self.can_edit() {
            Ok(())
        } else {
            Err(AppError::ReadOnly)
        }
    }
}
