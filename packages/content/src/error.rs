use crate::Lang;

/// Failure to bring a dictionary into memory. Fatal for the session.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to fetch the {lang} dictionary: {reason}")]
    Fetch { lang: Lang, reason: String },

    #[error("failed to parse the {lang} dictionary: {source}")]
    Parse {
        lang: Lang,
        #[source]
        source: serde_json::Error,
    },

    #[error("the {lang} dictionary is not a JSON object")]
    NotAnObject { lang: Lang },
}

impl LoadError {
    pub fn lang(&self) -> Lang {
        match self {
            LoadError::Fetch { lang, .. }
            | LoadError::Parse { lang, .. }
            | LoadError::NotAnObject { lang } => *lang,
        }
    }
}
