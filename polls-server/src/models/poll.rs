//! Poll input validation
//!
//! Question and option texts share the same rules as the `VARCHAR(255)`
//! columns they land in.

use super::ValidationError;

/// Maximum length (in characters) for question and option texts
pub const MAX_TEXT_LEN: usize = 255;

/// Texts are stored as sent; trimming only decides emptiness.
fn checked_text(field: &str, s: &str) -> Result<String, ValidationError> {
    if s.trim().is_empty() {
        return Err(ValidationError::Empty {
            field: field.to_owned(),
        });
    }

    // Postgres text columns cannot hold NUL
    if s.contains('\0') {
        return Err(ValidationError::NulCharacter {
            field: field.to_owned(),
        });
    }

    if s.chars().count() > MAX_TEXT_LEN {
        return Err(ValidationError::TooLong {
            field: field.to_owned(),
            max: MAX_TEXT_LEN,
        });
    }

    Ok(s.to_owned())
}

/// Validated poll question
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionText(String);

impl QuestionText {
    /// Create a new question text.
    ///
    /// # Rules
    /// - Not blank (whitespace only counts as empty)
    /// - No NUL characters
    /// - Max 255 characters, surrounding whitespace included
    ///
    /// The text is kept exactly as given.
    ///
    /// # Example
    /// ```
    /// use polls_server::models::QuestionText;
    ///
    /// assert!(QuestionText::new("Tabs or spaces?").is_ok());
    /// assert!(QuestionText::new("   ").is_err());
    /// ```
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        checked_text("question_text", s).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Validated option text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionText(String);

impl OptionText {
    /// Create a new option text. Same rules as [`QuestionText`].
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        checked_text("option_text", s).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

/// A poll ready to be persisted: question plus its initial options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPoll {
    pub question: QuestionText,
    pub options: Vec<OptionText>,
}

impl NewPoll {
    /// Validate a question and its option texts.
    ///
    /// Option errors name their position, e.g. `options[1].option_text`.
    /// An empty option list is accepted.
    pub fn new<I, S>(question: &str, options: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let question = QuestionText::new(question)?;
        let options = options
            .into_iter()
            .enumerate()
            .map(|(i, text)| OptionText::new(text.as_ref()).map_err(|e| e.nested("options", i)))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { question, options })
    }
}
