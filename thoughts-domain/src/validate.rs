//! Client-side form validation. The backend validates again; this only keeps
//! obviously bad submissions from going out.

pub const CONTENT_MIN: usize = 10;
pub const CONTENT_MAX: usize = 500;
pub const AUTHOR_MAX: usize = 200;

/// Per-field validation messages for the create/edit forms.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub content: Option<String>,
    pub author: Option<String>,
    pub author_bio: Option<String>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.content.is_none() && self.author.is_none() && self.author_bio.is_none()
    }
}

/// Check the three user-editable fields. `Err` carries one message per
/// violated field and the submission must be blocked.
pub fn validate_thought_fields(
    content: &str,
    author: &str,
    author_bio: &str,
) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::default();

    let content_len = content.chars().count();
    if content_len < CONTENT_MIN {
        errors.content = Some(format!(
            "Content must be at least {CONTENT_MIN} characters"
        ));
    } else if content_len > CONTENT_MAX {
        errors.content = Some(format!("Content must not exceed {CONTENT_MAX} characters"));
    }

    if author.chars().count() > AUTHOR_MAX {
        errors.author = Some(format!("Author must not exceed {AUTHOR_MAX} characters"));
    }
    if author_bio.chars().count() > AUTHOR_MAX {
        errors.author_bio = Some(format!(
            "Author Bio must not exceed {AUTHOR_MAX} characters"
        ));
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_valid_fields() {
        assert_eq!(
            validate_thought_fields(
                "This is a brand new thought with enough characters",
                "Ada Lovelace",
                "Mathematician",
            ),
            Ok(())
        );
    }

    #[test]
    fn accepts_boundary_lengths() {
        assert_eq!(validate_thought_fields(&"x".repeat(10), "", ""), Ok(()));
        assert_eq!(validate_thought_fields(&"x".repeat(500), "", ""), Ok(()));
        assert_eq!(
            validate_thought_fields(&"x".repeat(10), &"a".repeat(200), &"b".repeat(200)),
            Ok(())
        );
    }

    #[test]
    fn rejects_short_content() {
        let errors = validate_thought_fields("too short", "", "").unwrap_err();
        assert_eq!(
            errors.content.as_deref(),
            Some("Content must be at least 10 characters")
        );
        assert!(errors.author.is_none());
    }

    #[test]
    fn rejects_long_content() {
        let errors = validate_thought_fields(&"x".repeat(501), "", "").unwrap_err();
        assert_eq!(
            errors.content.as_deref(),
            Some("Content must not exceed 500 characters")
        );
    }

    #[test]
    fn rejects_long_optionals_independently() {
        let errors = validate_thought_fields(
            "long enough content",
            &"a".repeat(201),
            &"b".repeat(201),
        )
        .unwrap_err();
        assert!(errors.content.is_none());
        assert_eq!(
            errors.author.as_deref(),
            Some("Author must not exceed 200 characters")
        );
        assert_eq!(
            errors.author_bio.as_deref(),
            Some("Author Bio must not exceed 200 characters")
        );
    }

    #[test]
    fn counts_characters_not_bytes() {
        // 10 multibyte characters are valid content even at 30 bytes
        assert_eq!(validate_thought_fields(&"й".repeat(10), "", ""), Ok(()));
    }
}
