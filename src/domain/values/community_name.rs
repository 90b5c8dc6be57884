use crate::domain::error::DomainError;

/// Normalize a user-supplied community name: trim whitespace and drop an `r/` or `/r/` prefix.
pub fn normalize(raw: &str) -> Result<String, DomainError> {
    let trimmed = raw.trim();
    let name = trimmed
        .strip_prefix("/r/")
        .or_else(|| trimmed.strip_prefix("r/"))
        .unwrap_or(trimmed)
        .trim_matches('/');

    if name.is_empty() {
        return Err(DomainError::InvalidInput(format!(
            "Empty community name: {raw:?}"
        )));
    }
    if name.contains(['/', '?', '#']) || name.chars().any(char::is_whitespace) {
        return Err(DomainError::InvalidInput(format!(
            "Invalid community name: {raw:?}"
        )));
    }
    Ok(name.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_name_unchanged() {
        assert_eq!(normalize("investing").unwrap(), "investing");
    }

    #[test]
    fn test_prefix_and_whitespace_stripped() {
        assert_eq!(normalize("  r/rust ").unwrap(), "rust");
        assert_eq!(normalize("/r/gadgets/").unwrap(), "gadgets");
    }

    #[test]
    fn test_empty_rejected() {
        assert!(normalize("   ").is_err());
        assert!(normalize("r/").is_err());
    }

    #[test]
    fn test_path_characters_rejected() {
        assert!(normalize("a/b").is_err());
        assert!(normalize("new.json?limit=5").is_err());
        assert!(normalize("two words").is_err());
    }
}
