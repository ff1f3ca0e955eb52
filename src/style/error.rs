//! Inline style parsing errors.

/// Error returned when inline CSS declaration text cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StyleParseError {
    /// One or more declarations were not of the form `name: value`.
    #[error("invalid style declarations: {}", .rejected.join(", "))]
    InvalidDeclarations { rejected: Vec<String> },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_declarations_display() {
        let err = StyleParseError::InvalidDeclarations {
            rejected: vec!["color red".to_string(), "@media".to_string()],
        };
        let msg = err.to_string();
        assert!(msg.contains("color red"));
        assert!(msg.contains("color red, @media"));
    }
}
