use crate::error::{FfgraphError, FfgraphResult};

/// Validate an identifier used as a filter name or argument key.
///
/// Valid names are non-empty and consist of ASCII alphanumerics and
/// underscores. Pad names are not run through this check; the filtergraph
/// grammar allows forms like `0:v` there.
///
/// Returns the name unchanged so call sites can validate inline.
pub fn check_name(name: &str) -> FfgraphResult<&str> {
    if name.is_empty() {
        return Err(FfgraphError::invalid_name("name must be non-empty"));
    }
    if let Some(ch) = name
        .chars()
        .find(|ch| !ch.is_ascii_alphanumeric() && *ch != '_')
    {
        return Err(FfgraphError::invalid_name(format!(
            "character {ch:?} is not allowed in name '{name}'"
        )));
    }
    Ok(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_name_passes_through() {
        assert_eq!(check_name("name").unwrap(), "name");
        assert_eq!(check_name("scale2ref").unwrap(), "scale2ref");
        assert_eq!(check_name("start_frame").unwrap(), "start_frame");
    }

    #[test]
    fn invalid_names_are_rejected() {
        assert!(check_name("@").is_err());
        assert!(check_name("").is_err());
        assert!(check_name("a b").is_err());
        assert!(check_name("n;me").is_err());
    }

    #[test]
    fn rejection_names_the_offending_character() {
        let err = check_name("tr@im").unwrap_err();
        assert!(err.to_string().contains("'@'"));
    }
}
