//! Library search-path variable extension (pure, no I/O)

/// Where the new entry goes relative to the existing value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    Append,
    Prepend,
}

/// New value of a search-path variable with `entry` added.
///
/// The existing value is always kept. An unset or empty variable becomes just
/// `entry`.
pub fn extend_search_var(
    existing: Option<&str>,
    entry: &str,
    separator: char,
    placement: Placement,
) -> String {
    match existing {
        Some(value) if !value.is_empty() => match placement {
            Placement::Append => format!("{}{}{}", value, separator, entry),
            Placement::Prepend => format!("{}{}{}", entry, separator, value),
        },
        _ => entry.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_keeps_existing_value() {
        assert_eq!(
            extend_search_var(Some("/usr/lib32"), "bin/", ':', Placement::Append),
            "/usr/lib32:bin/"
        );
    }

    #[test]
    fn prepend_keeps_existing_value() {
        assert_eq!(
            extend_search_var(
                Some("C:\\Windows\\system32"),
                "C:\\games\\bin\\",
                ';',
                Placement::Prepend
            ),
            "C:\\games\\bin\\;C:\\Windows\\system32"
        );
    }

    #[test]
    fn unset_becomes_entry() {
        assert_eq!(extend_search_var(None, "bin/", ':', Placement::Append), "bin/");
    }

    #[test]
    fn empty_becomes_entry() {
        assert_eq!(extend_search_var(Some(""), "bin/", ':', Placement::Append), "bin/");
    }
}
