use std::collections::BTreeSet;

/// HTTP header clients use to request extensions and servers use to report the
/// activated ones.
pub const HTTP_EXTENSION_HEADER: &str = "X-A2A-Extensions";

/// Collect requested extension URIs from one or more header values.
///
/// Each value may hold several comma separated URIs. Whitespace is trimmed and
/// empty entries are dropped.
pub fn get_requested_extensions<I, S>(values: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    values
        .into_iter()
        .flat_map(|value| {
            value
                .as_ref()
                .split(',')
                .map(str::trim)
                .filter(|uri| !uri.is_empty())
                .map(str::to_string)
                .collect::<Vec<_>>()
        })
        .collect()
}

/// Render the activated set as a response header value.
pub fn activated_extensions_header(activated: &BTreeSet<String>) -> String {
    activated.iter().map(String::as_str).collect::<Vec<_>>().join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_trims_and_dedups() {
        let requested = get_requested_extensions(["urn:a, urn:b", " urn:a ,,", ""]);
        assert_eq!(requested.into_iter().collect::<Vec<_>>(), vec!["urn:a", "urn:b"]);
    }

    #[test]
    fn no_values_means_empty_set() {
        assert!(get_requested_extensions(Vec::<String>::new()).is_empty());
    }

    #[test]
    fn header_is_sorted_and_joined() {
        let activated: BTreeSet<String> =
            ["urn:z".to_string(), "urn:a".to_string()].into_iter().collect();
        assert_eq!(activated_extensions_header(&activated), "urn:a, urn:z");
        assert_eq!(activated_extensions_header(&BTreeSet::new()), "");
    }
}
