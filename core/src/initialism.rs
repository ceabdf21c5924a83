/// Common initialisms, kept sorted so lookups can binary search.
///
/// Only add entries that are highly unlikely to be non-initialisms.
/// "ID" is fine, "AND" is not.
pub const INITIALISMS: [&str; 32] = [
    "API", "ASCII", "CPU", "CSS", "DNS", "EOF", "GUID", "HTML", "HTTP", "HTTPS", "ID", "IP",
    "JSON", "LHS", "QPS", "RAM", "RHS", "RPC", "SLA", "SMTP", "SNI", "SSH", "TLS", "TTL", "UI",
    "UID", "URI", "URL", "UTF8", "UUID", "VM", "XML",
];

/// Exact, case sensitive membership in [`INITIALISMS`].
pub fn is_initialism(s: &str) -> bool {
    INITIALISMS.binary_search(&s).is_ok()
}

/// Returns `s` in UPPER case if it spells an initialism, otherwise `s` untouched.
///
/// ```
/// assert_eq!(mixedcase::upper_initialism("Http"), "HTTP");
/// assert_eq!(mixedcase::upper_initialism("iDs"), "iDs");
/// ```
pub fn upper_initialism(s: &str) -> String {
    let upper = s.to_uppercase();
    match is_initialism(&upper) {
        true => upper,
        false => s.to_owned(),
    }
}

/// Returns `s` in lower case if it spells an initialism, otherwise `s` untouched.
pub fn lower_initialism(s: &str) -> String {
    let upper = s.to_uppercase();
    match is_initialism(&upper) {
        true => upper.to_lowercase(),
        false => s.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn table_is_sorted() {
        assert!(INITIALISMS.is_sorted(), "binary search needs a sorted table");
    }

    #[test]
    fn upper_and_lower() {
        for (input, upper, lower) in [
            ("iDs", "iDs", "iDs"),
            ("xslt", "xslt", "xslt"),
            ("aPi", "API", "api"),
            ("Css", "CSS", "css"),
            ("gUID", "GUID", "guid"),
            ("Html", "HTML", "html"),
            ("http", "HTTP", "http"),
            ("HTTPS", "HTTPS", "https"),
            ("Id", "ID", "id"),
            ("Json", "JSON", "json"),
            ("UTF8", "UTF8", "utf8"),
            ("xml", "XML", "xml"),
        ] {
            assert_eq!(upper, upper_initialism(input), "upper {input:?}");
            assert_eq!(lower, lower_initialism(input), "lower {input:?}");
        }
    }

    #[test]
    fn every_entry_in_any_case() {
        for word in INITIALISMS {
            let lower = word.to_lowercase();
            assert_eq!(word, upper_initialism(&lower));
            assert_eq!(word, upper_initialism(word));
            assert_eq!(lower, lower_initialism(word));
            assert_eq!(lower, lower_initialism(&lower));
        }
    }

    #[test]
    fn membership_is_exact() {
        assert!(is_initialism("URL"));
        assert!(!is_initialism("url"));
        assert!(!is_initialism("URLS"));
        assert!(!is_initialism(""));
    }
}
