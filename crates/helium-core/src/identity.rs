// Rust guideline compliant 2026-10-14

//! Identifier helpers: UUID detection and short ids.

use uuid::Uuid;

/// Returns true if `value` parses as a UUID.
///
/// Hyphenated, simple (32 hex digits), braced and `urn:uuid:` forms are
/// all accepted.
pub fn is_uuid(value: &str) -> bool {
    Uuid::parse_str(value).is_ok()
}

/// Returns the short form of an id: everything before the first hyphen.
///
/// Ids without a hyphen are returned unchanged.
pub fn shorten_id(id: &str) -> &str {
    id.split('-').next().unwrap_or(id)
}

/// Returns the id to display, shortened unless full ids were requested.
pub fn display_id(id: &str, show_uuid: bool) -> &str {
    if show_uuid {
        id
    } else {
        shorten_id(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_uuid_accepts_common_forms() {
        assert!(is_uuid("dd18bc71-8a5d-4a4e-a308-1c44e1688b7a"));
        assert!(is_uuid("DD18BC71-8A5D-4A4E-A308-1C44E1688B7A"));
        assert!(is_uuid("dd18bc718a5d4a4ea3081c44e1688b7a"));
        assert!(is_uuid("{dd18bc71-8a5d-4a4e-a308-1c44e1688b7a}"));
    }

    #[test]
    fn test_is_uuid_rejects_partials() {
        assert!(!is_uuid("dd18bc71"));
        assert!(!is_uuid("kitchen"));
        assert!(!is_uuid(""));
    }

    #[test]
    fn test_shorten_id() {
        assert_eq!(shorten_id("dd18bc71-8a5d-4a4e-a308-1c44e1688b7a"), "dd18bc71");
        assert_eq!(shorten_id("plain"), "plain");
        assert_eq!(shorten_id(""), "");
    }

    #[test]
    fn test_display_id() {
        let id = "dd18bc71-8a5d-4a4e-a308-1c44e1688b7a";
        assert_eq!(display_id(id, false), "dd18bc71");
        assert_eq!(display_id(id, true), id);
    }
}
