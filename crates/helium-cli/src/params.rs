// Rust guideline compliant 2026-10-14

//! Parsing of resource list arguments.
//!
//! A resource list is a comma-separated set of references. An item of the
//! form `@path` is replaced by the lines of that file (`@-` reads stdin);
//! blank lines are skipped and surrounding whitespace is trimmed.

use helium_core::Error;
use std::io::{BufRead, BufReader};

/// Metavar shown in help output for resource list arguments.
pub const RESOURCE_LIST_METAVAR: &str = "REF[,REF,...]* | @FILE";

/// Parses a resource list argument.
///
/// # Errors
///
/// Returns an error if a referenced file cannot be read or an item is empty.
pub fn parse_resource_list(value: &str) -> anyhow::Result<Vec<String>> {
    let mut resources = Vec::new();
    for item in value.split(',') {
        let item = item.trim();
        if let Some(path) = item.strip_prefix('@') {
            read_resource_file(path, &mut resources)?;
        } else if item.is_empty() {
            return Err(Error::InvalidInput(format!("empty reference in '{}'", value)).into());
        } else {
            resources.push(item.to_string());
        }
    }
    Ok(resources)
}

/// Parses a list of resource list arguments, concatenating the results.
///
/// # Errors
///
/// See [`parse_resource_list`].
pub fn parse_resource_lists(values: &[String]) -> anyhow::Result<Vec<String>> {
    let mut resources = Vec::new();
    for value in values {
        resources.extend(parse_resource_list(value)?);
    }
    Ok(resources)
}

/// Checks that exactly `expected` resources were given.
///
/// # Errors
///
/// Returns `Error::InvalidInput` on a count mismatch.
pub fn expect_count(resources: &[String], expected: usize) -> helium_core::Result<()> {
    if resources.len() != expected {
        return Err(Error::InvalidInput(format!(
            "Expected {} resources, but got {}",
            expected,
            resources.len()
        )));
    }
    Ok(())
}

/// Parses a resource list argument that must name exactly one resource.
///
/// # Errors
///
/// See [`parse_resource_list`] and [`expect_count`].
pub fn parse_single_resource(value: &str) -> anyhow::Result<String> {
    let mut resources = parse_resource_list(value)?;
    expect_count(&resources, 1)?;
    Ok(resources.remove(0))
}

fn read_resource_file(path: &str, resources: &mut Vec<String>) -> anyhow::Result<()> {
    use anyhow::Context;

    let reader: Box<dyn BufRead> = if path == "-" {
        Box::new(BufReader::new(std::io::stdin()))
    } else {
        let file = std::fs::File::open(path)
            .with_context(|| format!("failed to open resource file '{}'", path))?;
        Box::new(BufReader::new(file))
    };

    for line in reader.lines() {
        let line = line.with_context(|| format!("failed to read resource file '{}'", path))?;
        let line = line.trim();
        if !line.is_empty() {
            resources.push(line.to_string());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comma_separated() {
        assert_eq!(
            parse_resource_list("ab12, kitchen,ff00").unwrap(),
            vec!["ab12", "kitchen", "ff00"]
        );
    }

    #[test]
    fn test_empty_item_rejected() {
        assert!(parse_resource_list("a,,b").is_err());
        assert!(parse_resource_list("").is_err());
    }

    #[test]
    fn test_expect_count() {
        let resources = vec!["a".to_string(), "b".to_string()];
        assert!(expect_count(&resources, 2).is_ok());
        let err = expect_count(&resources, 1).unwrap_err();
        assert_eq!(err.to_string(), "Invalid input: Expected 1 resources, but got 2");
    }

    #[test]
    fn test_single_resource() {
        assert_eq!(parse_single_resource("home").unwrap(), "home");
        assert!(parse_single_resource("home,garage").is_err());
    }

    #[test]
    fn test_missing_file_is_error() {
        assert!(parse_resource_list("@/nonexistent/helium-refs.txt").is_err());
    }
}
