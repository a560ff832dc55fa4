use catalog_core::ValueObject;

use crate::error::{ProductError, ProductResult};

pub(crate) const MAX_TITLE_CHARS: usize = 200;

/// Product title, stored in normalized form (trimmed, whitespace runs collapsed
/// to a single space).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProductTitle(String);

impl ProductTitle {
    pub fn create(value: &str) -> ProductResult<Self> {
        let normalized = normalize(value);
        let len = normalized.chars().count();

        if len == 0 {
            return Err(ProductError::InvalidProductTitle(
                "Product title cannot be empty".to_string(),
            ));
        }
        if len > MAX_TITLE_CHARS {
            return Err(ProductError::InvalidProductTitle(format!(
                "Product title cannot exceed {MAX_TITLE_CHARS} characters, got: {len}"
            )));
        }

        Ok(Self(normalized))
    }

    pub fn value(&self) -> &str {
        &self.0
    }

    /// Case-insensitive comparison used by the duplicate-title rule.
    pub fn matches_ignore_case(&self, other: &str) -> bool {
        self.0.to_lowercase() == other.to_lowercase()
    }
}

fn normalize(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}

impl ValueObject for ProductTitle {}

impl core::fmt::Display for ProductTitle {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ProductTitle {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn normalizes_whitespace() {
        let title = ProductTitle::create("  Test   Product  ").unwrap();
        assert_eq!(title.value(), "Test Product");

        let tabs = ProductTitle::create("Test\t\n Product").unwrap();
        assert_eq!(title, tabs);
    }

    #[test]
    fn rejects_empty_after_normalization() {
        for raw in ["", "   ", "\t\n"] {
            let err = ProductTitle::create(raw).unwrap_err();
            assert_eq!(
                err,
                ProductError::InvalidProductTitle("Product title cannot be empty".into())
            );
        }
    }

    #[test]
    fn enforces_length_limit_on_normalized_value() {
        assert!(ProductTitle::create(&"a".repeat(200)).is_ok());

        let err = ProductTitle::create(&"a".repeat(201)).unwrap_err();
        assert!(err.message().contains("201"));

        // Surrounding whitespace does not count.
        let padded = format!("   {}   ", "a".repeat(200));
        assert!(ProductTitle::create(&padded).is_ok());
    }

    #[test]
    fn case_insensitive_match() {
        let title = ProductTitle::create("Test Product").unwrap();
        assert!(title.matches_ignore_case("test product"));
        assert!(!title.matches_ignore_case("Test Product 2"));
    }

    proptest! {
        #[test]
        fn normalized_titles_have_no_double_spaces(raw in "[ a-zA-Z\t]{0,250}") {
            if let Ok(title) = ProductTitle::create(&raw) {
                prop_assert!(!title.value().contains("  "));
                prop_assert_eq!(title.value().trim(), title.value());
                prop_assert!(title.value().chars().count() <= MAX_TITLE_CHARS);
            }
        }

        #[test]
        fn whitespace_padding_does_not_change_equality(word in "[a-zA-Z]{1,40}", pad in "[ \t]{0,5}") {
            let plain = ProductTitle::create(&word).unwrap();
            let padded = ProductTitle::create(&format!("{pad}{word}{pad}")).unwrap();
            prop_assert_eq!(plain, padded);
        }
    }
}
