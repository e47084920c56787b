//! Product search links.

use url::Url;

/// Builds search URLs for product display names. The name is sent as the `q`
/// query parameter with full form encoding.
#[derive(Debug, Clone)]
pub struct SearchLinker {
    base: Url,
}

impl SearchLinker {
    pub fn new(base: &str) -> Result<Self, url::ParseError> {
        Ok(Self {
            base: Url::parse(base)?,
        })
    }

    pub fn link(&self, query: &str) -> String {
        let mut url = self.base.clone();
        url.query_pairs_mut().append_pair("q", query);
        url.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spaces_and_reserved_chars_are_encoded() {
        let linker = SearchLinker::new("https://www.google.com/search").unwrap();
        assert_eq!(
            linker.link("Niacinamide 10% & Zinc"),
            "https://www.google.com/search?q=Niacinamide+10%25+%26+Zinc"
        );
    }

    #[test]
    fn existing_query_is_kept() {
        let linker = SearchLinker::new("https://shop.example.com/find?lang=en").unwrap();
        assert_eq!(
            linker.link("Clay Mask"),
            "https://shop.example.com/find?lang=en&q=Clay+Mask"
        );
    }

    #[test]
    fn invalid_base_rejected() {
        assert!(SearchLinker::new("not a url").is_err());
    }
}
