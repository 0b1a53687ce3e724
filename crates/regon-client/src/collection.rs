//! Ordered result collection for multi-record searches.

use regon_api::SearchReport;
use regon_core::{RegistryError, Result};

/// Every record returned by one search, in registry order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchReportCollection {
    reports: Vec<SearchReport>,
}

impl SearchReportCollection {
    /// Wrap a list of records.
    #[must_use]
    pub fn new(reports: Vec<SearchReport>) -> Self {
        Self { reports }
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.reports.len()
    }

    /// Whether the search matched nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }

    /// First record.
    ///
    /// # Errors
    /// [`RegistryError::NotFound`] when the collection is empty.
    pub fn first(&self) -> Result<&SearchReport> {
        self.reports.first().ok_or_else(|| RegistryError::NotFound {
            message: "No company data found.".to_string(),
            source: None,
        })
    }

    /// All records as a slice.
    #[must_use]
    pub fn all(&self) -> &[SearchReport] {
        &self.reports
    }

    /// Iterate over the records.
    pub fn iter(&self) -> std::slice::Iter<'_, SearchReport> {
        self.reports.iter()
    }

    /// Take the records out.
    #[must_use]
    pub fn into_vec(self) -> Vec<SearchReport> {
        self.reports
    }
}

impl From<Vec<SearchReport>> for SearchReportCollection {
    fn from(reports: Vec<SearchReport>) -> Self {
        Self::new(reports)
    }
}

impl IntoIterator for SearchReportCollection {
    type Item = SearchReport;
    type IntoIter = std::vec::IntoIter<SearchReport>;

    fn into_iter(self) -> Self::IntoIter {
        self.reports.into_iter()
    }
}

impl<'a> IntoIterator for &'a SearchReportCollection {
    type Item = &'a SearchReport;
    type IntoIter = std::slice::Iter<'a, SearchReport>;

    fn into_iter(self) -> Self::IntoIter {
        self.reports.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(regon: &str) -> SearchReport {
        SearchReport {
            regon: Some(regon.to_string()),
            ..SearchReport::default()
        }
    }

    #[test]
    fn test_empty_collection() {
        let collection = SearchReportCollection::default();
        assert!(collection.is_empty());
        assert_eq!(collection.len(), 0);

        let err = collection.first().expect_err("first on empty");
        assert!(matches!(err, RegistryError::NotFound { .. }));
        assert_eq!(err.to_string(), "No company data found.");
    }

    #[test]
    fn test_order_is_preserved() {
        let collection =
            SearchReportCollection::from(vec![report("123456785"), report("000331501")]);

        assert_eq!(collection.len(), 2);
        assert_eq!(
            collection.first().expect("first").regon.as_deref(),
            Some("123456785")
        );

        let regons: Vec<_> = collection.iter().filter_map(|r| r.regon.clone()).collect();
        assert_eq!(regons, vec!["123456785", "000331501"]);
        assert_eq!(collection.all().len(), 2);
    }

    #[test]
    fn test_into_iterators() {
        let collection = SearchReportCollection::new(vec![report("123456785")]);

        let mut borrowed = 0;
        for _ in &collection {
            borrowed += 1;
        }
        assert_eq!(borrowed, 1);

        let owned: Vec<SearchReport> = collection.clone().into_iter().collect();
        assert_eq!(owned, collection.into_vec());
    }
}
