//! Record trait defining the core abstraction for all entity types

/// Identifier of a record inside a collection store.
///
/// Identifiers are small integers assigned sequentially by the store from a
/// monotonically increasing counter, so an identifier freed by a deletion is
/// never handed out again. A value of `0` marks a candidate record that has
/// not been through a store yet.
pub type RecordId = u32;

/// Base trait for all entities managed by a [`CollectionStore`].
///
/// All records have:
/// - id: store-assigned identifier
/// - resource names: singular and plural forms used in diagnostics and routes
/// - a searchable projection: the stringified fields the free-text filter
///   matches against
///
/// Form handling is a separate concern, see [`FormModel`].
///
/// [`CollectionStore`]: crate::core::store::CollectionStore
/// [`FormModel`]: crate::core::form::FormModel
pub trait Record: Clone + Send + Sync + 'static {
    /// The plural resource name (e.g., "invoices")
    fn resource_name() -> &'static str;

    /// The singular resource name (e.g., "invoice")
    fn resource_name_singular() -> &'static str;

    /// Get the identifier of this record
    fn id(&self) -> RecordId;

    /// Set the identifier of this record (called by the store on add/update)
    fn set_id(&mut self, id: RecordId);

    /// Stringified values of the fields reachable by the free-text filter
    fn searchable_values(&self) -> Vec<String>;

    /// Check whether this record matches a free-text query.
    ///
    /// Case-insensitive substring match against [`searchable_values`];
    /// the empty query matches every record.
    ///
    /// [`searchable_values`]: Record::searchable_values
    fn matches(&self, query: &str) -> bool {
        if query.is_empty() {
            return true;
        }
        let needle = query.to_lowercase();
        self.searchable_values()
            .iter()
            .any(|value| value.to_lowercase().contains(&needle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug)]
    struct TestRecord {
        id: RecordId,
        name: String,
        amount: f64,
    }

    impl Record for TestRecord {
        fn resource_name() -> &'static str {
            "test_records"
        }

        fn resource_name_singular() -> &'static str {
            "test_record"
        }

        fn id(&self) -> RecordId {
            self.id
        }

        fn set_id(&mut self, id: RecordId) {
            self.id = id;
        }

        fn searchable_values(&self) -> Vec<String> {
            vec![self.name.clone(), self.amount.to_string()]
        }
    }

    fn sample() -> TestRecord {
        TestRecord {
            id: 1,
            name: "TechCorp".to_string(),
            amount: 5000.0,
        }
    }

    #[test]
    fn test_empty_query_matches_everything() {
        assert!(sample().matches(""));
    }

    #[test]
    fn test_match_is_case_insensitive() {
        assert!(sample().matches("techcorp"));
        assert!(sample().matches("TECH"));
    }

    #[test]
    fn test_numeric_fields_match_as_substrings() {
        assert!(sample().matches("500"));
        assert!(!sample().matches("9000"));
    }

    #[test]
    fn test_resource_names() {
        assert_eq!(TestRecord::resource_name(), "test_records");
        assert_eq!(TestRecord::resource_name_singular(), "test_record");
    }
}
