//! Free-text filtering over record collections

use crate::core::record::Record;

/// Derive the filtered view of a collection for a free-text query.
///
/// Case-insensitive substring match against each record's searchable
/// projection. The empty query is the identity; a query matching nothing
/// yields an empty sequence. Order is preserved and the input is never
/// mutated.
pub fn filter_records<T: Record>(records: &[T], query: &str) -> Vec<T> {
    if query.is_empty() {
        return records.to_vec();
    }
    records
        .iter()
        .filter(|record| record.matches(query))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::record::RecordId;

    #[derive(Clone, Debug, PartialEq)]
    struct Row {
        id: RecordId,
        supplier: String,
        status: String,
    }

    impl Record for Row {
        fn resource_name() -> &'static str {
            "rows"
        }

        fn resource_name_singular() -> &'static str {
            "row"
        }

        fn id(&self) -> RecordId {
            self.id
        }

        fn set_id(&mut self, id: RecordId) {
            self.id = id;
        }

        fn searchable_values(&self) -> Vec<String> {
            vec![self.supplier.clone(), self.status.clone()]
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row {
                id: 1,
                supplier: "TechCorp".to_string(),
                status: "Pendiente".to_string(),
            },
            Row {
                id: 2,
                supplier: "SoftwareSolutions".to_string(),
                status: "Pagada".to_string(),
            },
            Row {
                id: 3,
                supplier: "NetworkPro".to_string(),
                status: "Pendiente".to_string(),
            },
        ]
    }

    #[test]
    fn test_empty_query_is_identity() {
        let input = rows();
        assert_eq!(filter_records(&input, ""), input);
    }

    #[test]
    fn test_no_match_yields_empty() {
        assert!(filter_records(&rows(), "zzz").is_empty());
    }

    #[test]
    fn test_case_insensitive_substring() {
        let matched = filter_records(&rows(), "pendiente");
        assert_eq!(matched.len(), 2);
        assert_eq!(matched[0].id, 1);
        assert_eq!(matched[1].id, 3);
    }

    #[test]
    fn test_order_is_preserved() {
        let matched = filter_records(&rows(), "o");
        let ids: Vec<RecordId> = matched.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }
}
