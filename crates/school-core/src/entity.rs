//! Core Entity Trait
//!
//! Every record the pages keep in local state is addressed by a string id.

/// Basic contract for records kept in page-local arrays
pub trait Entity: Clone {
    /// Returns the record's identifier
    fn id(&self) -> &str;
}

/// Next id for a freshly submitted record: array length plus one.
///
/// Ids are not unique once records have been removed; two adds after a
/// delete can collide.
pub fn next_id<T>(records: &[T]) -> String {
    (records.len() + 1).to_string()
}

/// Find a record by id
pub fn find_by_id<'a, T: Entity>(records: &'a [T], id: &str) -> Option<&'a T> {
    records.iter().find(|record| record.id() == id)
}

/// Remove a record by id, returning the new array and the removed record
pub fn remove_by_id<T: Entity>(records: &[T], id: &str) -> (Vec<T>, Option<T>) {
    let removed = find_by_id(records, id).cloned();
    let kept = records
        .iter()
        .filter(|record| record.id() != id)
        .cloned()
        .collect();
    (kept, removed)
}

/// Pairs each record with a list key of position and id.
///
/// The position keeps keys distinct when ids repeat.
pub fn keyed_rows<T: Entity>(records: &[T]) -> Vec<((usize, String), T)> {
    records
        .iter()
        .enumerate()
        .map(|(position, record)| ((position, record.id().to_string()), record.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row(String);

    impl Entity for Row {
        fn id(&self) -> &str {
            &self.0
        }
    }

    fn rows(ids: &[&str]) -> Vec<Row> {
        ids.iter().map(|id| Row(id.to_string())).collect()
    }

    #[test]
    fn test_next_id_uses_length() {
        assert_eq!(next_id::<Row>(&[]), "1");
        assert_eq!(next_id(&rows(&["1", "2", "3"])), "4");
    }

    #[test]
    fn test_remove_by_id() {
        let (kept, removed) = remove_by_id(&rows(&["1", "2", "3"]), "2");
        assert_eq!(kept, rows(&["1", "3"]));
        assert_eq!(removed, Some(Row("2".to_string())));
    }

    #[test]
    fn test_remove_unknown_id_keeps_everything() {
        let (kept, removed) = remove_by_id(&rows(&["1"]), "9");
        assert_eq!(kept.len(), 1);
        assert!(removed.is_none());
    }

    #[test]
    fn test_ids_collide_after_delete() {
        let (kept, _) = remove_by_id(&rows(&["1", "2", "3"]), "1");
        // Length is 2 again, so the next id repeats an existing one.
        assert_eq!(next_id(&kept), "3");
        assert!(find_by_id(&kept, "3").is_some());
    }

    #[test]
    fn test_keyed_rows_stay_distinct_with_repeated_ids() {
        let (mut kept, _) = remove_by_id(&rows(&["1", "2", "3"]), "1");
        kept.push(Row(next_id(&kept)));
        let keys: Vec<(usize, String)> = keyed_rows(&kept).into_iter().map(|(key, _)| key).collect();
        assert_eq!(
            keys,
            vec![(0, "2".to_string()), (1, "3".to_string()), (2, "3".to_string())]
        );
    }
}
