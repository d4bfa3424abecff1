//! Immutable editing of ordered, keyed collections
//!
//! Collections are `Vec<Arc<T>>`: every operation returns a new vector and
//! leaves the input untouched. Records that are not affected by an operation
//! are shared by pointer with the input, so `Arc::ptr_eq` is a valid change
//! check for a reactive view.

use std::sync::Arc;

/// Record addressable by a stable key inside its collection
pub trait Keyed {
    type Key: PartialEq;

    fn key(&self) -> &Self::Key;
}

/// Append `item` at the end
pub fn append<T>(items: &[Arc<T>], item: T) -> Vec<Arc<T>> {
    let mut next = Vec::with_capacity(items.len() + 1);
    next.extend(items.iter().cloned());
    next.push(Arc::new(item));
    next
}

/// Remove the record with `key`. Unknown key yields an identical copy.
pub fn remove<T: Keyed>(items: &[Arc<T>], key: &T::Key) -> Vec<Arc<T>> {
    items.iter().filter(|item| item.key() != key).cloned().collect()
}

/// Apply `edit` to a copy of the first record with `key`
pub fn update<T, F>(items: &[Arc<T>], key: &T::Key, edit: F) -> Vec<Arc<T>>
where
    T: Keyed + Clone,
    F: FnOnce(&mut T),
{
    let mut edit = Some(edit);
    items
        .iter()
        .map(|item| {
            if item.key() == key {
                if let Some(edit) = edit.take() {
                    let mut next = T::clone(item);
                    edit(&mut next);
                    return Arc::new(next);
                }
            }
            Arc::clone(item)
        })
        .collect()
}

/// Positional update; an index past the end is a no-op
pub fn update_at<T, F>(items: &[Arc<T>], index: usize, edit: F) -> Vec<Arc<T>>
where
    T: Clone,
    F: FnOnce(&mut T),
{
    let mut next = items.to_vec();
    if let Some(slot) = next.get_mut(index) {
        let mut record = T::clone(slot);
        edit(&mut record);
        *slot = Arc::new(record);
    }
    next
}

/// Positional removal; an index past the end is a no-op
pub fn remove_at<T>(items: &[Arc<T>], index: usize) -> Vec<Arc<T>> {
    items
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != index)
        .map(|(_, item)| Arc::clone(item))
        .collect()
}

pub fn find<'a, T: Keyed>(items: &'a [Arc<T>], key: &T::Key) -> Option<&'a Arc<T>> {
    items.iter().find(|item| item.key() == key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        key: u32,
        value: String,
    }

    impl Keyed for Row {
        type Key = u32;

        fn key(&self) -> &u32 {
            &self.key
        }
    }

    fn rows() -> Vec<Arc<Row>> {
        (1..=3)
            .map(|key| {
                Arc::new(Row {
                    key,
                    value: format!("v{key}"),
                })
            })
            .collect()
    }

    fn same_pointers(a: &[Arc<Row>], b: &[Arc<Row>]) -> bool {
        a.len() == b.len() && a.iter().zip(b).all(|(x, y)| Arc::ptr_eq(x, y))
    }

    #[test]
    fn test_append_keeps_existing_pointers() {
        let before = rows();
        let after = append(&before, Row { key: 4, value: "v4".into() });
        assert_eq!(after.len(), 4);
        assert!(same_pointers(&before, &after[..3]));
        assert_eq!(before.len(), 3);
    }

    #[test]
    fn test_remove_unknown_key_is_noop() {
        let before = rows();
        let after = remove(&before, &42);
        assert_eq!(before, after);
        assert!(same_pointers(&before, &after));
    }

    #[test]
    fn test_remove_drops_only_match() {
        let before = rows();
        let after = remove(&before, &2);
        let keys: Vec<u32> = after.iter().map(|r| r.key).collect();
        assert_eq!(keys, vec![1, 3]);
        assert!(Arc::ptr_eq(&before[0], &after[0]));
        assert!(Arc::ptr_eq(&before[2], &after[1]));
    }

    #[test]
    fn test_update_replaces_match_and_shares_siblings() {
        let before = rows();
        let after = update(&before, &2, |r| r.value = "changed".into());
        assert_eq!(after[1].value, "changed");
        assert_eq!(before[1].value, "v2");
        assert!(Arc::ptr_eq(&before[0], &after[0]));
        assert!(!Arc::ptr_eq(&before[1], &after[1]));
        assert!(Arc::ptr_eq(&before[2], &after[2]));
    }

    #[test]
    fn test_update_twice_equals_last_update() {
        let before = rows();
        let twice = update(&update(&before, &1, |r| r.value = "a".into()), &1, |r| {
            r.value = "b".into()
        });
        let once = update(&before, &1, |r| r.value = "b".into());
        assert_eq!(twice, once);
    }

    #[test]
    fn test_update_unknown_key_is_noop() {
        let before = rows();
        let after = update(&before, &9, |r| r.value = "x".into());
        assert!(same_pointers(&before, &after));
    }

    #[test]
    fn test_positional_ops_tolerate_stale_index() {
        let before = rows();
        assert!(same_pointers(&before, &update_at(&before, 3, |r| r.value.clear())));
        assert!(same_pointers(&before, &remove_at(&before, 7)));

        let removed = remove_at(&before, 0);
        assert_eq!(removed.len(), 2);
        let updated = update_at(&before, 1, |r| r.value = "mid".into());
        assert_eq!(updated[1].value, "mid");
    }

    #[test]
    fn test_find() {
        let items = rows();
        assert_eq!(find(&items, &3).map(|r| r.value.as_str()), Some("v3"));
        assert!(find(&items, &0).is_none());
    }
}
