//! Grouping items by a derived string key.

use std::fmt::Display;

use indexmap::IndexMap;
use kitbag_value::Value;

/// Groups `items` by the string form of `key(item)`.
///
/// Groups appear in the order their key was first seen; items keep their
/// input order within a group.
///
/// # Examples
///
/// ```
/// use kitbag_util::group_by;
///
/// let words = ["apple", "avocado", "banana", "blueberry", "cherry"];
/// let groups = group_by(words, |w| w.chars().next().unwrap_or_default());
///
/// assert_eq!(groups["a"], ["apple", "avocado"]);
/// assert_eq!(groups.keys().collect::<Vec<_>>(), ["a", "b", "c"]);
/// ```
pub fn group_by<T, K, I, F>(items: I, mut key: F) -> IndexMap<String, Vec<T>>
where
    I: IntoIterator<Item = T>,
    F: FnMut(&T) -> K,
    K: Display,
{
    let mut groups: IndexMap<String, Vec<T>> = IndexMap::new();
    for item in items {
        groups.entry(key(&item).to_string()).or_default().push(item);
    }
    groups
}

/// Groups records by the field `key`.
///
/// The group name is the field rendered like JavaScript's `String()`, so
/// `{"id": 1}` lands in `"1"` and `{"ok": null}` in `"null"`. Records
/// without the field, and values that are not objects, land in
/// `"undefined"`.
pub fn group_by_key<'a>(values: &'a [Value], key: &str) -> IndexMap<String, Vec<&'a Value>> {
    group_by(values, |record| match record.get(key) {
        Some(field) => field.to_string(),
        None => "undefined".to_string(),
    })
}
