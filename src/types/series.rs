use std::collections::HashMap;

/// An insertion-ordered map from string keys to forecast records.
///
/// Used for the hourly series (keyed by 14-digit timestamps) and the daily series
/// (keyed by 8-digit dates). Iteration follows first insertion; inserting an existing
/// key replaces its value in place.
#[derive(Debug, Clone, PartialEq)]
pub struct Series<T> {
    entries: Vec<(String, T)>,
    index: HashMap<String, usize>,
}

impl<T> Series<T> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Inserts `value` under `key`, returning the replaced value if the key existed.
    pub fn insert(&mut self, key: String, value: T) -> Option<T> {
        match self.index.get(&key) {
            Some(&position) => Some(std::mem::replace(&mut self.entries[position].1, value)),
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, value));
                None
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&T> {
        self.index.get(key).map(|&position| &self.entries[position].1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn first(&self) -> Option<(&str, &T)> {
        self.entries.first().map(|(key, value)| (key.as_str(), value))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.entries.iter().map(|(_, value)| value)
    }

    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.entries.iter_mut().map(|(_, value)| value)
    }
}

impl<T> Default for Series<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<(String, T)> for Series<T> {
    fn from_iter<I: IntoIterator<Item = (String, T)>>(iter: I) -> Self {
        let mut series = Series::new();
        for (key, value) in iter {
            series.insert(key, value);
        }
        series
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insertion_order_is_kept() {
        let series: Series<i32> = [("b", 1), ("a", 2), ("c", 3)]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect();
        assert_eq!(series.keys().collect::<Vec<_>>(), vec!["b", "a", "c"]);
        assert_eq!(series.first(), Some(("b", &1)));
    }

    #[test]
    fn test_reinsert_replaces_in_place() {
        let mut series = Series::new();
        series.insert("x".to_string(), 1);
        series.insert("y".to_string(), 2);
        assert_eq!(series.insert("x".to_string(), 10), Some(1));
        assert_eq!(series.len(), 2);
        assert_eq!(series.values().copied().collect::<Vec<_>>(), vec![10, 2]);
        assert_eq!(series.get("x"), Some(&10));
        assert!(series.get("z").is_none());
    }

    #[test]
    fn test_values_mut_keeps_order() {
        let mut series: Series<i32> = Series::new();
        assert!(series.is_empty());
        series.insert("x".to_string(), 1);
        series.insert("y".to_string(), 2);
        for value in series.values_mut() {
            *value *= 10;
        }
        assert_eq!(series.iter().collect::<Vec<_>>(), vec![("x", &10), ("y", &20)]);
    }
}
