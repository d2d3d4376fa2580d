/// Counts occurrences of categorical values (icons, precipitation types) and picks
/// the most frequent one.
///
/// Keys keep their first-insertion order, which decides ties: [`FrequencyCounter::mode`]
/// stably sorts the counts ascending and takes the last entry, so among equally
/// frequent keys the one inserted last wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyCounter {
    counts: Vec<(String, usize)>,
}

impl FrequencyCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, key: &str) {
        match self.counts.iter_mut().find(|(existing, _)| existing == key) {
            Some((_, count)) => *count += 1,
            None => self.counts.push((key.to_string(), 1)),
        }
    }

    pub fn count(&self, key: &str) -> usize {
        self.counts
            .iter()
            .find(|(existing, _)| existing == key)
            .map_or(0, |(_, count)| *count)
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// The most frequent key, or `None` if nothing was counted.
    pub fn mode(&self) -> Option<&str> {
        let mut sorted: Vec<&(String, usize)> = self.counts.iter().collect();
        // sort_by_key is stable: equal counts keep insertion order
        sorted.sort_by_key(|(_, count)| *count);
        sorted.last().copied().map(|(key, _)| key.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counted(keys: &[&str]) -> FrequencyCounter {
        let mut counter = FrequencyCounter::new();
        for key in keys {
            counter.increment(key);
        }
        counter
    }

    #[test]
    fn test_empty_has_no_mode() {
        assert_eq!(FrequencyCounter::new().mode(), None);
    }

    #[test]
    fn test_majority_wins() {
        let counter = counted(&["rain", "rain", "snow"]);
        assert_eq!(counter.mode(), Some("rain"));
        assert_eq!(counter.count("rain"), 2);
        assert_eq!(counter.count("hail"), 0);
    }

    #[test]
    fn test_tie_goes_to_later_inserted_key() {
        let counter = counted(&["icon_a", "icon_a", "icon_b", "icon_b"]);
        assert_eq!(counter.mode(), Some("icon_b"));

        // Interleaving does not matter, only first-insertion order
        let counter = counted(&["icon_a", "icon_b", "icon_b", "icon_a"]);
        assert_eq!(counter.mode(), Some("icon_b"));

        let counter = counted(&["icon_b", "icon_a", "icon_a", "icon_b"]);
        assert_eq!(counter.mode(), Some("icon_a"));
    }

    #[test]
    fn test_tie_among_leaders_only() {
        let counter = counted(&["c", "a", "a", "b", "b", "c", "c", "d"]);
        assert_eq!(counter.mode(), Some("c"));

        let counter = counted(&["a", "a", "b", "c", "c"]);
        assert_eq!(counter.mode(), Some("c"));
    }
}
