use std::collections::BTreeMap;
use tracing::debug;

/// Entities that are unique by name within a cluster spec.
pub trait Named {
    fn name(&self) -> &str;
}

/// Index a sequence by name. Later entries replace earlier ones sharing a name.
pub fn key_by_name<T, I>(items: I) -> BTreeMap<String, T>
where
    T: Named,
    I: IntoIterator<Item = T>,
{
    let mut index = BTreeMap::new();
    for item in items {
        let name = item.name().to_owned();
        if index.insert(name.clone(), item).is_some() {
            debug!(name = %name, "duplicate name in spec, keeping the later entry");
        }
    }
    index
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Item(&'static str, u32);

    impl Named for Item {
        fn name(&self) -> &str {
            self.0
        }
    }

    #[test]
    fn test_key_by_name_last_wins() {
        let index = key_by_name(vec![Item("a", 1), Item("b", 2), Item("a", 3)]);
        assert_eq!(index.len(), 2);
        assert_eq!(index["a"], Item("a", 3));
        assert_eq!(index["b"], Item("b", 2));
    }

    #[test]
    fn test_key_by_name_empty() {
        let index = key_by_name(Vec::<Item>::new());
        assert!(index.is_empty());
    }
}
