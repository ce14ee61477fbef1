/// Ordered column to value mapping used by `INSERT` and `UPDATE`
///
/// Insertion order is significant, it is the order of the rendered `SET`
/// list. Setting a column twice replaces the value but keeps the position of
/// the first insertion.
///
/// # Examples
///
/// ```
/// use sqlchain_query::Values;
///
/// let values = Values::new()
///     .set("name", "bob")
///     .set("age", 30)
///     .set("name", "alice");
///
/// assert_eq!(
///     values.iter().collect::<Vec<_>>(),
///     vec![("name", "alice"), ("age", "30")]
/// );
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Values {
    kvs: Vec<(String, String)>,
}

impl Values {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append or replace a column value
    pub fn set<K, V>(mut self, col: K, val: V) -> Self
    where
        K: ToString,
        V: ToString,
    {
        self.insert(col, val);
        self
    }

    /// Append or replace a column value in place
    pub fn insert<K, V>(&mut self, col: K, val: V)
    where
        K: ToString,
        V: ToString,
    {
        let col = col.to_string();
        let val = val.to_string();

        match self.kvs.iter_mut().find(|(k, _)| *k == col) {
            Some((_, v)) => *v = val,
            None => self.kvs.push((col, val)),
        }
    }

    pub fn get(&self, col: &str) -> Option<&str> {
        self.kvs
            .iter()
            .find(|(k, _)| k == col)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.kvs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kvs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.kvs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for Values
where
    K: ToString,
    V: ToString,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut values = Self::new();
        for (k, v) in iter {
            values.insert(k, v);
        }

        values
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for Values
where
    K: ToString,
    V: ToString,
{
    fn from(arr: [(K, V); N]) -> Self {
        arr.into_iter().collect()
    }
}

impl<K, V> From<Vec<(K, V)>> for Values
where
    K: ToString,
    V: ToString,
{
    fn from(list: Vec<(K, V)>) -> Self {
        list.into_iter().collect()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_order_preserved() {
        let values = Values::from([("c", "3"), ("a", "1"), ("b", "2")]);
        let keys = values.iter().map(|(k, _)| k).collect::<Vec<_>>();

        assert_eq!(keys, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_replace_keeps_position() {
        let mut values = Values::from(vec![("a", 1), ("b", 2)]);
        values.insert("a", 10);

        assert_eq!(values.len(), 2);
        assert_eq!(values.get("a"), Some("10"));
        assert_eq!(values.iter().next(), Some(("a", "10")));
    }

    #[test]
    fn test_empty() {
        let values = Values::new();

        assert!(values.is_empty());
        assert_eq!(values.get("a"), None);
    }
}
