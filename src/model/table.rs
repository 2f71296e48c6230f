use std::collections::BTreeMap;

use super::EstimationError;
use crate::profile::Choice;

/// A lookup table with exactly one value for every option of `K`.
///
/// Completeness is checked once, when the table is built, so lookups cannot
/// miss afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct EnumTable<K: Choice, V> {
    values: Vec<V>,
    _key: std::marker::PhantomData<K>,
}

impl<K: Choice, V> EnumTable<K, V> {
    /// Builds the table by calling `f` for every option in `K::ALL` order.
    pub fn from_fn(mut f: impl FnMut(K) -> V) -> Self {
        Self {
            values: K::ALL.iter().map(|&k| f(k)).collect(),
            _key: std::marker::PhantomData,
        }
    }

    /// Builds the table from key/value entries.
    ///
    /// Fails with `UnknownKey` naming the first option without an entry.
    /// Later duplicates overwrite earlier ones.
    pub fn from_entries(
        entries: impl IntoIterator<Item = (K, V)>,
    ) -> Result<Self, EstimationError> {
        let mut map: BTreeMap<K, V> = entries.into_iter().collect();
        let values = K::ALL
            .iter()
            .map(|k| {
                map.remove(k).ok_or_else(|| {
                    EstimationError::unknown_key(K::KIND, format!("no entry for {}", k.label()))
                })
            })
            .collect::<Result<Vec<V>, _>>()?;
        Ok(Self {
            values,
            _key: std::marker::PhantomData,
        })
    }

    pub fn get(&self, key: K) -> &V {
        &self.values[key.ordinal()]
    }

    /// Entries in option order.
    pub fn iter(&self) -> impl Iterator<Item = (K, &V)> {
        K::ALL.iter().copied().zip(self.values.iter())
    }

    /// Copies the table into an ordered map (used for serialization).
    pub fn to_map(&self) -> BTreeMap<K, V>
    where
        V: Clone,
    {
        self.iter().map(|(k, v)| (k, v.clone())).collect()
    }
}

impl<K: Choice, V> std::ops::Index<K> for EnumTable<K, V> {
    type Output = V;

    fn index(&self, key: K) -> &V {
        self.get(key)
    }
}
