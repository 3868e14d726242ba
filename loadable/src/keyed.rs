use crate::Loadable;
use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;
use std::mem;

/// Loadable transitions lifted onto entries of a map.
///
/// A missing key reads as [`Loadable::not_asked`], so hosts can key remote
/// data by id without seeding the map first.
pub trait LoadableMapExt<K, E, A> {
    /// The entry at `key`, or `not_asked()` if there is none.
    fn get_loadable(&self, key: &K) -> Loadable<E, A>
    where
        E: Clone,
        A: Clone;

    /// Marks the entry at `key` as loading, inserting `loading()` if absent.
    fn to_loading_at(&mut self, key: K);

    /// Replaces the entry at `key` with the outcome of a fetch.
    fn insert_result(&mut self, key: K, result: Result<A, E>);
}

impl<K, E, A> LoadableMapExt<K, E, A> for HashMap<K, Loadable<E, A>>
where
    K: Eq + Hash,
{
    fn get_loadable(&self, key: &K) -> Loadable<E, A>
    where
        E: Clone,
        A: Clone,
    {
        self.get(key).cloned().unwrap_or_default()
    }

    fn to_loading_at(&mut self, key: K) {
        let entry = self.entry(key).or_insert_with(Loadable::loading);
        *entry = mem::take(entry).to_loading();
    }

    fn insert_result(&mut self, key: K, result: Result<A, E>) {
        self.insert(key, Loadable::from_result(result));
    }
}

impl<K, E, A> LoadableMapExt<K, E, A> for BTreeMap<K, Loadable<E, A>>
where
    K: Ord,
{
    fn get_loadable(&self, key: &K) -> Loadable<E, A>
    where
        E: Clone,
        A: Clone,
    {
        self.get(key).cloned().unwrap_or_default()
    }

    fn to_loading_at(&mut self, key: K) {
        let entry = self.entry(key).or_insert_with(Loadable::loading);
        *entry = mem::take(entry).to_loading();
    }

    fn insert_result(&mut self, key: K, result: Result<A, E>) {
        self.insert(key, Loadable::from_result(result));
    }
}
