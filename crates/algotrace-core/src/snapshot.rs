//! Structural deep copies taken at record time.
//!
//! [`Snapshot`] turns a generator's live working structures into owned,
//! independent values. Unordered std containers freeze into ordered ones so
//! the serialized form of a step never depends on hash iteration order.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::hash::Hash;

use indexmap::IndexMap;

/// Produces an owned copy of a value suitable for storing in a [`Step`](crate::Step).
pub trait Snapshot {
    /// The frozen representation stored in the trace.
    type Frozen;

    fn snapshot(&self) -> Self::Frozen;
}

/// Implements [`Snapshot`] for types that are already plain owned data.
///
/// Step state structs made only of scalars and owned ordered containers use
/// this; their clone is the deep copy.
#[macro_export]
macro_rules! snapshot_by_clone {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $crate::snapshot::Snapshot for $ty {
                type Frozen = $ty;

                fn snapshot(&self) -> $ty {
                    self.clone()
                }
            }
        )*
    };
}

crate::snapshot_by_clone!(bool, char, i32, i64, u32, u64, usize, String, ());

impl Snapshot for str {
    type Frozen = String;

    fn snapshot(&self) -> String {
        self.to_string()
    }
}

impl<T: Snapshot + ?Sized> Snapshot for &T {
    type Frozen = T::Frozen;

    fn snapshot(&self) -> T::Frozen {
        (**self).snapshot()
    }
}

impl<T: Snapshot> Snapshot for Option<T> {
    type Frozen = Option<T::Frozen>;

    fn snapshot(&self) -> Self::Frozen {
        self.as_ref().map(Snapshot::snapshot)
    }
}

impl<A: Snapshot, B: Snapshot> Snapshot for (A, B) {
    type Frozen = (A::Frozen, B::Frozen);

    fn snapshot(&self) -> Self::Frozen {
        (self.0.snapshot(), self.1.snapshot())
    }
}

impl<T: Snapshot> Snapshot for [T] {
    type Frozen = Vec<T::Frozen>;

    fn snapshot(&self) -> Self::Frozen {
        self.iter().map(Snapshot::snapshot).collect()
    }
}

impl<T: Snapshot> Snapshot for Vec<T> {
    type Frozen = Vec<T::Frozen>;

    fn snapshot(&self) -> Self::Frozen {
        self.as_slice().snapshot()
    }
}

/// Queues and deques freeze front-to-back.
impl<T: Snapshot> Snapshot for VecDeque<T> {
    type Frozen = Vec<T::Frozen>;

    fn snapshot(&self) -> Self::Frozen {
        self.iter().map(Snapshot::snapshot).collect()
    }
}

impl<T: Ord + Clone> Snapshot for BTreeSet<T> {
    type Frozen = BTreeSet<T>;

    fn snapshot(&self) -> Self::Frozen {
        self.clone()
    }
}

impl<T: Ord + Clone + Hash> Snapshot for HashSet<T> {
    type Frozen = BTreeSet<T>;

    fn snapshot(&self) -> Self::Frozen {
        self.iter().cloned().collect()
    }
}

impl<K: Ord + Clone, V: Snapshot> Snapshot for BTreeMap<K, V> {
    type Frozen = BTreeMap<K, V::Frozen>;

    fn snapshot(&self) -> Self::Frozen {
        self.iter().map(|(k, v)| (k.clone(), v.snapshot())).collect()
    }
}

impl<K: Ord + Clone + Hash, V: Snapshot> Snapshot for HashMap<K, V> {
    type Frozen = BTreeMap<K, V::Frozen>;

    fn snapshot(&self) -> Self::Frozen {
        self.iter().map(|(k, v)| (k.clone(), v.snapshot())).collect()
    }
}

/// Insertion-ordered maps keep their order; it is deterministic already.
impl<K: Clone + Hash + Eq, V: Snapshot> Snapshot for IndexMap<K, V> {
    type Frozen = IndexMap<K, V::Frozen>;

    fn snapshot(&self) -> Self::Frozen {
        self.iter().map(|(k, v)| (k.clone(), v.snapshot())).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vec_snapshot_is_independent() {
        let mut live = vec![1i32, 2, 3];
        let frozen = live.snapshot();
        live.push(4);
        live[0] = 99;
        assert_eq!(frozen, vec![1, 2, 3]);
    }

    #[test]
    fn hash_set_freezes_sorted() {
        let live: HashSet<i32> = [5, 1, 3].into_iter().collect();
        let frozen = live.snapshot();
        assert_eq!(frozen.into_iter().collect::<Vec<_>>(), vec![1, 3, 5]);
    }

    #[test]
    fn hash_map_freezes_sorted_by_key() {
        let mut live = HashMap::new();
        live.insert('c', 1usize);
        live.insert('a', 2usize);
        let frozen = live.snapshot();
        let json = serde_json::to_string(&frozen).unwrap();
        assert_eq!(json, r#"{"a":2,"c":1}"#);
    }

    #[test]
    fn deque_freezes_front_to_back() {
        let mut live: VecDeque<i32> = VecDeque::new();
        live.push_back(2);
        live.push_front(1);
        live.push_back(3);
        assert_eq!(live.snapshot(), vec![1, 2, 3]);
    }

    #[test]
    fn nested_structures_copy_deeply() {
        let mut live = vec![vec![1i32], vec![2, 3]];
        let frozen = live.snapshot();
        live[1].clear();
        assert_eq!(frozen, vec![vec![1], vec![2, 3]]);
    }

    #[test]
    fn index_map_keeps_insertion_order() {
        let mut live = IndexMap::new();
        live.insert("z", 1i32);
        live.insert("a", 2);
        let frozen = live.snapshot();
        assert_eq!(frozen.keys().copied().collect::<Vec<_>>(), vec!["z", "a"]);
    }
}
