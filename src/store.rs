// 🗄️ Keyed Store - in-memory entities keyed by id
//
// One store holds one concrete entity type. Ids are unique at all times:
// every operation either succeeds completely or leaves the store unchanged.
//
// Enumeration follows insertion order (removing an entity keeps the order of
// the rest), so `find_first` and `get_all` are deterministic.

use indexmap::IndexMap;
use std::path::Path;
use tracing::debug;

use crate::entities::{Entity, Stocked};
use crate::error::{Error, Result};
use crate::snapshot;

pub struct KeyedStore<T> {
    items: IndexMap<u32, T>,
}

impl<T: Entity> KeyedStore<T> {
    /// Create an empty store
    pub fn new() -> Self {
        KeyedStore {
            items: IndexMap::new(),
        }
    }

    /// Build a store from a sequence of entities.
    ///
    /// Fails on the first duplicate id; no partial store is returned.
    pub fn from_entities<I>(entities: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
    {
        let mut store = KeyedStore::new();
        for entity in entities {
            store.add(entity)?;
        }
        Ok(store)
    }

    /// Insert a new entity. An existing entity with the same id is left untouched.
    ///
    /// The entity's invariants are re-checked first, so one built by hand
    /// (bypassing its constructor) cannot carry a zero id or an empty name in.
    pub fn add(&mut self, item: T) -> Result<()> {
        item.validate()?;

        let id = item.id();
        if self.items.contains_key(&id) {
            return Err(Error::DuplicateKey { id });
        }

        debug!(id, label = item.label(), "added entity");
        self.items.insert(id, item);
        Ok(())
    }

    pub fn get(&self, id: u32) -> Result<&T> {
        self.items.get(&id).ok_or(Error::NotFound { id })
    }

    pub fn contains(&self, id: u32) -> bool {
        self.items.contains_key(&id)
    }

    /// Remove an entity, returning it
    pub fn remove(&mut self, id: u32) -> Result<T> {
        let removed = self
            .items
            .shift_remove(&id)
            .ok_or(Error::NotFound { id })?;

        debug!(id, label = removed.label(), "removed entity");
        Ok(removed)
    }

    pub fn count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// First entity in enumeration order matching the predicate
    pub fn find_first<P>(&self, mut predicate: P) -> Option<&T>
    where
        P: FnMut(&T) -> bool,
    {
        self.items.values().find(|item| predicate(*item))
    }

    /// Borrowing iterator in enumeration order
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.values()
    }
}

impl<T: Entity + Clone> KeyedStore<T> {
    /// Snapshot of all entities in enumeration order.
    ///
    /// The returned vector is a copy; changing it never touches the store.
    pub fn get_all(&self) -> Vec<T> {
        self.items.values().cloned().collect()
    }

    /// All entities matching the predicate, in enumeration order
    pub fn filter<P>(&self, mut predicate: P) -> Vec<T>
    where
        P: FnMut(&T) -> bool,
    {
        self.items
            .values()
            .filter(|item| predicate(*item))
            .cloned()
            .collect()
    }
}

// ============================================================================
// QUANTITY UPDATES
// ============================================================================

impl<T: Stocked> KeyedStore<T> {
    /// Replace the quantity of an entity.
    ///
    /// The value is checked before the id: a negative quantity is reported as
    /// `InvalidValue` even when the id does not exist.
    pub fn update_quantity(&mut self, id: u32, new_quantity: i64) -> Result<()> {
        let quantity = crate::entities::check_quantity(new_quantity)?;
        let item = self.items.get_mut(&id).ok_or(Error::NotFound { id })?;

        debug!(id, from = item.quantity(), to = quantity, "updated quantity");
        item.set_quantity(quantity);
        Ok(())
    }

    /// Add stock to an entity, returning the new quantity
    pub fn increase_quantity(&mut self, id: u32, amount: u32) -> Result<u32> {
        let item = self.items.get_mut(&id).ok_or(Error::NotFound { id })?;
        let quantity = item.quantity().checked_add(amount).ok_or_else(|| {
            Error::invalid(
                "quantity",
                format!("adding {} to {} overflows", amount, item.quantity()),
            )
        })?;

        debug!(id, from = item.quantity(), to = quantity, "increased quantity");
        item.set_quantity(quantity);
        Ok(quantity)
    }
}

// ============================================================================
// SNAPSHOTS
// ============================================================================

impl<T> KeyedStore<T>
where
    T: Entity + Clone + serde::Serialize + serde::de::DeserializeOwned,
{
    /// Write every entity to a JSON snapshot (overwrites)
    pub fn save_snapshot(&self, path: &Path) -> Result<()> {
        snapshot::save(&self.get_all(), path)
    }

    /// Build a store from a JSON snapshot.
    ///
    /// A missing or empty file yields an empty store. Invalid JSON, an entity
    /// breaking its invariants, or a repeated id fails the whole load.
    pub fn load_snapshot(path: &Path) -> Result<Self> {
        let entities: Vec<T> = snapshot::load(path)?;
        KeyedStore::from_entities(entities)
    }
}

impl<T: Entity> Default for KeyedStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> std::fmt::Debug for KeyedStore<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyedStore")
            .field("count", &self.items.len())
            .finish()
    }
}

// ============================================================================
// TESTS
// ============================================================================
