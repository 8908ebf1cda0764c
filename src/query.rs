//! Column storage and the per-entity join that drives rendering and firing.
//!
//! State is kept as parallel [`Column`]s, one slot per entity index. A query
//! walks entity indices in ascending order, fetches the requested columns at
//! each index, and calls a handler only where every requested slot is filled.
//! The handler receives the joined values (in the order the columns were
//! requested), the caller's extra context, and the entity index.

use alloc::vec::Vec;

/// One field of per-entity state. Slots may be empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column<T> {
    slots: Vec<Option<T>>,
}

impl<T> Default for Column<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Column<T> {
    pub fn new() -> Self {
        Column { slots: Vec::new() }
    }

    /// Build a column from explicit slots, keeping gaps.
    pub fn from_slots(slots: Vec<Option<T>>) -> Self {
        Column { slots }
    }

    /// Append a filled slot for the next entity index.
    pub fn push(&mut self, value: T) {
        self.slots.push(Some(value));
    }

    pub fn get(&self, entity: usize) -> Option<&T> {
        self.slots.get(entity)?.as_ref()
    }

    pub fn get_mut(&mut self, entity: usize) -> Option<&mut T> {
        self.slots.get_mut(entity)?.as_mut()
    }

    /// Number of slots, filled or not.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Filled slots with their entity index.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &T)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|v| (i, v)))
    }
}

impl<T> FromIterator<T> for Column<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Column {
            slots: iter.into_iter().map(Some).collect(),
        }
    }
}

/// A set of columns that can be read together at one entity index.
pub trait Fetch {
    type Item;

    /// Values of every column at `entity`, or `None` as soon as one is
    /// missing.
    fn fetch(&self, entity: usize) -> Option<Self::Item>;
}

impl<'a, T> Fetch for &'a Column<T> {
    type Item = &'a T;

    fn fetch(&self, entity: usize) -> Option<&'a T> {
        Column::get(*self, entity)
    }
}

// Tuple fields are evaluated left to right, so `?` stops at the first gap.
macro_rules! impl_fetch_tuple {
    ($($name:ident),+) => {
        impl<$($name: Fetch),+> Fetch for ($($name,)+) {
            type Item = ($($name::Item,)+);

            #[allow(non_snake_case)]
            fn fetch(&self, entity: usize) -> Option<Self::Item> {
                let ($($name,)+) = self;
                Some(($($name.fetch(entity)?,)+))
            }
        }
    };
}

impl_fetch_tuple!(A);
impl_fetch_tuple!(A, B);
impl_fetch_tuple!(A, B, C);
impl_fetch_tuple!(A, B, C, D);

/// Call `system` for every entity in `0..entities` where all of `columns`
/// are present.
pub fn query<Q, X, F>(entities: usize, columns: Q, extra: &mut X, mut system: F)
where
    Q: Fetch,
    X: ?Sized,
    F: FnMut(Q::Item, &mut X, usize),
{
    for entity in 0..entities {
        let Some(item) = columns.fetch(entity) else {
            continue;
        };
        system(item, extra, entity);
    }
}

/// Like [`query`], but stops at the first error the handler returns.
pub fn try_query<Q, X, F, E>(
    entities: usize,
    columns: Q,
    extra: &mut X,
    mut system: F,
) -> Result<(), E>
where
    Q: Fetch,
    X: ?Sized,
    F: FnMut(Q::Item, &mut X, usize) -> Result<(), E>,
{
    for entity in 0..entities {
        let Some(item) = columns.fetch(entity) else {
            continue;
        };
        system(item, extra, entity)?;
    }
    Ok(())
}
