pub mod geo;
pub mod time;

pub use geo::*;
pub use time::*;

use std::{collections::HashMap, sync::Arc};

/// Anything in the catalogue that is looked up by a unique name.
pub trait Named {
    fn name(&self) -> &Arc<str>;
}

/// Maps each entity name to its position in `items`.
pub(crate) fn index_by_name<T: Named>(items: &[T]) -> HashMap<Arc<str>, u32> {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| (item.name().clone(), index as u32))
        .collect()
}
