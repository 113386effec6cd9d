mod categories;
mod questions;
mod quiz;

use std::collections::BTreeMap;

pub use categories::category_router;
pub use questions::questions_router;
pub use quiz::quiz_router;

use crate::db::Category;

/// The wire shape for categories is a mapping from id to display name.
pub(crate) fn category_map(categories: Vec<Category>) -> BTreeMap<i64, String> {
    categories.into_iter().map(|c| (c.id, c.name)).collect()
}
