/// A persisted category.
///
/// The `id` is assigned by the [`CategoryStore`] on creation and is never
/// generated or rewritten by callers.
///
/// [`CategoryStore`]: crate::CategoryStore
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub description: String,
}

impl Category {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
        }
    }
}
