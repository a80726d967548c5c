//! Conversions between [`category_store::Category`] records and the wire
//! messages in [`proto`](crate::proto).

use crate::proto;
use category_store::Category;

impl From<Category> for proto::Category {
    fn from(category: Category) -> Self {
        Self {
            id: category.id,
            name: category.name,
            description: category.description,
        }
    }
}

impl From<proto::Category> for Category {
    fn from(category: proto::Category) -> Self {
        Self {
            id: category.id,
            name: category.name,
            description: category.description,
        }
    }
}

impl From<Category> for proto::CategoryResponse {
    fn from(category: Category) -> Self {
        Self {
            category: Some(category.into()),
        }
    }
}

impl FromIterator<Category> for proto::CategoryList {
    fn from_iter<I: IntoIterator<Item = Category>>(iter: I) -> Self {
        Self {
            categories: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl proto::CreateCategoryRequest {
    /// Builds the reply for this request once storage has assigned `id`.
    ///
    /// Name and description come from the request, not from the stored
    /// record.
    pub fn into_echo(self, id: String) -> proto::Category {
        proto::Category {
            id,
            name: self.name,
            description: self.description,
        }
    }
}
