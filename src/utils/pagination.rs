use sea_orm::{EntityTrait, QueryOrder, QuerySelect, Select};
use serde::Deserialize;

const DEFAULT_PER_PAGE: u64 = 50;
const MAX_PER_PAGE: u64 = 200;

/// `?page=&per_page=` of the list endpoints. Pages start at zero.
#[derive(Debug, Default, Deserialize)]
pub struct Pagination {
    page: Option<u64>,
    per_page: Option<u64>,
}

impl Pagination {
    pub fn limit(&self) -> u64 {
        self.per_page
            .unwrap_or(DEFAULT_PER_PAGE)
            .clamp(1, MAX_PER_PAGE)
    }

    pub fn offset(&self) -> u64 {
        self.page.unwrap_or(0).saturating_mul(self.limit())
    }

    /// Applies the page to `select`, ordered by `order`.
    pub fn apply<E, C>(&self, select: Select<E>, order: C) -> Select<E>
    where
        E: EntityTrait,
        C: sea_orm::ColumnTrait,
    {
        select
            .order_by_asc(order)
            .offset(self.offset())
            .limit(self.limit())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let pagination = Pagination::default();

        assert_eq!(pagination.limit(), DEFAULT_PER_PAGE);
        assert_eq!(pagination.offset(), 0);
    }

    #[test]
    fn per_page_is_clamped() {
        let pagination = Pagination {
            page: Some(2),
            per_page: Some(10_000),
        };

        assert_eq!(pagination.limit(), MAX_PER_PAGE);
        assert_eq!(pagination.offset(), 2 * MAX_PER_PAGE);

        let pagination = Pagination {
            page: Some(3),
            per_page: Some(0),
        };

        assert_eq!(pagination.limit(), 1);
        assert_eq!(pagination.offset(), 3);
    }
}
