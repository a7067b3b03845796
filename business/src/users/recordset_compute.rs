use std::any::TypeId;

use agit_states::{Compute, Dep, Error};
use log::debug;

use crate::{
    PAGE_SIZE, PageDirection, Pagination, Record, SearchState, SortState, UsersState, paginate,
    process, total_pages,
};

/// The processed view behind the table: filtered and sorted rows plus the
/// pager position.
///
/// Recomputed whenever the records, the applied search term or the sort
/// directive change; every recompute goes back to page 1. Paging itself does
/// not recompute, it moves the cached pager via `ChangePageCommand`.
#[derive(Debug, Clone, Default)]
pub struct RecordsetCompute {
    rows: Vec<Record>,
    pagination: Pagination,
}

impl RecordsetCompute {
    pub fn rows(&self) -> &[Record] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn pagination(&self) -> Pagination {
        self.pagination
    }

    pub fn current_page_rows(&self) -> &[Record] {
        paginate(&self.rows, PAGE_SIZE, self.pagination.current())
    }

    pub fn step(&mut self, direction: PageDirection) -> bool {
        self.pagination.step(direction)
    }
}

impl Compute for RecordsetCompute {
    fn deps(&self) -> Vec<TypeId> {
        vec![
            TypeId::of::<UsersState>(),
            TypeId::of::<SearchState>(),
            TypeId::of::<SortState>(),
        ]
    }

    fn compute(&mut self, deps: Dep<'_>) -> Result<(), Error> {
        let users = deps.state::<UsersState>()?;
        let search = deps.state::<SearchState>()?;
        let sort = deps.state::<SortState>()?;

        self.rows = process(users.records(), &search.term, sort.directive);
        self.pagination = Pagination::new(total_pages(self.rows.len(), PAGE_SIZE));

        debug!(
            "Recordset recomputed: {} of {} records, {} pages, term {:?}, sort {:?}",
            self.rows.len(),
            users.records().len(),
            self.pagination.total(),
            search.term,
            sort.directive
        );
        Ok(())
    }
}
