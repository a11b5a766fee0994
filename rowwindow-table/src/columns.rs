use std::sync::Arc;

use crate::person::Person;

/// A declarative column: header/footer labels plus an accessor that maps a
/// row record to its cell text.
///
/// Columns are plain configuration passed into the table's constructor, so
/// independent table instances can carry independent column sets.
pub struct Column<R> {
    pub id: &'static str,
    pub header: String,
    pub footer: Option<String>,
    accessor: Arc<dyn Fn(&R) -> String + Send + Sync>,
}

impl<R> Column<R> {
    pub fn new(
        id: &'static str,
        header: impl Into<String>,
        accessor: impl Fn(&R) -> String + Send + Sync + 'static,
    ) -> Self {
        Self {
            id,
            header: header.into(),
            footer: None,
            accessor: Arc::new(accessor),
        }
    }

    pub fn with_footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = Some(footer.into());
        self
    }

    pub fn cell(&self, row: &R) -> String {
        (self.accessor)(row)
    }
}

impl<R> Clone for Column<R> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            header: self.header.clone(),
            footer: self.footer.clone(),
            accessor: Arc::clone(&self.accessor),
        }
    }
}

impl<R> core::fmt::Debug for Column<R> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Column")
            .field("id", &self.id)
            .field("header", &self.header)
            .field("footer", &self.footer)
            .finish_non_exhaustive()
    }
}

/// The default six-column set for person rows.
pub fn person_columns() -> Vec<Column<Person>> {
    vec![
        Column::new("first_name", "First Name", |p: &Person| {
            p.first_name.clone()
        }),
        Column::new("last_name", "Last Name", |p: &Person| p.last_name.clone()),
        Column::new("age", "Age", |p: &Person| p.age.to_string()),
        Column::new("visits", "Visits", |p: &Person| p.visits.to_string()),
        Column::new("status", "Status", |p: &Person| {
            p.status.label().to_owned()
        }),
        Column::new("progress", "Profile Progress", |p: &Person| {
            format!("{}%", p.progress)
        }),
    ]
}
