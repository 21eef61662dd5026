//! Project detail page state.
//!
//! `Loading` is entered whenever the route slug changes; resolving moves to
//! `Found` or `NotFound`, which stay put until the slug changes again.

use portfolio_shared::ContentRecord;

use crate::catalog::Catalog;

/// What the detail page is currently showing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageState<'a> {
    /// A lookup is pending for the current slug.
    Loading,
    /// The slug matched a record.
    Found(&'a ContentRecord),
    /// The slug matched nothing; carries the sentinel record to render.
    NotFound(&'a ContentRecord),
}

impl<'a> PageState<'a> {
    /// The record to render, if the lookup has finished.
    pub fn record(&self) -> Option<&'a ContentRecord> {
        match *self {
            Self::Loading => None,
            Self::Found(r) | Self::NotFound(r) => Some(r),
        }
    }
}

/// Detail page bound to a catalog.
#[derive(Debug)]
pub struct ProjectPage<'a> {
    catalog: &'a Catalog,
    slug: Option<String>,
    state: PageState<'a>,
}

impl<'a> ProjectPage<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            catalog,
            slug: None,
            state: PageState::Loading,
        }
    }

    pub fn slug(&self) -> Option<&str> {
        self.slug.as_deref()
    }

    pub fn state(&self) -> &PageState<'a> {
        &self.state
    }

    /// Route to `slug`. Returns `true` when this starts a new lookup;
    /// navigating to the current slug is a no-op.
    pub fn navigate(&mut self, slug: &str) -> bool {
        if self.slug.as_deref() == Some(slug) {
            return false;
        }
        self.slug = Some(slug.to_string());
        self.state = PageState::Loading;
        true
    }

    /// Finish a pending lookup. Does nothing outside `Loading` or before the
    /// first navigation.
    pub fn resolve(&mut self) -> &PageState<'a> {
        let catalog = self.catalog;
        if self.state == PageState::Loading {
            if let Some(slug) = self.slug.as_deref() {
                self.state = match catalog.find(slug) {
                    Some(record) => PageState::Found(record),
                    None => PageState::NotFound(catalog.not_found()),
                };
            }
        }
        &self.state
    }

    /// Navigate and resolve in one step.
    pub fn open(&mut self, slug: &str) -> &PageState<'a> {
        self.navigate(slug);
        self.resolve()
    }
}
