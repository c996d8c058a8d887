//! Per-user dashboard state.

use streamdash_common::Result;
use streamdash_data::EventStore;
use streamdash_graphs::{Dashboard, DashboardRequest, DashboardView};
use tracing::{debug, warn};

/// A user's current selections and the last dashboard they produced.
///
/// The store is passed in on every call; a session never owns event data.
#[derive(Debug, Clone, Default)]
pub struct Session {
    request: DashboardRequest,
    view: Option<DashboardView>,
}

impl Session {
    /// Starts a session from the given selections. Nothing is built yet.
    pub const fn new(request: DashboardRequest) -> Self {
        Self {
            request,
            view: None,
        }
    }

    /// Current selections.
    pub const fn request(&self) -> &DashboardRequest {
        &self.request
    }

    /// Most recently built view.
    pub const fn view(&self) -> Option<&DashboardView> {
        self.view.as_ref()
    }

    /// Rebuilds the view from the current selections.
    pub fn refresh(&mut self, store: &EventStore) -> Result<&DashboardView> {
        let view = Dashboard::build(store, &self.request)?;
        Ok(self.view.insert(view))
    }

    /// Updates the selections and rebuilds the view.
    ///
    /// If the update or the build fails, the previous selections and view
    /// are kept.
    pub fn apply<F>(&mut self, store: &EventStore, update: F) -> Result<&DashboardView>
    where
        F: FnOnce(&mut DashboardRequest) -> Result<()>,
    {
        let mut request = self.request.clone();
        update(&mut request)?;

        match Dashboard::build(store, &request) {
            Ok(view) => {
                debug!(matched = view.matched_events, "Applied selection");
                self.request = request;
                Ok(self.view.insert(view))
            }
            Err(err) => {
                warn!(error = %err, "Rejected selection");
                Err(err)
            }
        }
    }
}
