//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It holds the palette store behind a trait object so the Postgres and
//! in-memory backends are interchangeable, plus the admin token and the
//! plan applied to requests that do not name one.

use std::sync::Arc;

use crate::services::plans::PlanTier;
use crate::services::store::PaletteStore;

/// Clone is required by Axum; every field is cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn PaletteStore>,
    /// Bearer token for admin routes. `None` rejects every admin call.
    pub admin_token: Option<Arc<str>>,
    pub default_plan: PlanTier,
}

impl AppState {
    #[must_use]
    pub fn new(store: Arc<dyn PaletteStore>, admin_token: Option<String>, default_plan: PlanTier) -> Self {
        Self { store, admin_token: admin_token.map(Arc::from), default_plan }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================
