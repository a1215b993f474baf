//! Subscription plans and the feature limits they gate.
//!
//! DESIGN
//! ======
//! Plans are static. A request's plan comes from the `x-palette-plan`
//! header (see `routes::extract`), falling back to the configured default.
//! Billing and payment gateways live outside this service; it only enforces
//! the limits.

use std::str::FromStr;

use axum::http::StatusCode;
use palette::ExportFormat;
use serde::{Deserialize, Serialize};

use crate::error::ErrorCode;

#[derive(Debug, thiserror::Error)]
pub enum PlanError {
    #[error("unknown plan: {0}")]
    UnknownPlan(String),
    #[error("{tier} plan allows at most {limit} saved palettes")]
    SavedLimit { tier: PlanTier, limit: usize },
    #[error("{format} export is not available on the {tier} plan")]
    ExportNotAllowed { tier: PlanTier, format: ExportFormat },
}

impl ErrorCode for PlanError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownPlan(_) => "E_UNKNOWN_PLAN",
            Self::SavedLimit { .. } | Self::ExportNotAllowed { .. } => "E_PLAN_LIMIT",
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            Self::UnknownPlan(_) => StatusCode::BAD_REQUEST,
            Self::SavedLimit { .. } | Self::ExportNotAllowed { .. } => StatusCode::FORBIDDEN,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanTier {
    Free,
    Pro,
    Team,
}

impl PlanTier {
    pub const ALL: [Self; 3] = [Self::Free, Self::Pro, Self::Team];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Free => "free",
            Self::Pro => "pro",
            Self::Team => "team",
        }
    }

    #[must_use]
    pub fn plan(self) -> Plan {
        match self {
            Self::Free => Plan {
                tier: self,
                name: "Free",
                monthly_price_cents: 0,
                max_batch: 5,
                max_saved: Some(10),
                export_formats: vec![ExportFormat::Css, ExportFormat::Json],
            },
            Self::Pro => Plan {
                tier: self,
                name: "Pro",
                monthly_price_cents: 900,
                max_batch: 20,
                max_saved: Some(200),
                export_formats: ExportFormat::ALL.to_vec(),
            },
            Self::Team => Plan {
                tier: self,
                name: "Team",
                monthly_price_cents: 2900,
                max_batch: 50,
                max_saved: None,
                export_formats: ExportFormat::ALL.to_vec(),
            },
        }
    }
}

impl std::fmt::Display for PlanTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlanTier {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|tier| tier.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| PlanError::UnknownPlan(s.to_owned()))
    }
}

/// Feature limits of one plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    pub tier: PlanTier,
    pub name: &'static str,
    pub monthly_price_cents: u32,
    /// Largest batch one generate call may return.
    pub max_batch: usize,
    /// Saved palette cap; `None` is unlimited.
    pub max_saved: Option<usize>,
    pub export_formats: Vec<ExportFormat>,
}

impl Plan {
    /// Clamp a requested batch size to this plan. Non-positive requests pass
    /// through so the generator can return its empty batch.
    #[must_use]
    pub fn clamp_batch(&self, requested: i64) -> i64 {
        let max = i64::try_from(self.max_batch).unwrap_or(i64::MAX);
        requested.min(max)
    }

    /// Ensure `format` is exportable on this plan.
    ///
    /// # Errors
    ///
    /// Returns [`PlanError::ExportNotAllowed`] otherwise.
    pub fn check_export(&self, format: ExportFormat) -> Result<(), PlanError> {
        if self.export_formats.contains(&format) {
            Ok(())
        } else {
            Err(PlanError::ExportNotAllowed { tier: self.tier, format })
        }
    }
}

/// Every plan, cheapest first.
#[must_use]
pub fn catalog() -> Vec<Plan> {
    PlanTier::ALL.into_iter().map(PlanTier::plan).collect()
}

#[cfg(test)]
#[path = "plans_test.rs"]
mod tests;
