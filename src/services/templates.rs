//! Marketing-page template catalog.
//!
//! Templates are static; generated palettes are paired with them so the
//! preview has something to render.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Template {
    pub id: &'static str,
    pub name: &'static str,
    pub category: &'static str,
}

const CATALOG: &[Template] = &[
    Template { id: "saas-landing", name: "SaaS Landing", category: "landing" },
    Template { id: "startup-hero", name: "Startup Hero", category: "landing" },
    Template { id: "product-launch", name: "Product Launch", category: "landing" },
    Template { id: "pricing-table", name: "Pricing Table", category: "pricing" },
    Template { id: "portfolio-grid", name: "Portfolio Grid", category: "portfolio" },
    Template { id: "agency-showcase", name: "Agency Showcase", category: "portfolio" },
    Template { id: "blog-magazine", name: "Blog Magazine", category: "content" },
    Template { id: "ecommerce-storefront", name: "E-commerce Storefront", category: "commerce" },
];

/// Every template, in display order.
#[must_use]
pub fn catalog() -> &'static [Template] {
    CATALOG
}

#[must_use]
pub fn find(id: &str) -> Option<&'static Template> {
    CATALOG.iter().find(|t| t.id == id)
}

/// `(id, name)` pairs for round-robin assignment.
#[must_use]
pub fn assignment_pairs() -> Vec<(&'static str, &'static str)> {
    CATALOG.iter().map(|t| (t.id, t.name)).collect()
}

#[cfg(test)]
#[path = "templates_test.rs"]
mod tests;
