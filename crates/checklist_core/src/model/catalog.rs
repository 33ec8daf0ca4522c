//! Built-in checklist catalog.
//!
//! # Responsibility
//! - Define the fixed set of review-process sections and their default items.
//! - Construct the built-in catalog exactly once per process.
//!
//! # Invariants
//! - Catalog ids are globally unique and stable across releases.
//! - The catalog is never mutated at runtime; all user state lives in the
//!   mutation store as an overlay.

use once_cell::sync::Lazy;

/// Storage key / artifact namespace for the persisted snapshot.
pub const STORAGE_KEY: &str = "pr-checklist-v1";

/// A default item shipped with the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogItem {
    /// Stable id, unique across the whole catalog.
    pub id: String,
    pub text: String,
    pub hint: Option<String>,
}

/// A fixed checklist section with its ordered default items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// Stable section id (`sec1`..`sec10` for the built-in catalog).
    pub id: String,
    pub title: String,
    pub hint: String,
    pub items: Vec<CatalogItem>,
}

/// The immutable catalog: an ordered list of sections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    sections: Vec<Section>,
}

impl Catalog {
    /// Creates a catalog from an explicit section list (mainly for tests).
    pub fn new(sections: Vec<Section>) -> Self {
        Self { sections }
    }

    /// Returns the built-in PR review catalog, constructed once per process.
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Looks up a section by id.
    pub fn section(&self, section_id: &str) -> Option<&Section> {
        self.sections.iter().find(|sec| sec.id == section_id)
    }
}

fn item(id: &str, text: &str, hint: &str) -> CatalogItem {
    CatalogItem {
        id: id.to_string(),
        text: text.to_string(),
        hint: Some(hint.to_string()),
    }
}

fn section(id: &str, title: &str, hint: &str, items: Vec<CatalogItem>) -> Section {
    Section {
        id: id.to_string(),
        title: title.to_string(),
        hint: hint.to_string(),
        items,
    }
}

static BUILTIN: Lazy<Catalog> = Lazy::new(|| {
    Catalog::new(vec![
        section(
            "sec1",
            "1) Code Quality & Best Practices",
            "Review critically, remove dead code, ensure naming & structure.",
            vec![
                item(
                    "1a",
                    "Reviewed code as if written by someone else (critical mindset).",
                    "Reduce bias; pretend you are the reviewer.",
                ),
                item(
                    "1b",
                    "Removed unused code/imports and dead files.",
                    "Dead code confuses reviewers and future you.",
                ),
                item(
                    "1c",
                    "Addressed code smells / duplication / long functions.",
                    "Refactor into smaller, testable units.",
                ),
                item(
                    "1d",
                    "Meaningful, consistent naming (variables, functions, files, icons).",
                    "Name things by intent and domain language.",
                ),
                item(
                    "1e",
                    "Files follow agreed project structure & conventions.",
                    "Keep cohesion; respect module boundaries.",
                ),
            ],
        ),
        section(
            "sec2",
            "2) Functional Verification",
            "Validate feature works and hasn't broken neighbors.",
            vec![
                item(
                    "2a",
                    "App runs locally; feature works as intended.",
                    "Exercise primary flows end-to-end.",
                ),
                item(
                    "2b",
                    "Happy paths and key edge cases verified.",
                    "Nulls, timeouts, failed calls, slow nets.",
                ),
                item(
                    "2c",
                    "No unrelated functionality broken.",
                    "Quick smoke test adjacent features.",
                ),
                item(
                    "2d",
                    "UI/UX validated (responsiveness if relevant).",
                    "States: loading/empty/error, dark mode.",
                ),
            ],
        ),
        section(
            "sec3",
            "3) Pipeline & Build",
            "Don't send broken builds to review.",
            vec![
                item(
                    "3a",
                    "CI passes (build, lint, tests).",
                    "Wait for green before requesting review.",
                ),
                item(
                    "3b",
                    "If CI fails due to unrelated issue, reproduced from fresh develop and noted for reviewers.",
                    "Create a tiny fresh PR proving it exists on develop.",
                ),
            ],
        ),
        section(
            "sec4",
            "4) Merge Conflicts",
            "Conflicts are your responsibility until merge.",
            vec![
                item(
                    "4a",
                    "Rebased/synced with develop (or main integration branch).",
                    "Prefer rebase for clean history if policy allows.",
                ),
                item(
                    "4b",
                    "No conflicts now; will re-check daily until merge.",
                    "Conflicts late in sprint cause avoidable delays.",
                ),
            ],
        ),
        section(
            "sec5",
            "5) Review Comments Handling",
            "Communicate clearly; let reviewers resolve threads.",
            vec![
                item(
                    "5a",
                    "Responded to every comment (e.g., \"done\" or rationale).",
                    "Acknowledge decisions for future readers.",
                ),
                item(
                    "5b",
                    "I will not mark threads as Resolved unless the reviewer asks.",
                    "The opener closes; that's the rule.",
                ),
                item(
                    "5c",
                    "Escalated unclear points via quick chat/call when needed.",
                    "Asynchronous thrash is costly; clarify fast.",
                ),
            ],
        ),
        section(
            "sec6",
            "6) Documentation & Clarity",
            "Write it down once so no one asks twice.",
            vec![
                item(
                    "6a",
                    "Updated README / API docs / inline comments as needed.",
                    "Docs are part of the deliverable.",
                ),
                item(
                    "6b",
                    "Added comments for non-obvious logic.",
                    "Explain the \"why\", not the \"what\".",
                ),
            ],
        ),
        section(
            "sec7",
            "7) API / Data (if applicable)",
            "Contracts and compatibility matter.",
            vec![
                item(
                    "7a",
                    "Request/response contracts validated.",
                    "Align with consumer expectations and types.",
                ),
                item(
                    "7b",
                    "Backward compatibility considered.",
                    "Versioning, feature flags, defaults.",
                ),
                item(
                    "7c",
                    "Mocks/Postman collections/docs updated.",
                    "Keep your tools in sync with reality.",
                ),
            ],
        ),
        section(
            "sec8",
            "8) Accessibility & UX (if applicable)",
            "Build for everyone.",
            vec![
                item(
                    "8a",
                    "Keyboard navigation & screen reader checked.",
                    "Focus order, aria-labels, roles.",
                ),
                item(
                    "8b",
                    "Contrast/readability validated.",
                    "WCAG AA where feasible.",
                ),
            ],
        ),
        section(
            "sec9",
            "9) Security & Performance",
            "Don't ship secrets; don't ship slowness.",
            vec![
                item(
                    "9a",
                    "No secrets/credentials committed.",
                    "Use env vars and secret managers.",
                ),
                item(
                    "9b",
                    "Avoided obvious performance bottlenecks; large queries reviewed.",
                    "Measure where it matters.",
                ),
                item(
                    "9c",
                    "Security linting/scans run (if available).",
                    "Address findings or note deferrals.",
                ),
            ],
        ),
        section(
            "sec10",
            "10) Ownership",
            "It's your PR until it lands.",
            vec![item(
                "10a",
                "I will monitor this PR until merged into develop.",
                "Be responsive to follow-ups and conflicts.",
            )],
        ),
    ])
});
