//! Wizard state machine
//!
//! Authoritative source of truth for the three-step lookup flow. The wizard
//! owns the current step, the selections, the fetched document, and the
//! lookup-in-flight flag. It performs no I/O and no rendering, so the whole
//! flow can be tested as plain values.
//!
//! # Step flow
//!
//! ```text
//! SelectCategory -> SelectAsset -> ShowResult -> SelectCategory (restart)
//! ```
//!
//! Leaving the asset step is asynchronous: `advance` hands the caller an
//! [`IdentifyRequest`] and pins the wizard on the asset step until
//! [`Wizard::resolve_lookup`] delivers the document. While the lookup is
//! pending every transition is refused, so a second request cannot start.

use std::fmt;

use serde_json::Value;

use crate::catalog::Asset;
use crate::geoadmin::{IdentifyRequest, InfoCategory};

/// Wizard steps in visit order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum WizardStep {
    /// Step 1: pick the information category
    SelectCategory = 0,

    /// Step 2: pick the asset to look up
    SelectAsset = 1,

    /// Step 3: show the fetched document
    ShowResult = 2,
}

impl WizardStep {
    /// Total number of wizard steps
    pub const TOTAL_STEPS: usize = 3;

    /// Returns the zero-based position of this step
    #[inline]
    pub const fn index(self) -> usize {
        self as u8 as usize
    }

    /// Returns the 1-based step number for display
    #[inline]
    pub const fn step_number(self) -> usize {
        self.index() + 1
    }

    /// Returns true if this is the last step
    #[inline]
    pub const fn is_last(self) -> bool {
        matches!(self, Self::ShowResult)
    }

    /// Returns the next step, or None at the last step
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::SelectCategory => Some(Self::SelectAsset),
            Self::SelectAsset => Some(Self::ShowResult),
            Self::ShowResult => None,
        }
    }

    /// Returns the previous step, or None at the first step
    pub const fn previous(self) -> Option<Self> {
        match self {
            Self::SelectCategory => None,
            Self::SelectAsset => Some(Self::SelectCategory),
            Self::ShowResult => Some(Self::SelectAsset),
        }
    }

    /// Returns the step label shown in the stepper header
    pub const fn title(self) -> &'static str {
        match self {
            Self::SelectCategory => "Select category",
            Self::SelectAsset => "Select asset",
            Self::ShowResult => "Result",
        }
    }

    /// Returns all steps in order
    pub const fn all_steps() -> &'static [Self] {
        &[Self::SelectCategory, Self::SelectAsset, Self::ShowResult]
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}

/// Outcome of an [`Wizard::advance`] call
#[derive(Debug, Clone, PartialEq)]
pub enum Advance {
    /// Moved forward one step
    Moved(WizardStep),

    /// A lookup must run; the wizard stays on the asset step, pending,
    /// until the caller reports back with `resolve_lookup`
    Lookup(IdentifyRequest),

    /// Finished the last step; the wizard is back at the start with every
    /// selection cleared
    Restarted,

    /// The current step's required selection is missing, or a lookup is
    /// already pending
    Blocked,
}

/// Owned state for one wizard session.
///
/// All mutation goes through the named operations; the step can only move
/// one position per call and `result` is only ever written by
/// `resolve_lookup`.
///
/// # Example
///
/// ```
/// use geopeek::wizard::{Advance, Wizard, WizardStep};
/// use geopeek::geoadmin::InfoCategory;
///
/// let mut wizard = Wizard::new();
/// assert_eq!(wizard.current_step(), WizardStep::SelectCategory);
/// assert!(!wizard.can_advance());
///
/// wizard.set_category(InfoCategory::DroneRestriction);
/// assert_eq!(wizard.advance(), Advance::Moved(WizardStep::SelectAsset));
/// ```
#[derive(Debug, Clone)]
pub struct Wizard {
    /// Current wizard step
    current: WizardStep,

    /// Category chosen on the first step
    category: Option<InfoCategory>,

    /// Asset chosen on the second step (owned copy of the catalog record)
    selected: Option<Asset>,

    /// Document fetched when leaving the asset step, shown on the last step
    result: Option<Value>,

    /// True between `Advance::Lookup` and `resolve_lookup`
    lookup_pending: bool,
}

impl Default for Wizard {
    fn default() -> Self {
        Self::new()
    }
}

impl Wizard {
    /// Create a wizard at the first step with nothing selected
    pub fn new() -> Self {
        Self {
            current: WizardStep::SelectCategory,
            category: None,
            selected: None,
            result: None,
            lookup_pending: false,
        }
    }

    /// Returns the current step
    #[inline]
    pub fn current_step(&self) -> WizardStep {
        self.current
    }

    /// Returns the chosen category, if any
    #[inline]
    pub fn category(&self) -> Option<InfoCategory> {
        self.category
    }

    /// Returns the chosen asset, if any
    #[inline]
    pub fn selected_asset(&self) -> Option<&Asset> {
        self.selected.as_ref()
    }

    /// Returns the fetched document, if a lookup has completed
    #[inline]
    pub fn result(&self) -> Option<&Value> {
        self.result.as_ref()
    }

    /// Returns true while a lookup is in flight
    #[inline]
    pub fn is_lookup_pending(&self) -> bool {
        self.lookup_pending
    }

    /// Replace the category selection. The category screen is the only
    /// caller; choosing again simply overwrites the previous choice.
    pub fn set_category(&mut self, category: InfoCategory) {
        self.category = Some(category);
    }

    /// Replace the asset selection with an owned copy of the record
    pub fn set_asset(&mut self, asset: Asset) {
        self.selected = Some(asset);
    }

    /// Returns true if the current step's required selection is present.
    ///
    /// The result step has no requirement; advancing from it restarts the
    /// wizard.
    pub fn can_advance(&self) -> bool {
        match self.current {
            WizardStep::SelectCategory => self.category.is_some(),
            WizardStep::SelectAsset => self.selected.is_some(),
            WizardStep::ShowResult => true,
        }
    }

    /// Returns true if stepping back is currently allowed. False at the
    /// first step and while a lookup is pending.
    pub fn can_retreat(&self) -> bool {
        self.current.previous().is_some() && !self.lookup_pending
    }

    /// Try to move forward.
    ///
    /// Advancing from the asset step does not change the step by itself: it
    /// returns the lookup to run and marks the wizard pending. Advancing
    /// from the result step restarts the wizard with everything cleared.
    pub fn advance(&mut self) -> Advance {
        if self.lookup_pending || !self.can_advance() {
            return Advance::Blocked;
        }
        match self.current {
            WizardStep::SelectCategory => {
                self.current = WizardStep::SelectAsset;
                Advance::Moved(self.current)
            }
            WizardStep::SelectAsset => match (self.category, &self.selected) {
                (Some(category), Some(asset)) => {
                    self.lookup_pending = true;
                    Advance::Lookup(IdentifyRequest::for_asset(category, asset))
                }
                _ => Advance::Blocked,
            },
            WizardStep::ShowResult => {
                *self = Self::new();
                Advance::Restarted
            }
        }
    }

    /// Store the fetched document and move to the result step.
    ///
    /// Called exactly once per `Advance::Lookup`, with whatever the identify
    /// endpoint returned. This is the only writer of `result`.
    pub fn resolve_lookup(&mut self, document: Value) {
        debug_assert!(self.lookup_pending, "resolve_lookup without a pending lookup");
        self.result = Some(document);
        self.lookup_pending = false;
        self.current = WizardStep::ShowResult;
    }

    /// Move one step back.
    ///
    /// The first step has no predecessor and a pending lookup pins the
    /// wizard, so an out-of-contract call does nothing.
    pub fn retreat(&mut self) {
        if !self.can_retreat() {
            return;
        }
        if let Some(previous) = self.current.previous() {
            self.current = previous;
        }
    }

    /// Pretty-printed result document for the result view
    pub fn result_pretty(&self) -> Option<String> {
        self.result.as_ref().map(|document| {
            serde_json::to_string_pretty(document).unwrap_or_else(|_| document.to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_asset() -> Asset {
        Asset {
            id: "AST-002".to_string(),
            name: "Bern Zytglogge Courier Hub".to_string(),
            latitude: 46.9481,
            longitude: 7.4474,
            kind: "depot".to_string(),
        }
    }

    // =========================================================================
    // WizardStep Tests
    // =========================================================================

    #[test]
    fn test_step_index_is_sequential() {
        let steps = WizardStep::all_steps();
        assert_eq!(steps.len(), WizardStep::TOTAL_STEPS);
        for (i, step) in steps.iter().enumerate() {
            assert_eq!(step.index(), i, "Step {:?} should have index {}", step, i);
            assert_eq!(step.step_number(), i + 1);
        }
    }

    #[test]
    fn test_step_next_forms_chain() {
        let mut current = WizardStep::SelectCategory;
        let mut count = 0;

        while let Some(next) = current.next() {
            current = next;
            count += 1;
            assert!(count < 10, "Infinite loop detected in step chain");
        }

        assert_eq!(current, WizardStep::ShowResult);
        assert_eq!(count, 2);
    }

    #[test]
    fn test_step_previous_forms_reverse_chain() {
        let mut current = WizardStep::ShowResult;
        let mut count = 0;

        while let Some(prev) = current.previous() {
            current = prev;
            count += 1;
            assert!(count < 10, "Infinite loop detected in step chain");
        }

        assert_eq!(current, WizardStep::SelectCategory);
        assert_eq!(count, 2);
    }

    #[test]
    fn test_only_result_step_is_last() {
        assert!(WizardStep::ShowResult.is_last());
        assert!(!WizardStep::SelectCategory.is_last());
        assert!(!WizardStep::SelectAsset.is_last());
    }

    #[test]
    fn test_step_display_uses_title() {
        assert_eq!(WizardStep::SelectCategory.to_string(), "Select category");
        assert_eq!(WizardStep::ShowResult.to_string(), "Result");
    }

    // =========================================================================
    // Gating Tests
    // =========================================================================

    #[test]
    fn test_wizard_starts_empty_at_first_step() {
        let wizard = Wizard::new();
        assert_eq!(wizard.current_step(), WizardStep::SelectCategory);
        assert_eq!(wizard.category(), None);
        assert!(wizard.selected_asset().is_none());
        assert!(wizard.result().is_none());
        assert!(!wizard.is_lookup_pending());
        assert!(!wizard.can_retreat());
    }

    #[test]
    fn test_cannot_advance_without_category() {
        let mut wizard = Wizard::new();
        assert!(!wizard.can_advance());
        assert_eq!(wizard.advance(), Advance::Blocked);
        assert_eq!(wizard.current_step(), WizardStep::SelectCategory);
    }

    #[test]
    fn test_advance_after_category_selection() {
        let mut wizard = Wizard::new();
        wizard.set_category(InfoCategory::PopulationDensity);
        assert!(wizard.can_advance());
        assert_eq!(wizard.advance(), Advance::Moved(WizardStep::SelectAsset));
        assert_eq!(wizard.current_step(), WizardStep::SelectAsset);
    }

    #[test]
    fn test_cannot_advance_without_asset() {
        let mut wizard = Wizard::new();
        wizard.set_category(InfoCategory::PopulationDensity);
        wizard.advance();

        assert!(!wizard.can_advance());
        assert_eq!(wizard.advance(), Advance::Blocked);
        assert_eq!(wizard.current_step(), WizardStep::SelectAsset);
    }

    #[test]
    fn test_result_step_always_allows_advance() {
        let mut wizard = Wizard::new();
        wizard.set_category(InfoCategory::DroneRestriction);
        wizard.advance();
        wizard.set_asset(sample_asset());
        wizard.advance();
        wizard.resolve_lookup(json!({}));

        assert_eq!(wizard.current_step(), WizardStep::ShowResult);
        assert!(wizard.can_advance());
    }

    #[test]
    fn test_replacing_category_overwrites_previous_choice() {
        let mut wizard = Wizard::new();
        wizard.set_category(InfoCategory::PopulationDensity);
        wizard.set_category(InfoCategory::DroneRestriction);
        assert_eq!(wizard.category(), Some(InfoCategory::DroneRestriction));
    }

    // =========================================================================
    // Lookup Boundary Tests
    // =========================================================================

    #[test]
    fn test_advance_with_asset_starts_lookup() {
        let mut wizard = Wizard::new();
        wizard.set_category(InfoCategory::DroneRestriction);
        wizard.advance();
        wizard.set_asset(sample_asset());

        let outcome = wizard.advance();
        match outcome {
            Advance::Lookup(request) => {
                assert_eq!(request.category, InfoCategory::DroneRestriction);
                assert_eq!(request.longitude, 7.4474);
                assert_eq!(request.latitude, 46.9481);
            }
            other => panic!("expected a lookup, got {:?}", other),
        }

        // the step does not move until the lookup resolves
        assert_eq!(wizard.current_step(), WizardStep::SelectAsset);
        assert!(wizard.is_lookup_pending());
    }

    #[test]
    fn test_pending_lookup_blocks_every_transition() {
        let mut wizard = Wizard::new();
        wizard.set_category(InfoCategory::PopulationDensity);
        wizard.advance();
        wizard.set_asset(sample_asset());
        assert!(matches!(wizard.advance(), Advance::Lookup(_)));

        // no second lookup while the first is in flight
        assert_eq!(wizard.advance(), Advance::Blocked);
        assert!(!wizard.can_retreat());
        wizard.retreat();
        assert_eq!(wizard.current_step(), WizardStep::SelectAsset);
        assert!(wizard.is_lookup_pending());
    }

    #[test]
    fn test_resolve_lookup_shows_result() {
        let mut wizard = Wizard::new();
        wizard.set_category(InfoCategory::PopulationDensity);
        wizard.advance();
        wizard.set_asset(sample_asset());
        wizard.advance();

        let document = json!({"results": [{"layerName": "Population"}]});
        wizard.resolve_lookup(document.clone());

        assert_eq!(wizard.current_step(), WizardStep::ShowResult);
        assert_eq!(wizard.result(), Some(&document));
        assert!(!wizard.is_lookup_pending());
    }

    #[test]
    fn test_result_only_populated_by_completed_lookup() {
        let mut wizard = Wizard::new();
        assert!(wizard.result().is_none());

        wizard.set_category(InfoCategory::PopulationDensity);
        wizard.advance();
        assert!(wizard.result().is_none());

        wizard.set_asset(sample_asset());
        wizard.advance();
        // lookup started but not resolved
        assert!(wizard.result().is_none());
    }

    // =========================================================================
    // Retreat and Restart Tests
    // =========================================================================

    #[test]
    fn test_retreat_moves_back_one_step() {
        let mut wizard = Wizard::new();
        wizard.set_category(InfoCategory::PopulationDensity);
        wizard.advance();

        assert!(wizard.can_retreat());
        wizard.retreat();
        assert_eq!(wizard.current_step(), WizardStep::SelectCategory);
        // the selection survives going back
        assert_eq!(wizard.category(), Some(InfoCategory::PopulationDensity));
    }

    #[test]
    fn test_retreat_from_result_keeps_document() {
        let mut wizard = Wizard::new();
        wizard.set_category(InfoCategory::DroneRestriction);
        wizard.advance();
        wizard.set_asset(sample_asset());
        wizard.advance();
        wizard.resolve_lookup(json!({"results": []}));

        wizard.retreat();
        assert_eq!(wizard.current_step(), WizardStep::SelectAsset);
        assert!(wizard.result().is_some());
    }

    #[test]
    fn test_finish_restarts_with_everything_cleared() {
        let mut wizard = Wizard::new();
        wizard.set_category(InfoCategory::PopulationDensity);
        wizard.advance();
        wizard.set_asset(sample_asset());
        wizard.advance();
        wizard.resolve_lookup(json!({"results": []}));

        assert_eq!(wizard.advance(), Advance::Restarted);
        assert_eq!(wizard.current_step(), WizardStep::SelectCategory);
        assert_eq!(wizard.category(), None);
        assert!(wizard.selected_asset().is_none());
        assert!(wizard.result().is_none());
        assert!(!wizard.is_lookup_pending());
        assert!(!wizard.can_advance());
    }

    #[test]
    fn test_result_pretty_formats_document() {
        let mut wizard = Wizard::new();
        wizard.set_category(InfoCategory::PopulationDensity);
        wizard.advance();
        wizard.set_asset(sample_asset());
        wizard.advance();
        wizard.resolve_lookup(json!({"count": 3}));

        let pretty = wizard.result_pretty().unwrap();
        assert!(pretty.contains("\"count\": 3"));
    }
}
