use indexmap::IndexMap;
use tracing::debug;
use uuid::Uuid;

use crate::domain::{
    BannerHandle, CUSTOM_VENUE_SENTINEL, CustomField, HighlightPhase, Mode, ParentDefaults,
    SubProgram, SubProgramKind, SubProgramPatch, YesNo,
};

use super::prefill::{PrefillSeed, prefill};

/// Ordered collection of sub-programs owned by the page controller.
///
/// Every mutation rebuilds the backing vector (copy-on-write), so a view
/// still holding the previous snapshot never observes a half-applied
/// update. Operations addressed at an id that is no longer present are
/// documented no-ops, never errors: ids are internally generated, so a
/// miss can only come from a stale reference and is treated as benign.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubProgramRoster {
    entries: Vec<SubProgram>,
}

impl SubProgramRoster {
    pub fn new() -> Self {
        Self::default()
    }

    /// The five rows the add-program page starts with.
    pub fn seeded() -> Self {
        let mut roster = Self::new();
        for (kind, ordinal) in [
            (SubProgramKind::Hdb, 1),
            (SubProgramKind::Hdb, 2),
            (SubProgramKind::Hdb, 3),
            (SubProgramKind::Msd, 1),
            (SubProgramKind::Msd, 2),
        ] {
            roster
                .entries
                .push(blank_sub_program(kind, format!("{} {ordinal}", kind.label())));
        }
        roster
    }

    pub fn entries(&self) -> &[SubProgram] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&SubProgram> {
        self.entries.iter().find(|sub| sub.id == id)
    }

    /// Appends a prefilled entry and returns its id. The new entry starts
    /// highlighted in the fade-in phase; the caller is expected to start
    /// the highlight sequencer and scroll the entry into view.
    pub fn add(&mut self, parent: &ParentDefaults, kind: SubProgramKind) -> String {
        let title = match kind {
            SubProgramKind::General => format!("Sub-Program {}", self.entries.len() + 1),
            typed => {
                let ordinal = self.entries.iter().filter(|sub| sub.kind == typed).count() + 1;
                format!("{} {ordinal}", typed.label())
            }
        };
        let seed = prefill(PrefillSeed::default(), parent);
        let mut sub = blank_sub_program(kind, title);
        sub.description = seed.description;
        sub.banner = seed.banner;
        sub.mode = seed.mode.unwrap_or_default();
        if !seed.currency.is_empty() {
            sub.currency = seed.currency;
        }
        sub.is_payment_required = seed.is_payment_required.unwrap_or(YesNo::Yes);
        sub.is_highlighted = true;
        sub.highlight_phase = HighlightPhase::FadeIn;

        let id = sub.id.clone();
        let mut next = self.entries.clone();
        next.push(sub);
        self.entries = next;
        debug!(id = %id, count = self.entries.len(), "added sub-program");
        id
    }

    /// Applies a single typed field update to the matching record and
    /// reports whether one matched. No other record is touched.
    pub fn apply(&mut self, id: &str, patch: SubProgramPatch) -> bool {
        self.replace(id, |sub| sub.apply(patch.clone()))
    }

    /// Venue selection with the custom-venue escape hatch: a list
    /// containing the sentinel entry switches the record to free-text
    /// venue input, and the sentinel itself is never stored.
    pub fn update_venues(&mut self, id: &str, venues: Vec<String>) -> bool {
        let show_custom = venues.iter().any(|venue| venue == CUSTOM_VENUE_SENTINEL);
        let venues: Vec<String> = if show_custom {
            venues
                .into_iter()
                .filter(|venue| venue != CUSTOM_VENUE_SENTINEL)
                .collect()
        } else {
            venues
        };
        self.replace(id, |sub| {
            sub.show_custom_venue = show_custom;
            sub.venue_address = venues.clone();
        })
    }

    pub fn set_banner(&mut self, id: &str, banner: Option<BannerHandle>) -> bool {
        self.apply(id, SubProgramPatch::Banner(banner))
    }

    /// Deletes the matching record. Confirmation belongs to the dialog
    /// collaborator; once invoked the removal is unconditional. Unknown
    /// ids leave the roster unchanged.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.entries.len();
        self.entries = self
            .entries
            .iter()
            .filter(|sub| sub.id != id)
            .cloned()
            .collect();
        let removed = self.entries.len() != before;
        if removed {
            debug!(id = %id, count = self.entries.len(), "removed sub-program");
        }
        removed
    }

    /// Applies a due highlight transition. Clearing the phase also resets
    /// the transient highlight flag. A missing id means the record was
    /// deleted while the transition was pending; the stale step is dropped.
    pub(crate) fn apply_highlight(&mut self, id: &str, phase: HighlightPhase) -> bool {
        self.replace(id, |sub| {
            sub.highlight_phase = phase;
            if phase == HighlightPhase::None {
                sub.is_highlighted = false;
            }
        })
    }

    /// Copies a changed per-kind fee from the parent form into every
    /// sub-program of that kind.
    pub fn apply_fee_defaults(&mut self, kind: SubProgramKind, fee: &str) {
        self.entries = self
            .entries
            .iter()
            .map(|sub| {
                let mut next = sub.clone();
                if next.kind == kind {
                    next.program_fee = fee.to_string();
                }
                next
            })
            .collect();
    }

    /// Seeds a freshly defined custom field's default value into every
    /// record's value map.
    pub fn seed_custom_field(&mut self, field: &CustomField) {
        let value = field.default_value_or_empty();
        self.entries = self
            .entries
            .iter()
            .map(|sub| {
                let mut next = sub.clone();
                next.custom_fields.insert(field.id.clone(), value.clone());
                next
            })
            .collect();
    }

    /// Seeds the field's default value into one record only.
    pub fn seed_custom_field_for(&mut self, id: &str, field: &CustomField) -> bool {
        let value = field.default_value_or_empty();
        self.replace(id, |sub| {
            sub.custom_fields.insert(field.id.clone(), value.clone());
        })
    }

    fn replace(&mut self, id: &str, mut edit: impl FnMut(&mut SubProgram)) -> bool {
        let mut matched = false;
        self.entries = self
            .entries
            .iter()
            .map(|sub| {
                let mut next = sub.clone();
                if next.id == id {
                    matched = true;
                    edit(&mut next);
                }
                next
            })
            .collect();
        matched
    }
}

fn blank_sub_program(kind: SubProgramKind, title: String) -> SubProgram {
    SubProgram {
        id: Uuid::new_v4().to_string(),
        kind,
        title,
        description: String::new(),
        start_date: None,
        end_date: None,
        mode: Mode::Online,
        venue_address: Vec::new(),
        custom_venue: String::new(),
        show_custom_venue: false,
        is_travel_required: None,
        is_residential: None,
        is_payment_required: YesNo::Yes,
        currency: "INR".to_string(),
        program_fee: String::new(),
        banner: None,
        custom_fields: IndexMap::new(),
        is_highlighted: false,
        highlight_phase: HighlightPhase::None,
    }
}
