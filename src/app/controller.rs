use std::time::Instant;

use tracing::{info, warn};

use crate::domain::{CustomField, ProgramData, ProgramPatch, SubProgramKind};
use crate::form::{Clock, HighlightSequencer, SubProgramRoster, SystemClock};

use super::commands::{FieldScope, ProgramCommand};
use super::effects::{Effect, NavigationIntent, ToastKind};
use super::status::StatusLine;
use super::validation::{Severity, ValidationOutcome, validate_program};

/// Page-level controller for the add-program flow. Owns the parent form,
/// the sub-program roster, the highlight sequencer and both custom-field
/// definition lists; consumes [`ProgramCommand`]s and queues [`Effect`]s
/// for the view layer to drain after each dispatch.
pub struct ProgramController {
    program: ProgramData,
    roster: SubProgramRoster,
    sequencer: HighlightSequencer,
    clock: Box<dyn Clock>,
    program_fields: Vec<CustomField>,
    sub_program_fields: Vec<CustomField>,
    status: StatusLine,
    effects: Vec<Effect>,
}

impl ProgramController {
    pub fn new() -> Self {
        Self::with_clock(Box::new(SystemClock))
    }

    pub fn with_clock(clock: Box<dyn Clock>) -> Self {
        Self {
            program: ProgramData::default(),
            roster: SubProgramRoster::seeded(),
            sequencer: HighlightSequencer::new(),
            clock,
            program_fields: Vec::new(),
            sub_program_fields: Vec::new(),
            status: StatusLine::new(),
            effects: Vec::new(),
        }
    }

    pub fn with_roster(mut self, roster: SubProgramRoster) -> Self {
        self.roster = roster;
        self
    }

    pub fn program(&self) -> &ProgramData {
        &self.program
    }

    pub fn roster(&self) -> &SubProgramRoster {
        &self.roster
    }

    pub fn program_fields(&self) -> &[CustomField] {
        &self.program_fields
    }

    pub fn sub_program_fields(&self) -> &[CustomField] {
        &self.sub_program_fields
    }

    pub fn status(&self) -> &StatusLine {
        &self.status
    }

    /// Takes the effects queued since the last drain.
    pub fn drain_effects(&mut self) -> Vec<Effect> {
        std::mem::take(&mut self.effects)
    }

    /// Earliest pending highlight transition, letting the host loop size
    /// its tick timeout.
    pub fn next_highlight_due(&self) -> Option<Instant> {
        self.sequencer.next_due()
    }

    pub fn dispatch(&mut self, command: ProgramCommand) {
        match command {
            ProgramCommand::UpdateProgram(patch) => self.update_program(patch),
            ProgramCommand::UpdateProgramVenues(venues) => {
                self.program.update_venues(venues);
                self.status.value_updated();
            }
            ProgramCommand::AddSubProgram { kind } => self.add_sub_program(kind),
            ProgramCommand::UpdateSubProgram { id, patch } => {
                if self.roster.apply(&id, patch) {
                    self.status.value_updated();
                }
            }
            ProgramCommand::UpdateSubProgramVenues { id, venues } => {
                if self.roster.update_venues(&id, venues) {
                    self.status.value_updated();
                }
            }
            ProgramCommand::UploadSubProgramBanner { id, banner } => {
                if self.roster.set_banner(&id, banner) {
                    self.status.value_updated();
                }
            }
            ProgramCommand::RequestRemoveSubProgram { id } => self.request_remove(id),
            ProgramCommand::ConfirmRemoveSubProgram { id } => self.confirm_remove(&id),
            ProgramCommand::AddField { field, scope } => self.add_field(field, scope),
            ProgramCommand::Save => self.save(),
            ProgramCommand::Cancel => {
                info!("program creation cancelled");
                self.effects.push(Effect::Navigate(NavigationIntent::Home));
            }
            ProgramCommand::Tick => self.tick(),
        }
    }

    /// Clears pending highlight work. Must run on session teardown so no
    /// timer outlives the roster it targets.
    pub fn teardown(&mut self) {
        self.sequencer.clear();
    }

    fn update_program(&mut self, patch: ProgramPatch) {
        // Per-kind fee edits flow into the matching sub-programs; every
        // other parent edit only influences future adds.
        match &patch {
            ProgramPatch::HdbFee(fee) => self.roster.apply_fee_defaults(SubProgramKind::Hdb, fee),
            ProgramPatch::MsdFee(fee) => self.roster.apply_fee_defaults(SubProgramKind::Msd, fee),
            _ => {}
        }
        self.program.apply(patch);
        self.status.value_updated();
    }

    fn add_sub_program(&mut self, kind: SubProgramKind) {
        let defaults = self.program.parent_defaults();
        let id = self.roster.add(&defaults, kind);
        self.sequencer.start(&id, self.clock.now());
        let title = self
            .roster
            .get(&id)
            .map(|sub| sub.title.clone())
            .unwrap_or_default();
        self.status.sub_program_added(&title);
        self.effects.push(Effect::ScrollTo { sub_id: id });
    }

    fn request_remove(&mut self, id: String) {
        let Some(title) = self.roster.get(&id).map(|sub| sub.title.clone()) else {
            return;
        };
        self.effects.push(Effect::ConfirmRemove { sub_id: id, title });
    }

    fn confirm_remove(&mut self, id: &str) {
        let title = self.roster.get(id).map(|sub| sub.title.clone());
        if self.roster.remove(id) {
            self.sequencer.cancel(id);
            self.status
                .sub_program_removed(title.as_deref().unwrap_or_default());
            self.effects.push(Effect::Toast {
                kind: ToastKind::Info,
                message: "Sub-program deleted successfully".to_string(),
            });
        }
    }

    fn add_field(&mut self, field: CustomField, scope: FieldScope) {
        match scope {
            FieldScope::SubProgram { id } => {
                self.roster.seed_custom_field_for(&id, &field);
                self.sub_program_fields.push(field.clone());
            }
            FieldScope::Program { apply_to_sub_programs } => {
                self.program
                    .custom_fields
                    .insert(field.id.clone(), field.default_value_or_empty());
                if apply_to_sub_programs {
                    self.roster.seed_custom_field(&field);
                    self.sub_program_fields.push(field.clone());
                }
                self.program_fields.push(field.clone());
            }
        }
        self.status.field_added(&field.label);
    }

    fn save(&mut self) {
        match validate_program(
            &self.program,
            self.roster.entries(),
            &self.program_fields,
            &self.sub_program_fields,
        ) {
            ValidationOutcome::Valid { payload, warnings } => {
                if !warnings.is_empty() {
                    warn!(count = warnings.len(), "saving with advisory warnings");
                }
                info!(sub_programs = self.roster.len(), "program saved");
                self.status.validation_passed();
                self.effects.push(Effect::Toast {
                    kind: ToastKind::Info,
                    message: "Program saved successfully!".to_string(),
                });
                self.effects.push(Effect::EmitPayload(payload));
                self.effects.push(Effect::Navigate(NavigationIntent::Home));
            }
            ValidationOutcome::Invalid { issues } => {
                let errors = issues
                    .iter()
                    .filter(|issue| issue.severity == Severity::Error)
                    .count();
                warn!(errors, "program validation failed");
                self.status.issues_remaining(errors);
                self.effects.push(Effect::Toast {
                    kind: ToastKind::Destructive,
                    message: "Please fill in all required fields".to_string(),
                });
            }
            ValidationOutcome::BuildError { message } => {
                warn!(%message, "failed to assemble save payload");
                self.status.set_raw(message);
            }
        }
    }

    /// Applies any highlight transitions that have come due. A record
    /// deleted while its transitions were pending is skipped by the
    /// roster's missing-id guard.
    fn tick(&mut self) {
        let now = self.clock.now();
        for step in self.sequencer.poll(now) {
            self.roster.apply_highlight(&step.sub_id, step.phase);
        }
    }
}

impl Default for ProgramController {
    fn default() -> Self {
        Self::new()
    }
}
