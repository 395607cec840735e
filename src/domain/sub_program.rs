use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::Serialize;

use super::program::{Mode, YesNo};

/// Opaque handle to an uploaded banner file. The core stores only the
/// name and an optional preview reference; it never reads image bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BannerHandle {
    pub file_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preview: Option<String>,
}

impl BannerHandle {
    pub fn new(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            preview: None,
        }
    }

    pub fn with_preview(mut self, preview: impl Into<String>) -> Self {
        self.preview = Some(preview.into());
        self
    }
}

/// Cohort family a sub-program belongs to. Drives default titles and
/// per-kind fee propagation from the parent form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SubProgramKind {
    Hdb,
    Msd,
    General,
}

impl SubProgramKind {
    pub fn label(self) -> &'static str {
        match self {
            SubProgramKind::Hdb => "HDB",
            SubProgramKind::Msd => "MSD",
            SubProgramKind::General => "Sub-Program",
        }
    }
}

/// Visual emphasis phase of a freshly added entry. Cosmetic only; has no
/// bearing on data correctness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum HighlightPhase {
    #[default]
    None,
    FadeIn,
    Visible,
    FadeOut,
}

/// A nested, schedulable unit belonging to one program.
///
/// `program_fee` is kept string-encoded as entered; see [`super::ProgramData`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubProgram {
    pub id: String,
    pub kind: SubProgramKind,
    pub title: String,
    pub description: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub mode: Mode,
    /// Selected venues, duplicates preserved, sentinel never stored.
    pub venue_address: Vec<String>,
    pub custom_venue: String,
    /// True iff the sentinel venue entry is currently selected.
    pub show_custom_venue: bool,
    pub is_travel_required: Option<YesNo>,
    pub is_residential: Option<YesNo>,
    pub is_payment_required: YesNo,
    pub currency: String,
    pub program_fee: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub banner: Option<BannerHandle>,
    /// Sub-program custom field values, keyed by field id.
    pub custom_fields: IndexMap<String, String>,
    #[serde(skip)]
    pub is_highlighted: bool,
    #[serde(skip)]
    pub highlight_phase: HighlightPhase,
}

/// Typed field update for one sub-program; replaces the original
/// update-by-field-name call with compile-time field safety.
#[derive(Debug, Clone, PartialEq)]
pub enum SubProgramPatch {
    Title(String),
    Description(String),
    StartDate(Option<NaiveDate>),
    EndDate(Option<NaiveDate>),
    Mode(Mode),
    VenueAddress(Vec<String>),
    CustomVenue(String),
    TravelRequired(Option<YesNo>),
    Residential(Option<YesNo>),
    PaymentRequired(YesNo),
    Currency(String),
    ProgramFee(String),
    Banner(Option<BannerHandle>),
    CustomFieldValue { field_id: String, value: String },
}

impl SubProgram {
    pub fn apply(&mut self, patch: SubProgramPatch) {
        match patch {
            SubProgramPatch::Title(value) => self.title = value,
            SubProgramPatch::Description(value) => self.description = value,
            SubProgramPatch::StartDate(value) => self.start_date = value,
            SubProgramPatch::EndDate(value) => self.end_date = value,
            SubProgramPatch::Mode(value) => self.mode = value,
            SubProgramPatch::VenueAddress(value) => self.venue_address = value,
            SubProgramPatch::CustomVenue(value) => self.custom_venue = value,
            SubProgramPatch::TravelRequired(value) => self.is_travel_required = value,
            SubProgramPatch::Residential(value) => self.is_residential = value,
            SubProgramPatch::PaymentRequired(value) => self.is_payment_required = value,
            SubProgramPatch::Currency(value) => self.currency = value,
            SubProgramPatch::ProgramFee(value) => self.program_fee = value,
            SubProgramPatch::Banner(value) => self.banner = value,
            SubProgramPatch::CustomFieldValue { field_id, value } => {
                self.custom_fields.insert(field_id, value);
            }
        }
    }
}
