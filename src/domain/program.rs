use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::Serialize;

use super::sub_program::BannerHandle;

/// Delivery mode shared by programs and sub-programs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Online,
    Offline,
    Hybrid,
}

impl Mode {
    pub fn label(self) -> &'static str {
        match self {
            Mode::Online => "Online",
            Mode::Offline => "In-person",
            Mode::Hybrid => "Hybrid",
        }
    }
}

/// Radio-button yes/no selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum YesNo {
    Yes,
    No,
}

impl YesNo {
    pub fn is_yes(self) -> bool {
        matches!(self, YesNo::Yes)
    }
}

/// The special venue list entry that swaps the fixed choice list for a
/// free-text venue input.
pub const CUSTOM_VENUE_SENTINEL: &str = "Add Custom Venue";

/// Fixed venue choices offered by the venue picker, sentinel last.
pub fn venue_options() -> Vec<String> {
    [
        "Leonia Holistic Destination, Bommarasipet, Shamirpet Mandal, Medchal-Malkajgiri District, Hyderabad - 500078",
        "ITC Kohenur, Hyderabad",
        "Marriott Hotel, Bangalore",
        CUSTOM_VENUE_SENTINEL,
    ]
    .iter()
    .map(|venue| venue.to_string())
    .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrencyOption {
    pub value: &'static str,
    pub label: &'static str,
    pub symbol: &'static str,
}

const CURRENCY_OPTIONS: &[CurrencyOption] = &[
    CurrencyOption { value: "INR", label: "INR (₹)", symbol: "₹" },
    CurrencyOption { value: "USD", label: "USD ($)", symbol: "$" },
    CurrencyOption { value: "EUR", label: "EUR (€)", symbol: "€" },
    CurrencyOption { value: "GBP", label: "GBP (£)", symbol: "£" },
    CurrencyOption { value: "SGD", label: "SGD (S$)", symbol: "S$" },
];

pub fn currency_options() -> &'static [CurrencyOption] {
    CURRENCY_OPTIONS
}

/// Display symbol for a currency code, defaulting to the rupee sign.
pub fn currency_symbol(code: &str) -> &'static str {
    CURRENCY_OPTIONS
        .iter()
        .find(|option| option.value == code)
        .map(|option| option.symbol)
        .unwrap_or("₹")
}

/// Parent program form state. Owns the sub-program roster for the
/// duration of the edit session.
///
/// Free-text numeric fields (`program_fee`, `seat_limit`,
/// `waitlist_trigger_count`) stay string-encoded at this layer, exactly
/// as entered; parsing them into numeric types is a boundary concern.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgramData {
    pub program_name: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub banner: Option<BannerHandle>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub mode: Option<Mode>,
    pub venue_address: Vec<String>,
    pub custom_venue: String,
    /// True iff the sentinel venue entry is currently selected.
    #[serde(skip)]
    pub show_custom_venue: bool,
    pub is_travel_required: Option<YesNo>,
    pub is_residential: Option<YesNo>,
    pub is_payment_required: Option<YesNo>,
    pub currency: String,
    pub program_fee: String,
    pub hdb_fee: String,
    pub msd_fee: String,
    pub registration_start_date: Option<NaiveDate>,
    pub registration_start_time: String,
    pub registration_end_date: Option<NaiveDate>,
    pub registration_end_time: String,
    pub approval_required: Option<YesNo>,
    pub has_seat_limit: Option<YesNo>,
    pub seat_limit: String,
    pub has_waitlist: Option<YesNo>,
    pub waitlist_trigger_count: String,
    /// Program-level custom field values, keyed by field id.
    pub custom_fields: IndexMap<String, String>,
}

/// Projection of the parent form consumed by the prefill engine.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParentDefaults {
    pub description: String,
    pub banner: Option<BannerHandle>,
    pub mode: Option<Mode>,
    pub currency: String,
    pub is_payment_required: Option<YesNo>,
}

/// Typed field update for the parent form.
#[derive(Debug, Clone, PartialEq)]
pub enum ProgramPatch {
    ProgramName(String),
    Description(String),
    Banner(Option<BannerHandle>),
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
    HdbFee(String),
    MsdFee(String),
    RegistrationStartDate(Option<NaiveDate>),
    RegistrationStartTime(String),
    RegistrationEndDate(Option<NaiveDate>),
    RegistrationEndTime(String),
    ApprovalRequired(YesNo),
    HasSeatLimit(YesNo),
    SeatLimit(String),
    HasWaitlist(YesNo),
    WaitlistTriggerCount(String),
    CustomFieldValue { field_id: String, value: String },
}

impl ProgramData {
    pub fn parent_defaults(&self) -> ParentDefaults {
        ParentDefaults {
            description: self.description.clone(),
            banner: self.banner.clone(),
            mode: self.mode,
            currency: self.currency.clone(),
            is_payment_required: self.is_payment_required,
        }
    }

    pub fn apply(&mut self, patch: ProgramPatch) {
        match patch {
            ProgramPatch::ProgramName(value) => self.program_name = value,
            ProgramPatch::Description(value) => self.description = value,
            ProgramPatch::Banner(value) => self.banner = value,
            ProgramPatch::StartDate(value) => self.start_date = value,
            ProgramPatch::EndDate(value) => self.end_date = value,
            ProgramPatch::Mode(value) => self.mode = Some(value),
            ProgramPatch::VenueAddress(value) => self.venue_address = value,
            ProgramPatch::CustomVenue(value) => self.custom_venue = value,
            ProgramPatch::TravelRequired(value) => self.is_travel_required = value,
            ProgramPatch::Residential(value) => self.is_residential = value,
            ProgramPatch::PaymentRequired(value) => self.is_payment_required = Some(value),
            ProgramPatch::Currency(value) => self.currency = value,
            ProgramPatch::ProgramFee(value) => self.program_fee = value,
            ProgramPatch::HdbFee(value) => self.hdb_fee = value,
            ProgramPatch::MsdFee(value) => self.msd_fee = value,
            ProgramPatch::RegistrationStartDate(value) => self.registration_start_date = value,
            ProgramPatch::RegistrationStartTime(value) => self.registration_start_time = value,
            ProgramPatch::RegistrationEndDate(value) => self.registration_end_date = value,
            ProgramPatch::RegistrationEndTime(value) => self.registration_end_time = value,
            ProgramPatch::ApprovalRequired(value) => self.approval_required = Some(value),
            ProgramPatch::HasSeatLimit(value) => self.has_seat_limit = Some(value),
            ProgramPatch::SeatLimit(value) => self.seat_limit = value,
            ProgramPatch::HasWaitlist(value) => self.has_waitlist = Some(value),
            ProgramPatch::WaitlistTriggerCount(value) => self.waitlist_trigger_count = value,
            ProgramPatch::CustomFieldValue { field_id, value } => {
                self.custom_fields.insert(field_id, value);
            }
        }
    }

    /// Venue selection with the custom-venue escape hatch: choosing the
    /// sentinel switches to free-text input and the sentinel is never stored.
    pub fn update_venues(&mut self, venues: Vec<String>) {
        if venues.iter().any(|venue| venue == CUSTOM_VENUE_SENTINEL) {
            self.show_custom_venue = true;
            self.venue_address = venues
                .into_iter()
                .filter(|venue| venue != CUSTOM_VENUE_SENTINEL)
                .collect();
        } else {
            self.show_custom_venue = false;
            self.venue_address = venues;
        }
    }
}
