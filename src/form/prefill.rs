use crate::domain::{BannerHandle, Mode, ParentDefaults, YesNo};

/// Candidate sub-program fields before parent defaults are applied.
/// `None` or empty means "unset"; [`prefill`] fills only those slots.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PrefillSeed {
    pub description: String,
    pub banner: Option<BannerHandle>,
    pub mode: Option<Mode>,
    pub currency: String,
    pub is_payment_required: Option<YesNo>,
}

/// Copies the parent's current value into every slot the candidate leaves
/// unset; explicit candidate values always win. Pure and idempotent. A
/// parent with no value of its own simply leaves the slot unset — the
/// roster applies its own defaults afterwards.
pub fn prefill(candidate: PrefillSeed, parent: &ParentDefaults) -> PrefillSeed {
    PrefillSeed {
        description: if candidate.description.is_empty() {
            parent.description.clone()
        } else {
            candidate.description
        },
        banner: candidate.banner.or_else(|| parent.banner.clone()),
        mode: candidate.mode.or(parent.mode),
        currency: if candidate.currency.is_empty() {
            parent.currency.clone()
        } else {
            candidate.currency
        },
        is_payment_required: candidate.is_payment_required.or(parent.is_payment_required),
    }
}
