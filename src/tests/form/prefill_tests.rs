use crate::domain::{BannerHandle, Mode, ParentDefaults, YesNo};
use crate::form::{PrefillSeed, prefill};

fn mk_parent() -> ParentDefaults {
    ParentDefaults {
        description: "Grow leadership across cohorts".to_string(),
        banner: Some(BannerHandle::new("banner.png")),
        mode: Some(Mode::Hybrid),
        currency: "USD".to_string(),
        is_payment_required: Some(YesNo::No),
    }
}

#[test]
fn copies_unset_fields_from_parent() {
    let parent = mk_parent();
    let filled = prefill(PrefillSeed::default(), &parent);
    assert_eq!(filled.description, parent.description);
    assert_eq!(filled.banner, parent.banner);
    assert_eq!(filled.mode, Some(Mode::Hybrid));
    assert_eq!(filled.currency, "USD");
    assert_eq!(filled.is_payment_required, Some(YesNo::No));
}

#[test]
fn explicit_candidate_values_win() {
    let candidate = PrefillSeed {
        description: "A deliberately different text".to_string(),
        banner: Some(BannerHandle::new("mine.jpg")),
        mode: Some(Mode::Offline),
        currency: "EUR".to_string(),
        is_payment_required: Some(YesNo::Yes),
    };
    let filled = prefill(candidate.clone(), &mk_parent());
    assert_eq!(filled, candidate);
}

#[test]
fn prefill_is_idempotent() {
    let parent = mk_parent();
    let candidate = PrefillSeed {
        description: String::new(),
        banner: None,
        mode: Some(Mode::Online),
        currency: String::new(),
        is_payment_required: None,
    };
    let once = prefill(candidate, &parent);
    let twice = prefill(once.clone(), &parent);
    assert_eq!(twice, once);
}

#[test]
fn empty_parent_leaves_candidate_empty() {
    let filled = prefill(PrefillSeed::default(), &ParentDefaults::default());
    assert_eq!(filled, PrefillSeed::default());
}
