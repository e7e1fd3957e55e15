use super::*;
use time::macros::datetime;

const T0: OffsetDateTime = datetime!(2025-03-01 12:00:00 UTC);

fn seq_after(check: &SlugCheck, slug: &str) -> u64 {
    check.on_input_at(slug, T0);
    check
        .gate
        .try_update_value(|g| g.poll(T0 + time::Duration::seconds(10)))
        .flatten()
        .map(|r| r.seq)
        .expect("scheduled")
}

#[test]
fn short_slug_reports_too_short() {
    let check = use_slug_check(EntityKind::Blog);
    check.on_input_at("ab", T0);
    assert_eq!(check.status.get_untracked(), SlugStatus::TooShort);
}

#[test]
fn valid_slug_reports_checking_until_settled() {
    let check = use_slug_check(EntityKind::Service);
    let seq = seq_after(&check, "cloud-migration");
    assert_eq!(check.status.get_untracked(), SlugStatus::Checking);
    check.settle(seq, Ok(false));
    assert_eq!(check.status.get_untracked(), SlugStatus::Taken);
}

#[test]
fn network_failure_is_not_reported_as_taken() {
    let check = use_slug_check(EntityKind::Project);
    let seq = seq_after(&check, "harbor-cranes");
    check.settle(seq, Err("503 Service Unavailable".to_owned()));
    assert_eq!(
        check.status.get_untracked(),
        SlugStatus::CheckFailed("503 Service Unavailable".to_owned())
    );
}

#[test]
fn stale_answer_is_dropped() {
    let check = use_slug_check(EntityKind::Industry);
    let seq = seq_after(&check, "logistics");
    check.on_input_at("logistics-eu", T0);
    check.settle(seq, Ok(true));
    assert_eq!(check.status.get_untracked(), SlugStatus::Checking);
}
