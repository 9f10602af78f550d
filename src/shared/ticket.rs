use once_cell::sync::Lazy;
use regex::Regex;

/// Shape of a persisted complaint ticket id: prefix plus exactly five digits.
pub static COMPLAINT_TICKET_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^PMAJAY-COMP-\d{5}$").unwrap());

/// `PMAJAY-COMP-` followed by five random digits (10000..=99999).
pub fn complaint_ticket_id() -> String {
    format!("PMAJAY-COMP-{}", fastrand::u32(10_000..100_000))
}

/// `PMAJAY-GRIEV-` followed by up to five random digits. Display-only;
/// nothing downstream ever reads it back.
pub fn grievance_ticket_id() -> String {
    format!("PMAJAY-GRIEV-{}", fastrand::u32(0..100_000))
}

/// `PMAJAY-2024-` followed by up to four random digits. Display-only.
pub fn proposal_display_id() -> String {
    format!("PMAJAY-2024-{}", fastrand::u32(0..10_000))
}
