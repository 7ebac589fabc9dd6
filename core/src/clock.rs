use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

pub(crate) fn now_rfc3339_utc() -> String {
    OffsetDateTime::now_utc().format(&Rfc3339).unwrap()
}

pub(crate) fn now_unix_millis() -> u64 {
    (OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000) as u64
}
