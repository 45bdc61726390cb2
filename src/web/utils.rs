use time::{format_description::BorrowedFormatItem, macros::format_description, OffsetDateTime};

pub(crate) const HTTP_DATE: &[BorrowedFormatItem<'static>] = format_description!(
    "[weekday repr:short], [day] [month repr:short] [year] [hour]:[minute]:[second] GMT"
);

/// IMF-fixdate rendering used by the `Date` and `Expires` headers.
pub fn http_date(at: OffsetDateTime) -> String {
    at.to_offset(time::UtcOffset::UTC)
        .format(HTTP_DATE)
        .unwrap_or_else(|_| String::from("Thu, 01 Jan 1970 00:00:00 GMT"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn formats_imf_fixdate() {
        assert_eq!(http_date(datetime!(1994-11-06 08:49:37 UTC)), "Sun, 06 Nov 1994 08:49:37 GMT");
    }

    #[test]
    fn converts_to_utc() {
        assert_eq!(http_date(datetime!(2024-03-01 01:30:00 +02:00)), "Thu, 29 Feb 2024 23:30:00 GMT");
    }
}
