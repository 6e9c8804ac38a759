use chrono::{NaiveDate, NaiveDateTime};

/// DD News: `03-01-2022 | 12:15 pm`
const DD_FORMAT: &str = "%d-%m-%Y | %I:%M %p";
/// Everyone else: `Wed, 4 Jul 2001 12:08:56 -0700`, zone ignored
const RFC822_FORMAT: &str = "%a, %e %b %Y %H:%M:%S";

/// Relative label for a raw publication date.
///
/// Items without a link come from DD News and use its own format. Returns
/// "Today" or "Yesterday" relative to `today`, otherwise the raw string.
pub fn published_label(raw: &str, link: &str, today: NaiveDate) -> String {
    let date = raw.replace("pubDate", "");
    let date = date.trim();

    let format = if link.is_empty() { DD_FORMAT } else { RFC822_FORMAT };

    let day = match NaiveDateTime::parse_and_remainder(date, format) {
        Ok((parsed, _)) => parsed.date(),
        Err(_) => return date.to_string(),
    };

    if day == today {
        "Today".to_string()
    } else if day.succ_opt() == Some(today) {
        "Yesterday".to_string()
    } else {
        date.to_string()
    }
}
