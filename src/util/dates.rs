use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// Resolve a date token relative to `today`.
///
/// Accepts `today`, `tomorrow`, `yesterday`, `+3d`, `+2w`, weekday names
/// (`fri`, `friday`: the next such day, today included) and ISO dates.
pub fn parse_relative_date(token: &str, today: NaiveDate) -> Option<NaiveDate> {
    let token = token.trim().to_lowercase();
    match token.as_str() {
        "" => return None,
        "today" => return Some(today),
        "tomorrow" => return today.checked_add_signed(Duration::days(1)),
        "yesterday" => return today.checked_sub_signed(Duration::days(1)),
        _ => {}
    }

    if let Some(offset) = token.strip_prefix('+') {
        let unit = offset.chars().last()?;
        let n: i64 = offset[..offset.len() - unit.len_utf8()].parse().ok()?;
        let days = match unit {
            'd' => n,
            'w' => n.checked_mul(7)?,
            _ => return None,
        };
        return today.checked_add_signed(Duration::try_days(days)?);
    }

    if let Some(weekday) = parse_weekday(&token) {
        let ahead = (7 + weekday.num_days_from_monday() as i64
            - today.weekday().num_days_from_monday() as i64)
            % 7;
        return today.checked_add_signed(Duration::days(ahead));
    }

    NaiveDate::parse_from_str(&token, "%Y-%m-%d").ok()
}

fn parse_weekday(token: &str) -> Option<Weekday> {
    let weekday = match token {
        "mon" | "monday" => Weekday::Mon,
        "tue" | "tues" | "tuesday" => Weekday::Tue,
        "wed" | "wednesday" => Weekday::Wed,
        "thu" | "thurs" | "thursday" => Weekday::Thu,
        "fri" | "friday" => Weekday::Fri,
        "sat" | "saturday" => Weekday::Sat,
        "sun" | "sunday" => Weekday::Sun,
        _ => return None,
    };
    Some(weekday)
}

/// The raw token of the first `due:` word in `text`
pub fn extract_due(text: &str) -> Option<&str> {
    text.split_whitespace()
        .find_map(|word| word.strip_prefix("due:"))
        .filter(|token| !token.is_empty())
}

/// The resolved due date of an item's text, if it has a valid one
pub fn due_date(text: &str, today: NaiveDate) -> Option<NaiveDate> {
    extract_due(text).and_then(|token| parse_relative_date(token, today))
}
