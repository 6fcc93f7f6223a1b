//! Publication date labels.
//!
//! # Responsibility
//! - Format the absolute tooltip label (`20 de janeiro às 20:00h`).
//! - Format the relative label (`há cerca de 1 hora`) against a caller `now`.
//! - Provide the machine-readable RFC 3339 form.
//!
//! # Invariants
//! - Absolute labels use the timestamp's own offset.
//! - Relative labels are never cached; callers pass `now` on each render.
//! - Distance buckets follow the date-fns `formatDistance` thresholds.

use crate::locale::Locale;
use chrono::{DateTime, Datelike, FixedOffset, SecondsFormat, Timelike, Utc};
use serde::Serialize;

const MINUTES_IN_DAY: i64 = 1_440;
const MINUTES_IN_ALMOST_TWO_DAYS: i64 = 2_520;
const MINUTES_IN_MONTH: i64 = 43_200;
const MINUTES_IN_TWO_MONTHS: i64 = 86_400;

/// All display forms of one publication timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PublishedLabel {
    pub absolute: String,
    pub relative: String,
    pub iso: String,
}

/// Formats absolute, relative and RFC 3339 labels for `published_at`.
pub fn format_published(
    published_at: &DateTime<FixedOffset>,
    now: DateTime<Utc>,
    locale: Locale,
) -> PublishedLabel {
    PublishedLabel {
        absolute: format_absolute(published_at, locale),
        relative: format_relative(published_at, now, locale),
        iso: published_at
            .with_timezone(&Utc)
            .to_rfc3339_opts(SecondsFormat::Millis, true),
    }
}

/// Formats `<day> de <month> às <HH:mm>h` (pt-BR) or
/// `<Month> <day> at <HH:mm>h` (en-US).
pub fn format_absolute(published_at: &DateTime<FixedOffset>, locale: Locale) -> String {
    let month = locale.month_name(published_at.month()).unwrap_or_default();
    let day = published_at.day();
    let (hour, minute) = (published_at.hour(), published_at.minute());
    match locale {
        Locale::PtBr => format!("{day} de {month} às {hour:02}:{minute:02}h"),
        Locale::EnUs => format!("{month} {day} at {hour:02}:{minute:02}h"),
    }
}

/// Formats the distance between `published_at` and `now` with a past or
/// future suffix.
pub fn format_relative(
    published_at: &DateTime<FixedOffset>,
    now: DateTime<Utc>,
    locale: Locale,
) -> String {
    let published = published_at.with_timezone(&Utc);
    let in_future = published > now;
    let (earlier, later) = if in_future {
        (now, published)
    } else {
        (published, now)
    };
    let phrase = distance_phrase(distance_bucket(earlier, later), locale);
    match (locale, in_future) {
        (Locale::PtBr, false) => format!("há {phrase}"),
        (Locale::PtBr, true) => format!("em {phrase}"),
        (Locale::EnUs, false) => format!("{phrase} ago"),
        (Locale::EnUs, true) => format!("in {phrase}"),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Distance {
    LessThanXMinutes(i64),
    XMinutes(i64),
    AboutXHours(i64),
    XDays(i64),
    AboutXMonths(i64),
    XMonths(i64),
    AboutXYears(i64),
    OverXYears(i64),
    AlmostXYears(i64),
}

fn distance_bucket(earlier: DateTime<Utc>, later: DateTime<Utc>) -> Distance {
    let seconds = later.signed_duration_since(earlier).num_seconds();
    let minutes = round_div(seconds, 60);

    if minutes < 2 {
        return if minutes == 0 {
            Distance::LessThanXMinutes(1)
        } else {
            Distance::XMinutes(minutes)
        };
    }
    if minutes < 45 {
        return Distance::XMinutes(minutes);
    }
    if minutes < 90 {
        return Distance::AboutXHours(1);
    }
    if minutes < MINUTES_IN_DAY {
        return Distance::AboutXHours(round_div(minutes, 60));
    }
    if minutes < MINUTES_IN_ALMOST_TWO_DAYS {
        return Distance::XDays(1);
    }
    if minutes < MINUTES_IN_MONTH {
        return Distance::XDays(round_div(minutes, MINUTES_IN_DAY));
    }
    if minutes < MINUTES_IN_TWO_MONTHS {
        return Distance::AboutXMonths(round_div(minutes, MINUTES_IN_MONTH));
    }

    let months = calendar_months_between(earlier, later);
    if months < 12 {
        return Distance::XMonths(round_div(minutes, MINUTES_IN_MONTH));
    }
    let months_into_year = months % 12;
    let years = months / 12;
    if months_into_year < 3 {
        Distance::AboutXYears(years)
    } else if months_into_year < 9 {
        Distance::OverXYears(years)
    } else {
        Distance::AlmostXYears(years + 1)
    }
}

/// Rounds `value / divisor` half away from zero for non-negative input.
fn round_div(value: i64, divisor: i64) -> i64 {
    (value + divisor / 2) / divisor
}

/// Whole calendar months from `earlier` to `later`.
fn calendar_months_between(earlier: DateTime<Utc>, later: DateTime<Utc>) -> i64 {
    let mut months = (i64::from(later.year()) - i64::from(earlier.year())) * 12
        + (i64::from(later.month()) - i64::from(earlier.month()));
    if months > 0 && (later.day(), later.time()) < (earlier.day(), earlier.time()) {
        months -= 1;
    }
    months
}

fn distance_phrase(distance: Distance, locale: Locale) -> String {
    match locale {
        Locale::PtBr => phrase_pt_br(distance),
        Locale::EnUs => phrase_en_us(distance),
    }
}

fn phrase_pt_br(distance: Distance) -> String {
    let counted = |count: i64, one: &str, many: &str| {
        if count == 1 {
            one.to_string()
        } else {
            many.replace("{}", &count.to_string())
        }
    };
    match distance {
        Distance::LessThanXMinutes(n) => counted(n, "menos de um minuto", "menos de {} minutos"),
        Distance::XMinutes(n) => counted(n, "1 minuto", "{} minutos"),
        Distance::AboutXHours(n) => counted(n, "cerca de 1 hora", "cerca de {} horas"),
        Distance::XDays(n) => counted(n, "1 dia", "{} dias"),
        Distance::AboutXMonths(n) => counted(n, "cerca de 1 mês", "cerca de {} meses"),
        Distance::XMonths(n) => counted(n, "1 mês", "{} meses"),
        Distance::AboutXYears(n) => counted(n, "cerca de 1 ano", "cerca de {} anos"),
        Distance::OverXYears(n) => counted(n, "mais de 1 ano", "mais de {} anos"),
        Distance::AlmostXYears(n) => counted(n, "quase 1 ano", "quase {} anos"),
    }
}

fn phrase_en_us(distance: Distance) -> String {
    let counted = |count: i64, one: &str, many: &str| {
        if count == 1 {
            one.to_string()
        } else {
            many.replace("{}", &count.to_string())
        }
    };
    match distance {
        Distance::LessThanXMinutes(n) => counted(n, "less than a minute", "less than {} minutes"),
        Distance::XMinutes(n) => counted(n, "1 minute", "{} minutes"),
        Distance::AboutXHours(n) => counted(n, "about 1 hour", "about {} hours"),
        Distance::XDays(n) => counted(n, "1 day", "{} days"),
        Distance::AboutXMonths(n) => counted(n, "about 1 month", "about {} months"),
        Distance::XMonths(n) => counted(n, "1 month", "{} months"),
        Distance::AboutXYears(n) => counted(n, "about 1 year", "about {} years"),
        Distance::OverXYears(n) => counted(n, "over 1 year", "over {} years"),
        Distance::AlmostXYears(n) => counted(n, "almost 1 year", "almost {} years"),
    }
}

#[cfg(test)]
mod tests {
    use super::{calendar_months_between, distance_bucket, round_div, Distance};
    use chrono::{Duration, TimeZone, Utc};

    #[test]
    fn round_div_rounds_half_up() {
        assert_eq!(round_div(29, 60), 0);
        assert_eq!(round_div(30, 60), 1);
        assert_eq!(round_div(89, 60), 1);
        assert_eq!(round_div(90, 60), 2);
    }

    #[test]
    fn buckets_follow_minute_thresholds() {
        let base = Utc.with_ymd_and_hms(2025, 1, 20, 23, 0, 0).unwrap();
        let at = |minutes: i64| distance_bucket(base, base + Duration::minutes(minutes));

        assert_eq!(at(0), Distance::LessThanXMinutes(1));
        assert_eq!(at(1), Distance::XMinutes(1));
        assert_eq!(at(44), Distance::XMinutes(44));
        assert_eq!(at(45), Distance::AboutXHours(1));
        assert_eq!(at(150), Distance::AboutXHours(3));
        assert_eq!(at(1_500), Distance::XDays(1));
        assert_eq!(at(4 * 1_440), Distance::XDays(4));
        assert_eq!(at(50_000), Distance::AboutXMonths(1));
    }

    #[test]
    fn year_buckets_use_calendar_months() {
        let base = Utc.with_ymd_and_hms(2020, 1, 15, 12, 0, 0).unwrap();
        let after = |y: i32, m: u32| {
            distance_bucket(base, Utc.with_ymd_and_hms(y, m, 15, 12, 0, 0).unwrap())
        };

        assert_eq!(after(2020, 6), Distance::XMonths(5));
        assert_eq!(after(2021, 2), Distance::AboutXYears(1));
        assert_eq!(after(2021, 6), Distance::OverXYears(1));
        assert_eq!(after(2021, 11), Distance::AlmostXYears(2));
    }

    #[test]
    fn calendar_months_drop_partial_month() {
        let earlier = Utc.with_ymd_and_hms(2024, 1, 31, 10, 0, 0).unwrap();
        let later = Utc.with_ymd_and_hms(2024, 3, 30, 10, 0, 0).unwrap();
        assert_eq!(calendar_months_between(earlier, later), 1);
    }
}
