//! Calendar equations for the proleptic Gregorian calendar.
//!
//! Everything in this module is pure integer arithmetic. Dates are
//! interchangeably represented as `(year, month, day)` triples and as a
//! count of days since the Unix epoch (1970-01-01).

// ==== Leap years and month lengths ====

/// Returns whether `year` is a leap year under the proleptic Gregorian
/// rule: divisible by 4, except centuries not divisible by 400.
pub(crate) fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

pub(crate) fn days_in_year(year: i32) -> u16 {
    if is_leap_year(year) {
        366
    } else {
        365
    }
}

/// Returns the number of days in `month` of `year`. `month` must be 1-12.
pub(crate) fn days_in_month(year: i32, month: u8) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => unreachable!("month must be validated before calling days_in_month"),
    }
}

/// Returns the one-based day of the year for a valid calendar date.
pub(crate) fn day_of_year(year: i32, month: u8, day: u8) -> u16 {
    const CUMULATIVE: [u16; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];
    let leap = u16::from(month > 2 && is_leap_year(year));
    CUMULATIVE[usize::from(month) - 1] + leap + u16::from(day)
}

// ==== Epoch-day conversions ====
//
// The two conversions below are the standard civil-calendar equations
// over 400-year eras, valid over the full `i32` year range.

/// Days since 1970-01-01 for a valid calendar date.
pub(crate) fn epoch_days_from_date(year: i32, month: u8, day: u8) -> i64 {
    let y = i64::from(year) - i64::from(month <= 2);
    let era = y.div_euclid(400);
    let yoe = y - era * 400;
    let mp = (i64::from(month) + 9) % 12;
    let doy = (153 * mp + 2) / 5 + i64::from(day) - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146_097 + doe - 719_468
}

/// Inverse of [`epoch_days_from_date`].
pub(crate) fn date_from_epoch_days(days: i64) -> (i64, u8, u8) {
    let z = days + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = (doy - (153 * mp + 2) / 5 + 1) as u8;
    let month = if mp < 10 { mp + 3 } else { mp - 9 } as u8;
    (yoe + era * 400 + i64::from(month <= 2), month, day)
}

// ==== Weekdays and ISO weeks ====

/// ISO weekday (1 = Monday, ..., 7 = Sunday) for an epoch-day count.
/// Day 0 (1970-01-01) was a Thursday.
pub(crate) fn weekday_from_epoch_days(days: i64) -> u8 {
    ((days + 3).rem_euclid(7) + 1) as u8
}

pub(crate) fn weekday(year: i32, month: u8, day: u8) -> u8 {
    weekday_from_epoch_days(epoch_days_from_date(year, month, day))
}

/// Number of ISO weeks in the ISO week-year `year`: 53 when January 1st
/// falls on a Thursday, or on a Wednesday of a leap year, otherwise 52.
pub(crate) fn weeks_in_iso_year(year: i32) -> u8 {
    let jan1 = weekday(year, 1, 1);
    if jan1 == 4 || (jan1 == 3 && is_leap_year(year)) {
        53
    } else {
        52
    }
}

/// Epoch-day count of the Monday starting week 1 of the ISO week-year
/// `year`. Week 1 is the week containing January 4th (equivalently, the
/// year's first Thursday).
pub(crate) fn iso_week_one_monday(year: i32) -> i64 {
    let jan4 = epoch_days_from_date(year, 1, 4);
    jan4 - i64::from(weekday_from_epoch_days(jan4) - 1)
}

/// Converts a calendar date into its `(week_year, week, weekday)` ISO
/// week-date representation. The week-year may differ from the calendar
/// year at the January/December boundaries.
pub(crate) fn iso_week_date(year: i32, month: u8, day: u8) -> (i32, u8, u8) {
    let wd = weekday(year, month, day);
    let week = (i32::from(day_of_year(year, month, day)) - i32::from(wd) + 10) / 7;
    if week < 1 {
        (year - 1, weeks_in_iso_year(year - 1), wd)
    } else if week > i32::from(weeks_in_iso_year(year)) {
        (year + 1, 1, wd)
    } else {
        (year, week as u8, wd)
    }
}

/// Converts an ISO week-date into an epoch-day count. The inputs must
/// already be range-checked (`week` against [`weeks_in_iso_year`],
/// `weekday` against 1-7).
pub(crate) fn epoch_days_from_iso_week_date(week_year: i32, week: u8, weekday: u8) -> i64 {
    iso_week_one_monday(week_year) + i64::from(week - 1) * 7 + i64::from(weekday - 1)
}

// ==== Tests ====

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leap_years() {
        assert!(is_leap_year(2000));
        assert!(is_leap_year(2004));
        assert!(is_leap_year(0));
        assert!(is_leap_year(-4));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2100));
        assert!(!is_leap_year(2023));
    }

    #[test]
    fn month_lengths() {
        assert_eq!(days_in_month(2020, 2), 29);
        assert_eq!(days_in_month(2021, 2), 28);
        assert_eq!(days_in_month(2021, 12), 31);
        assert_eq!(days_in_month(2021, 4), 30);
    }

    #[test]
    fn epoch_day_round_trip() {
        for &(y, m, d) in &[
            (1970, 1, 1),
            (2000, 2, 29),
            (1969, 12, 31),
            (0, 1, 1),
            (-1, 12, 31),
            (9999, 12, 31),
            (-9999, 1, 1),
        ] {
            let days = epoch_days_from_date(y, m, d);
            assert_eq!(date_from_epoch_days(days), (i64::from(y), m, d));
        }
        assert_eq!(epoch_days_from_date(1970, 1, 1), 0);
        assert_eq!(epoch_days_from_date(1969, 12, 31), -1);
    }

    #[test]
    fn weekdays() {
        // 1970-01-01 was a Thursday, 2009-12-15 a Tuesday.
        assert_eq!(weekday(1970, 1, 1), 4);
        assert_eq!(weekday(2009, 12, 15), 2);
        assert_eq!(weekday(2000, 1, 1), 6);
    }

    #[test]
    fn iso_week_years() {
        assert_eq!(weeks_in_iso_year(2004), 53);
        assert_eq!(weeks_in_iso_year(2015), 53);
        assert_eq!(weeks_in_iso_year(2009), 53);
        assert_eq!(weeks_in_iso_year(2010), 52);
    }

    #[test]
    fn week_date_conversions() {
        // 2009-W01-1 is 2008-12-29.
        assert_eq!(
            epoch_days_from_iso_week_date(2009, 1, 1),
            epoch_days_from_date(2008, 12, 29)
        );
        assert_eq!(iso_week_date(2008, 12, 29), (2009, 1, 1));
        // 2010-01-03 belongs to 2009-W53-7.
        assert_eq!(iso_week_date(2010, 1, 3), (2009, 53, 7));
        // A mid-year date maps onto its own week-year.
        assert_eq!(iso_week_date(2009, 7, 1), (2009, 27, 3));
    }

    #[test]
    fn week_date_round_trip() {
        let mut days = epoch_days_from_date(2004, 1, 1);
        let end = epoch_days_from_date(2011, 1, 1);
        while days < end {
            let (y, m, d) = date_from_epoch_days(days);
            let (wy, ww, wd) = iso_week_date(y as i32, m, d);
            assert_eq!(epoch_days_from_iso_week_date(wy, ww, wd), days);
            days += 1;
        }
    }

    #[test]
    fn day_of_year_bounds() {
        assert_eq!(day_of_year(2009, 1, 1), 1);
        assert_eq!(day_of_year(2009, 12, 31), 365);
        assert_eq!(day_of_year(2008, 12, 31), 366);
        assert_eq!(day_of_year(2008, 3, 1), 61);
    }
}
