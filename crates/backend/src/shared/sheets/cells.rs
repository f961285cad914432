//! Lenient cell readers shared by the parsers.

use chrono::NaiveDate;
use std::cmp::Ordering;

/// Reads the leading integer of a cell the way spreadsheet users type them:
/// surrounding whitespace and trailing garbage are ignored ("12abc" -> 12,
/// "3.7" -> 3), anything without leading digits is 0.
pub fn parse_int(value: &str) -> i32 {
    let s = value.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let end = digits
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return 0;
    }

    // Слишком длинные числа насыщаем, а не обнуляем
    let magnitude = digits[..end].parse::<i64>().unwrap_or(i64::MAX);
    let signed = if negative { -magnitude } else { magnitude };
    signed.clamp(i32::MIN as i64, i32::MAX as i64) as i32
}

/// Cell at `column` of a raw row, "" past the end
pub fn cell_at(row: &[String], column: usize) -> &str {
    row.get(column).map(String::as_str).unwrap_or("")
}

pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Parses a sheet date. The sheets use dd.mm.yyyy, ISO dates are accepted too.
/// A time after the date (`10.05.2024 20:00`) is ignored.
pub fn parse_sheet_date(value: &str) -> Option<NaiveDate> {
    let s = value.split_whitespace().next()?;
    NaiveDate::parse_from_str(s, "%d.%m.%Y")
        .or_else(|_| NaiveDate::parse_from_str(s, "%Y-%m-%d"))
        .ok()
}

/// Newest first; unparseable dates go after every valid one and keep
/// their relative order under a stable sort.
pub fn compare_dates_desc(a: &str, b: &str) -> Ordering {
    match (parse_sheet_date(a), parse_sheet_date(b)) {
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
