//! Locale-aware, numeric-aware string collation.
//!
//! Mirrors the ordering a browser collator produces with `numeric: true`:
//! digit runs compare by value, letters compare case- and accent-insensitively
//! first, then unaccented before accented, then lowercase before uppercase.
//! Punctuation and whitespace sort before digits, digits before letters.

use std::cmp::Ordering;

/// One collation unit of a string.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Unit<'a> {
    /// A run of ASCII digits with leading zeros stripped
    Number(&'a str),
    /// A single non-digit character
    Char {
        class: u8,
        base: char,
        accent: u32,
        upper: bool,
    },
}

const CLASS_SEPARATOR: u8 = 0;
const CLASS_DIGIT: u8 = 1;
const CLASS_LETTER: u8 = 2;

/// Compare two strings the way a numeric-aware locale collator would.
///
/// `"9"` sorts before `"10"`, `"apel"` before `"Äpfel"` before `"Zebra"`.
/// Strings that collate identically at every level fall back to byte order so
/// the result is a total order.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let ua = units(a);
    let ub = units(b);

    compare_primary(&ua, &ub)
        .then_with(|| compare_level(&ua, &ub, |u| match u {
            Unit::Char { accent, .. } => *accent,
            Unit::Number(_) => 0,
        }))
        .then_with(|| compare_level(&ua, &ub, |u| match u {
            Unit::Char { upper, .. } => u32::from(*upper),
            Unit::Number(_) => 0,
        }))
        .then_with(|| a.cmp(b))
}

fn units(s: &str) -> Vec<Unit<'_>> {
    let mut out = Vec::with_capacity(s.len());
    let mut chars = s.char_indices().peekable();

    while let Some((start, c)) = chars.next() {
        if c.is_ascii_digit() {
            let mut end = start + 1;
            while let Some(&(idx, next)) = chars.peek() {
                if !next.is_ascii_digit() {
                    break;
                }
                end = idx + 1;
                chars.next();
            }
            let run = &s[start..end];
            let trimmed = run.trim_start_matches('0');
            out.push(Unit::Number(if trimmed.is_empty() { "0" } else { trimmed }));
        } else {
            out.push(char_unit(c));
        }
    }
    out
}

fn char_unit(c: char) -> Unit<'static> {
    let lower = c.to_lowercase().next().unwrap_or(c);
    let upper = c.is_uppercase();
    let (base, accent) = match fold_latin(lower) {
        Some(base) => (base, lower as u32),
        None => (lower, 0),
    };
    // Whitespace, punctuation and symbols of any script sort before digits
    let class = if !c.is_alphanumeric() {
        CLASS_SEPARATOR
    } else if c.is_numeric() {
        CLASS_DIGIT
    } else {
        CLASS_LETTER
    };
    Unit::Char {
        class,
        base,
        accent,
        upper,
    }
}

fn compare_primary(a: &[Unit<'_>], b: &[Unit<'_>]) -> Ordering {
    for (x, y) in a.iter().zip(b.iter()) {
        let ord = match (x, y) {
            (Unit::Number(n), Unit::Number(m)) => n.len().cmp(&m.len()).then_with(|| n.cmp(m)),
            (Unit::Number(_), Unit::Char { class, .. }) => CLASS_DIGIT.cmp(class),
            (Unit::Char { class, .. }, Unit::Number(_)) => class.cmp(&CLASS_DIGIT),
            (
                Unit::Char {
                    class: ca, base: ba, ..
                },
                Unit::Char {
                    class: cb, base: bb, ..
                },
            ) => ca.cmp(cb).then_with(|| ba.cmp(bb)),
        };
        if ord != Ordering::Equal {
            return ord;
        }
    }
    a.len().cmp(&b.len())
}

fn compare_level<F>(a: &[Unit<'_>], b: &[Unit<'_>], key: F) -> Ordering
where
    F: Fn(&Unit<'_>) -> u32,
{
    a.iter()
        .map(&key)
        .cmp(b.iter().map(&key))
}

/// Strip diacritics from common Latin letters.
const fn fold_latin(c: char) -> Option<char> {
    let base = match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'ā' | 'ă' | 'ą' => 'a',
        'ç' | 'ć' | 'ĉ' | 'č' => 'c',
        'ď' | 'đ' => 'd',
        'è' | 'é' | 'ê' | 'ë' | 'ē' | 'ė' | 'ę' | 'ě' => 'e',
        'ğ' | 'ģ' => 'g',
        'ì' | 'í' | 'î' | 'ï' | 'ī' | 'į' | 'ı' => 'i',
        'ķ' => 'k',
        'ĺ' | 'ļ' | 'ľ' | 'ł' => 'l',
        'ñ' | 'ń' | 'ņ' | 'ň' => 'n',
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' | 'ō' | 'ő' => 'o',
        'ŕ' | 'ř' => 'r',
        'ś' | 'ş' | 'š' => 's',
        'ţ' | 'ť' => 't',
        'ù' | 'ú' | 'û' | 'ü' | 'ū' | 'ů' | 'ű' | 'ų' => 'u',
        'ý' | 'ÿ' => 'y',
        'ź' | 'ż' | 'ž' => 'z',
        _ => return None,
    };
    Some(base)
}
