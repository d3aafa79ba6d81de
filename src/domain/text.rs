use thousands::Separable;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Cuts `s` to at most `width` display columns, ending with `…` when shortened.
pub fn truncate_to_width(s: &str, width: usize) -> String {
    if width == 0 {
        return String::new();
    }
    if s.width() <= width {
        return s.to_string();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w + 1 > width {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

/// Short label for an image reference: the last path segment without query.
pub fn image_label(reference: &str) -> &str {
    let without_query = reference.split(['?', '#']).next().unwrap_or(reference);
    without_query
        .trim_end_matches('/')
        .rsplit('/')
        .next()
        .filter(|s| !s.is_empty())
        .unwrap_or(reference)
}

pub fn format_price(price: f64) -> String {
    let cents = (price * 100.0).round() as i64;
    let whole = cents / 100;
    let frac = (cents % 100).abs();
    format!("${}.{frac:02}", whole.separate_with_commas())
}
