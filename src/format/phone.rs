/// Brazilian country calling code, including the leading `+`.
const BRAZIL_PREFIX: &str = "+55";

/// Keeps digits and a single leading `+`.
pub fn clean_phone_number(raw: &str) -> String {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    if raw.trim_start().starts_with('+') {
        format!("+{}", digits)
    } else {
        digits
    }
}

/// Renders a phone number in Brazilian national notation when it is
/// recognizable as one: `+55` followed by area code and subscriber number,
/// or a bare 10/11 digit domestic number. Returns `raw` untouched otherwise.
pub fn format_phone_number(raw: &str) -> String {
    let cleaned = clean_phone_number(raw);

    let national = match cleaned.strip_prefix(BRAZIL_PREFIX) {
        Some(rest) => Some(rest),
        None if !cleaned.starts_with('+') => Some(cleaned.as_str()),
        None => None,
    };

    national
        .and_then(format_national)
        .unwrap_or_else(|| raw.to_string())
}

/// `AA` + 8 or 9 subscriber digits -> `(AA) NNNN-NNNN` / `(AA) NNNNN-NNNN`.
fn format_national(digits: &str) -> Option<String> {
    if !(10..=11).contains(&digits.len()) {
        return None;
    }
    let (area, subscriber) = digits.split_at(2);
    let (first, last) = subscriber.split_at(subscriber.len() - 4);
    Some(format!("({}) {}-{}", area, first, last))
}
