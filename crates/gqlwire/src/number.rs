/// Format a finite f64 as a plain JSON number.
/// - no exponent notation
/// - no trailing fractional zeros (decimal point dropped if nothing remains)
/// - -0 normalized to 0
///
/// Returns `None` for NaN and infinities, which JSON cannot represent.
pub(crate) fn format_float(value: f64) -> Option<String> {
    if !value.is_finite() {
        return None;
    }
    if value == 0.0 {
        return Some(String::from("0"));
    }

    let mut buf = ryu::Buffer::new();
    let raw = buf.format_finite(value.abs());
    let (mantissa, exp) = match raw.split_once(['e', 'E']) {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (raw, 0),
    };
    let (int_part, frac_part) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    let mut digits = String::with_capacity(int_part.len() + frac_part.len());
    digits.push_str(int_part);
    digits.push_str(frac_part);

    // Position of the decimal point within `digits`.
    let point = int_part.len() as i64 + exp as i64;
    let mut body = String::with_capacity(digits.len() + 4);
    if point <= 0 {
        body.push_str("0.");
        body.extend(core::iter::repeat_n('0', (-point) as usize));
        body.push_str(&digits);
    } else if point as usize >= digits.len() {
        body.push_str(&digits);
        body.extend(core::iter::repeat_n('0', point as usize - digits.len()));
    } else {
        let split = point as usize;
        body.push_str(&digits[..split]);
        body.push('.');
        body.push_str(&digits[split..]);
    }

    if body.contains('.') {
        let trimmed = body.trim_end_matches('0').trim_end_matches('.').len();
        body.truncate(trimmed);
    }
    if body == "0" {
        return Some(body);
    }
    if value.is_sign_negative() {
        body.insert(0, '-');
    }
    Some(body)
}
