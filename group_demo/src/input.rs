/// Reads an integer out of a numeric field the way a browser's
/// `parseInt(value, 10)` does: leading whitespace and a sign are allowed, and
/// the longest run of decimal digits after them is taken, ignoring anything
/// that follows. Returns `None` if there are no digits or the value does not
/// fit in an `i64`.
pub fn parse_int(field: &str) -> Option<i64> {
  let trimmed = field.trim_start();
  let (negative, rest) = match trimmed.as_bytes().first() {
    Some(b'-') => (true, &trimmed[1..]),
    Some(b'+') => (false, &trimmed[1..]),
    _ => (false, trimmed),
  };

  let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
  if digits_len == 0 {
    return None;
  }

  let magnitude: i128 = rest[..digits_len].parse().ok()?;
  let value = if negative { -magnitude } else { magnitude };
  i64::try_from(value).ok()
}

/// Reads `count` integer fields. Absent fields count as empty, so fail.
pub fn parse_ints(fields: &[&str], count: usize) -> Option<Vec<i64>> {
  (0..count)
    .map(|idx| fields.get(idx).and_then(|field| parse_int(field)))
    .collect()
}
