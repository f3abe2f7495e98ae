//! Digit-level primitives shared by the standard renderers:
//! rounding, group separator insertion, and scientific decomposition.

/// Tolerance against accumulated binary error when deciding a round-up.
const EPSILON: f64 = 1e-9;

/// Split a non-negative value into its integer digits and exactly `places`
/// fractional digits, rounding half away from zero.
pub(super) fn split_rounded(abs: f64, places: usize) -> (String, Vec<u8>) {
    if places == 0 {
        let mut int_digits = format!("{:.0}", abs.trunc());
        if abs.fract() >= 0.5 - EPSILON {
            int_digits = increment(&int_digits);
        }
        return (int_digits, Vec::new());
    }

    let mut int_digits = format!("{:.0}", abs.trunc());
    let mut remaining = abs.fract();
    let mut frac_digits: Vec<u8> = Vec::with_capacity(places);

    for _ in 0..places {
        remaining *= 10.0;
        let digit = remaining.trunc() as u8;
        frac_digits.push(digit.min(9));
        remaining -= remaining.trunc();
    }

    if remaining >= 0.5 - EPSILON {
        let mut carry = true;
        for digit in frac_digits.iter_mut().rev() {
            *digit += 1;
            if *digit == 10 {
                *digit = 0;
            } else {
                carry = false;
                break;
            }
        }
        if carry {
            int_digits = increment(&int_digits);
        }
    }

    (int_digits, frac_digits)
}

/// Add one to a decimal digit string, e.g. "199" -> "200".
fn increment(digits: &str) -> String {
    let mut bytes = digits.as_bytes().to_vec();
    let mut index = bytes.len();
    while index > 0 {
        index -= 1;
        if bytes[index] == b'9' {
            bytes[index] = b'0';
        } else {
            bytes[index] += 1;
            return String::from_utf8(bytes).expect("digits are ascii");
        }
    }
    let mut result = String::with_capacity(bytes.len() + 1);
    result.push('1');
    result.push_str(std::str::from_utf8(&bytes).expect("digits are ascii"));
    result
}

/// Insert the group separator into an integer digit string.
///
/// Sizes are consumed from the least significant digit; once the list is
/// exhausted the last size repeats. A size of 0 ends grouping and the
/// remaining digits form one final group.
pub(super) fn group(digits: &str, sizes: &[u8], separator: &str) -> String {
    if separator.is_empty() || sizes.is_empty() || sizes[0] == 0 {
        return digits.to_string();
    }

    let chars: Vec<char> = digits.chars().collect();
    let mut groups: Vec<String> = Vec::new();
    let mut end = chars.len();
    let mut size_index = 0;

    while end > 0 {
        let size = sizes[size_index] as usize;
        if size == 0 || size >= end {
            groups.push(chars[..end].iter().collect());
            break;
        }
        groups.push(chars[end - size..end].iter().collect());
        end -= size;
        if size_index + 1 < sizes.len() {
            size_index += 1;
        }
    }

    groups.reverse();
    groups.join(separator)
}

/// Join an integer part with fractional digits using the given separator.
pub(super) fn with_fraction(integer: String, frac: &[u8], separator: &str) -> String {
    if frac.is_empty() {
        return integer;
    }
    let mut result = integer;
    result.push_str(separator);
    for digit in frac {
        result.push((b'0' + digit) as char);
    }
    result
}

/// Decompose a positive value into `(digits, exponent)` where the value is
/// `d.igits × 10^exponent`. With `significant` set, the digit string is
/// rounded to that many significant digits; otherwise it is the shortest
/// round-trip representation.
pub(super) fn sci_parts(abs: f64, significant: Option<u32>) -> (String, i32) {
    let repr = match significant {
        Some(precision) => format!("{:.*e}", precision.saturating_sub(1) as usize, abs),
        None => format!("{abs:e}"),
    };
    let (mantissa, exponent) = repr.split_once('e').expect("exponential form");
    let exponent: i32 = exponent.parse().expect("exponent digits");
    let digit_str: String = mantissa.chars().filter(|c| *c != '.').collect();
    (digit_str, exponent)
}

/// Lay out a `sci_parts` decomposition in fixed-point position, trimming
/// trailing fractional zeros.
pub(super) fn positional(digit_str: &str, exponent: i32, separator: &str) -> String {
    let (int_part, frac_part) = if exponent >= 0 {
        let int_len = exponent as usize + 1;
        if digit_str.len() <= int_len {
            (format!("{digit_str:0<int_len$}"), String::new())
        } else {
            (
                digit_str[..int_len].to_string(),
                digit_str[int_len..].to_string(),
            )
        }
    } else {
        let leading = "0".repeat((-exponent - 1) as usize);
        ("0".to_string(), format!("{leading}{digit_str}"))
    };

    let frac = frac_part.trim_end_matches('0');
    if frac.is_empty() {
        int_part
    } else {
        format!("{int_part}{separator}{frac}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_rounded_half_away() {
        assert_eq!(split_rounded(1234.5, 0), ("1235".to_string(), vec![]));
        assert_eq!(split_rounded(0.125, 2), ("0".to_string(), vec![1, 3]));
        assert_eq!(split_rounded(9.995, 2), ("10".to_string(), vec![0, 0]));
        assert_eq!(split_rounded(1.0, 2), ("1".to_string(), vec![0, 0]));
    }

    #[test]
    fn test_group_cyclic_and_terminator() {
        assert_eq!(group("1234567", &[3], ","), "1,234,567");
        assert_eq!(group("1234567", &[3, 2], ","), "12,34,567");
        assert_eq!(group("1234567", &[3, 0], ","), "1234,567");
        assert_eq!(group("1234567", &[0], ","), "1234567");
        assert_eq!(group("123", &[3], ","), "123");
        assert_eq!(group("1234567", &[3], ""), "1234567");
    }

    #[test]
    fn test_increment_carries() {
        assert_eq!(increment("0"), "1");
        assert_eq!(increment("199"), "200");
        assert_eq!(increment("999"), "1000");
    }

    #[test]
    fn test_positional_layout() {
        assert_eq!(positional("12345", 3, "."), "1234.5");
        assert_eq!(positional("1234", 1, "."), "12.34");
        assert_eq!(positional("1234", -5, "."), "0.00001234");
        assert_eq!(positional("12300", 2, "."), "123");
        assert_eq!(positional("1", 2, "."), "100");
    }
}
