use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseIntsError {
    #[error("unexpected byte {byte:#04x} at offset {offset}")]
    InvalidByte { byte: u8, offset: usize },
    #[error("number starting at offset {offset} ({n_digits} digits) does not fit in a u32")]
    Overflow { offset: usize, n_digits: usize },
}

/// Parses every whitespace-separated unsigned integer in `input`.
///
/// Anything other than ASCII digits and ASCII whitespace is rejected with the
/// offset of the offending byte.
pub fn parse_ints(input: &[u8]) -> Result<Vec<u32>, ParseIntsError> {
    // Two bytes per number is the densest possible input ("1 1 1 ...").
    let mut output = Vec::with_capacity(input.len() / 2);
    let mut cursor = 0;
    while cursor < input.len() {
        let byte = input[cursor];
        if byte.is_ascii_whitespace() {
            cursor += 1;
            continue;
        }
        if !byte.is_ascii_digit() {
            return Err(ParseIntsError::InvalidByte {
                byte,
                offset: cursor,
            });
        }
        let found = extract_digits(&input[cursor..]).ok_or(ParseIntsError::InvalidByte {
            byte,
            offset: cursor,
        })?;
        let start = cursor + found.start;
        let digits = &input[start..(start + found.n_digits)];
        let num = convert_digits(digits).ok_or(ParseIntsError::Overflow {
            offset: start,
            n_digits: found.n_digits,
        })?;
        output.push(num);
        // Stop right after the digits so the separator gets checked above.
        cursor = start + found.n_digits;
    }
    Ok(output)
}

/// Parses the integer at the front of `input`, skipping leading whitespace
/// and ignoring whatever follows the digits.
///
/// Returns `None` when the first non-whitespace byte isn't a digit or the
/// digits don't fit in a `u32`.
pub fn parse_leading(input: &[u8]) -> Option<u32> {
    let skipped = input
        .iter()
        .take_while(|byte| byte.is_ascii_whitespace())
        .count();
    let rest = &input[skipped..];
    if !rest.first().is_some_and(u8::is_ascii_digit) {
        return None;
    }
    let found = extract_digits(rest)?;
    convert_digits(&rest[found.start..(found.start + found.n_digits)])
}

#[derive(Debug)]
struct FoundNumber {
    /// Offset of the first digit.
    start: usize,
    n_digits: usize,
}

/// Finds the first run of digits, stopping at a newline if no digits have
/// been seen before it.
fn extract_digits(input: &[u8]) -> Option<FoundNumber> {
    let mut start = 0;
    let mut n_digits = 0;
    for (idx, byte) in input.iter().enumerate() {
        // Found a digit byte
        if byte.is_ascii_digit() {
            if n_digits == 0 {
                start = idx;
            }
            n_digits += 1;
            continue;
        }
        // Transition from digits to separators
        if n_digits > 0 {
            break;
        }
        // End of the line we're concerned about
        if *byte == b'\n' {
            return None;
        }
    }
    (n_digits > 0).then_some(FoundNumber { start, n_digits })
}

fn convert_digits(digits: &[u8]) -> Option<u32> {
    digits.iter().try_fold(0u32, |acc, digit| {
        acc.checked_mul(10)?.checked_add(u32::from(digit - b'0'))
    })
}
