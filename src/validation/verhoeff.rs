//! Verhoeff check-digit validation, the single source of truth for whether a
//! 12-digit national ID number is structurally valid. The scheme is built on
//! the dihedral group D5 and catches all single-digit errors and most
//! adjacent transpositions.

/// D5 multiplication table.
const D: [[u8; 10]; 10] = [
    [0, 1, 2, 3, 4, 5, 6, 7, 8, 9],
    [1, 2, 3, 4, 0, 6, 7, 8, 9, 5],
    [2, 3, 4, 0, 1, 7, 8, 9, 5, 6],
    [3, 4, 0, 1, 2, 8, 9, 5, 6, 7],
    [4, 0, 1, 2, 3, 9, 5, 6, 7, 8],
    [5, 9, 8, 7, 6, 0, 4, 3, 2, 1],
    [6, 5, 9, 8, 7, 1, 0, 4, 3, 2],
    [7, 6, 5, 9, 8, 2, 1, 0, 4, 3],
    [8, 7, 6, 5, 9, 3, 2, 1, 0, 4],
    [9, 8, 7, 6, 5, 4, 3, 2, 1, 0],
];

/// Position-dependent permutation table, applied as `P[i % 8]`.
const P: [[u8; 10]; 8] = [
    [0, 1, 2, 3, 4, 5, 6, 7, 8, 9],
    [1, 5, 7, 6, 2, 8, 3, 0, 9, 4],
    [5, 8, 0, 3, 7, 9, 6, 1, 4, 2],
    [8, 9, 1, 6, 0, 4, 3, 5, 2, 7],
    [9, 4, 5, 3, 1, 2, 6, 8, 7, 0],
    [4, 2, 8, 6, 5, 7, 3, 9, 0, 1],
    [2, 7, 9, 3, 8, 0, 6, 4, 1, 5],
    [7, 0, 4, 6, 9, 1, 3, 2, 5, 8],
];

/// Inverse table, used when generating a check digit.
const INV: [u8; 10] = [0, 4, 3, 2, 1, 5, 6, 7, 8, 9];

/// Validate a digit string whose last digit is a Verhoeff check digit.
/// Digits are processed right to left, accumulating
/// `c = D[c][P[i % 8][digit]]`; the string is valid iff the accumulator
/// ends at 0. Total over any input: non-digit content simply fails.
pub fn verhoeff_check(digits: &str) -> bool {
    if digits.is_empty() {
        return false;
    }

    let mut c: u8 = 0;
    for (i, ch) in digits.chars().rev().enumerate() {
        let digit = match ch.to_digit(10) {
            Some(d) => d as usize,
            None => return false,
        };
        c = D[c as usize][P[i % 8][digit] as usize];
    }
    c == 0
}

/// Compute the check digit that would make `payload` pass `verhoeff_check`
/// when appended. Returns `None` on non-digit input.
pub fn verhoeff_digit(payload: &str) -> Option<u8> {
    let mut c: u8 = 0;
    for (i, ch) in payload.chars().rev().enumerate() {
        let digit = ch.to_digit(10)? as usize;
        c = D[c as usize][P[(i + 1) % 8][digit] as usize];
    }
    Some(INV[c as usize])
}
