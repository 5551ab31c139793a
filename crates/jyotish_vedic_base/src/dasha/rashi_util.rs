//! Rashi parity and counting utilities for sign-based dashas.

/// Odd-footed sign (1-indexed odd: Mesha, Mithuna, Simha, Tula, Dhanu, Kumbha).
pub fn is_odd_sign(rashi_index: u8) -> bool {
    rashi_index % 2 == 0
}

/// Count signs forward from `from` to `to`, inclusive of both.
/// Result is 1-12: same sign = 1.
pub fn count_signs_forward(from: u8, to: u8) -> u8 {
    let f = from % 12;
    let t = to % 12;
    if t >= f { t - f + 1 } else { 12 - f + t + 1 }
}

/// Count signs in reverse from `from` to `to`, inclusive of both.
/// Result is 1-12: same sign = 1.
pub fn count_signs_reverse(from: u8, to: u8) -> u8 {
    let f = from % 12;
    let t = to % 12;
    if f >= t { f - t + 1 } else { 12 - t + f + 1 }
}

/// The 12 rashis starting at `start`, stepping forward or in reverse.
pub fn rashi_sequence(start: u8, forward: bool) -> [u8; 12] {
    let start = start % 12;
    std::array::from_fn(|i| {
        let i = i as u8;
        if forward {
            (start + i) % 12
        } else {
            (start + 12 - i) % 12
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn odd_signs() {
        assert!(is_odd_sign(0)); // Mesha
        assert!(!is_odd_sign(1)); // Vrishabha
        assert!(is_odd_sign(10)); // Kumbha
        assert!(!is_odd_sign(11)); // Meena
    }

    #[test]
    fn count_forward() {
        assert_eq!(count_signs_forward(0, 0), 1);
        assert_eq!(count_signs_forward(0, 1), 2);
        assert_eq!(count_signs_forward(11, 0), 2);
    }

    #[test]
    fn count_reverse() {
        assert_eq!(count_signs_reverse(0, 0), 1);
        assert_eq!(count_signs_reverse(0, 11), 2);
        assert_eq!(count_signs_reverse(5, 1), 5);
    }

    #[test]
    fn sequences() {
        assert_eq!(rashi_sequence(10, true)[..3], [10, 11, 0]);
        assert_eq!(rashi_sequence(1, false)[..3], [1, 0, 11]);
    }
}
