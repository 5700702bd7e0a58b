// Math utilities and helper functions

/// Count a timer down by `amount`, never going below zero
pub fn countdown(value: f32, amount: f32) -> f32 {
    (value - amount).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_countdown() {
        assert_eq!(countdown(1.0, 0.25), 0.75);
        assert_eq!(countdown(0.1, 0.5), 0.0);
        assert_eq!(countdown(0.0, 0.5), 0.0);
    }
}
