/// Logistic activation, maps any real input into (0, 1).
///
/// Saturates to exactly 0.0 or 1.0 once `|x|` is large enough for `exp` to
/// overflow or underflow.
pub fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

/// Derivative of the sigmoid expressed through its own output `y = sigmoid(x)`.
///
/// Backpropagation only ever has the activation at hand, never the
/// pre-activation sum, so this takes `y` rather than `x`.
pub fn sigmoid_derivative(y: f64) -> f64 {
    y * (1.0 - y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sigmoid_is_one_half_at_zero() {
        assert!((sigmoid(0.0) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn sigmoid_stays_inside_open_unit_interval() {
        for x in [-30.0, -5.0, -0.1, 0.0, 0.1, 5.0, 30.0] {
            let y = sigmoid(x);
            assert!(y > 0.0 && y < 1.0, "sigmoid({x}) = {y}");
        }
    }

    #[test]
    fn sigmoid_is_symmetric() {
        for x in [0.3, 1.0, 2.5] {
            assert!((sigmoid(x) + sigmoid(-x) - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn sigmoid_matches_known_values() {
        assert!((sigmoid(1.0) - 0.731_058_578_630_004_9).abs() < 1e-15);
        assert!((sigmoid(-2.0) - 0.119_202_922_022_117_57).abs() < 1e-15);
        assert_eq!(sigmoid(-1.0e4), 0.0);
        assert_eq!(sigmoid(1.0e4), 1.0);
    }

    #[test]
    fn derivative_peaks_at_one_half() {
        assert!((sigmoid_derivative(0.5) - 0.25).abs() < 1e-12);
        assert!(sigmoid_derivative(0.9) < 0.25);
        assert_eq!(sigmoid_derivative(1.0), 0.0);
    }
}
