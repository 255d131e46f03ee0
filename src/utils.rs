/// `is_almost(v1, v2, e)` is true iff `v1` is within `e` of `v2`
pub fn is_almost(v1: f32, v2: f32, eps: f32) -> bool {
    fabs(v1 - v2) <= eps
}

/// `fabs(v)` is the absolute value of `v`
pub fn fabs(v: f32) -> f32 {
    if v < 0.0 {
        -v
    } else {
        v
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fabs_of_negative_is_positive() {
        assert_eq!(fabs(-3.5), 3.5);
        assert_eq!(fabs(3.5), 3.5);
    }

    #[test]
    fn is_almost_is_inclusive_of_epsilon() {
        assert!(is_almost(1.0, 1.5, 0.5));
        assert!(!is_almost(1.0, 1.6, 0.5));
    }
}
