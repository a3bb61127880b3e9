use serde::Serialize;

/// Class-conditional likelihood of a query, tagged by the scale it was computed in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "scale", content = "value", rename_all = "kebab-case")]
pub enum Likelihood {
    Direct(f64),
    Log(f64),
}

impl Likelihood {
    /// Likelihood on the probability scale. May underflow to 0 for `Log`.
    #[inline]
    pub fn value(&self) -> f64 {
        match *self {
            Likelihood::Direct(p) => p,
            Likelihood::Log(l) => l.exp(),
        }
    }

    #[inline]
    pub fn ln(&self) -> f64 {
        match *self {
            Likelihood::Direct(p) => p.ln(),
            Likelihood::Log(l) => l,
        }
    }

    #[inline]
    pub fn is_log(&self) -> bool {
        matches!(self, Likelihood::Log(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_between_scales() {
        let d = Likelihood::Direct(0.25);
        assert!((d.ln() - 0.25f64.ln()).abs() < 1e-12);
        assert!(!d.is_log());

        let l = Likelihood::Log(-2.0);
        assert!((l.value() - (-2.0f64).exp()).abs() < 1e-12);
        assert_eq!(l.ln(), -2.0);
        assert!(l.is_log());
    }

    #[test]
    fn zero_direct_likelihood_is_negative_infinity_in_log_space() {
        assert_eq!(Likelihood::Direct(0.0).ln(), f64::NEG_INFINITY);
    }

    #[test]
    fn serializes_with_scale_tag() {
        let json = serde_json::to_string(&Likelihood::Log(-1.5)).unwrap();
        assert_eq!(json, r#"{"scale":"log","value":-1.5}"#);
    }
}
