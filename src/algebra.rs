//! Algebra expression evaluator - flat sums of "count unit" terms.
//!
//! The input language is deliberately tiny: segments joined by `+`, each
//! containing a count and a tier name. Anything else in a segment is noise
//! and the segment contributes zero; there is no error surface at all.

use regex::Regex;
use tracing::{trace, warn};

use crate::constants::{BASE_POPULATION, MARKER_DISPLAY_CAP};
use crate::hierarchy::UnitScheme;

/// Evaluated expression: total in base-unit multiples and in people.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct EvalResult {
    pub sum_x: i64,
    pub people: i64,
}

/// What the marker row renders: up to [`MARKER_DISPLAY_CAP`] boxes plus an
/// overflow hint. The numeric result is never truncated.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MarkerRow {
    pub shown: usize,
    pub overflow: bool,
}

pub fn marker_row(sum_x: i64) -> MarkerRow {
    MarkerRow {
        shown: sum_x.clamp(0, MARKER_DISPLAY_CAP) as usize,
        overflow: sum_x > MARKER_DISPLAY_CAP,
    }
}

/// Term matcher for one scheme. Built once per session, not per keystroke.
pub struct Evaluator {
    scheme: &'static UnitScheme,
    term_re: Option<Regex>,
}

impl Evaluator {
    pub fn new(scheme: &'static UnitScheme) -> Self {
        // Longest name first so no tier name can shadow a longer one it
        // happens to prefix.
        let mut names: Vec<String> = scheme.tiers.iter().map(|name| regex::escape(name)).collect();
        names.sort_by_key(|name| std::cmp::Reverse(name.len()));
        let pattern = format!(r"(\d+)\s*({})", names.join("|"));
        let term_re = match Regex::new(&pattern) {
            Ok(re) => Some(re),
            Err(err) => {
                warn!("term pattern for scheme '{}' failed to compile: {err}", scheme.label);
                None
            }
        };
        Self { scheme, term_re }
    }

    /// Splits on `+`, matches each segment anywhere (not anchored), and sums
    /// the recognized terms. Malformed segments are dropped silently.
    pub fn evaluate(&self, expr: &str) -> EvalResult {
        let Some(term_re) = &self.term_re else {
            return EvalResult::default();
        };

        let mut sum_x: i64 = 0;
        for segment in expr.split('+') {
            let segment = segment.trim();
            if segment.is_empty() {
                continue;
            }
            let Some(caps) = term_re.captures(segment) else {
                trace!(segment, "segment has no unit term, ignored");
                continue;
            };
            let Ok(count) = caps[1].parse::<i64>() else {
                trace!(segment, "count does not fit an i64, segment ignored");
                continue;
            };
            let Some(tier) = self.scheme.tiers.iter().position(|t| *t == &caps[2]) else {
                continue;
            };
            let scale = self.scheme.scale_at(tier).unwrap_or(0);
            sum_x = sum_x.saturating_add(count.saturating_mul(scale));
        }

        EvalResult { sum_x, people: sum_x.saturating_mul(BASE_POPULATION) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hierarchy::{FIELD, PLA};
    use rstest::rstest;

    fn eval(expr: &str) -> EvalResult {
        Evaluator::new(&PLA).evaluate(expr)
    }

    #[test]
    fn sums_recognized_terms() {
        // 2*9 + 1*3 in base-unit multiples.
        assert_eq!(eval("2 团 + 1 连"), EvalResult { sum_x: 21, people: 210 });
    }

    #[test]
    fn malformed_segment_contributes_zero() {
        assert_eq!(eval("abc + 3 连"), EvalResult { sum_x: 9, people: 90 });
    }

    #[rstest]
    #[case("", 0)]
    #[case("   ", 0)]
    #[case("+ + +", 0)]
    #[case("连", 0)] // count missing
    #[case("2团+1连", 21)] // whitespace between count and unit is optional
    #[case("xx 5 团 yy", 45)] // term found anywhere inside the segment
    #[case("1 军", 243)]
    #[case("4 排", 4)]
    fn permissive_parsing(#[case] expr: &str, #[case] sum_x: i64) {
        assert_eq!(eval(expr).sum_x, sum_x);
    }

    #[test]
    fn oversized_count_is_dropped_not_an_error() {
        assert_eq!(eval("99999999999999999999999999 排 + 2 排").sum_x, 2);
    }

    #[test]
    fn accumulation_saturates() {
        let result = eval("9223372036854775807 排 + 9223372036854775807 排");
        assert_eq!(result.sum_x, i64::MAX);
        assert_eq!(result.people, i64::MAX);
    }

    #[test]
    fn english_scheme_terms() {
        let evaluator = Evaluator::new(&FIELD);
        assert_eq!(
            evaluator.evaluate("2 battalion + 1 company"),
            EvalResult { sum_x: 21, people: 210 }
        );
        assert_eq!(evaluator.evaluate("1 army").sum_x, 729);
    }

    #[rstest]
    #[case(75, 50, true)]
    #[case(10, 10, false)]
    #[case(50, 50, false)]
    #[case(51, 50, true)]
    #[case(0, 0, false)]
    fn marker_row_caps_at_fifty(#[case] sum_x: i64, #[case] shown: usize, #[case] overflow: bool) {
        assert_eq!(marker_row(sum_x), MarkerRow { shown, overflow });
    }
}
