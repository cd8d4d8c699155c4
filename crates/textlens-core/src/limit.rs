//! History `limit` parameter parsing.
//!
//! Only a non-empty run of ASCII digits naming a positive integer is honored;
//! everything else falls back to the default. Honored values are capped.

/// Default number of records returned by history.
pub const DEFAULT_HISTORY_LIMIT: usize = 10;
/// Upper bound on records returned by history.
pub const MAX_HISTORY_LIMIT: usize = 50;

/// A validated, capped history page size (always >= 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryLimit(usize);

impl HistoryLimit {
    /// Parse a raw query value with the stock default (10) and cap (50).
    pub fn from_param(raw: Option<&str>) -> Self {
        Self::parse(raw, DEFAULT_HISTORY_LIMIT, MAX_HISTORY_LIMIT)
    }

    /// Parse a raw query value. `default` is clamped into `1..=max`.
    pub fn parse(raw: Option<&str>, default: usize, max: usize) -> Self {
        let max = max.max(1);
        let default = default.clamp(1, max);

        let Some(raw) = raw else {
            return Self(default);
        };
        if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return Self(default);
        }

        // all digits: the only parse failure left is overflow
        let n = raw.parse::<usize>().unwrap_or(usize::MAX);
        if n == 0 {
            return Self(default);
        }
        Self(n.min(max))
    }

    pub fn get(self) -> usize {
        self.0
    }
}

impl Default for HistoryLimit {
    fn default() -> Self {
        Self(DEFAULT_HISTORY_LIMIT)
    }
}
