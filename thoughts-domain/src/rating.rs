//! Vote tallies rendered as a single "x% up/down" summary.

/// Which side of the vote dominates a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dominant {
    Up,
    Down,
    None,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatingSummary {
    pub percentage: f64,
    pub dominant: Dominant,
}

impl RatingSummary {
    /// One-decimal label for the dominant share, e.g. `83.3%`.
    pub fn percent_label(&self) -> String {
        format!("{:.1}%", self.percentage)
    }
}

/// Share of the dominant side over all votes. Zero votes has no dominant
/// side; an exact tie reports the down side at 50%.
pub fn rating_summary(thumbs_up: u32, thumbs_down: u32) -> RatingSummary {
    let total = thumbs_up + thumbs_down;
    if total == 0 {
        return RatingSummary {
            percentage: 0.0,
            dominant: Dominant::None,
        };
    }

    let max_votes = thumbs_up.max(thumbs_down);
    let percentage = f64::from(max_votes) / f64::from(total) * 100.0;
    let dominant = if thumbs_up > thumbs_down {
        Dominant::Up
    } else {
        Dominant::Down
    };

    RatingSummary {
        percentage,
        dominant,
    }
}
