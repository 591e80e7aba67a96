use serde::{Deserialize, Serialize};

/// Categorical result of a logged interaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityOutcome {
    Interested,
    NotInterested,
    Callback,
    MeetingScheduled,
    SaleClosed,
}

impl ActivityOutcome {
    pub const ALL: [ActivityOutcome; 5] = [
        ActivityOutcome::Interested,
        ActivityOutcome::NotInterested,
        ActivityOutcome::Callback,
        ActivityOutcome::MeetingScheduled,
        ActivityOutcome::SaleClosed,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            ActivityOutcome::Interested => "interested",
            ActivityOutcome::NotInterested => "not_interested",
            ActivityOutcome::Callback => "callback",
            ActivityOutcome::MeetingScheduled => "meeting_scheduled",
            ActivityOutcome::SaleClosed => "sale_closed",
        }
    }

    /// Label shown on activity cards and in the log form
    pub fn label(&self) -> &'static str {
        match self {
            ActivityOutcome::Interested => "Interested",
            ActivityOutcome::NotInterested => "Not Interested",
            ActivityOutcome::Callback => "Callback Required",
            ActivityOutcome::MeetingScheduled => "Meeting Scheduled",
            ActivityOutcome::SaleClosed => "Sale Closed",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|o| o.code() == code)
    }
}

impl std::fmt::Display for ActivityOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Outcome filter, `All` keeps every record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutcomeFilter {
    #[default]
    All,
    Only(ActivityOutcome),
}

impl OutcomeFilter {
    pub fn matches(&self, outcome: ActivityOutcome) -> bool {
        match self {
            OutcomeFilter::All => true,
            OutcomeFilter::Only(o) => *o == outcome,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code() {
        assert_eq!(
            ActivityOutcome::from_code("meeting_scheduled"),
            Some(ActivityOutcome::MeetingScheduled)
        );
        assert_eq!(ActivityOutcome::from_code("Sale Closed"), None);
    }

    #[test]
    fn test_serde_matches_code() {
        for outcome in ActivityOutcome::ALL {
            let json = serde_json::to_string(&outcome).unwrap();
            assert_eq!(json, format!("\"{}\"", outcome.code()));
        }
    }
}
