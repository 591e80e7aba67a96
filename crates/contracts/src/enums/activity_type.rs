use serde::{Deserialize, Serialize};

/// Kind of logged customer interaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityType {
    Call,
    Visit,
    Meeting,
    Email,
}

impl ActivityType {
    pub const ALL: [ActivityType; 4] = [
        ActivityType::Call,
        ActivityType::Visit,
        ActivityType::Meeting,
        ActivityType::Email,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            ActivityType::Call => "call",
            ActivityType::Visit => "visit",
            ActivityType::Meeting => "meeting",
            ActivityType::Email => "email",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ActivityType::Call => "Call",
            ActivityType::Visit => "Visit",
            ActivityType::Meeting => "Meeting",
            ActivityType::Email => "Email",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "call" => Some(ActivityType::Call),
            "visit" => Some(ActivityType::Visit),
            "meeting" => Some(ActivityType::Meeting),
            "email" => Some(ActivityType::Email),
            _ => None,
        }
    }
}

impl std::fmt::Display for ActivityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Type filter of the activity feed; `All` is the "all" sentinel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityTypeFilter {
    #[default]
    All,
    Only(ActivityType),
}

impl ActivityTypeFilter {
    pub fn matches(&self, activity_type: ActivityType) -> bool {
        match self {
            ActivityTypeFilter::All => true,
            ActivityTypeFilter::Only(t) => *t == activity_type,
        }
    }

    /// "all" or one of the type codes
    pub fn from_code(code: &str) -> Option<Self> {
        if code == "all" {
            return Some(ActivityTypeFilter::All);
        }
        ActivityType::from_code(code).map(ActivityTypeFilter::Only)
    }
}

impl From<ActivityType> for ActivityTypeFilter {
    fn from(value: ActivityType) -> Self {
        ActivityTypeFilter::Only(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_round_trip() {
        for t in ActivityType::ALL {
            assert_eq!(ActivityType::from_code(t.code()), Some(t));
        }
        assert_eq!(ActivityType::from_code("fax"), None);
    }

    #[test]
    fn test_filter_from_code() {
        assert_eq!(ActivityTypeFilter::from_code("all"), Some(ActivityTypeFilter::All));
        assert_eq!(
            ActivityTypeFilter::from_code("visit"),
            Some(ActivityTypeFilter::Only(ActivityType::Visit))
        );
        assert!(ActivityTypeFilter::All.matches(ActivityType::Email));
        assert!(!ActivityTypeFilter::Only(ActivityType::Call).matches(ActivityType::Email));
    }

    #[test]
    fn test_serde_uses_snake_case() {
        let json = serde_json::to_string(&ActivityType::Meeting).unwrap();
        assert_eq!(json, "\"meeting\"");
    }
}
