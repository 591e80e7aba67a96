use contracts::enums::ActivityType;

pub const CUSTOMERS: &[&str] = &[
    "ABC Corporation Ltd",
    "XYZ Industries Pvt Ltd",
    "PQR Traders",
    "LMN Enterprises",
    "Supreme Textiles",
    "Metro Manufacturing Co",
    "Global Tech Solutions",
    "Sunshine Retailers",
    "Royal Distributors",
    "Modern Supplies Ltd",
    "Elite Trading Co",
    "Premier Goods Ltd",
    "Mega Mart Pvt Ltd",
    "City Wholesalers",
    "Star Industries",
    "Apex Solutions",
    "Prime Ventures",
    "Unity Corporation",
    "Cosmos Traders",
    "Bright Future Ltd",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    pub city: &'static str,
    pub area: &'static str,
}

impl Location {
    /// "Andheri, Mumbai"
    pub fn label(&self) -> String {
        format!("{}, {}", self.area, self.city)
    }
}

pub const LOCATIONS: &[Location] = &[
    Location { city: "Mumbai", area: "Andheri" },
    Location { city: "Mumbai", area: "Bandra" },
    Location { city: "Delhi", area: "Connaught Place" },
    Location { city: "Delhi", area: "Saket" },
    Location { city: "Bangalore", area: "Koramangala" },
    Location { city: "Bangalore", area: "Whitefield" },
    Location { city: "Pune", area: "Hinjewadi" },
    Location { city: "Pune", area: "Kothrud" },
    Location { city: "Hyderabad", area: "Hitech City" },
    Location { city: "Hyderabad", area: "Gachibowli" },
];

const CALL_NOTES: &[&str] = &[
    "Discussed new product requirements and pricing",
    "Follow-up on pending quotation for Q1 order",
    "Pricing negotiation for bulk purchase",
    "Customer inquiry about payment terms",
    "Product demo feedback and next steps",
    "Resolved technical queries about specifications",
    "Annual contract renewal discussion",
    "Cross-selling opportunity for product line extension",
];

const VISIT_NOTES: &[&str] = &[
    "On-site product demonstration completed",
    "Facility tour and requirement analysis",
    "Met with decision maker to finalize terms",
    "Delivered product samples for evaluation",
    "Conducted quarterly business review",
    "Site inspection for installation planning",
    "Customer appreciation visit with small gift",
    "Competitor analysis and market feedback",
];

const MEETING_NOTES: &[&str] = &[
    "Scheduled product demo for next week",
    "Contract negotiation meeting planned",
    "Quarterly review meeting arranged",
    "Technical discussion with engineering team",
    "Budget approval meeting scheduled",
    "Presentation for new product line",
    "Follow-up meeting to close pending deal",
    "Introduction meeting with new procurement head",
];

const EMAIL_NOTES: &[&str] = &[
    "Sent detailed quotation with payment terms",
    "Shared product catalog and price list",
    "Forwarded case study and client references",
    "Sent contract draft for review",
    "Shared installation timeline and SOW",
    "Sent monthly newsletter with new offers",
    "Forwarded technical specifications",
    "Sent payment reminder with invoice copy",
];

/// Note templates for one activity type
pub fn notes_templates(activity_type: ActivityType) -> &'static [&'static str] {
    match activity_type {
        ActivityType::Call => CALL_NOTES,
        ActivityType::Visit => VISIT_NOTES,
        ActivityType::Meeting => MEETING_NOTES,
        ActivityType::Email => EMAIL_NOTES,
    }
}
