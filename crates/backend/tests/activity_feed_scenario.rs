use chrono::{TimeZone, Utc};
use contracts::domain::a001_activity::Activity;
use contracts::enums::activity_type::ActivityTypeFilter;
use contracts::enums::ActivityType;
use rand::rngs::StdRng;
use rand::SeedableRng;
use sales_dashboard::domain::a001_activity::generator::generate_activities;
use sales_dashboard::domain::a001_activity::{
    filter_activities_by_type, search_activities, ActivityFeed,
};

fn expected_calls_in_mumbai(activities: &[Activity]) -> Vec<String> {
    let mut ids = Vec::new();
    for a in activities {
        if a.activity_type != ActivityType::Call {
            continue;
        }
        let hit = [&a.customer, &a.rep, &a.notes, &a.location]
            .iter()
            .any(|field| field.to_lowercase().contains("mumbai"));
        if hit {
            ids.push(a.id.as_str().to_string());
        }
    }
    ids
}

#[test]
fn filter_then_search_matches_hand_computed_subset() {
    let now = Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap();
    let activities = generate_activities(&mut StdRng::seed_from_u64(2024), now, 50);
    assert_eq!(activities.len(), 50);
    assert!(activities.windows(2).all(|w| w[0].timestamp >= w[1].timestamp));

    let calls = filter_activities_by_type(&activities, ActivityTypeFilter::Only(ActivityType::Call));
    let found: Vec<String> = search_activities(calls, "Mumbai")
        .into_iter()
        .map(|a| a.id.as_str().to_string())
        .collect();

    assert!(!found.is_empty());
    assert_eq!(found, vec!["activity-26"]);
    assert_eq!(found, expected_calls_in_mumbai(&activities));
}

#[test]
fn feed_view_agrees_with_query_functions() {
    let now = Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap();
    let activities = generate_activities(&mut StdRng::seed_from_u64(2024), now, 50);

    let mut feed = ActivityFeed::new(activities.clone(), 50);
    feed.set_type_filter(ActivityTypeFilter::Only(ActivityType::Call));
    feed.set_search_query("Mumbai");

    let visible: Vec<String> = feed.visible().iter().map(|a| a.id.as_str().to_string()).collect();
    assert_eq!(visible, vec!["activity-26"]);
    assert_eq!(visible, expected_calls_in_mumbai(&activities));
    assert!(!feed.can_load_more());

    feed.set_search_query("");
    feed.set_type_filter(ActivityTypeFilter::All);
    assert_eq!(feed.visible().len(), 50);
    assert_eq!(feed.summary_label(), "Showing 50 activities");
}
