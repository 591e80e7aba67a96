//! Feed queries: pure functions over borrowed activities.
//!
//! Every function keeps the input order and returns references, so the
//! filters compose: `search_activities(filter_activities_by_type(..), ..)`.

use contracts::domain::a001_activity::Activity;
use contracts::enums::activity_outcome::OutcomeFilter;
use contracts::enums::activity_type::ActivityTypeFilter;
use contracts::shared::search::search_list;

/// Records of the requested type; `All` returns every record.
pub fn filter_activities_by_type<'a, I>(activities: I, filter: ActivityTypeFilter) -> Vec<&'a Activity>
where
    I: IntoIterator<Item = &'a Activity>,
{
    activities
        .into_iter()
        .filter(|a| filter.matches(a.activity_type))
        .collect()
}

pub fn filter_activities_by_outcome<'a, I>(activities: I, filter: OutcomeFilter) -> Vec<&'a Activity>
where
    I: IntoIterator<Item = &'a Activity>,
{
    activities
        .into_iter()
        .filter(|a| filter.matches(a.outcome))
        .collect()
}

/// Case-insensitive substring search over customer, rep, notes and location.
/// The empty query is not special-cased: it matches every record.
pub fn search_activities<'a, I>(activities: I, query: &str) -> Vec<&'a Activity>
where
    I: IntoIterator<Item = &'a Activity>,
{
    search_list(activities, query)
}

/// One page of `per_page` records; pages past the end are empty.
pub fn get_activities_paginated(activities: &[Activity], page: usize, per_page: usize) -> &[Activity] {
    let start = page.saturating_mul(per_page).min(activities.len());
    let end = start.saturating_add(per_page).min(activities.len());
    &activities[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_activity::generator::generate_activities;
    use chrono::{TimeZone, Utc};
    use contracts::enums::{ActivityOutcome, ActivityType};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn sample(seed: u64) -> Vec<Activity> {
        let now = Utc.with_ymd_and_hms(2024, 3, 15, 18, 0, 0).unwrap();
        generate_activities(&mut StdRng::seed_from_u64(seed), now, 60)
    }

    fn ids(list: &[&Activity]) -> Vec<String> {
        list.iter().map(|a| a.id.to_string()).collect()
    }

    #[test]
    fn test_type_filter_keeps_only_type_in_order() {
        for seed in 0..5 {
            let all = sample(seed);
            for t in ActivityType::ALL {
                let filtered = filter_activities_by_type(&all, ActivityTypeFilter::Only(t));
                assert!(filtered.iter().all(|a| a.activity_type == t));

                let expected: Vec<&Activity> = all.iter().filter(|a| a.activity_type == t).collect();
                assert_eq!(ids(&filtered), ids(&expected));

                let twice = filter_activities_by_type(filtered.iter().copied(), ActivityTypeFilter::Only(t));
                assert_eq!(ids(&twice), ids(&filtered));
            }
        }
    }

    #[test]
    fn test_type_filter_all_is_identity() {
        let all = sample(11);
        let filtered = filter_activities_by_type(&all, ActivityTypeFilter::All);
        assert_eq!(filtered.len(), all.len());
        assert!(filtered.iter().zip(&all).all(|(a, b)| std::ptr::eq(*a, b)));
    }

    #[test]
    fn test_search_is_sound_and_complete() {
        let all = sample(5);
        for query in ["mumbai", "SHARMA", "quotation", "ltd", "Pune", "zzz", ""] {
            let found = search_activities(&all, query);
            let q = query.to_lowercase();
            let hit = |a: &Activity| {
                a.customer.to_lowercase().contains(&q)
                    || a.rep.to_lowercase().contains(&q)
                    || a.notes.to_lowercase().contains(&q)
                    || a.location.to_lowercase().contains(&q)
            };
            assert!(found.iter().all(|a| hit(*a)), "unsound for {query}");
            let expected: Vec<&Activity> = all.iter().filter(|a| hit(*a)).collect();
            assert_eq!(ids(&found), ids(&expected), "incomplete for {query}");
        }
        assert_eq!(search_activities(&all, "").len(), all.len());
    }

    #[test]
    fn test_outcome_filter() {
        let all = sample(9);
        let closed = filter_activities_by_outcome(&all, OutcomeFilter::Only(ActivityOutcome::SaleClosed));
        assert!(closed.iter().all(|a| a.outcome == ActivityOutcome::SaleClosed));
        assert_eq!(filter_activities_by_outcome(&all, OutcomeFilter::All).len(), all.len());
    }

    #[test]
    fn test_pagination() {
        let all = sample(2);
        assert_eq!(get_activities_paginated(&all, 0, 10), &all[0..10]);
        assert_eq!(get_activities_paginated(&all, 5, 10), &all[50..60]);
        assert!(get_activities_paginated(&all, 6, 10).is_empty());
        assert!(get_activities_paginated(&all, usize::MAX, 10).is_empty());
        assert_eq!(get_activities_paginated(&all, 1, 25).len(), 25);
        assert_eq!(get_activities_paginated(&all, 2, 25).len(), 10);
    }
}
