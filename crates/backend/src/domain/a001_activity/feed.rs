use contracts::domain::a001_activity::{Activity, ActivityId};
use contracts::enums::activity_type::ActivityTypeFilter;

use super::query::{filter_activities_by_type, search_activities};

/// State of the activity feed view, owned by whoever composes the page.
///
/// `source` is the session feed the list pages through; `activities` is what
/// is currently loaded, including live and hand-logged records on top.
#[derive(Debug, Clone)]
pub struct ActivityFeed {
    source: Vec<Activity>,
    activities: Vec<Activity>,
    type_filter: ActivityTypeFilter,
    search_query: String,
    displayed_count: usize,
    page_size: usize,
    new_activity_id: Option<ActivityId>,
}

impl ActivityFeed {
    /// Feed showing the first page of `source`
    pub fn new(source: Vec<Activity>, page_size: usize) -> Self {
        let page_size = page_size.max(1);
        let activities = source.iter().take(page_size).cloned().collect();
        Self {
            source,
            activities,
            type_filter: ActivityTypeFilter::All,
            search_query: String::new(),
            displayed_count: page_size,
            page_size,
            new_activity_id: None,
        }
    }

    /// Feed over a caller-provided list instead of the first page of `source`
    pub fn with_activities(source: Vec<Activity>, activities: Vec<Activity>, page_size: usize) -> Self {
        let mut feed = Self::new(source, page_size);
        feed.activities = activities;
        feed
    }

    pub fn activities(&self) -> &[Activity] {
        &self.activities
    }

    pub fn type_filter(&self) -> ActivityTypeFilter {
        self.type_filter
    }

    pub fn set_type_filter(&mut self, filter: ActivityTypeFilter) {
        self.type_filter = filter;
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    /// Loaded records passing the type filter and, when a query is typed, the search.
    pub fn visible(&self) -> Vec<&Activity> {
        let mut visible: Vec<&Activity> = self.activities.iter().collect();
        if self.type_filter != ActivityTypeFilter::All {
            visible = filter_activities_by_type(visible, self.type_filter);
        }
        if !self.search_query.is_empty() {
            visible = search_activities(visible, &self.search_query);
        }
        visible
    }

    /// Prepends a live record and marks it as new.
    pub fn push_live(&mut self, activity: Activity) {
        self.new_activity_id = Some(activity.id.clone());
        self.activities.insert(0, activity);
    }

    /// Prepends a record saved from the log-activity form.
    pub fn log_activity(&mut self, activity: Activity) {
        self.activities.insert(0, activity);
    }

    pub fn new_activity_id(&self) -> Option<&ActivityId> {
        self.new_activity_id.as_ref()
    }

    pub fn is_new(&self, id: &ActivityId) -> bool {
        self.new_activity_id.as_ref() == Some(id)
    }

    /// Clears the marker if it still points at `id`; a newer record keeps its marker.
    pub fn clear_new_marker(&mut self, id: &ActivityId) -> bool {
        if self.is_new(id) {
            self.new_activity_id = None;
            true
        } else {
            false
        }
    }

    /// Reloads the loaded pages from the session feed, dropping live records.
    pub fn refresh(&mut self) {
        let end = self.displayed_count.min(self.source.len());
        self.activities = self.source[..end].to_vec();
    }

    pub fn load_more(&mut self) {
        self.displayed_count += self.page_size;
        self.refresh();
    }

    pub fn displayed_count(&self) -> usize {
        self.displayed_count
    }

    /// Paging is offered only for the unfiltered view with unseen records left.
    pub fn can_load_more(&self) -> bool {
        self.search_query.is_empty()
            && self.type_filter == ActivityTypeFilter::All
            && !self.visible().is_empty()
            && self.displayed_count < self.source.len()
    }

    /// "Showing 1 activity" / "Showing 12 activities"
    pub fn summary_label(&self) -> String {
        match self.visible().len() {
            1 => "Showing 1 activity".to_string(),
            n => format!("Showing {} activities", n),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_activity::generator::{generate_activities, generate_random_activity};
    use chrono::{DateTime, TimeZone, Utc};
    use contracts::enums::ActivityType;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 15, 18, 0, 0).unwrap()
    }

    fn feed() -> ActivityFeed {
        let source = generate_activities(&mut StdRng::seed_from_u64(21), now(), 25);
        ActivityFeed::new(source, 10)
    }

    #[test]
    fn test_initial_page() {
        let feed = feed();
        assert_eq!(feed.activities().len(), 10);
        assert_eq!(feed.visible().len(), 10);
        assert!(feed.can_load_more());
        assert_eq!(feed.summary_label(), "Showing 10 activities");
    }

    #[test]
    fn test_load_more_until_exhausted() {
        let mut feed = feed();
        feed.load_more();
        assert_eq!(feed.activities().len(), 20);
        assert!(feed.can_load_more());
        feed.load_more();
        assert_eq!(feed.activities().len(), 25);
        assert!(!feed.can_load_more());
    }

    #[test]
    fn test_filter_and_search_are_combined() {
        let mut feed = feed();
        feed.set_type_filter(ActivityTypeFilter::Only(ActivityType::Call));
        feed.set_search_query("a");
        let matched = feed.visible().len();
        assert!(feed.visible().iter().all(|a| a.activity_type == ActivityType::Call));
        assert!(!feed.can_load_more());

        feed.set_search_query("");
        let calls = feed.visible().len();
        assert!(calls >= matched);
    }

    #[test]
    fn test_no_match_label() {
        let mut feed = feed();
        feed.set_search_query("no such customer");
        assert!(feed.visible().is_empty());
        assert_eq!(feed.summary_label(), "Showing 0 activities");
    }

    #[test]
    fn test_live_marker_lifecycle() {
        let mut feed = feed();
        let mut rng = StdRng::seed_from_u64(99);
        let first = generate_random_activity(&mut rng, now());
        let second = generate_random_activity(&mut rng, now());

        feed.push_live(first.clone());
        assert_eq!(feed.activities()[0].id, first.id);
        assert!(feed.is_new(&first.id));

        feed.push_live(second.clone());
        assert!(!feed.clear_new_marker(&first.id));
        assert!(feed.is_new(&second.id));
        assert!(feed.clear_new_marker(&second.id));
        assert_eq!(feed.new_activity_id(), None);
        assert_eq!(feed.activities().len(), 12);
    }

    #[test]
    fn test_refresh_drops_live_records() {
        let mut feed = feed();
        let live = generate_random_activity(&mut StdRng::seed_from_u64(1), now());
        feed.push_live(live);
        assert_eq!(feed.activities().len(), 11);
        feed.refresh();
        assert_eq!(feed.activities().len(), 10);
    }
}
