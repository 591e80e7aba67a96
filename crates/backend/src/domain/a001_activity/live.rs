//! Live-update simulation of the activity feed.
//!
//! A periodic task generates an activity, prepends it to the shared feed and
//! marks it new; a one-shot task clears the marker after the highlight
//! duration. Both tasks are aborted by [`LiveFeed::stop`] or on drop.

use chrono::Utc;
use rand::rngs::StdRng;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::{debug, error, info};

use super::feed::ActivityFeed;
use super::generator::generate_random_activity;
use crate::shared::config::LiveFeedConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LiveFeedSettings {
    pub interval: Duration,
    pub highlight: Duration,
}

impl Default for LiveFeedSettings {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(15),
            highlight: Duration::from_secs(3),
        }
    }
}

impl From<&LiveFeedConfig> for LiveFeedSettings {
    fn from(config: &LiveFeedConfig) -> Self {
        Self {
            interval: config.interval(),
            highlight: config.highlight(),
        }
    }
}

/// Aborts the wrapped task when dropped.
struct AbortOnDrop(JoinHandle<()>);

impl Drop for AbortOnDrop {
    fn drop(&mut self) {
        self.0.abort();
    }
}

/// Handle of a running simulation. Dropping it stops the simulation.
pub struct LiveFeed {
    task: Option<AbortOnDrop>,
}

impl LiveFeed {
    /// Starts the simulation. The first record arrives one interval after start.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start(feed: Arc<Mutex<ActivityFeed>>, settings: LiveFeedSettings, rng: StdRng) -> Self {
        info!(
            "Live feed started: interval {:?}, highlight {:?}",
            settings.interval, settings.highlight
        );
        let handle = tokio::spawn(run_loop(feed, settings, rng));
        Self {
            task: Some(AbortOnDrop(handle)),
        }
    }

    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|t| !t.0.is_finished())
    }

    /// Stops the periodic task and any pending highlight timer. Safe to call repeatedly.
    ///
    /// A marker set less than one highlight period before the stop stays set;
    /// the caller clears it with [`ActivityFeed::clear_new_marker`] if needed.
    pub fn stop(&mut self) {
        if self.task.take().is_some() {
            info!("Live feed stopped");
        }
    }
}

async fn run_loop(feed: Arc<Mutex<ActivityFeed>>, settings: LiveFeedSettings, mut rng: StdRng) {
    let mut interval = time::interval_at(Instant::now() + settings.interval, settings.interval);
    interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

    // Dropped together with this future, which aborts a pending highlight.
    let mut highlight: Option<AbortOnDrop> = None;

    loop {
        interval.tick().await;

        let activity = generate_random_activity(&mut rng, Utc::now());
        let id = activity.id.clone();
        debug!("Live activity {} for {}", id, activity.customer);

        match feed.lock() {
            Ok(mut feed) => feed.push_live(activity),
            Err(e) => {
                error!("Activity feed lock poisoned, stopping live feed: {}", e);
                return;
            }
        }

        let feed = Arc::clone(&feed);
        let delay = settings.highlight;
        highlight.replace(AbortOnDrop(tokio::spawn(async move {
            time::sleep(delay).await;
            if let Ok(mut feed) = feed.lock() {
                feed.clear_new_marker(&id);
            }
        })));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_activity::generator::generate_activities;
    use rand::SeedableRng;

    fn shared_feed() -> Arc<Mutex<ActivityFeed>> {
        let source = generate_activities(&mut StdRng::seed_from_u64(4), Utc::now(), 20);
        Arc::new(Mutex::new(ActivityFeed::new(source, 10)))
    }

    fn len(feed: &Arc<Mutex<ActivityFeed>>) -> usize {
        feed.lock().unwrap().activities().len()
    }

    fn has_marker(feed: &Arc<Mutex<ActivityFeed>>) -> bool {
        feed.lock().unwrap().new_activity_id().is_some()
    }

    #[tokio::test(start_paused = true)]
    async fn test_pushes_on_interval_and_clears_marker() {
        let feed = shared_feed();
        let mut live = LiveFeed::start(Arc::clone(&feed), LiveFeedSettings::default(), StdRng::seed_from_u64(8));
        assert!(live.is_running());

        time::sleep(Duration::from_secs(14)).await;
        assert_eq!(len(&feed), 10);

        time::sleep(Duration::from_secs(2)).await;
        assert_eq!(len(&feed), 11);
        assert!(has_marker(&feed));

        time::sleep(Duration::from_secs(3)).await;
        assert!(!has_marker(&feed));

        time::sleep(Duration::from_secs(15)).await;
        assert_eq!(len(&feed), 12);

        live.stop();
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_is_idempotent_and_cancels_highlight() {
        let feed = shared_feed();
        let mut live = LiveFeed::start(Arc::clone(&feed), LiveFeedSettings::default(), StdRng::seed_from_u64(8));

        time::sleep(Duration::from_secs(16)).await;
        assert_eq!(len(&feed), 11);
        assert!(has_marker(&feed));

        live.stop();
        live.stop();
        assert!(!live.is_running());

        time::sleep(Duration::from_secs(60)).await;
        assert_eq!(len(&feed), 11);
        // the pending highlight timer died with the loop
        assert!(has_marker(&feed));

        let mut guard = feed.lock().unwrap();
        let id = guard.new_activity_id().cloned().unwrap();
        assert!(guard.clear_new_marker(&id));
        assert_eq!(guard.new_activity_id(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_stops_simulation() {
        let feed = shared_feed();
        {
            let _live = LiveFeed::start(Arc::clone(&feed), LiveFeedSettings::default(), StdRng::seed_from_u64(8));
            time::sleep(Duration::from_secs(31)).await;
        }
        let before = len(&feed);
        assert_eq!(before, 12);
        time::sleep(Duration::from_secs(120)).await;
        assert_eq!(len(&feed), before);
    }
}
