pub mod feed;
pub mod form;
pub mod generator;
pub mod live;
pub mod query;
pub mod seed;

pub use feed::ActivityFeed;
pub use live::{LiveFeed, LiveFeedSettings};
pub use query::{
    filter_activities_by_outcome, filter_activities_by_type, get_activities_paginated,
    search_activities,
};
