pub mod activity;
pub mod dispatch;
pub mod investors;
pub mod issues;
pub mod model;
pub mod overview;
pub mod pipeline;
pub mod projects;
pub mod raw;
pub mod schema;
pub mod shared;
