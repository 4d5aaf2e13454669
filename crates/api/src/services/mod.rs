// Services layer
//
// Business logic between HTTP handlers and the activity store.

pub mod activity;

pub use activity::ActivityService;
