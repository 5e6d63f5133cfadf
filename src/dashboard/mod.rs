//! Client-side state for the admin dashboard and the public guest-list
//! search, kept free of any UI toolkit so it can be driven from tests.

mod session;
mod widget;

pub use session::{DashboardConfig, DashboardSession};
pub use widget::{BANNER_TTL, Banner, ManagementWidget, Submission, matches_query};
