//! Pages
//!
//! Top-level components, one per view.

pub mod calendar;
pub mod dashboard;
pub mod detail;
pub mod generate;
pub mod knowledge;
pub mod review;

pub use calendar::Calendar;
pub use dashboard::Dashboard;
pub use detail::ContentDetail;
pub use generate::Generate;
pub use knowledge::Knowledge;
pub use review::Review;
