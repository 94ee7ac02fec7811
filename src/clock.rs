use chrono::{Local, NaiveDate};

/// Source of "today" for the availability scan.
///
/// The scan window always starts at the current calendar day. Behind this
/// trait the window start can be fixed in tests while production code
/// follows the wall clock.
pub trait Clock: std::fmt::Debug + Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Wall-clock implementation used by the application.
#[derive(Debug, Clone, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock pinned to one date, for deterministic scans in tests.
#[derive(Debug, Clone)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
