//! Bundled demo timetable.

use schedboard_core::session::Fixture;

/// One school week of class sessions, compiled into the crate.
const DEFAULT_SESSIONS: &str = include_str!("../data/default.json");

/// Parses the bundled timetable.
///
/// The asset is compiled in, so a parse failure is a packaging bug and
/// panics instead of returning an error.
pub(crate) fn default_fixture() -> Fixture {
    Fixture::from_json(DEFAULT_SESSIONS).expect("bundled timetable must parse")
}
