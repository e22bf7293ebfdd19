// fixtures/mod.rs - Test fixtures module
//
// A fixture is reusable test setup: the SQL that creates a table and
// fills it with known rows. Tests and tools run it instead of repeating
// the setup inline.

pub mod tables;

/// A simple trait that all test tables must implement
pub trait TestTable {
    /// The SQL commands to create and populate this table
    /// Returns a slice of SQL strings that should be executed in order
    fn setup_sql() -> &'static [&'static str];

    /// The SQL commands that remove everything `setup_sql` created
    fn teardown_sql() -> &'static [&'static str];
}
