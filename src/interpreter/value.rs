/// Runtime value representation.
///
/// Defines the `Value` enum with its four dynamic kinds (integer, real,
/// string and boolean), their textual form, truthiness and the numeric
/// promotion rules shared by all arithmetic operators.
pub mod core;
