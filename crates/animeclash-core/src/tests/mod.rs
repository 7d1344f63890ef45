//! Scenario and property tests for the battle core.
//!
//! - `scenario.rs`: Full battles with hand-checked round-by-round numbers
//! - `properties.rs`: proptest checks of the damage, attack and validator rules
//! - `helpers.rs`: Fighter factories shared by the tests

mod helpers;
