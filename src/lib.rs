//! Integration test harness for the SalesDash workspace.
//!
//! The tests under `tests/` exercise `salesdash-core` against the golden
//! data in `tests/testdata/`.
