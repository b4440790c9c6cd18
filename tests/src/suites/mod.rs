//! Test suite runners

pub mod kat;
