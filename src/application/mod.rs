//! Application layer containing the core scheduling orchestration.
//!
//! This module defines the `BillingEngine` which acts as the primary entry point
//! for admitting, processing, and reversing bill payment requests. It owns the
//! pending pools and the transaction history and talks to the reporting sink
//! through its outbound port.

pub mod engine;
