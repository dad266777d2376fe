//! Application layer orchestrating the checkout workflow.
//!
//! This module ties the domain entities together: pricing an order and
//! running the authorize/verify/settle payment flow.

pub mod payment;
pub mod pricing;
