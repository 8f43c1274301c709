//! Dialog logic for the Hostline voice service.
//!
//! Implements the per-turn pipeline that sits between the telephony
//! webhook and the call-control markup: a keyword classifier over an
//! immutable FAQ table, and a composer that turns the classification
//! into an ordered sequence of response segments (speak / dial /
//! gather speech).
//!
//! Everything here is pure and request-scoped. No crate in the
//! workspace depends on anything *except* `hostline-dialog` for the
//! dialog types, which keeps the dependency graph clean: the fallback
//! client produces a [`FallbackOutcome`] and the TwiML adapter consumes
//! [`Segment`] values, both defined here.

pub mod classify;
pub mod compose;
pub mod faq;

pub use classify::{classify, Selection};
pub use compose::{FallbackOutcome, Segment};
pub use faq::{FaqEntry, FaqTable};
