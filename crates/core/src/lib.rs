//! `tourdesk-core`: domain records and view-state derivation for the
//! tour-operator back office.
//!
//! The crate has no I/O of its own. Record stores (inbox messages,
//! quotations) are owned by the caller and passed in by reference; every
//! derivation in [`view`] is a pure function of its inputs.

pub mod demo;
pub mod error;
pub mod inbox;
pub mod priority;
pub mod quotation;
pub mod types;
pub mod view;
