//! Terminal gift idea generator.
//!
//! A form collects recipient details, [`service::GiftService`] turns them
//! into a suggestion, and [`ui`] drives the Form → Loading → Result cycle.

pub mod cli;
pub mod config;
pub mod form;
pub mod logging;
pub mod service;
pub mod ui;
