//! LifeConnect: organ donation awareness pages, donor registration, and the outreach data layer.

pub mod config;
pub mod error;
pub mod outreach;
pub mod registration;
pub mod site;
pub mod support;
pub mod telemetry;
