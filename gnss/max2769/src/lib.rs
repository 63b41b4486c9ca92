#![cfg_attr(not(test), no_std)]

#[macro_use]
extern crate num_derive;

mod antenna;
mod config;
mod driver;
mod error;
pub mod regs;
pub mod settings;

pub use self::{
    antenna::{AntennaSelection, InvalidAntennaSelection},
    config::Config,
    driver::{Driver, REGISTER_COUNT},
    error::DriverError,
};
