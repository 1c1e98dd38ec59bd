//! Horoscope API integration.
//!
//! A single-endpoint client for the daily horoscope service used by the
//! `!horoscope` command.

pub mod requester;

pub use crate::horoscope::requester::{HoroscopeRequester, HoroscopeResponse, ZodiacApi};
