//! `mekedonia` - Headless application core for the Mekedonia charity app
//!
//! This library provides the application logic behind the charity app's
//! screens: session and authentication state, the donation flow, volunteer
//! registration, impact statistics, and the navigation model. External
//! collaborators (auth, payments, the charity backend) are consumed through
//! explicit async seams, with in-process mocks standing in until the real
//! services are integrated.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod account;
pub mod api;
pub mod cli;
pub mod config;
pub mod donation;
pub mod error;
pub mod impact;
pub mod logging;
pub mod mock;
pub mod navigation;
pub mod screens;
pub mod store;
pub mod validation;
pub mod volunteer;

pub use account::{Role, SessionManager, User};
pub use config::Config;
pub use donation::{DonationFlow, PaymentMethod};
pub use error::{Error, Result};
pub use logging::init_logging;
pub use mock::MockBackend;
pub use screens::Alert;
pub use store::SessionStore;
