//! Transaction Validation Module
//!
//! This module validates transaction records before they reach the save step.
//! Checks field presence, derives the auxiliary-validation flag, and gates
//! on the fixed set of valid transaction type codes.

mod validator;


pub use validator::TransactionValidator;
