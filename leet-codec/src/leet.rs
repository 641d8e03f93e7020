//! Main module for leetspeak codec functionality

pub mod codec;
pub mod decoding;
pub mod detection;
pub mod encoding;
pub mod quick;
pub mod structured;
pub mod testing;
pub mod variants;
