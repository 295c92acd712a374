//! This module contains curve instances in the Twisted Edwards model.
pub mod ed25519;
pub mod ed448;
