//! # kagi
//!
//! Core trait for the kagi RSA toolkit.
//!
//! This crate defines the `Decoder` trait pair that establishes a
//! type-safe conversion pattern used by the other workspace crates.
//!
//! ## Overview
//!
//! The conversion pattern follows the key ingestion pipeline:
//! ```text
//! PEM text → Pem → Vec<u8> (raw DER) → stripped key bytes
//! ```
//!
//! Each step uses the `Decoder` trait to convert from one representation
//! to the next. The marker trait `DecodableFrom` constrains which
//! conversions exist, so an invalid conversion is a compile error rather
//! than a runtime surprise.

#![forbid(unsafe_code)]

pub mod decoder;
