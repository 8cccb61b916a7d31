#![cfg_attr(docsrs, feature(doc_cfg))]
//! Coordination-free, time-ordered 64-bit Snowflake IDs.
//!
//! Every ID packs, from most to least significant bit, the milliseconds
//! elapsed since a process-wide epoch, one 10-bit discriminator (or two 5-bit
//! discriminators), and a 12-bit per-millisecond sequence:
//!
//! ```text
//!  Bit Index:  63             22 21                   12 11             0
//!              +----------------+-----------------------+---------------+
//!  Single:     | timestamp (42) |  discriminator (10)   | sequence (12) |
//!              +----------------+-----------+-----------+---------------+
//!  Dual:       | timestamp (42) | disc2 (5) | disc1 (5) | sequence (12) |
//!              +----------------+-----------+-----------+---------------+
//! ```
//!
//! Generators configured with distinct discriminators never collide, so no
//! network round-trip or central authority is needed. Assigning those
//! discriminators uniquely across a fleet is the caller's job.
//!
//! ```
//! use snowdrift::{DualFieldGenerator, SingleFieldGenerator, parse, parse2};
//!
//! let generator = SingleFieldGenerator::new(1);
//! let id = generator.next_id();
//! assert_eq!(parse(id).discriminator, 1);
//!
//! let generator = DualFieldGenerator::new((1, 24));
//! let parsed = parse2(generator.next_id());
//! assert_eq!((parsed.discriminator1, parsed.discriminator2), (1, 24));
//! ```
//!
//! Decoding a timestamp uses the epoch configured *at decode time*. Configure
//! the epoch with [`set_epoch`] once at startup, before any ID is minted.

pub mod codec;
mod epoch;
mod error;
mod generator;
mod id;
mod parse;
mod time;

pub use crate::epoch::*;
pub use crate::error::*;
pub use crate::generator::*;
pub use crate::id::*;
pub use crate::parse::*;
pub use crate::time::*;
