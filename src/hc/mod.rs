//! LZO1X-999: the slow, high-ratio encoder.
//!
//! - [`types`]: level table and match-finder sizing
//! - [`search`]: hash-chain match finder
//! - [`compress`]: lazy-evaluation parser and entry points

pub mod compress;
pub mod search;
pub mod types;

pub use compress::{lzo1x_999_compress, lzo1x_999_compress_level};
pub use types::{level_params, LevelParams, LEVEL_TABLE, SWD_F, SWD_N};
