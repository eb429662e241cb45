//! Command-line interface for the `lzo` binary.
//!
//! | Submodule    | Responsibility |
//! |--------------|----------------|
//! | [`args`]     | clap grammar and size / seed value parsers. |
//! | [`commands`] | One function per subcommand, file I/O, `anyhow` context. |
//! | [`bench`]    | Timed in-memory round trips behind `lzo bench`. |

pub mod args;
pub mod bench;
pub mod commands;

/// Default log filter for a given `-v` count. `RUST_LOG` wins when set.
pub fn log_filter(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}
