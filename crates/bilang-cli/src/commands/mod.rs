//! Subcommand implementations for `bilangtool`.
//!
//! Each `*_cmd` function prints its result and exits non-zero on failure;
//! the data-producing halves are plain functions so they can be tested.

pub mod accuracy_ops;
pub mod config_ops;
pub mod render_ops;
pub mod snapshot_ops;

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            std::process::exit(1);
        })
    };
}

pub(crate) use die;
