//! **shelfsort** - Deterministic cleanup and LC shelf ordering for library catalog exports
//!
//! Normalizes title/call-number/availability fields exported from a catalog
//! and derives a stable total ordering over records by LC call number. Every
//! record, however malformed, gets exactly one sort key; ranks are attached
//! as metadata while output keeps the original row order.

/// Command-line interface with clap integration
pub mod cli;

/// Shell completion generation
pub mod completion;

/// Core pipeline - field normalization, call number parsing, shelf ranking
pub mod core {
    /// Field cleanup rules (availability splitting, space collapsing)
    pub mod normalize;
    pub use normalize::{clean_batch, clean_call_number, split_availability, strip_and_others};

    /// LC call number tokenization
    pub mod call_number;
    pub use call_number::{Cutter, ParsedCallNumber};

    /// Fixed-shape, totally ordered sort keys
    pub mod sort_key;
    pub use sort_key::{Slot, SortKey, sort_key};

    /// Record model and ranking-field selection
    pub mod record;
    pub use record::{RankedRecord, Record};

    /// Batch ranking with stable original-order output
    pub mod rank;
    pub use rank::{assign_ranks, process_batch};
}

/// Command runners wrapping the core pipeline
pub mod cli_ext {
    /// `clean` - normalize an export
    pub mod clean_cmd;

    /// `rank` - normalize and attach shelf ranks
    pub mod rank_cmd;
}

/// Infrastructure - configuration and encoded I/O (lean architecture)
pub mod infra {
    /// Configuration management with TOML support
    pub mod config;
    pub use self::config::{Config, init as config_init, load_config};

    /// Encoding-tolerant reading and BOM-prefixed writing
    pub mod io;
    pub use self::io::{SourceEncoding, read_text_with_fallback};

    /// CSV adapter between exports and records
    pub mod table;
    pub use self::table::{Table, TableError, read_records};
}

// Strategic re-exports for clean CLI interface
pub use crate::cli::{AppContext, Cli, Commands};
pub use crate::core::{RankedRecord, Record, SortKey, assign_ranks, process_batch, sort_key};
pub use crate::infra::{Config, load_config};
