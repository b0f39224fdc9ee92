//! Line formatting.
//!
//! Two shapes exist:
//!
//! ```text
//! <file>:<line> [<LEVEL>] <message>     leveled
//! <message>                             custom
//! ```
//!
//! Records on [`CUSTOM_TARGET`] use the custom shape; everything else is
//! leveled. Records without location data print `unknown:0`.

use std::io::{self, Write};

use log::Record;

/// Target reserved for unprefixed lines.
pub const CUSTOM_TARGET: &str = "stacklog::custom";

/// Placeholder file name for records and frames without a location.
pub const UNKNOWN_FILE: &str = "unknown";

/// Writes one record as a single newline-terminated line.
pub fn format_record(out: &mut dyn Write, record: &Record<'_>) -> io::Result<()> {
    if record.target() == CUSTOM_TARGET {
        return writeln!(out, "{}", record.args());
    }

    writeln!(
        out,
        "{}:{} [{}] {}",
        record.file().unwrap_or(UNKNOWN_FILE),
        record.line().unwrap_or(0),
        record.level(),
        record.args()
    )
}
