//! Stack reports for traced errors.
//!
//! A report is one header line followed by one line per captured frame:
//!
//! ```text
//! src/main.rs:40 [ERROR] sync failed: connection refused
//! src/main.rs:31 [ERROR] error caused from here ...
//! src/net.rs:88 [ERROR] error caused from here ...
//! src/net.rs:12 [ERROR] error caused from here !
//! ```
//!
//! Frames run from the outermost propagation site down to the line that
//! created the error, which is marked with `!`.

use std::error::Error;
use std::fmt;

use crate::logging::{Level, Logger};
use crate::trace::{HasStackTrace, StackTrace};

/// Trailing marker of a frame line.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Marker {
    /// More frames follow.
    Continues,
    /// The frame where the error was raised.
    Origin,
}

impl Marker {
    pub const fn as_str(self) -> &'static str {
        match self {
            Marker::Continues => "...",
            Marker::Origin => "!",
        }
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One printable frame of a report.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct FrameLine {
    pub file: &'static str,
    pub line: u32,
    pub marker: Marker,
}

/// Frames of `trace` in report order: outermost first, the first `skip`
/// of them left out, the last one marked as the origin.
pub fn frame_lines(trace: &StackTrace, skip: usize) -> impl Iterator<Item = FrameLine> + '_ {
    let remaining = trace.len().saturating_sub(skip);
    trace
        .frames()
        .iter()
        .rev()
        .skip(skip)
        .enumerate()
        .map(move |(i, frame)| {
            let (file, line) = frame.file_line();
            let marker = if i + 1 == remaining {
                Marker::Origin
            } else {
                Marker::Continues
            };
            FrameLine { file, line, marker }
        })
}

pub(crate) fn report_with_stack(
    logger: &Logger,
    file: &str,
    line: u32,
    message: &str,
    err: &(dyn Error + 'static),
) {
    let Some(trace) = err.stack_trace() else {
        logger.emit_custom(format_args!("No stacked error: {err}"));
        return;
    };

    logger.emit(Level::Error, file, line, format_args!("{message}: {err}"));
    for frame in frame_lines(trace, logger.skip_frames()) {
        logger.emit(
            Level::Error,
            frame.file,
            frame.line,
            format_args!("error caused from here {}", frame.marker),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::{LoggingConfig, Sink};
    use crate::testing::SharedBuffer;
    use crate::trace::{Frame, ResultExt, TracedError};
    use std::io;
    use std::panic::Location;

    fn capture(skip: usize) -> (Logger, SharedBuffer) {
        let buffer = SharedBuffer::new();
        let config = LoggingConfig::new().skip_frames(skip);
        let logger = Logger::with_sink(config, Sink::writer(buffer.clone()));
        (logger, buffer)
    }

    /// A traced error whose frames are `f0` (origin) .. `f{n-1}`
    /// (outermost), each on its own line of this file.
    fn synthetic(n: usize) -> (TracedError, Vec<u32>) {
        #[track_caller]
        fn here() -> &'static Location<'static> {
            Location::caller()
        }

        let sites = [
            here(),
            here(),
            here(),
            here(),
            here(),
            here(),
            here(),
            here(),
        ];
        assert!((1..=sites.len()).contains(&n));

        let mut err = TracedError::msg("synthetic");
        *err.trace_mut() = sites[..n].iter().copied().map(Frame::from_location).collect();
        let lines = sites[..n].iter().map(|loc| loc.line()).collect();
        (err, lines)
    }

    #[test]
    fn frame_lines_reverse_then_skip() {
        let (err, lines) = synthetic(7);
        let printed: Vec<_> = frame_lines(err.trace(), 3).collect();

        // f0..f6 reversed is f6..f0; skipping three leaves f3, f2, f1, f0.
        let printed_lines: Vec<u32> = printed.iter().map(|f| f.line).collect();
        assert_eq!(printed_lines, [lines[3], lines[2], lines[1], lines[0]]);
        assert_eq!(printed.last().map(|f| f.marker), Some(Marker::Origin));
        assert!(printed[..3].iter().all(|f| f.marker == Marker::Continues));
    }

    #[test]
    fn frame_lines_without_skip_end_at_origin() {
        let (err, lines) = synthetic(2);
        let printed: Vec<_> = frame_lines(err.trace(), 0).collect();
        assert_eq!(printed.len(), 2);
        assert_eq!(printed[0].line, lines[1]);
        assert_eq!(printed[0].marker, Marker::Continues);
        assert_eq!(printed[1].line, lines[0]);
        assert_eq!(printed[1].marker, Marker::Origin);
    }

    #[test]
    fn report_prints_header_and_n_minus_skip_frames() {
        for n in 4..=8 {
            let (logger, out) = capture(3);
            let (err, _) = synthetic(n);
            logger.error_with_stack("request failed", &err);

            let lines = out.lines();
            assert_eq!(lines.len(), 1 + n - 3, "n = {n}: {lines:?}");
            assert!(lines[0].ends_with(" [ERROR] request failed: synthetic"));

            let frames = &lines[1..];
            let (last, rest) = frames.split_last().unwrap();
            assert!(last.ends_with("[ERROR] error caused from here !"));
            for line in rest {
                assert!(line.ends_with("[ERROR] error caused from here ..."), "{line}");
            }
        }
    }

    #[test]
    fn report_with_three_or_fewer_frames_prints_header_only() {
        for n in 1..=3 {
            let (logger, out) = capture(3);
            let (err, _) = synthetic(n);
            logger.error_with_stack("request failed", &err);
            assert_eq!(out.lines().len(), 1, "n = {n}");
        }
    }

    #[test]
    fn report_without_stack_is_one_custom_line() {
        let (logger, out) = capture(3);
        let err = io::Error::new(io::ErrorKind::TimedOut, "peer timed out");
        logger.error_with_stack("request failed", &err);
        assert_eq!(out.lines(), ["No stacked error: peer timed out"]);
    }

    #[test]
    fn header_names_the_reporting_call_site() {
        let (logger, out) = capture(0);
        let err = TracedError::msg("bad input");
        let line = line!() + 1;
        logger.error_with_stack("parse", &err);

        let lines = out.lines();
        assert_eq!(lines[0], format!("{}:{} [ERROR] parse: bad input", file!(), line));
    }

    #[test]
    fn unresolved_frames_print_placeholders() {
        let (logger, out) = capture(0);
        let mut err = TracedError::msg("lost");
        err.trace_mut().push(Frame::unresolved());
        logger.error_with_stack("report", &err);

        let lines = out.lines();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "unknown:0 [ERROR] error caused from here ...");
        assert!(lines[2].starts_with(file!()));
        assert!(lines[2].ends_with("error caused from here !"));
    }

    #[test]
    fn propagation_chain_is_printed_outermost_first() {
        fn read_config() -> Result<(), TracedError> {
            Err::<(), _>(io::Error::new(io::ErrorKind::NotFound, "no config")).traced()
        }
        fn load() -> Result<(), TracedError> {
            read_config().traced()
        }
        fn start() -> Result<(), TracedError> {
            load().wrap_traced("starting")
        }

        let (logger, out) = capture(0);
        let err = start().unwrap_err();
        logger.error_with_stack("boot", &err);

        let lines = out.lines();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].ends_with("[ERROR] boot: starting: no config"));

        let origin = err.trace().origin().and_then(Frame::resolve).unwrap();
        assert_eq!(lines[3], format!("{}:{} [ERROR] error caused from here !", origin.0, origin.1));

        let frame_numbers: Vec<u32> = lines[1..]
            .iter()
            .map(|l| l.split(':').nth(1).unwrap().split(' ').next().unwrap().parse().unwrap())
            .collect();
        assert!(frame_numbers.windows(2).all(|w| w[0] > w[1]), "{frame_numbers:?}");
    }

    #[test]
    fn report_finds_trace_behind_anyhow_context() {
        let (logger, out) = capture(0);
        let err = anyhow::Error::new(TracedError::msg("inner")).context("outer");
        logger.error_with_stack("job", &*err);

        let lines = out.lines();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("[ERROR] job: outer"));
        assert!(lines[1].ends_with("error caused from here !"));
    }
}
