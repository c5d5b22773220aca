//! # vertex-cli: Operator Command-Line Interface
//!
//! The `vertex` binary exposes every resolver of the engine so operators can
//! check what a tenant will see without starting the dashboard.
//!
//! ## Subcommands
//!
//! - `vertex resolve`: full tenant resolution (config, flags, menu).
//! - `vertex vocab`: vocabulary terms of a vertical.
//! - `vertex flags`: feature flags of a tier.
//! - `vertex menu`: navigation menu of a vertical and tier.
//! - `vertex verticals`: canonical verticals with their synonyms.
//! - `vertex validate`: check record metadata; exits 1 on violations.
//!
//! ```bash
//! vertex resolve --vertical garage --tier pro
//! vertex menu restaurant starter --mode locked
//! vertex validate automotive --json '{"status": "parked"}'
//! vertex --config overrides.yaml vocab beauty --key client
//! ```
//!
//! ## Crate Policy
//!
//! - Argument parsing lives here; behavior lives in the library crates.
//! - Output is JSON on stdout. Diagnostics go to stderr through `tracing`.

pub mod inspect;
pub mod resolve;
pub mod validate;

use std::io::Write;

use serde::Serialize;

/// Write `value` as pretty JSON followed by a newline.
pub fn write_json(out: &mut impl Write, value: &impl Serialize) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

/// Flush `out` after a handler ran. A failed flush turns a successful
/// exit code into an error; a handler error is kept as is.
pub fn finish_output(out: &mut impl Write, result: anyhow::Result<u8>) -> anyhow::Result<u8> {
    let flushed = out.flush();
    let code = result?;
    flushed?;
    Ok(code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "stdout closed"))
        }
    }

    #[test]
    fn test_finish_output_keeps_code() {
        let mut out = Vec::new();
        assert_eq!(finish_output(&mut out, Ok(1)).unwrap(), 1);
    }

    #[test]
    fn test_failed_flush_is_an_error() {
        let err = finish_output(&mut BrokenPipe, Ok(0)).unwrap_err();
        let io_err = err.downcast_ref::<io::Error>().unwrap();
        assert_eq!(io_err.kind(), io::ErrorKind::BrokenPipe);
    }

    #[test]
    fn test_handler_error_wins_over_flush() {
        let err = finish_output(&mut BrokenPipe, Err(anyhow::anyhow!("bad metadata"))).unwrap_err();
        assert_eq!(err.to_string(), "bad metadata");
    }
}
