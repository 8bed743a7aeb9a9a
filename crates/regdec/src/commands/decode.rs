//! `esr`, `midr` and `smccc` commands.

use regdec::render::{self, TextOptions};
use regdec::{DecodeError, Decoded, RegisterKind, inputs};
use tracing::{debug, error};

use crate::cli::{DecodeArgs, EXIT_FAILURE, EXIT_SUCCESS, OutputFormat};
use crate::terminal;

/// Decode every value given on the command line or in `--file`.
///
/// Inputs that fail to parse are reported and skipped; the rest are still
/// decoded and the exit code records the failure.
pub fn cmd_decode(kind: RegisterKind, args: &DecodeArgs, silent: bool) -> i32 {
    let values = match inputs::collect_values(&args.values, args.file.as_deref()) {
        Ok(values) => values,
        Err(err) => {
            error!(error = %err, "failed to read input values");
            terminal::error(&err.to_string());
            return EXIT_FAILURE;
        }
    };

    let results = regdec::decode_all(kind, values.iter().map(String::as_str), args.radix());
    let failed = results.iter().filter(|(_, decoded)| decoded.is_err()).count();
    debug!(%kind, total = results.len(), failed, "decoded inputs");

    match args.format {
        OutputFormat::Json => match render::render_json(&results) {
            Ok(json) => {
                for (input, decoded) in &results {
                    if let Err(err) = decoded {
                        error!(input = %input, error = %err, "decode failed");
                    }
                }
                println!("{json}");
            }
            Err(err) => {
                error!(error = %err, "failed to render JSON");
                terminal::error(&format!("Failed to render JSON: {err}"));
                return EXIT_FAILURE;
            }
        },
        OutputFormat::Text | OutputFormat::Raw => print_each(&results, args),
    }

    if failed > 0 {
        if let Some(notice) = failure_notice(kind, results.len(), failed, silent) {
            terminal::warning(&notice);
        }
        EXIT_FAILURE
    } else {
        if results.len() > 1 && !silent {
            terminal::success(&format!("Decoded {} {kind} values", results.len()));
        }
        EXIT_SUCCESS
    }
}

/// Count of rejected inputs, unless `--silent` asked for errors only.
fn failure_notice(kind: RegisterKind, total: usize, failed: usize, silent: bool) -> Option<String> {
    (failed > 0 && !silent).then(|| format!("{failed} of {total} {kind} values could not be decoded"))
}

fn print_each(results: &[(String, Decoded)], args: &DecodeArgs) {
    let options = TextOptions {
        bit_grid: args.bits,
    };
    let mut first = true;
    for (input, decoded) in results {
        match decoded {
            Ok(view) => {
                if !first {
                    println!();
                }
                first = false;
                match args.format {
                    OutputFormat::Raw => print!("{}", render::render_raw(view.as_ref())),
                    OutputFormat::Text | OutputFormat::Json => {
                        print!("{}", render::render_text(view.as_ref(), options));
                    }
                }
            }
            Err(err) => report_failure(input, err),
        }
    }
}

fn report_failure(input: &str, err: &DecodeError) {
    error!(input = %input, error = %err, "decode failed");
    terminal::error(&err.to_string());
}

#[cfg(test)]
mod tests {
    use std::io::{self, Write};
    use std::sync::{Arc, Mutex};

    use clap::Parser;

    use super::*;
    use crate::cli::Cli;

    #[derive(Clone, Default)]
    struct Capture(Arc<Mutex<Vec<u8>>>);

    impl Capture {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl Write for Capture {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    /// Run a decode command line, returning its exit code and the log
    /// events at `level` and above.
    fn run(argv: &[&str], level: tracing::Level) -> (i32, String) {
        let cli = Cli::try_parse_from(argv).unwrap();
        let (kind, args) = cli.command.decode().unwrap();
        let capture = Capture::default();
        let writer = capture.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(level)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();
        let code = tracing::subscriber::with_default(subscriber, || {
            cmd_decode(kind, args, cli.silent)
        });
        (code, capture.contents())
    }

    #[test]
    fn test_all_good_inputs_succeed() {
        let (code, _) = run(&["regdec", "midr", "410FD034", "0x611F0221"], tracing::Level::ERROR);
        assert_eq!(code, EXIT_SUCCESS);
    }

    #[test]
    fn test_mixed_inputs_fail_with_error_events() {
        for format in ["text", "raw", "json"] {
            let (code, logs) = run(
                &["regdec", "-s", "midr", "410FD034", "zz", "--format", format],
                tracing::Level::ERROR,
            );
            assert_eq!(code, EXIT_FAILURE, "{format}");
            assert!(logs.contains("ERROR"), "{format}: {logs}");
            assert!(logs.contains("decode failed"), "{format}: {logs}");
            assert!(logs.contains("input=zz"), "{format}: {logs}");
            assert!(!logs.contains("410FD034"), "{format}: {logs}");
        }
    }

    #[test]
    fn test_empty_file_fails() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let path = file.path().to_str().unwrap();
        let (code, logs) = run(&["regdec", "esr", "--file", path], tracing::Level::ERROR);
        assert_eq!(code, EXIT_FAILURE);
        assert!(logs.contains("failed to read input values"), "{logs}");
    }

    #[test]
    fn test_failure_notice_respects_silent() {
        assert_eq!(
            failure_notice(RegisterKind::Midr, 3, 1, false).as_deref(),
            Some("1 of 3 MIDR values could not be decoded")
        );
        assert_eq!(failure_notice(RegisterKind::Midr, 3, 1, true), None);
        assert_eq!(failure_notice(RegisterKind::Esr, 2, 0, false), None);
    }

    #[test]
    fn test_mbz_is_not_logged_as_warning() {
        let (code, logs) = run(&["regdec", "smccc", "0x84800000"], tracing::Level::WARN);
        assert_eq!(code, EXIT_SUCCESS);
        assert!(logs.is_empty(), "{logs}");
    }
}
