//! The command line front end: pick the operands, multiply them, and print
//! the product in hexadecimal.
//!
//!  big_mult           -> 100000 * 100000
//!  big_mult A B       -> A * B, both non-negative decimal strings

use std::fmt::Display;
use std::io::{self, Write};

use crate::multiply_decimal;

/// Exit status of a successful run.
pub const EXIT_SUCCESS: u8 = 0;
/// Exit status of a usage error or a failed computation.
pub const EXIT_FAILURE: u8 = 1;

/// The operands used when the program is invoked without arguments.
pub const DEFAULT_OPERANDS: (&str, &str) = ("100000", "100000");

/// Run the program with the `operands` that follow the program name. The
/// result line goes to `out`; usage and fatal errors go to `err`. Returns the
/// process exit status, or an error if one of the writers failed.
pub fn run<O: Write, E: Write>(
    program: &str,
    operands: &[String],
    out: &mut O,
    err: &mut E,
) -> io::Result<u8> {
    let (lhs, rhs) = match operands {
        [] => {
            let (lhs, rhs) = DEFAULT_OPERANDS;
            writeln!(
                out,
                "[INFO] No arguments given. Using default: {} * {}",
                lhs, rhs
            )?;
            (lhs, rhs)
        }
        [lhs, rhs] => (lhs.as_str(), rhs.as_str()),
        _ => {
            writeln!(err, "Usage:")?;
            writeln!(err, "  {}           (default: 100000 * 100000)", program)?;
            writeln!(
                err,
                "  {} <A> <B>   (A, B are non-negative decimal strings)",
                program
            )?;
            return Ok(EXIT_FAILURE);
        }
    };

    match multiply_decimal(lhs, rhs) {
        Ok(hex) => {
            writeln!(out, "{} (dec) * {} (dec) = {}", lhs, rhs, hex)?;
            Ok(EXIT_SUCCESS)
        }
        Err(e) => {
            write_fatal(err, e)?;
            Ok(EXIT_FAILURE)
        }
    }
}

/// Report an unrecoverable failure on `err`.
pub fn write_fatal<E: Write>(err: &mut E, what: impl Display) -> io::Result<()> {
    writeln!(err, "Fatal error: {}", what)
}

#[cfg(test)]
fn run_captured(operands: &[&str]) -> (u8, String, String) {
    let operands: Vec<String> = operands.iter().map(|s| s.to_string()).collect();
    let mut out = Vec::new();
    let mut err = Vec::new();
    let status = run("big_mult", &operands, &mut out, &mut err).unwrap();
    (
        status,
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

#[test]
fn test_default_operands() {
    let (status, out, err) = run_captured(&[]);
    assert_eq!(status, EXIT_SUCCESS);
    assert_eq!(
        out,
        "[INFO] No arguments given. Using default: 100000 * 100000\n\
         100000 (dec) * 100000 (dec) = 0x2540BE400\n"
    );
    assert!(err.is_empty());
}

#[test]
fn test_two_operands() {
    let cases = [
        ("0", "999999999999999999", "0x0"),
        ("2", "2", "0x4"),
        ("4294967295", "2", "0x1FFFFFFFE"),
        ("007", "0003", "0x15"),
    ];
    for (a, b, hex) in cases {
        let (status, out, err) = run_captured(&[a, b]);
        assert_eq!(status, EXIT_SUCCESS);
        // The operands are echoed verbatim, leading zeros included.
        assert_eq!(out, format!("{} (dec) * {} (dec) = {}\n", a, b, hex));
        assert!(err.is_empty());
    }
}

#[test]
fn test_wrong_argument_count() {
    for operands in [&["1"][..], &["1", "2", "3"][..]] {
        let (status, out, err) = run_captured(operands);
        assert_eq!(status, EXIT_FAILURE);
        assert!(out.is_empty());
        assert!(err.starts_with("Usage:\n"));
        assert!(err.contains("big_mult <A> <B>"));
    }
}

#[test]
fn test_invalid_operand() {
    let (status, out, err) = run_captured(&["12a3", "5"]);
    assert_eq!(status, EXIT_FAILURE);
    assert!(out.is_empty());
    assert!(err.starts_with("Fatal error: Invalid decimal string"));

    let (status, out, err) = run_captured(&["5", ""]);
    assert_eq!(status, EXIT_FAILURE);
    assert!(out.is_empty());
    assert_eq!(
        err,
        "Fatal error: Invalid decimal string (only non-negative integers \
         allowed)\n"
    );
}

#[test]
fn test_fatal_allocation_message() {
    let e = crate::BigInt::with_words(usize::MAX).unwrap_err();
    let mut err = Vec::new();
    write_fatal(&mut err, e).unwrap();
    assert_eq!(
        String::from_utf8(err).unwrap(),
        "Fatal error: memory allocation failed\n"
    );
}

#[test]
fn test_fatal_io_message() {
    let e = io::Error::new(io::ErrorKind::BrokenPipe, "broken pipe");
    let mut err = Vec::new();
    write_fatal(&mut err, &e).unwrap();
    assert_eq!(String::from_utf8(err).unwrap(), "Fatal error: broken pipe\n");
}
