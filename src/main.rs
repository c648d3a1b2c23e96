use std::env;
use std::io;
use std::process::ExitCode;

use bigmult::cli;

///! Multiplies two decimal numbers and prints the product in hexadecimal.
///!  cargo run --release -- 4294967295 2

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("big_mult");
    let operands = args.get(1..).unwrap_or(&[]);

    let status = cli::run(
        program,
        operands,
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    );
    match status {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            // Nothing else can be done if stderr is gone too.
            let _ = cli::write_fatal(&mut io::stderr(), e);
            ExitCode::FAILURE
        }
    }
}
