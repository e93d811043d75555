mod logger;

use std::env;
use std::io::{self, Read, Write};
use std::process::ExitCode;

use anyhow::Context;
use console_base32::{base32, selftest};

fn main() -> anyhow::Result<ExitCode> {
    logger::setup_logger();

    let args = env::args().collect::<Vec<_>>();

    let Some(mode) = args.get(1) else {
        print_usage();
        return Ok(ExitCode::FAILURE);
    };

    match mode.as_str() {
        "test" => {
            selftest::run().context("self-test failed")?;
            eprintln!("✅ Tests done.");
        }
        "encode" => {
            let input = read_stdin()?;
            let output = base32::encode(&input).context("failed to encode standard input")?;
            write_stdout(output.as_bytes())?;
        }
        "decode" => {
            let input = read_stdin()?;
            let output = base32::decode(&input).context("failed to decode standard input")?;
            write_stdout(&output)?;
        }
        _ => {
            eprintln!("❌ Unknown mode: {}", mode);
            print_usage();
            return Ok(ExitCode::FAILURE);
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn read_stdin() -> anyhow::Result<Vec<u8>> {
    let mut input = Vec::new();
    io::stdin()
        .lock()
        .read_to_end(&mut input)
        .context("failed to read standard input")?;
    log::debug!("read {} bytes from stdin", input.len());
    Ok(input)
}

fn write_stdout(data: &[u8]) -> anyhow::Result<()> {
    let mut stdout = io::stdout().lock();
    stdout
        .write_all(data)
        .and_then(|()| stdout.flush())
        .context("failed to write standard output")?;
    Ok(())
}

fn print_usage() {
    eprintln!("🔐 Base32 block codec");
    eprintln!("Usage: base32 <mode>");
    eprintln!();
    eprintln!("Modes:");
    eprintln!("  test                             Run the built-in self-test");
    eprintln!("  encode                           Encode stdin (multiple of 5 bytes) to stdout");
    eprintln!("  decode                           Decode stdin (multiple of 8 symbols) to stdout");
    eprintln!();
    eprintln!("Alphabet: ABCDEFGHIJKLMNOPQRSTUVWXYZ123456 (no padding)");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  base32 test");
    eprintln!("  printf 'hello' | base32 encode");
    eprintln!("  printf 'NBSWY2DP' | base32 decode");
}
