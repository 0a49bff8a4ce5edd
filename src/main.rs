// custom-float/src/main.rs

//! Interactive session: prints the reference values of the layout, encodes a
//! number typed by the user, then encodes `F(a, b)` for two more numbers.
//!
//! Field widths come from `CUSTOM_FLOAT_EXPONENT_BITS` and
//! `CUSTOM_FLOAT_MANTISSA_BITS`; log output is controlled by `RUST_LOG`.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use custom_float::{
    combine, parse_decimal, reference_values, to_decimal_string, Encoder, FormatConfig,
};
use log::info;

fn main() -> ExitCode {
    env_logger::init();

    let config = match FormatConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error: {}", err);
            return ExitCode::FAILURE;
        }
    };
    info!(
        "layout: {} exponent bits, {} mantissa bits, bias {}",
        config.exponent_bits(),
        config.mantissa_bits(),
        config.exponent_bias()
    );

    let stdin = io::stdin();
    match run(&Encoder::new(config), &mut stdin.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("I/O error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(encoder: &Encoder, input: &mut impl BufRead) -> io::Result<()> {
    print_reference_values(encoder);

    let line = prompt(input, "\nEnter a decimal floating-point number (e.g., ±1.23E±4): ")?;
    match parse_decimal(&line) {
        Ok(value) => {
            println!("\nEntered value: {}", value);
            print_encoded(encoder, value);
        }
        Err(err) => {
            info!("{}", err);
            eprintln!("Invalid input. Please enter a valid floating-point number.");
        }
    }

    let a = prompt(input, "Enter value for a: ")?;
    let b = prompt(input, "Enter value for b: ")?;
    let (a, b) = match (parse_decimal(&a), parse_decimal(&b)) {
        (Ok(a), Ok(b)) => (a, b),
        (Err(err), _) | (_, Err(err)) => {
            eprintln!("Error: {}", err);
            return Ok(());
        }
    };

    println!("\nRepresentation of a:");
    print_encoded(encoder, a);
    println!("\nRepresentation of b:");
    print_encoded(encoder, b);

    let result = match combine(a, b) {
        Ok(result) => result,
        Err(err) => {
            eprintln!("Error: {}", err);
            return Ok(());
        }
    };
    println!(
        "\nThe result of F(a, b) = 2 * a * b / (a^2 + b^2): {}",
        result
    );

    // Re-encode through the decimal text, as if it had been typed in.
    let text = to_decimal_string(result);
    match parse_decimal(&text) {
        Ok(value) => {
            println!("\nEntered value: {}", value);
            print_encoded(encoder, value);
        }
        Err(err) => eprintln!("Error: {}", err),
    }
    Ok(())
}

fn print_reference_values(encoder: &Encoder) {
    println!("Standard representations:");
    for reference in reference_values(encoder.config()) {
        println!("\n{}: {}", reference.label, reference.value);
        print_encoded(encoder, reference.value);
    }
}

fn print_encoded(encoder: &Encoder, value: f64) {
    let encoded = encoder.encode(value);
    println!("{}", encoder.layout(&encoded));
}

fn prompt(input: &mut impl BufRead, message: &str) -> io::Result<String> {
    print!("{}", message);
    io::stdout().flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line)
}
