use std::process::ExitCode;

use clap::Parser;
use sensor_bench_cli::{init_tracing, run, usage, Options, ValidationError};

fn main() -> ExitCode {
    init_tracing();

    let options = match Options::try_parse() {
        Ok(options) => options,
        Err(err) if err.use_stderr() => {
            eprintln!("{err}");
            println!("{}", usage());
            return ExitCode::FAILURE;
        }
        Err(err) => {
            let _ = err.print();
            return ExitCode::SUCCESS;
        }
    };

    match run(&options) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            if let Some(validation) = err.downcast_ref::<ValidationError>() {
                eprintln!("{validation}");
                println!("{}", usage());
            } else {
                eprintln!("Error: {err:#}");
            }
            ExitCode::FAILURE
        }
    }
}
