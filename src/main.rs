#![allow(non_snake_case)]
use std::env;
use std::process::ExitCode;

use box_arithmetic::Examples::box_examples::{box_examples, examples_to_run};
use box_arithmetic::Utils::logger::init_logger;

// usage: box_arithmetic [example number | all] [loglevel]
fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();
    let loglevel = args.get(2).map(String::as_str).unwrap_or("info");
    init_logger(Some(loglevel));

    let examples = examples_to_run(args.get(1).map(String::as_str));
    for example in examples {
        if let Err(e) = box_examples(example) {
            eprintln!("example {} failed: {}", example, e);
            return ExitCode::FAILURE;
        }
    }
    ExitCode::SUCCESS
}
