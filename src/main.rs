use std::error::Error;

use fitjpeg::args;
use fitjpeg::help;

fn main() {
    if let Err(e) = real_main() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn real_main() -> Result<(), Box<dyn Error>> {
    help::maybe_print_help_and_exit("fitjpeg");
    let arguments: Vec<_> = std::env::args_os().collect();
    let plan = args::parse_args(arguments)?;
    // per-file failures are reported by the plan itself and never change the exit status
    plan.execute();
    Ok(())
}
