use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "tinycat", about = "A tiny line-numbered BASIC interpreter", version)]
struct Args {
    /// Program file to load at start-up
    program: Option<PathBuf>,

    /// Run the program right after loading it
    #[arg(long, requires = "program")]
    run: bool,
}

fn main() {
    let args = Args::parse();
    tinycat::term::init_logging();
    tinycat::term::main(args.program.as_deref(), args.run);
}
