use anyhow::Result;
use clap::{Arg, ArgAction, Command};

use rings::{output_file_name, par_render, scale, Args, Error, HELP_TEXT};

fn main() {
    if let Err(err) = run() {
        report(&err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let matches = Command::new("rings")
        .about("Render residue class rings of the form Z/pZ")
        .version(env!("CARGO_PKG_VERSION"))
        .arg(
            Arg::new("p")
                .action(ArgAction::Set)
                .help("Order of the ring; default 1024"),
        )
        .arg(
            Arg::new("s")
                .action(ArgAction::Set)
                .help("Size of the output image; must not exceed p, defaults to p"),
        )
        .get_matches();

    let mut tokens = Vec::new();
    for name in ["p", "s"] {
        if let Some(token) = matches.get_one::<String>(name) {
            tokens.push(token.as_str());
        }
    }
    let args = Args::from_tokens(&tokens)?;
    log::info!("using arguments p={} and size={}", args.order, args.size);

    let img = scale(par_render(args.order), args.size);
    let path = output_file_name(args.order, args.size);
    img.save(&path).map_err(Error::Save)?;
    println!("Saved {path:?}");
    Ok(())
}

fn report(err: &anyhow::Error) {
    match err.downcast_ref::<Error>() {
        Some(Error::Save(_)) | None => eprintln!("Error: {err}"),
        Some(_) => eprintln!("Error while parsing arguments: {err}\n\n{HELP_TEXT}"),
    }
}
