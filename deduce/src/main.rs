use clap::Parser;
use deduce::{load, Cli, Error};
use log::{error, info};
use modus::raw::RawHyp;
use modus::status::Status;
use std::fs::File;
use std::io::Write;

fn main() {
    use env_logger::Env;
    // log warnings and errors by default, do not print timestamps
    env_logger::Builder::from_env(Env::default().filter_or("LOG", "warn"))
        .format_timestamp(None)
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        print!("{}", Status(e.get_kind()));
        if let Some(e) = e.get_error() {
            if let Err(e) = cli.output(e) {
                error!("could not write output: {}", e)
            }
        };
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), Error> {
    let hyps = load::parse_file(&cli.file)?;
    info!("loaded {} hypotheses", hyps.len());

    let sol = modus::solve(hyps, cli.opt())?;
    let stats = sol.stats();
    info!(
        "{:?} after {} inferences and {} derivations",
        sol.state(),
        stats.inferences,
        stats.derivations()
    );

    if let Some(file) = &cli.stats {
        let mut f = File::create(file)?;
        writeln!(f, "{}", serde_json::to_string(stats)?)?;
    };

    match sol.state().status() {
        Ok(kind) => {
            print!("{}", Status(kind));
            let conclusion = sol.conclusion().clone();
            if cli.json {
                cli.output(serde_json::to_string(&RawHyp::from(conclusion))?)?
            } else {
                cli.output(conclusion)?
            }
            Ok(())
        }
        Err(kind) => {
            let remaining: Vec<_> = sol.hyps().iter().map(|h| h.to_string()).collect();
            let details = format!("remaining hypotheses:\n{}", remaining.join("\n"));
            Err(Error::new(kind, details.into()))
        }
    }
}
