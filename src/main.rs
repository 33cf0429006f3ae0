use clap::Parser;
use log::info;
use plotpng::{cli::Cli, PlotConfig};

fn main() {
    // RUST_LOG overrides; warnings and errors only by default.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let config = PlotConfig::default();
    info!("plotting `{}` to {}", cli.expression, cli.output.display());

    match cli.run(&config, |warning| eprintln!("{}\n", warning)) {
        Ok(_) => println!("File {} successfully created.", cli.output.display()),
        Err(e) => {
            println!("Program aborted. See stderr for more information.\n");
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
}
