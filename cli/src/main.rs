use clap::Parser;
use skein_driver::{Conf, interp_file, print_file};
use skein_dynamics::{BaseDomain, Env, Fix, Fuel};
use std::process::ExitCode;

mod cli;
use cli::{Cli, Commands};

fn main() -> ExitCode {
    env_logger::init();
    match run(Cli::parse()) {
        | Ok(()) => ExitCode::SUCCESS,
        | Err(err) => {
            eprintln!("{}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> skein_driver::Result<()> {
    match cli.command {
        | Commands::Print { file } => {
            println!("{}", print_file(file)?);
        }
        | Commands::Run { file, fuel } => {
            let fuel = fuel.or(Conf::load_or_default().fuel);
            let module = match fuel {
                | Some(limit) => interp_file::<BaseDomain>(file, &Fuel::new(limit))?,
                | None => interp_file::<BaseDomain>(file, &Fix)?,
            };
            let module = module.inner();
            for import in &module.imports {
                println!("import {}", import);
            }
            println!("{:?}", (module.body)(&Env::new()));
        }
    }
    Ok(())
}
