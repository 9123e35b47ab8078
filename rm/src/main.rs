use std::env;
use std::io;
use std::process::ExitCode;

use rm::{HostFs, Remover};

fn main() -> ExitCode {
    env_logger::init();

    let mut stdout = io::stdout().lock();
    let cli = match rm::cli::parse(env::args_os(), &mut stdout) {
        Ok(cli) => cli,
        Err(exit) => return exit.into(),
    };
    log::debug!("{cli:?}");

    let fs = match cli.root {
        Some(root) => HostFs::new(root),
        None => HostFs::new_at_cwd(),
    };
    Remover::new(&fs)
        .create_first(cli.create)
        .run(&cli.paths, &mut stdout)
        .into()
}
