use std::process::ExitCode;

use tilemaze::{
    MazeError,
    app::{App, Command, MazeConfig, config::USAGE, logging::init_logging},
};

fn run() -> tilemaze::Result<()> {
    let mut stdout = std::io::stdout();
    let app = match MazeConfig::parse_args(std::env::args().skip(1))? {
        Command::Help => {
            println!("{}", USAGE);
            return Ok(());
        }
        Command::Run(config) => App::new(config),
        Command::Interactive => match App::interactive(&mut stdout)? {
            Some(app) => app,
            None => {
                tracing::info!("[app] input cancelled by user");
                return Ok(());
            }
        },
    };

    let endpoints = app.run(&mut stdout)?;
    let config = app.config();
    println!(
        "Saved {}x{} maze to {} (start {:?}, end {:?})",
        config.width,
        config.height,
        config.output.display(),
        endpoints.start,
        endpoints.end
    );
    Ok(())
}

fn main() -> ExitCode {
    // Held until exit so buffered log lines are flushed
    let _guard = init_logging(".");

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("[app] {}", e);
            if matches!(e, MazeError::InvalidArgument { .. }) {
                eprintln!("{}\n\n{}", e, USAGE);
            } else {
                eprintln!("{}", e);
            }
            ExitCode::FAILURE
        }
    }
}
