pub mod config;
pub mod logging;
mod term;

use std::io::{Stdout, Write};

use crossterm::{
    QueueableCommand, queue,
    style::{self, Attribute, Color, Stylize},
};

pub use config::{Command, MazeConfig};

use crate::{
    error::Result,
    generators::Generator,
    maze::{Endpoints, Grid},
    render::{print_maze, render_bitmap, save_png},
};

/// One generate, render and export run.
pub struct App {
    config: MazeConfig,
}

impl App {
    pub fn new(config: MazeConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MazeConfig {
        &self.config
    }

    /// Generates the maze, writes the PNG and optionally previews it in the terminal.
    pub fn run(&self, stdout: &mut Stdout) -> Result<Endpoints> {
        let config = &self.config;
        config.validate()?;
        tracing::info!("[app] running with {:?}", config);

        let mut grid = Grid::new(config.width, config.height)?;
        let endpoints = Generator::new(&mut grid, config.seed)?.generate()?;

        let image = render_bitmap(&grid, config.tile_size)?;
        save_png(&image, &config.output)?;

        if config.preview {
            App::preview(stdout, &grid, &endpoints)?;
        }
        Ok(endpoints)
    }

    /// Ask for every setting in the terminal.
    /// Returns None if the user cancels with Esc.
    pub fn interactive(stdout: &mut Stdout) -> Result<Option<App>> {
        term::enter(stdout)?;
        let config = App::ask_config(stdout);
        term::leave(stdout)?;
        Ok(config?.map(App::new))
    }

    fn preview(stdout: &mut Stdout, grid: &Grid, endpoints: &Endpoints) -> Result<()> {
        term::enter(stdout)?;
        let shown = match print_maze(stdout, grid, endpoints) {
            Ok(shown) => shown,
            Err(e) => {
                term::leave(stdout)?;
                return Err(e.into());
            }
        };
        if !shown {
            queue!(
                stdout,
                style::PrintStyledContent(
                    "Terminal size is too small for the maze to display. The image was still saved.\r\n"
                        .with(Color::Yellow)
                        .attribute(Attribute::Bold)
                ),
                style::PrintStyledContent(
                    "Press Esc to exit...\r\n"
                        .with(Color::Blue)
                        .attribute(Attribute::Bold)
                )
            )?;
            stdout.flush()?;
        }
        let waited = term::wait_for_esc();
        term::leave(stdout)?;
        waited?;
        Ok(())
    }

    fn ask_config(stdout: &mut Stdout) -> std::io::Result<Option<MazeConfig>> {
        stdout.queue(style::PrintStyledContent(
            "Enter maze settings, or press Esc to exit. Leave a field empty to use its default.\r\n"
                .with(Color::Blue),
        ))?;

        let defaults = MazeConfig::default();

        let validate_size = |s: &str| {
            if s.is_empty() {
                return Ok(MazeConfig::DEFAULT_SIZE);
            }
            let error_msg = format!(
                "Please enter a whole number between {} and {}.",
                MazeConfig::MIN_SIZE_EXCLUSIVE + 1,
                u16::MAX
            );
            s.parse::<u16>()
                .map_err(|_| error_msg.clone())
                .and_then(|n| match n {
                    n if n > MazeConfig::MIN_SIZE_EXCLUSIVE => Ok(n),
                    _ => Err(error_msg),
                })
        };
        let validate_tile = |s: &str| {
            if s.is_empty() {
                return Ok(MazeConfig::DEFAULT_TILE_SIZE);
            }
            match s.parse::<u32>() {
                Ok(n) if n > 0 => Ok(n),
                _ => Err("Please enter a positive tile size in pixels.".to_string()),
            }
        };
        let validate_seed = |s: &str| {
            if s.is_empty() {
                return Ok(None);
            }
            s.parse::<u64>()
                .map(Some)
                .map_err(|_| "Please enter a non-negative 64-bit integer.".to_string())
        };

        let Some(width) = term::prompt(stdout, "Width: ", validate_size)? else {
            return Ok(None);
        };
        App::confirm(stdout, format!("Width set to {}", width))?;

        let Some(height) = term::prompt(stdout, "Height: ", validate_size)? else {
            return Ok(None);
        };
        App::confirm(stdout, format!("Height set to {}", height))?;

        let Some(tile_size) = term::prompt(stdout, "Tile size (px): ", validate_tile)? else {
            return Ok(None);
        };
        App::confirm(stdout, format!("Tile size set to {}", tile_size))?;

        let Some(seed) = term::prompt(stdout, "Seed: ", validate_seed)? else {
            return Ok(None);
        };
        match seed {
            Some(seed) => App::confirm(stdout, format!("Seed set to {}", seed))?,
            None => App::confirm(stdout, "Using a random seed".to_string())?,
        }

        let Some(preview) = term::choose(
            stdout,
            "Preview maze in the terminal? (use arrow keys and Enter, or Esc to exit):",
            &["Yes", "No"],
        )?
        else {
            return Ok(None);
        };

        Ok(Some(MazeConfig {
            width,
            height,
            tile_size,
            seed,
            preview: preview == "Yes",
            ..defaults
        }))
    }

    fn confirm(stdout: &mut Stdout, message: String) -> std::io::Result<()> {
        stdout.queue(style::PrintStyledContent(
            format!("{}\r\n", message)
                .with(Color::Green)
                .attribute(Attribute::Bold),
        ))?;
        stdout.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_writes_png_without_preview() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("maze.png");
        let app = App::new(MazeConfig {
            width: 21,
            height: 13,
            tile_size: 2,
            seed: Some(11),
            output: output.clone(),
            preview: false,
        });
        let endpoints = app.run(&mut std::io::stdout()).unwrap();

        let image = image::open(&output).unwrap().into_luma8();
        assert_eq!(image.dimensions(), (42, 26));
        let (x, y) = endpoints.start;
        assert_eq!(image.get_pixel(x as u32 * 2, y as u32 * 2).0, [255]);
    }

    #[test]
    fn test_run_is_reproducible_with_seed() {
        let dir = tempfile::tempdir().unwrap();
        let config = MazeConfig {
            width: 30,
            height: 30,
            seed: Some(2024),
            output: dir.path().join("a.png"),
            ..MazeConfig::default()
        };
        let first = App::new(config.clone()).run(&mut std::io::stdout()).unwrap();
        let second = App::new(MazeConfig {
            output: dir.path().join("b.png"),
            ..config
        })
        .run(&mut std::io::stdout())
        .unwrap();
        assert_eq!(first, second);
        assert_eq!(
            std::fs::read(dir.path().join("a.png")).unwrap(),
            std::fs::read(dir.path().join("b.png")).unwrap()
        );
    }

    #[test]
    fn test_run_rejects_invalid_config() {
        let app = App::new(MazeConfig {
            width: 5,
            ..MazeConfig::default()
        });
        assert!(app.run(&mut std::io::stdout()).is_err());
    }
}
