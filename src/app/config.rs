use std::path::PathBuf;

use crate::{
    error::{MazeError, Result},
    render::bitmap::pixel_size,
};

/// Settings for one maze run.
#[derive(Debug, Clone, PartialEq)]
pub struct MazeConfig {
    /// Maze width in cells
    pub width: u16,
    /// Maze height in cells
    pub height: u16,
    /// Side length of each cell in the exported image, in pixels
    pub tile_size: u32,
    /// Seed for reproducible mazes, random when None
    pub seed: Option<u64>,
    /// Where to write the PNG
    pub output: PathBuf,
    /// Draw the maze in the terminal after generating it
    pub preview: bool,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            width: MazeConfig::DEFAULT_SIZE,
            height: MazeConfig::DEFAULT_SIZE,
            tile_size: MazeConfig::DEFAULT_TILE_SIZE,
            seed: None,
            output: PathBuf::from("maze.png"),
            preview: false,
        }
    }
}

/// What the command line asked for.
#[derive(Debug, PartialEq)]
pub enum Command {
    Run(MazeConfig),
    Interactive,
    Help,
}

pub const USAGE: &str = "\
Usage: tilemaze [SIZE | WIDTH HEIGHT] [OPTIONS]

Generates a random single-corridor maze and saves it as a PNG.
Run without arguments to enter settings interactively.

Options:
  --tile N        Pixels per maze cell (default 5)
  --seed N        Seed for a reproducible maze
  --output PATH   Where to write the image (default maze.png)
  --preview       Draw the maze in the terminal as well
  -h, --help      Show this message";

impl MazeConfig {
    pub const DEFAULT_SIZE: u16 = 100;
    pub const DEFAULT_TILE_SIZE: u32 = 5;
    /// Width and height must be strictly greater than this
    pub const MIN_SIZE_EXCLUSIVE: u16 = 10;

    /// Checks the dimensions, the tile size and that the image fits in `u32` pixels.
    pub fn validate(&self) -> Result<()> {
        if self.width <= Self::MIN_SIZE_EXCLUSIVE || self.height <= Self::MIN_SIZE_EXCLUSIVE {
            return Err(MazeError::invalid_argument(format!(
                "maze dimensions must both be greater than {}, got {}x{}",
                Self::MIN_SIZE_EXCLUSIVE,
                self.width,
                self.height
            )));
        }
        pixel_size(self.width, self.height, self.tile_size)?;
        Ok(())
    }

    /// Parses command line arguments, excluding the executable name.
    pub fn parse_args<I, S>(args: I) -> Result<Command>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut config = MazeConfig::default();
        let mut positional = Vec::new();
        let mut any_args = false;

        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            any_args = true;
            let arg = arg.as_ref();
            match arg.to_lowercase().as_str() {
                "-h" | "--h" | "-help" | "--help" => return Ok(Command::Help),
                "--preview" => config.preview = true,
                "--tile" => config.tile_size = parse_value(arg, args.next())?,
                "--seed" => config.seed = Some(parse_value(arg, args.next())?),
                "--output" => {
                    let value = args
                        .next()
                        .ok_or_else(|| MazeError::invalid_argument("--output needs a path"))?;
                    config.output = PathBuf::from(value.as_ref());
                }
                flag if flag.starts_with('-') => {
                    return Err(MazeError::invalid_argument(format!("unknown option {}", arg)));
                }
                _ => positional.push(parse_number::<u16>("maze size", arg)?),
            }
        }

        if !any_args {
            return Ok(Command::Interactive);
        }

        match positional.as_slice() {
            [] => {}
            [size] => {
                config.width = *size;
                config.height = *size;
            }
            [width, height] => {
                config.width = *width;
                config.height = *height;
            }
            _ => {
                return Err(MazeError::invalid_argument(
                    "expected at most two sizes: WIDTH HEIGHT",
                ));
            }
        }

        config.validate()?;
        Ok(Command::Run(config))
    }
}

fn parse_value<T, S>(flag: &str, value: Option<S>) -> Result<T>
where
    T: std::str::FromStr,
    S: AsRef<str>,
{
    let value = value.ok_or_else(|| MazeError::invalid_argument(format!("{} needs a value", flag)))?;
    parse_number(flag, value.as_ref())
}

fn parse_number<T: std::str::FromStr>(what: &str, value: &str) -> Result<T> {
    value.trim().parse::<T>().map_err(|_| {
        MazeError::invalid_argument(format!(
            "could not parse {} from {:?}, are you entering an integer?",
            what, value
        ))
    })
}
