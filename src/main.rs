use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use screenshot_bounds::global_constants::{
    APPLICATION_NAME, ERROR_CONTEXT_CAPTURE, ERROR_CONTEXT_LIST_MONITORS,
    ERROR_CONTEXT_WRITE_OUTPUT, LOG_TAG_CLI,
};
use screenshot_bounds::{MonitorDescriptor, RgbaImage};

/// Capture a monitor as raw RGBA bytes.
#[derive(Parser, Debug)]
#[command(name = "screenshot-bounds", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List the monitors the display server reports
    Monitors {
        /// Print the list as JSON
        #[arg(long)]
        json: bool,
    },

    /// Capture the monitor whose rectangle is exactly x, y, width, height
    Capture {
        #[arg(allow_negative_numbers = true)]
        x: i32,

        #[arg(allow_negative_numbers = true)]
        y: i32,

        width: u32,

        height: u32,

        /// File to write the RGBA bytes to; stdout when omitted
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    env_logger::init();

    log::info!("{} starting {}", LOG_TAG_CLI, APPLICATION_NAME);

    let cli = Cli::parse();

    match cli.command {
        Commands::Monitors { json } => print_monitors(json),
        Commands::Capture {
            x,
            y,
            width,
            height,
            output,
        } => {
            let image = screenshot_bounds::capture_screenshot_for_bounds(x, y, width, height)
                .with_context(|| {
                    format!(
                        "{} {}x{} at ({}, {})",
                        ERROR_CONTEXT_CAPTURE, width, height, x, y
                    )
                })?;
            write_image(&image, output)
        }
    }
}

fn print_monitors(as_json: bool) -> Result<()> {
    let monitors = screenshot_bounds::list_monitors().context(ERROR_CONTEXT_LIST_MONITORS)?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&monitors)?);
        return Ok(());
    }

    for monitor in &monitors {
        println!("{}", describe_monitor(monitor));
    }

    Ok(())
}

fn describe_monitor(monitor: &MonitorDescriptor) -> String {
    let primary_marker = if monitor.flags.primary { " (primary)" } else { "" };
    format!(
        "{}: {} {} {} {}{}",
        monitor.id, monitor.x, monitor.y, monitor.width, monitor.height, primary_marker
    )
}

fn write_image(image: &RgbaImage, output: Option<PathBuf>) -> Result<()> {
    match output {
        Some(path) => {
            fs::write(&path, image.as_bytes())
                .with_context(|| format!("{} to {:?}", ERROR_CONTEXT_WRITE_OUTPUT, path))?;
            log::info!(
                "{} wrote {}x{} RGBA image ({} bytes) to {:?}",
                LOG_TAG_CLI,
                image.width(),
                image.height(),
                image.len(),
                path
            );
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(image.as_bytes())
                .and_then(|_| stdout.flush())
                .context(ERROR_CONTEXT_WRITE_OUTPUT)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use screenshot_bounds::MonitorFlags;

    #[test]
    fn test_capture_command_accepts_negative_origin() {
        let cli = Cli::try_parse_from([
            "screenshot-bounds",
            "capture",
            "-1920",
            "-200",
            "1920",
            "1080",
        ])
        .unwrap();

        match cli.command {
            Commands::Capture {
                x,
                y,
                width,
                height,
                output,
            } => {
                assert_eq!((x, y, width, height), (-1920, -200, 1920, 1080));
                assert!(output.is_none());
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_capture_command_requires_four_bounds() {
        let result = Cli::try_parse_from(["screenshot-bounds", "capture", "0", "0", "1920"]);

        assert!(result.is_err());
    }

    #[test]
    fn test_monitors_command_parses_json_flag() {
        let cli = Cli::try_parse_from(["screenshot-bounds", "monitors", "--json"]).unwrap();

        assert!(matches!(cli.command, Commands::Monitors { json: true }));
    }

    #[test]
    fn test_describe_monitor_marks_primary() {
        let monitor = MonitorDescriptor {
            id: 7,
            x: 0,
            y: 0,
            width: 1920,
            height: 1080,
            flags: MonitorFlags {
                primary: true,
                automatic: false,
            },
        };

        assert_eq!(describe_monitor(&monitor), "7: 0 0 1920 1080 (primary)");
    }

    #[test]
    fn test_cli_definition_is_consistent() {
        use clap::CommandFactory;

        Cli::command().debug_assert();
    }
}
