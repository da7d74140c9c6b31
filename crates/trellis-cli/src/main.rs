use clap::{Parser, Subcommand};
use dotenv::dotenv;
use log::error;

mod components;
mod models;

use components::{grid, render, tui};

/// Calendar and booking widgets, from the terminal
#[derive(Parser, Debug)]
#[command(name = "trellis", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print a month grid as text
    Grid(grid::GridArgs),
    /// Print the rendered calendar tree as JSON
    Render(render::RenderArgs),
    /// Run the interactive booking demo
    Tui(tui::TuiArgs),
}

#[tokio::main]
async fn main() {
    dotenv().ok();
    let cli = Cli::parse();

    // the terminal demo captures logs in memory for its activity panel
    if !matches!(cli.command, Commands::Tui(_)) {
        env_logger::init();
    }

    let result = match cli.command {
        Commands::Grid(args) => grid::handle_grid(args).map_err(|e| e.to_string()),
        Commands::Render(args) => render::handle_render(args).map_err(|e| e.to_string()),
        Commands::Tui(args) => tui::handle_tui(args).await,
    };

    if let Err(e) = result {
        error!("{}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SelectionMode;

    #[test]
    fn test_parse_grid_command() {
        let cli = Cli::try_parse_from([
            "trellis",
            "grid",
            "--month",
            "2024-02",
            "--select",
            "2024-02-10",
            "--select",
            "2024-02-12",
            "--mode",
            "range",
            "--start-weekday",
            "0",
        ])
        .unwrap();
        let Commands::Grid(args) = cli.command else {
            panic!("expected grid command");
        };
        assert_eq!(args.calendar.initial_dates.len(), 2);
        assert_eq!(args.calendar.mode, Some(SelectionMode::Range));
        assert_eq!(args.calendar.start_weekday, Some(0));
    }

    #[test]
    fn test_start_weekday_out_of_range() {
        assert!(Cli::try_parse_from(["trellis", "grid", "--start-weekday", "7"]).is_err());
    }

    #[test]
    fn test_tui_log_level() {
        let cli = Cli::try_parse_from(["trellis", "tui", "--log-level", "debug"]).unwrap();
        let Commands::Tui(args) = cli.command else {
            panic!("expected tui command");
        };
        assert_eq!(args.log_level, log::LevelFilter::Debug);
    }
}
