//! Build automation tasks for the Morse beacon.
//!
//! Run with: `cargo xtask <command>`

use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;
use std::process::{Command, ExitCode};

/// The only firmware binary in the project.
const DEMO: &str = "morse_beacon";

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Build automation for the Morse beacon", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run all checks: host tests, firmware builds for both boards, docs
    CheckAll,
    /// Build library for a board
    Build {
        #[arg(long, default_value = "pico1")]
        board: Board,
    },
    /// Build the beacon firmware
    Example {
        /// Example name
        #[arg(default_value = DEMO)]
        name: String,
        #[arg(long, default_value = "pico1")]
        board: Board,
    },
    /// Build UF2 firmware file for flashing to Pico
    Uf2 {
        /// Example name
        #[arg(default_value = DEMO)]
        name: String,
        #[arg(long, default_value = "pico1")]
        board: Board,
    },
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum Board {
    Pico1,
    Pico2,
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Board::Pico1 => write!(f, "pico1"),
            Board::Pico2 => write!(f, "pico2"),
        }
    }
}

impl Board {
    fn target(self) -> &'static str {
        match self {
            Board::Pico1 => "thumbv6m-none-eabi",
            Board::Pico2 => "thumbv8m.main-none-eabihf",
        }
    }

    fn features(self) -> String {
        format!("{self},arm")
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Commands::CheckAll => check_all(),
        Commands::Build { board } => build_lib(board),
        Commands::Example { name, board } => build_example(&name, board),
        Commands::Uf2 { name, board } => build_uf2(&name, board),
    }
}

fn check_all() -> ExitCode {
    let workspace_root = workspace_root();

    println!("{}", "==> Running host tests...".cyan());
    let host_target = host_target();
    match host_target.as_deref() {
        Some(target) => {
            println!(
                "  {}",
                format!("Using host target: {target}").bright_black()
            );
        }
        None => {
            println!(
                "{}",
                "  Unable to detect host target; relying on cargo default.".bright_black()
            );
        }
    }

    let mut test_cmd = Command::new("cargo");
    test_cmd
        .current_dir(&workspace_root)
        .args(["test", "--package", "morse-beacon"]);
    if let Some(target) = &host_target {
        test_cmd.arg("--target").arg(target);
    }
    if !run_command(&mut test_cmd) {
        return ExitCode::FAILURE;
    }

    for board in [Board::Pico1, Board::Pico2] {
        println!("\n{}", format!("==> Building firmware ({board})...").cyan());
        if !cargo_for_board(&workspace_root, board, &["build", "--lib"]) {
            return ExitCode::FAILURE;
        }
        if !cargo_for_board(&workspace_root, board, &["build", "--example", DEMO]) {
            return ExitCode::FAILURE;
        }
    }

    println!("\n{}", "==> Building documentation...".cyan());
    if !cargo_for_board(&workspace_root, Board::Pico2, &["doc", "--no-deps"]) {
        return ExitCode::FAILURE;
    }

    println!("\n{}", "==> All checks passed!".green().bold());
    ExitCode::SUCCESS
}

fn build_lib(board: Board) -> ExitCode {
    let workspace_root = workspace_root();
    println!(
        "{}",
        format!("Building library with features: {}", board.features()).cyan()
    );

    if cargo_for_board(&workspace_root, board, &["build", "--lib"]) {
        println!("{}", "Build successful!".green());
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn build_example(name: &str, board: Board) -> ExitCode {
    let workspace_root = workspace_root();
    println!(
        "{}",
        format!(
            "Building example '{name}' with features: {}",
            board.features()
        )
        .cyan()
    );

    if cargo_for_board(&workspace_root, board, &["build", "--example", name]) {
        println!("{}", "Build successful!".green());
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn build_uf2(name: &str, board: Board) -> ExitCode {
    let workspace_root = workspace_root();
    let target = board.target();

    println!(
        "{}",
        format!("Building UF2 for example '{name}' ({board})").cyan()
    );
    println!("  Features: {}", board.features().bright_black());
    println!("  Target: {}", target.bright_black());

    if !cargo_for_board(
        &workspace_root,
        board,
        &["build", "--example", name, "--release"],
    ) {
        return ExitCode::FAILURE;
    }

    let elf_path = format!("target/{target}/release/examples/{name}");
    let uf2_path = format!("{name}.uf2");

    println!("\n{}", "Converting to UF2 format...".cyan());

    if run_command(
        Command::new("elf2uf2-rs")
            .current_dir(&workspace_root)
            .args([&elf_path, &uf2_path]),
    ) {
        println!("{}", format!("UF2 created: {uf2_path}").green().bold());
        println!("{}", "Ready to drag-and-drop to your Pico!".bright_black());
        ExitCode::SUCCESS
    } else {
        println!(
            "{}",
            "Note: Install elf2uf2-rs with: cargo install elf2uf2-rs".yellow()
        );
        ExitCode::FAILURE
    }
}

/// Runs `cargo <args>` cross-compiled for `board` with only its firmware features.
fn cargo_for_board(workspace_root: &std::path::Path, board: Board, args: &[&str]) -> bool {
    let features = board.features();
    run_command(
        Command::new("cargo")
            .current_dir(workspace_root)
            .args(args)
            .args([
                "--target",
                board.target(),
                "--features",
                &features,
                "--no-default-features",
            ]),
    )
}

fn workspace_root() -> std::path::PathBuf {
    // `cargo xtask` runs from the workspace root.
    std::env::current_dir().expect("Failed to get current directory")
}

fn host_target() -> Option<String> {
    let output = Command::new("rustc").arg("-vV").output().ok()?;
    if !output.status.success() {
        return None;
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    for line in stdout.lines() {
        if let Some(host) = line.strip_prefix("host: ") {
            return Some(host.trim().to_string());
        }
    }
    None
}

fn run_command(cmd: &mut Command) -> bool {
    match cmd.status() {
        Ok(status) => status.success(),
        Err(e) => {
            eprintln!("{}", format!("Failed to execute command: {e}").red());
            false
        }
    }
}
