use std::{
    fs,
    io::{self, stdout},
    path::PathBuf,
    process::ExitCode,
    time::Instant,
};

use clap::{Parser, Subcommand};
use crossterm::{
    cursor::{MoveLeft, MoveRight, MoveUp},
    execute,
    style::{Attribute, Color as TermColor, SetBackgroundColor, Stylize},
};
use rubik_solver::{
    constants::{DEFAULT_TIMEOUT_SECS, MAX_TOTAL_DEPTH},
    cubie::CubieCube,
    error::Error,
    facelet::{Color, FaceCube},
    scramble::{random_scramble, scramble_to_str},
    solver::solve_cube,
};
use spinners::{Spinner, Spinners};

#[derive(Parser)]
#[command(author, version, about = "two-phase solver for the 3x3 Rubik's cube")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to the 9-line facelet net describing the scramble.
    input: Option<PathBuf>,

    /// Path the solution (or an empty line) is written to.
    output: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(about = "generate a random scramble")]
    Scramble {
        #[arg(short, long, default_value_t = 20)]
        length: usize,
        #[arg(short, long)]
        preview: bool,
    },
}

fn run_solve(input: PathBuf, output: PathBuf) -> Result<(), Error> {
    let net = fs::read_to_string(&input)?;
    let face = FaceCube::from_net(&net)?;
    let cube = CubieCube::try_from(&face)?;

    let mut spinner = Spinner::new(Spinners::Dots, "Solving".to_owned());
    let start = Instant::now();
    let solution = solve_cube(&cube, MAX_TOTAL_DEPTH, DEFAULT_TIMEOUT_SECS)?;
    let elapsed = start.elapsed();
    spinner.stop_with_newline();

    let line = solution
        .as_ref()
        .map(|ms| ms.iter().map(|m| m.to_string()).collect::<String>())
        .unwrap_or_default();
    fs::write(&output, format!("{line}\n"))?;

    match &solution {
        Some(ms) => println!("Solved in {} quarter-turns ({elapsed:?}).", ms.len()),
        None => println!("No solution found within the time budget ({elapsed:?})."),
    }
    Ok(())
}

fn color_to_termcolor(color: Color) -> TermColor {
    match color {
        Color::U => TermColor::DarkYellow,
        Color::R => TermColor::Magenta,
        Color::F => TermColor::Green,
        Color::D => TermColor::White,
        Color::L => TermColor::Red,
        Color::B => TermColor::Blue,
    }
}

fn print_face(face: &[Color], offset: u16) -> Result<(), io::Error> {
    for i in 0..3 {
        let layer = format!(
            "{}  {}  {}  {}",
            SetBackgroundColor(color_to_termcolor(face[3 * i])),
            SetBackgroundColor(color_to_termcolor(face[3 * i + 1])),
            SetBackgroundColor(color_to_termcolor(face[3 * i + 2])),
            SetBackgroundColor(TermColor::Reset)
        );
        println!("{layer}");
        if offset != 0 {
            execute!(stdout(), MoveRight(offset))?;
        }
    }
    Ok(())
}

fn print_facelet(facelet: &FaceCube) -> Result<(), io::Error> {
    let out = stdout();
    println!();
    execute!(&out, MoveRight(6))?;
    print_face(&facelet.f[0..9], 6)?; // U
    execute!(&out, MoveLeft(6))?;
    print_face(&facelet.f[36..45], 0)?; // L
    execute!(&out, MoveRight(6), MoveUp(3))?;
    print_face(&facelet.f[18..27], 6)?; // F
    execute!(&out, MoveLeft(12), MoveUp(3), MoveRight(12))?;
    print_face(&facelet.f[9..18], 12)?; // R
    execute!(&out, MoveLeft(12), MoveUp(3), MoveRight(18))?;
    print_face(&facelet.f[45..54], 18)?; // B
    execute!(&out, MoveLeft(12))?;
    print_face(&facelet.f[27..36], 6)?; // D
    execute!(&out, MoveLeft(12))?;
    println!();
    Ok(())
}

fn run_scramble(length: usize, preview: bool) -> Result<(), Error> {
    let moves = random_scramble(length);
    let cube = CubieCube::default().apply_moves(&moves);
    println!("Scramble: {}", scramble_to_str(&moves));
    if preview {
        let face = FaceCube::from(&cube);
        print_facelet(&face)?;
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Scramble { length, preview }) => run_scramble(length, preview),
        None => match (cli.input, cli.output) {
            (Some(input), Some(output)) => run_solve(input, output),
            _ => {
                eprintln!("usage: solve <input-file> <output-file>");
                return ExitCode::from(2);
            }
        },
    };

    if let Err(error) = result {
        let styled = "Error:".with(TermColor::Red).attribute(Attribute::Bold);
        eprintln!("{styled} {error}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
