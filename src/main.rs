use std::io::{stderr, stdin, stdout, Write};
use std::process::exit;

use structopt::StructOpt;
use termion::raw::IntoRawMode;
use tracing::{debug, error};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod coordinate;
mod display;
mod error;
mod instruction;
mod segment;
mod wire;

use display::{Terminal, TileLog};
use error::{Error, Result};
use wire::{closest_distance, fewest_steps, Wire};

#[derive(Debug, StructOpt)]
#[structopt(name = "crossed_wires")]
struct Opts {
    /// Activate debug mode
    #[structopt(short, long)]
    debug: bool,

    /// Draw the wires after solving
    #[structopt(long)]
    draw: bool,
}

fn init_logger(debug: bool) {
    let default = if debug {
        "crossed_wires=debug"
    } else {
        "crossed_wires=warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();
}

fn run(opts: &Opts) -> Result<()> {
    let input = stdin();
    let first = Wire::read(input.lock(), 1)?;
    let second = Wire::read(input.lock(), 2)?;

    let intersections = first.intersections(&second)?;

    println!("part 1: {}", closest_distance(&intersections)?);
    println!("part 2: {}", fewest_steps(&intersections)?);

    if opts.draw {
        if opts.debug {
            display::draw(&first, &second, &mut TileLog {}, [u16::MAX, u16::MAX])?;
        } else {
            let (width, height) = termion::terminal_size()?;
            let mut screen = Terminal::new(stdout().into_raw_mode()?);
            display::draw(&first, &second, &mut screen, [width, height])?;
            drop(screen);
            println!();
        }
    }

    Ok(())
}

fn main() {
    let opts = Opts::from_args();
    init_logger(opts.debug);
    debug!(?opts, "starting");

    if let Err(err) = run(&opts) {
        error!("{}", err);
        let _ = report(&err, &mut stderr());
        exit(1);
    }
}

fn report(err: &Error, output: &mut impl Write) -> std::io::Result<()> {
    writeln!(output, "Error: {}", err)
}
