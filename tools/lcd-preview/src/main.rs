pub mod render;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::{Level, info};
use tracing_subscriber::util::SubscriberInitExt;

use come_on_lcd::{
    Lcd, Panel, Player, Window, assets,
    draw::WALK_ROW,
    emu::Ddram,
    indicator::{CirclePosition, Ring},
};

#[derive(Parser)]
#[command(name = "lcd-preview")]
#[command(version, about = "Preview Come On! LCD drawing calls in the terminal", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Show the whole panel instead of just the last addressed window
    #[arg(short, long, global = true)]
    full: bool,

    /// Dump packed bytes in hex instead of drawing pixels
    #[arg(long, global = true)]
    hex: bool,

    /// More logging (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Copy, Clone, ValueEnum)]
enum Frame {
    A,
    B,
}

#[derive(Subcommand)]
enum Commands {
    /// Wipe the panel to paper
    Clear,

    /// Flood the panel with ink
    Splash,

    /// The READY banner
    Ready,

    /// The GO banner
    Go,

    /// A walk cycle frame
    Walk {
        #[arg(value_enum)]
        frame: Frame,

        /// Packed column of the sprite's left edge
        #[arg(default_value_t = 0)]
        col: u8,
    },

    /// A health bar
    Hp {
        /// 1 or 2
        player: u8,

        health: u8,
    },

    /// A round marker
    Circle {
        /// 0-3, left to right
        position: u8,

        #[arg(long)]
        filled: bool,
    },

    /// An inked rectangle, in packed columns and rows (inclusive)
    Rectangle { x1: u8, y1: u8, x2: u8, y2: u8 },

    /// A mid-round screen using every drawing call
    Scene {
        #[arg(default_value_t = 30)]
        p1: u8,

        #[arg(default_value_t = 12)]
        p2: u8,
    },

    /// List the compiled-in sprites
    Sprites,
}

fn setup_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .compact()
        .finish()
        .init();
}

fn draw(lcd: &mut Lcd<Ddram>, command: &Commands) -> Result<()> {
    match command {
        Commands::Clear => lcd.draw_clear()?,
        Commands::Splash => lcd.draw_splash()?,
        Commands::Ready => lcd.draw_ready()?,
        Commands::Go => lcd.draw_go()?,
        Commands::Walk { frame: Frame::A, col } => lcd.draw_walk_a(*col, WALK_ROW)?,
        Commands::Walk { frame: Frame::B, col } => lcd.draw_walk_b(*col, WALK_ROW)?,
        Commands::Hp { player, health } => {
            let player = Player::try_from(*player)
                .map_err(|e| anyhow::anyhow!("no player {}, expected 1 or 2", e.0))?;
            lcd.draw_hp(player, *health)?
        }
        Commands::Circle { position, filled } => {
            lcd.draw_circle_index(*position, *filled as u8)
                .with_context(|| format!("drawing circle {position}"))?
        }
        Commands::Rectangle { x1, y1, x2, y2 } => lcd.draw_rectangle(*x1, *y1, *x2, *y2)?,
        Commands::Scene { p1, p2 } => {
            lcd.draw_clear()?;
            lcd.draw_hp(Player::One, *p1)?;
            lcd.draw_hp(Player::Two, *p2)?;
            for (i, position) in CirclePosition::ALL.into_iter().enumerate() {
                lcd.draw_circle(position, Ring::from(i == 0))?;
            }
            lcd.draw_go()?;
            lcd.draw_walk_a(4, WALK_ROW)?;
            lcd.draw_walk_b(32, WALK_ROW)?;
        }
        Commands::Sprites => bail!("nothing to draw"),
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    if let Commands::Sprites = cli.command {
        for sprite in assets::ALL {
            println!(
                "{:<14} {:>3} x {:<3} px  {:>2} bytes x {:<2} rows  {:>3} bytes",
                sprite.name,
                sprite.width_pixels(),
                sprite.height_rows,
                sprite.width_bytes,
                sprite.height_rows,
                sprite.byte_count()
            );
        }
        return Ok(());
    }

    let mut lcd = Lcd::new(Ddram::new(Panel::default()));
    draw(&mut lcd, &cli.command)?;
    let ram = lcd.release();

    let stats = ram.stats();
    info!(
        data_bytes = stats.data_writes,
        windows = stats.memory_writes,
        "drawn"
    );

    let window: Window = if cli.full { ram.panel().full_window() } else { ram.window() };
    let out = if cli.hex {
        render::hex(&ram, &window)
    } else {
        render::pixels(&ram, &window)
    };
    print!("{out}");
    Ok(())
}
