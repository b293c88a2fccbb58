use clap::{ArgAction, Parser, Subcommand};
use luna_phase::{
    CivilTime, MoonPhase, OcclusionRect, ShadowDescriptor, compute_moon_phase, meaning_for,
    phase_for_age, shadow_for,
};
use serde::Serialize;

#[derive(Parser)]
#[command(name = "luna", about = "Lunar phase calculator")]
struct Cli {
    /// Raise log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Moon phase, illumination and age for a date (default: now)
    Phase {
        /// Civil datetime (YYYY-MM-DDThh:mm:ss); omitted = wall clock
        #[arg(long)]
        date: Option<String>,
        /// Read the wall clock in UTC instead of local time
        #[arg(long)]
        utc: bool,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Julian Day for a civil datetime
    Jd {
        /// Civil datetime (YYYY-MM-DDThh:mm:ss)
        #[arg(long)]
        date: String,
    },
    /// Interpretive meaning for a moon age
    Meaning {
        /// Moon age in days since new moon
        #[arg(allow_negative_numbers = true)]
        age: f64,
    },
    /// Shadow geometry for drawing the moon disc
    Shadow {
        /// Civil datetime (YYYY-MM-DDThh:mm:ss); omitted = wall clock
        #[arg(long)]
        date: Option<String>,
        /// Read the wall clock in UTC instead of local time
        #[arg(long)]
        utc: bool,
        /// Disc radius in renderer units
        #[arg(long, default_value = "120", allow_negative_numbers = true)]
        radius: f64,
        /// Disc centre x
        #[arg(long, default_value = "150", allow_negative_numbers = true)]
        cx: f64,
        /// Disc centre y
        #[arg(long, default_value = "150", allow_negative_numbers = true)]
        cy: f64,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

#[derive(Serialize)]
struct PhaseReport {
    time: CivilTime,
    #[serde(flatten)]
    phase: MoonPhase,
    name: &'static str,
    symbol: &'static str,
    meaning: &'static str,
}

#[derive(Serialize)]
struct ShadowReport {
    time: CivilTime,
    age: f64,
    #[serde(flatten)]
    shadow: ShadowDescriptor,
    clip: OcclusionRect,
}

fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .try_init();
}

fn resolve_time(date: Option<&str>, utc: bool) -> CivilTime {
    match date {
        Some(s) => s.parse().unwrap_or_else(|e| {
            eprintln!("{e}");
            std::process::exit(1);
        }),
        None if utc => CivilTime::now_utc(),
        None => CivilTime::now_local(),
    }
}

fn require_finite(name: &str, value: f64) -> f64 {
    if !value.is_finite() {
        eprintln!("Invalid {name}: {value} (must be finite)");
        std::process::exit(1);
    }
    value
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{s}"),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

fn format_dmy_hm(t: &CivilTime) -> String {
    format!(
        "{:02}/{:02}/{:04} {:02}:{:02}",
        t.day, t.month, t.year, t.hour, t.minute
    )
}

fn phase_lines(t: &CivilTime, phase: &MoonPhase) -> Vec<String> {
    vec![
        format!("{} {}", phase.symbol(), phase.name()),
        format!("Illumination: {:.1}%", phase.illuminated),
        format!("Moon age: {:.1} days", phase.age),
        format!("Date: {}", format_dmy_hm(t)),
        phase.meaning().to_string(),
    ]
}

fn shadow_lines(shadow: &ShadowDescriptor, clip: &OcclusionRect) -> Vec<String> {
    vec![
        format!("Shadow side: {}", shadow.side.name()),
        format!("Terminator offset: {:+.4} radii", shadow.offset_fraction),
        format!(
            "Clip rect: x={:.2} y={:.2} w={:.2} h={:.2}",
            clip.x, clip.y, clip.width, clip.height
        ),
    ]
}

fn main() {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    match cli.command {
        Commands::Phase { date, utc, json } => {
            let t = resolve_time(date.as_deref(), utc);
            log::info!("phase for {t}");
            let phase = compute_moon_phase(&t);
            if json {
                print_json(&PhaseReport {
                    time: t,
                    phase,
                    name: phase.name(),
                    symbol: phase.symbol(),
                    meaning: phase.meaning(),
                });
            } else {
                for line in phase_lines(&t, &phase) {
                    println!("{line}");
                }
            }
        }

        Commands::Jd { date } => {
            let t = resolve_time(Some(date.as_str()), false);
            println!("{:.6}", t.julian_day());
        }

        Commands::Meaning { age } => {
            let age = require_finite("age", age);
            log::debug!("age {age} classifies as {}", phase_for_age(age));
            println!("{}", meaning_for(age));
        }

        Commands::Shadow {
            date,
            utc,
            radius,
            cx,
            cy,
            json,
        } => {
            let radius = require_finite("radius", radius);
            if radius < 0.0 {
                eprintln!("Invalid radius: {radius} (must not be negative)");
                std::process::exit(1);
            }
            let cx = require_finite("cx", cx);
            let cy = require_finite("cy", cy);
            let t = resolve_time(date.as_deref(), utc);
            let phase = compute_moon_phase(&t);
            let shadow = shadow_for(&phase);
            let clip = shadow.occlusion_rect(cx, cy, radius);
            log::info!("shadow for {t}: age {:.4} side {}", phase.age, shadow.side.name());
            if json {
                print_json(&ShadowReport {
                    time: t,
                    age: phase.age,
                    shadow,
                    clip,
                });
            } else {
                println!("{} {} (age {:.1} days)", phase.symbol(), phase.name(), phase.age);
                for line in shadow_lines(&shadow, &clip) {
                    println!("{line}");
                }
            }
        }
    }
}
