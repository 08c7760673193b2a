use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use std::io::Read as _;
use std::path::PathBuf;
use std::time::Duration;
use synthscan::report::{self, Report, VerdictReport};
use synthscan::{Engine, FileArtifact, MediaKind, Pacing, MIN_TEXT_CHARS};

#[derive(Parser, Debug)]
#[command(name = "synthscan")]
#[command(author, version, about = "Spot AI-generated images, text, and video (simulated analysis)")]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,

    /// Image or video file to analyze (optional in GUI mode)
    path: Option<PathBuf>,

    /// Launch GUI file picker (auto-enabled when double-clicked)
    #[arg(long)]
    gui: bool,

    /// Output report file (.json, .txt)
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,

    /// Fix the RNG seed for reproducible verdicts
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Skip the simulated processing delay
    #[arg(long, global = true)]
    instant: bool,

    /// Only show the verdict line
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start interactive web UI for analysis
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "3001")]
        port: u16,
    },

    /// Analyze a block of text (reads stdin when no file is given)
    Text {
        /// File containing the text to analyze
        file: Option<PathBuf>,
    },
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let mut engine = Engine::new();
    if let Some(seed) = args.seed {
        engine = engine.with_seed(seed);
    }
    if args.instant {
        engine = engine.with_pacing(Pacing::Instant);
    }

    match &args.command {
        Some(Command::Serve { port }) => {
            if let Err(e) = synthscan::serve::start(*port, engine) {
                eprintln!("Server error: {}", e);
                std::process::exit(1);
            }
        }
        Some(Command::Text { file }) => {
            let file = file.clone();
            run_text(&args, engine, file);
        }
        None => run_file(&args, engine),
    }
}

/// Analyze an image or video from the positional path (or the GUI picker).
fn run_file(args: &Args, engine: Engine) {
    // With GUI feature: launch the picker if --gui was passed OR no path
    // was provided. This makes double-click behavior "just work".
    #[cfg(feature = "gui")]
    let path = if args.gui || args.path.is_none() {
        match pick_path_gui() {
            Some(p) => p,
            None => {
                eprintln!("No file selected.");
                std::process::exit(0);
            }
        }
    } else {
        args.path.clone().unwrap()
    };

    #[cfg(not(feature = "gui"))]
    let path = if let Some(p) = args.path.clone() {
        p
    } else {
        eprintln!("Usage: synthscan <PATH>");
        eprintln!("Run 'synthscan --help' for more options.");
        eprintln!("Note: GUI mode not available in this build.");
        std::process::exit(1);
    };

    let artifact = match FileArtifact::from_path(&path) {
        Ok(artifact) => artifact,
        Err(e) => {
            eprintln!("Cannot read {}: {}", path.display(), e);
            std::process::exit(1);
        }
    };

    // Caller-side category gate: the engine itself accepts any non-empty
    // artifact, so the check happens here.
    let kind = match artifact.media_kind() {
        Some(kind) => kind,
        None => {
            eprintln!(
                "Unsupported file type for {} ({})",
                artifact.name, artifact.mime_type
            );
            eprintln!("Supported images: jpg, jpeg, png, gif, webp, bmp");
            eprintln!("Supported videos: mp4, mov, webm, mkv, avi");
            std::process::exit(1);
        }
    };

    if !args.quiet {
        eprintln!("\x1b[1msynthscan - AI Content Detector\x1b[0m");
        eprintln!("{}", "─".repeat(60));
        eprintln!("Analyzing {} {}\n", kind, artifact.name);
    }

    let verdict = match kind {
        MediaKind::Image => {
            run_analysis(args, "Analyzing image...", |rt| {
                rt.block_on(engine.analyze_image(&artifact)).map(VerdictReport::Image)
            })
        }
        MediaKind::Video => {
            run_analysis(args, "Analyzing video...", |rt| {
                rt.block_on(engine.analyze_video(&artifact)).map(VerdictReport::Video)
            })
        }
    };

    finish(args, &artifact.name, verdict);
}

/// Analyze text from a file or stdin.
fn run_text(args: &Args, engine: Engine, file: Option<PathBuf>) {
    let (body, source) = match file {
        Some(path) => match std::fs::read_to_string(&path) {
            Ok(body) => {
                let name = path
                    .file_name()
                    .and_then(|n| n.to_str())
                    .unwrap_or("text")
                    .to_string();
                (body, name)
            }
            Err(e) => {
                eprintln!("Cannot read {}: {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => {
            let mut body = String::new();
            if let Err(e) = std::io::stdin().read_to_string(&mut body) {
                eprintln!("Cannot read stdin: {}", e);
                std::process::exit(1);
            }
            (body, "stdin".to_string())
        }
    };

    // Caller-side length gate, same threshold as the web UI.
    if body.trim().chars().count() < MIN_TEXT_CHARS {
        eprintln!(
            "Text too short. Please enter at least {} characters for accurate analysis.",
            MIN_TEXT_CHARS
        );
        std::process::exit(1);
    }

    if !args.quiet {
        eprintln!("\x1b[1msynthscan - AI Content Detector\x1b[0m");
        eprintln!("{}", "─".repeat(60));
        eprintln!("Analyzing text from {} ({} chars)\n", source, body.len());
    }

    let verdict = run_analysis(args, "Analyzing text...", |rt| {
        rt.block_on(engine.analyze_text(&body)).map(VerdictReport::Text)
    });

    finish(args, &source, verdict);
}

/// Spin up a runtime, show a progress spinner while the simulated analysis
/// runs, and hand back the verdict.
fn run_analysis<F>(args: &Args, message: &str, run: F) -> VerdictReport
where
    F: FnOnce(&tokio::runtime::Runtime) -> Result<VerdictReport, synthscan::AnalysisError>,
{
    let runtime = match tokio::runtime::Builder::new_current_thread().enable_time().build() {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("Failed to start runtime: {}", e);
            std::process::exit(1);
        }
    };

    let pb = if !args.quiet && !args.instant {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg} ({elapsed})")
                .unwrap(),
        );
        pb.set_message(message.to_string());
        pb.enable_steady_tick(Duration::from_millis(100));
        Some(pb)
    } else {
        None
    };

    let outcome = run(&runtime);

    if let Some(pb) = pb {
        pb.finish_and_clear();
    }

    match outcome {
        Ok(verdict) => verdict,
        Err(e) => {
            eprintln!("Analysis failed: {}", e);
            std::process::exit(1);
        }
    }
}

/// Print the verdict card, write the report if asked, and exit with the
/// severity code (2 = AI-generated, 0 = human).
fn finish(args: &Args, source: &str, verdict: VerdictReport) {
    print_verdict(&verdict, source, args.quiet);

    if let Some(ref output) = args.output {
        let report = Report::new(source, verdict.clone());
        if let Err(e) = report::generate(output, &report) {
            eprintln!("Failed to write report: {}", e);
            std::process::exit(1);
        }
        if !args.quiet {
            eprintln!("\n\x1b[32mReport saved: {}\x1b[0m", output.display());
        }
    }

    if verdict.is_ai_generated() {
        std::process::exit(2);
    }
}

fn print_verdict(verdict: &VerdictReport, source: &str, quiet: bool) {
    let (color, tag) = if verdict.is_ai_generated() {
        ("\x1b[31m", "[AI-GENERATED]")
    } else {
        ("\x1b[32m", "[HUMAN]")
    };
    let reset = "\x1b[0m";

    println!(
        "{}{:<16}{} {:>3}%  {:>4}s  {}",
        color,
        tag,
        reset,
        verdict.confidence(),
        verdict.analysis_time(),
        source
    );

    if quiet {
        return;
    }

    println!("\n{}", verdict.narrative());
    println!("\nIndicators:");
    for phrase in verdict.indicators() {
        println!("  - {}", phrase);
    }

    if let Some(info) = verdict.video_info() {
        println!("\nVideo info:");
        println!("  File:       {}", info.file_name);
        println!("  Size:       {}", info.file_size);
        println!("  Duration:   {}", info.duration);
        println!("  Resolution: {}", info.resolution);
    }
}

#[cfg(feature = "gui")]
fn pick_path_gui() -> Option<PathBuf> {
    rfd::FileDialog::new()
        .set_title("Select an image or video to analyze")
        .add_filter("Images", &["jpg", "jpeg", "png", "gif", "webp", "bmp"])
        .add_filter("Videos", &["mp4", "mov", "webm", "mkv", "avi"])
        .pick_file()
}
