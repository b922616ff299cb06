use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

use dispfade::{
    Canvas, Engine, EngineOpts, FrameRgba, PointerEvent, Texture, TextureSet, render_frame,
};

#[derive(Parser, Debug)]
#[command(name = "dispfade", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a single frame at a fixed transition value.
    Frame(FrameArgs),
    /// Simulate a pointer timeline and write a PNG sequence.
    Hover(HoverArgs),
}

#[derive(Parser, Debug)]
struct FrameArgs {
    #[command(flatten)]
    inputs: InputImages,

    /// Transition value in [0,1].
    #[arg(long, default_value_t = 0.0)]
    trans: f64,

    /// Square output edge in pixels.
    #[arg(long, default_value_t = 450)]
    size: u32,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct HoverArgs {
    #[command(flatten)]
    inputs: InputImages,

    /// Gesture timeline JSON: a list of `{"at": secs, "event": "enter"|"leave"}`.
    #[arg(long)]
    timeline: PathBuf,

    /// Frames per second of the simulated render loop.
    #[arg(long, default_value_t = 30)]
    fps: u32,

    /// Total simulated duration in seconds. Defaults to the last gesture
    /// plus one tween length.
    #[arg(long)]
    secs: Option<f64>,

    /// Square output edge in pixels.
    #[arg(long, default_value_t = 450)]
    size: u32,

    /// Output directory for the PNG sequence.
    #[arg(long)]
    out_dir: PathBuf,
}

#[derive(Parser, Debug)]
struct InputImages {
    /// Start image (fully visible at transition 0).
    #[arg(long)]
    image_a: PathBuf,

    /// End image (fully visible at transition 1).
    #[arg(long)]
    image_b: PathBuf,

    /// Grayscale displacement map.
    #[arg(long)]
    disp: PathBuf,
}

#[derive(serde::Deserialize, Debug, Clone, Copy)]
struct Gesture {
    at: f64,
    event: PointerEvent,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Frame(args) => run_frame(args),
        Command::Hover(args) => run_hover(args),
    }
}

fn load_texture(path: &Path) -> anyhow::Result<Texture> {
    let bytes =
        fs::read(path).with_context(|| format!("read image '{}'", path.display()))?;
    let tex = Texture::decode(&bytes)
        .with_context(|| format!("decode image '{}'", path.display()))?;
    Ok(tex)
}

fn run_frame(args: FrameArgs) -> anyhow::Result<()> {
    let textures = TextureSet {
        image_a: load_texture(&args.inputs.image_a)?,
        image_b: load_texture(&args.inputs.image_b)?,
        displacement: load_texture(&args.inputs.disp)?,
    };

    let canvas = Canvas::square(args.size)?;
    let frame = render_frame(canvas, args.trans, &textures)?;
    save_png(&frame, &args.out)?;
    println!("wrote {}", args.out.display());
    Ok(())
}

fn run_hover(args: HoverArgs) -> anyhow::Result<()> {
    let timeline_bytes = fs::read(&args.timeline)
        .with_context(|| format!("read timeline '{}'", args.timeline.display()))?;
    let gestures: Vec<Gesture> =
        serde_json::from_slice(&timeline_bytes).context("parse gesture timeline")?;
    if !gestures.windows(2).all(|w| w[0].at <= w[1].at) {
        anyhow::bail!("gesture timeline must be sorted by 'at'");
    }
    if args.fps == 0 {
        anyhow::bail!("fps must be > 0");
    }

    let opts = EngineOpts {
        canvas: Canvas::square(args.size)?,
        ..EngineOpts::default()
    };
    let mut engine = Engine::new(
        [
            args.inputs.image_a.display().to_string(),
            args.inputs.image_b.display().to_string(),
            args.inputs.disp.display().to_string(),
        ],
        opts,
    )?;

    for (slot, path) in [&args.inputs.image_a, &args.inputs.image_b, &args.inputs.disp]
        .into_iter()
        .enumerate()
    {
        match fs::read(path) {
            Ok(bytes) => engine.fulfill_texture(slot, &bytes)?,
            Err(e) => engine.fail_texture(slot, e.to_string())?,
        }
    }

    let end = args.secs.unwrap_or_else(|| {
        gestures.last().map_or(0.0, |g| g.at) + dispfade::DEFAULT_DURATION
    });
    let frame_count = ((end * f64::from(args.fps)).ceil() as u64).max(1);

    fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("create output dir '{}'", args.out_dir.display()))?;

    let mut pending = gestures.iter();
    let mut next_gesture = pending.next();
    for i in 0..frame_count {
        let now = i as f64 / f64::from(args.fps);
        while let Some(g) = next_gesture {
            if g.at > now {
                break;
            }
            engine.pointer(g.event, g.at);
            next_gesture = pending.next();
        }

        let Some(frame) = engine.tick(now)? else {
            anyhow::bail!("engine did not start: textures incomplete");
        };
        let path = args.out_dir.join(format!("frame_{i:05}.png"));
        save_png(&frame, &path)?;
    }

    println!(
        "wrote {frame_count} frames to {}",
        args.out_dir.display()
    );
    Ok(())
}

fn save_png(frame: &FrameRgba, path: &Path) -> anyhow::Result<()> {
    let img = image::RgbaImage::from_raw(frame.width, frame.height, frame.rgba8.clone())
        .context("frame buffer does not match its dimensions")?;
    img.save(path)
        .with_context(|| format!("write png '{}'", path.display()))?;
    Ok(())
}
