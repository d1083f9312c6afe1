use clap::{ArgAction, Parser};

use softboard::session::Session;
use softboard::settings::TomlSettingsStore;
use softboard::sink::BufferSink;
use softboard::keycodes;

#[derive(Parser, Debug)]
#[command(name = "softboard")]
#[command(version, about = "Soft-keyboard input-method engine with one-handed mode")]
struct Cli {
    /// Feed a space-separated list of primary codes through one session.
    /// Accepts integers, single characters, or the names shift, switch,
    /// done, del
    #[arg(long, value_name = "CODES")]
    codes: Option<String>,

    /// Feed each character of TEXT as its own key press
    #[arg(long, value_name = "TEXT")]
    text: Option<String>,

    /// Print the computed keyboard frame for a WxH screen and exit
    #[arg(long, value_name = "WxH")]
    frame: Option<String>,

    /// Display density (pixels per dip) used with --frame
    #[arg(long, default_value_t = 1.0)]
    density: f32,

    /// Print each interpreted action while feeding keys
    #[arg(long, short = 't', action = ArgAction::SetTrue)]
    trace: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let store = TomlSettingsStore::new()?;
    let mut session = Session::new(store)?;

    if let Some(spec) = &cli.frame {
        let (width, height) = parse_screen(spec)?;
        let frame = session.frame(width, cli.density);
        let content_height = (session.settings().height_dp as f32 * cli.density).round() as i32;
        let rect = frame.resolve(width, height, content_height);
        println!("frame: {frame:?}");
        println!("rect:  {rect:?}");
        return Ok(());
    }

    let codes: Vec<i32> = match (&cli.codes, &cli.text) {
        (Some(codes), _) => codes
            .split_whitespace()
            .map(parse_code)
            .collect::<anyhow::Result<_>>()?,
        (None, Some(text)) => text.chars().map(|c| c as i32).collect(),
        (None, None) => {
            // No flags: show usage
            println!("softboard: soft-keyboard input-method engine");
            println!();
            println!("Usage:");
            println!("  softboard --codes \"shift h i del done\"   Feed primary codes");
            println!("  softboard --text \"hello\"                 Feed plain characters");
            println!("  softboard --frame 1080x2400               Print one-handed geometry");
            println!("  softboard --help                          Show help");
            return Ok(());
        }
    };

    let mut sink = BufferSink::new();
    for code in codes {
        let action = session.dispatch_key(code, Some(&mut sink));
        if cli.trace {
            println!("{code:>5} -> {action:?}");
        }
    }

    println!("text: {}", sink.text);
    log::info!(
        "session end: layout {}, shift {}, {} sink events",
        session.state().layout,
        session.state().shift.active,
        sink.events.len()
    );

    Ok(())
}

/// Parses one `--codes` token: an integer, a named control key, or a single
/// character standing for its own code.
fn parse_code(token: &str) -> anyhow::Result<i32> {
    match token {
        "shift" => Ok(keycodes::KEYCODE_SHIFT),
        "switch" => Ok(keycodes::KEYCODE_SWITCH_LAYOUT),
        "done" => Ok(keycodes::KEYCODE_DONE),
        "del" => Ok(keycodes::KEYCODE_DELETE),
        "space" => Ok(' ' as i32),
        _ => {
            if let Ok(code) = token.parse::<i32>() {
                return Ok(code);
            }
            let mut chars = token.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Ok(c as i32),
                _ => anyhow::bail!("unrecognized key token '{token}'"),
            }
        }
    }
}

/// Parses a `WxH` screen size like `1080x2400`.
fn parse_screen(spec: &str) -> anyhow::Result<(i32, i32)> {
    let (w, h) = spec
        .split_once('x')
        .ok_or_else(|| anyhow::anyhow!("screen size must look like 1080x2400"))?;
    Ok((w.trim().parse()?, h.trim().parse()?))
}
