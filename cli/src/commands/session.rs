use std::io::{self, BufRead};

use anyhow::Result;
use tracing::warn;
use tractmap::{Dashboard, SelectionEvent, Session};

use super::{summary, write_frame};

/// Replays events from stdin. A bad line or a failed rerun is reported and
/// the next line is read.
pub fn run(_cli: &crate::cli::Cli, args: &crate::cli::SessionArgs) -> Result<()> {
    println!("[session] opening data directory {}", args.data.display());
    let dashboard = Dashboard::open(&args.data)?;
    let mut session = Session::new(&dashboard)?;

    let frame = session.rerun()?;
    println!("[session] {}", summary(&frame));

    for line in io::stdin().lock().lines() {
        let line = line?;
        if line.trim().is_empty() || line.trim_start().starts_with('#') {
            continue;
        }

        let frame = match line.parse::<SelectionEvent>().and_then(|event| session.handle(event)) {
            Ok(frame) => frame,
            Err(err) => {
                warn!("{err:#}");
                println!("[session] rejected '{}': {err:#}", line.trim());
                continue;
            }
        };
        println!("[session] {}", summary(&frame));

        if let Some(path) = &args.output {
            write_frame(&frame, path)?;
        }
    }

    Ok(())
}
