use anyhow::Result;
use tractmap::{Dashboard, SelectionEvent, Session};

use super::{summary, write_frame};

pub fn run(_cli: &crate::cli::Cli, args: &crate::cli::RenderArgs) -> Result<()> {
    let out_path = &args.output.clone().unwrap_or("./frame.geojson".into());

    println!("[render] opening data directory {}", args.data.display());
    let dashboard = Dashboard::open(&args.data)?;

    let mut session = Session::new(&dashboard)?;
    if let Some(attribute) = &args.attribute {
        session.apply(SelectionEvent::SelectAttribute(attribute.clone()))?;
    }
    if let Some(county) = &args.county {
        session.apply(SelectionEvent::SelectCounty(county.clone()))?;
    }

    let frame = session.rerun()?;
    println!("[render] {}", summary(&frame));

    println!("[render] writing frame to {}", out_path.display());
    write_frame(&frame, out_path)
}
