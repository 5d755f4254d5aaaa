use anyhow::Result;
use tractmap::{AttributeCatalog, METRO_COUNTIES};

pub fn attributes() -> Result<()> {
    for spec in AttributeCatalog::global().specs() {
        println!("{:<34} {:<8} {}", spec.name, spec.color_scale.to_str(), spec.source);
    }
    Ok(())
}

pub fn counties() -> Result<()> {
    for county in &METRO_COUNTIES {
        println!("{} {}", county.fips, county.name);
    }
    Ok(())
}
