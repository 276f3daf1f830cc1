//! Bar type listing command.

use anyhow::Result;
use tickbars_lib::prelude::*;

/// Print the supported bar types and their activity measures.
pub(crate) fn list_bar_types() -> Result<()> {
    println!("Supported bar types:");
    for bar_type in BarType::all() {
        let measure = match bar_type {
            BarType::Tick => "number of trades",
            BarType::Volume => "traded volume",
            BarType::Dollar => "traded dollar value (price * volume)",
        };
        println!("  {:<8} closes a bar by {measure}", bar_type.as_str());
    }
    Ok(())
}
