//! `EQUIL` keyword template.
//!
//! Grammar (version 1):
//!
//! ```text
//! EQUIL
//! -- DATUM_DEPTH DATUM_PRESSURE CONTACT_DEPTH PC_CONTACT GOC_DEPTH PC_GOC
//! -- EQLNUM <id>: <name>=<value> ...
//! <datum depth> <datum pressure> <owc, gwc or 1*> 0 <goc or 1*> 0 1* 1* 1* /
//! ```
//!
//! Recognised names are `datum_pressure`, `owc_depth`, `gwc_depth` and
//! `goc_depth`. Only `datum_pressure` is required per region; absent contact
//! depths are left to the simulator default `1*`. Any other name, or both
//! `owc_depth` and `gwc_depth` in one region, is rejected.
//!
//! The `-- EQLNUM` comment line is written only when
//! [`DeckFormat::region_comments`] is set. Capillary pressures at the
//! contacts are fixed at zero; the trailing initialisation items are left
//! at their simulator defaults.

use super::{EquilContext, RegionValues};
use crate::error::DeckError;
use crate::format::DeckFormat;
use crate::Result;
use std::fmt::Write;

/// Registered name of the equilibration template.
pub const EQUIL_TEMPLATE: &str = "EQUIL";

const DEFAULT_ITEM: &str = "1*";
const VARIABLES: [&str; 4] = ["datum_pressure", "owc_depth", "gwc_depth", "goc_depth"];
const HEADER: &str = "-- DATUM_DEPTH DATUM_PRESSURE CONTACT_DEPTH PC_CONTACT GOC_DEPTH PC_GOC";

fn undefined(name: &str, region_index: usize) -> DeckError {
    DeckError::UndefinedVariable {
        template: EQUIL_TEMPLATE.to_string(),
        name: name.to_string(),
        region_index,
    }
}

fn check_names(region: &RegionValues, region_index: usize) -> Result<()> {
    if let Some((name, _)) = region
        .values
        .iter()
        .find(|(name, _)| !VARIABLES.contains(&name.as_str()))
    {
        return Err(DeckError::UnknownVariable {
            template: EQUIL_TEMPLATE.to_string(),
            name: name.clone(),
            region_index,
        });
    }
    if region.get("owc_depth").is_some() && region.get("gwc_depth").is_some() {
        return Err(DeckError::ConflictingVariables {
            template: EQUIL_TEMPLATE.to_string(),
            first: "owc_depth".to_string(),
            second: "gwc_depth".to_string(),
            region_index,
        });
    }
    Ok(())
}

pub(super) fn render(context: &EquilContext, format: &DeckFormat) -> Result<String> {
    let datum_depth = context
        .datum_depth
        .map_or_else(|| DEFAULT_ITEM.to_string(), |d| format.float(d));

    // Writing into a String cannot fail.
    let mut out = String::new();
    let _ = writeln!(out, "{}", EQUIL_TEMPLATE);
    let _ = writeln!(out, "{}", HEADER);

    for index in 0..context.nr_eqlnum {
        let region = context
            .parameters
            .get(index)
            .ok_or_else(|| undefined("parameters", index))?;
        check_names(region, index)?;

        let pressure = region
            .get("datum_pressure")
            .ok_or_else(|| undefined("datum_pressure", index))?;
        let contact = region
            .get("owc_depth")
            .or_else(|| region.get("gwc_depth"))
            .map_or_else(|| DEFAULT_ITEM.to_string(), |d| format.float(d));
        let goc = region
            .get("goc_depth")
            .map_or_else(|| DEFAULT_ITEM.to_string(), |d| format.float(d));

        if format.region_comments {
            let listed: Vec<String> = region
                .values
                .iter()
                .map(|(name, value)| format!("{}={}", name, format.float(*value)))
                .collect();
            let _ = writeln!(out, "-- EQLNUM {}: {}", region.eqlnum, listed.join(" "));
        }

        let _ = writeln!(
            out,
            "{} {} {} 0 {} 0 {} {} {} /",
            datum_depth,
            format.float(pressure),
            contact,
            goc,
            DEFAULT_ITEM,
            DEFAULT_ITEM,
            DEFAULT_ITEM,
        );
    }

    Ok(out)
}
