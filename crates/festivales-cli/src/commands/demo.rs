use anyhow::{Context, Result};
use festivales_core::{load_bundled, load_path, parse_line, Clock, Festival};
use std::io::Write;

use crate::config::Config;

/// Sample lines, deliberately untidy to show what the parser tolerates.
const SAMPLE_LINES: [&str; 4] = [
    "Gazpatxo Rock : valencia: 28-02-2022  :1  :rock:punk : hiphop ",
    "black sound fest:badajoz:05-02-2022:  21:rock:  blues",
    "guitar bcn:barcelona: 28-01-2022 :  170:indie:pop:fusion",
    "  benidorm fest:benidorm:26-01-2022:3:indie: pop  :rock",
];

/// Print the sample festivals, a start comparison, concluded checks and the
/// whole catalog in chronological order.
pub fn run_demo<W: Write>(out: &mut W, config: &Config, clock: &dyn Clock) -> Result<()> {
    writeln!(out, "Parsing sample festivals\n")?;
    let samples = SAMPLE_LINES
        .iter()
        .map(|line| parse_line(line).with_context(|| format!("Failed to parse `{}`", line)))
        .collect::<Result<Vec<Festival>>>()?;
    for festival in &samples {
        writeln!(out, "{}", festival.display(clock))?;
    }

    writeln!(out, "\nComparing start dates\n")?;
    let (first, second) = (&samples[0], &samples[1]);
    writeln!(out, "{}", describe_start(first, second))?;

    writeln!(out, "\nChecking whether festivals have concluded\n")?;
    for festival in [&samples[3], &samples[0]] {
        writeln!(out, "{}", festival.display(clock))?;
        writeln!(
            out,
            "{} concluded? {}",
            festival.name(),
            festival.has_concluded(clock)
        )?;
    }

    let mut agenda: Vec<Festival> = Vec::new();
    let policy = config.on_malformed();
    let summary = match &config.data_file {
        Some(path) => load_path(path, &mut agenda, policy)
            .with_context(|| format!("Failed to load festivals from {}", path.display()))?,
        None => load_bundled(&mut agenda, policy).context("Failed to load bundled festivals")?,
    };
    log::info!(
        "Catalog ready: {} festivals, {} lines skipped",
        summary.loaded,
        summary.skipped
    );

    writeln!(out, "\nCatalog ({} festivals)\n", agenda.len())?;
    agenda.sort_by_key(Festival::start_date);
    for festival in &agenda {
        writeln!(out, "{}", festival.display(clock))?;
    }

    Ok(())
}

fn describe_start(a: &Festival, b: &Festival) -> String {
    if a.starts_before(b) {
        format!("{} starts before {}", a.name(), b.name())
    } else if a.starts_after(b) {
        format!("{} starts after {}", a.name(), b.name())
    } else {
        format!("{} starts the same day as {}", a.name(), b.name())
    }
}
