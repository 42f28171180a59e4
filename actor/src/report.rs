//! Human readable end-of-hunt summary.

use std::fmt::Write;

use haunt_core::{EvidenceKind, HunterOutcome, HuntReport};

const RULE: &str = "--------------------------------";

/// Render the summary printed once every actor has left.
pub fn render(report: &HuntReport) -> Result<String, std::fmt::Error> {
    let mut out = String::new();
    write_summary(&mut out, report)?;
    Ok(out)
}

fn write_summary(out: &mut String, report: &HuntReport) -> std::fmt::Result {
    writeln!(out, "{}", RULE)?;
    writeln!(out, "All done! Let's see the results:")?;
    writeln!(out, "{}", RULE)?;

    match report.identified_class() {
        Some(class) => {
            writeln!(out, "The ghost was discovered to be a {}.", class)?;
            writeln!(out, "The hunters were able to determine the type of ghost!")?;
            writeln!(out, "The hunters have won the game.")?;
        }
        None => {
            writeln!(out, "The ghost won and will continue to haunt the house.")?;
        }
    }
    writeln!(out)?;

    writeln!(out, "Hunters found the following evidence:")?;
    write_evidence(out, &report.collected)?;
    writeln!(out)?;

    writeln!(out, "The evidence needed for the ghost is:")?;
    write_evidence(out, &report.profile)?;
    writeln!(out)?;

    write_hunters(
        out,
        "The following hunters became too bored to continue the hunt:",
        report.bored_hunters(),
    )?;
    write_hunters(
        out,
        "The following hunters became too scared to continue the hunt:",
        report.scared_hunters(),
    )?;
    Ok(())
}

fn write_evidence(out: &mut String, evidence: &[EvidenceKind]) -> std::fmt::Result {
    if evidence.is_empty() {
        return writeln!(out, "- (none)");
    }
    for kind in evidence {
        writeln!(out, "- {}", kind)?;
    }
    Ok(())
}

fn write_hunters<'a>(
    out: &mut String,
    heading: &str,
    hunters: impl Iterator<Item = &'a HunterOutcome>,
) -> std::fmt::Result {
    let mut hunters = hunters.peekable();
    if hunters.peek().is_none() {
        return Ok(());
    }
    writeln!(out, "{}", heading)?;
    for hunter in hunters {
        writeln!(out, "- {}", hunter.name)?;
    }
    writeln!(out)
}
