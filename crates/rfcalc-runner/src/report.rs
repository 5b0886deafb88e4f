//! Human-readable rendering of calculation outcomes.

use crate::scenario::{Outcome, ScenarioReport};
use std::fmt::Write;

/// Render one outcome as indented text lines.
pub fn render_outcome(outcome: &Outcome) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = write_outcome(&mut out, outcome);
    out
}

fn write_outcome(out: &mut String, outcome: &Outcome) -> std::fmt::Result {
    match outcome {
        Outcome::Power(reading) => {
            writeln!(out, "  dB:          {:.2}", reading.db)?;
            writeln!(out, "  dBm:         {:.2}", reading.dbm)?;
            writeln!(out, "  Watts:       {:.6}", reading.watts)?;
            writeln!(out, "  Milliwatts:  {:.3}", reading.milliwatts)?;
        }
        Outcome::Dimensioning(report) => {
            writeln!(out, "  Area per AP:          {:.0} m²", report.area_per_ap_m2)?;
            writeln!(out, "  APs (coverage):       {}", report.aps_coverage)?;
            writeln!(out, "  APs (capacity):       {}", report.aps_capacity)?;
            writeln!(out, "  APs (density):        {}", report.aps_density)?;
            writeln!(out, "  Total user capacity:  {}", report.total_user_capacity)?;
            writeln!(out, "  Recommended APs:      {}", report.recommended_aps)?;
        }
        Outcome::Traffic(estimate) => {
            writeln!(
                out,
                "  Bitrate:    {:.2} bps ({:.4} Mbps)",
                estimate.bitrate_bps,
                estimate.bitrate_mbps()
            )?;
            writeln!(
                out,
                "  Bandwidth:  {:.2} bps ({:.4} Mbps)",
                estimate.bandwidth_bps,
                estimate.bandwidth_mbps()
            )?;
        }
        Outcome::Throughput {
            result,
            transmission_time,
            sweep,
        } => {
            writeln!(out, "  Shannon capacity:   {:.2} Mbps", result.shannon_capacity_mbps)?;
            writeln!(out, "  Practical speed:    {:.2} Mbps", result.practical_speed_mbps)?;
            writeln!(out, "  Transmission time:  {}", transmission_time)?;
            writeln!(out, "  {:>8} {:>14} {:>14}", "SNR(dB)", "Capacity", "Practical")?;
            for sample in sweep {
                writeln!(
                    out,
                    "  {:>8.0} {:>14.2} {:>14.2}",
                    sample.snr_db, sample.shannon_capacity_mbps, sample.practical_speed_mbps
                )?;
            }
        }
        Outcome::Link { result, sweep } => {
            writeln!(out, "  Path loss:       {:.2} dB", result.path_loss_db)?;
            writeln!(out, "  Fresnel radius:  {:.2} m", result.fresnel_radius_m)?;
            writeln!(out, "  RX power:        {:.2} dBm", result.rx_power_dbm)?;
            writeln!(out, "  Signal quality:  {}", result.quality)?;
            writeln!(out, "  {:>10} {:>14}", "Dist(m)", "Loss(dB)")?;
            for sample in sweep {
                writeln!(out, "  {:>10.0} {:>14.2}", sample.distance_m, sample.path_loss_db)?;
            }
        }
    }
    Ok(())
}

/// Render a scenario report with its name as a heading.
pub fn render_report(report: &ScenarioReport) -> String {
    match &report.result {
        Ok(outcome) => format!("[{}]\n{}", report.name, render_outcome(outcome)),
        Err(e) => format!("[{}]\n  error: {}\n", report.name, e),
    }
}
