//! Deterministic forecast summary used when no collaborator narrative is
//! available

use crate::analyzer_core::insight::fmt_stat;
use crate::analyzer_core::monthly::{MetricMonthly, MetricMonthlyFull};
use crate::analyzer_core::table::MetricMap;

/// Render the merged forecast statistics and the historical votable-supply
/// series as markdown
pub fn render_forecast_summary(
    forecast_stats: &MetricMap<MetricMonthlyFull>,
    vs_history: &MetricMonthly,
) -> String {
    let mut out = String::from("# Token Metrics Forecast Summary\n");

    for (metric, entry) in forecast_stats.iter() {
        out.push_str(&format!("\n## {} Forecast\n", metric.column_name()));
        for (label, month) in entry.monthly_data.iter() {
            out.push_str(&format!(
                "- {}: avg {}, min {}, max {}, median {}, std {}\n",
                label,
                fmt_stat(month.avg),
                fmt_stat(month.min),
                fmt_stat(month.max),
                fmt_stat(month.median),
                fmt_stat(month.std),
            ));
        }
        let overall = &entry.overall_stats;
        out.push_str(&format!(
            "- Overall: avg {}, min {}, max {}, median {}, std {}\n",
            fmt_stat(overall.avg),
            fmt_stat(overall.min),
            fmt_stat(overall.max),
            fmt_stat(overall.median),
            fmt_stat(overall.std),
        ));
    }

    out.push_str("\n## Historical Votable Supply by Month\n");
    for (label, month) in vs_history.monthly_data.iter() {
        out.push_str(&format!(
            "- {}: avg {}, max {}\n",
            label,
            fmt_stat(month.avg),
            fmt_stat(month.max)
        ));
    }
    out.push_str(&format!(
        "- Overall: mean {}, max {}\n",
        fmt_stat(vs_history.overall_stats.mean),
        fmt_stat(vs_history.overall_stats.max)
    ));

    out
}
