//! Text report rendering for team and season statistics
//!
//! All formatters are pure and total: they never fail, they only omit
//! sections whose source fields are absent. Presence is tested
//! explicitly so a present-but-zero value still renders.

use serde_json::Value;

use crate::models::Team;

/// Render a single team record as a fixed eight-line report.
pub fn format_team(team: &Team) -> String {
    [
        format!("Team {}: {}", team.team, team.name),
        format!("Country: {}", team.country),
        format!("State: {}", team.state.as_deref().unwrap_or("N/A")),
        format!("District: {}", team.district.as_deref().unwrap_or("N/A")),
        format!("Rookie Year: {}", team.rookie_year),
        format!("Active: {}", if team.active { "Yes" } else { "No" }),
        format!(
            "Record: {}-{}-{} (Games: {}, Winrate: {:.1}%)",
            team.record.wins,
            team.record.losses,
            team.record.ties,
            team.record.count,
            team.record.winrate * 100.0
        ),
        format!(
            "EPA (current/recent/mean/max): {:.2}/{:.2}/{:.2}/{:.2}",
            team.norm_epa.current, team.norm_epa.recent, team.norm_epa.mean, team.norm_epa.max
        ),
    ]
    .join("\n")
}

/// Render a list of team records with a count summary.
pub fn format_teams_list(teams: &[Team]) -> String {
    if teams.is_empty() {
        return "No teams found matching the given filters.".to_string();
    }
    let blocks: Vec<String> = teams.iter().map(format_team).collect();
    format!("Found {} teams:\n\n{}", teams.len(), blocks.join("\n\n"))
}

/// Render season statistics from Statbotics' open per-year schema.
///
/// Every section is conditionally emitted: the field set varies by
/// season, and absence of a field drops that part of the report rather
/// than failing. Non-object input yields a literal "No data available.".
pub fn format_year_stats(data: &Value) -> String {
    let Some(stats) = data.as_object() else {
        return "No data available.".to_string();
    };
    let mut lines: Vec<String> = Vec::new();

    let year = stats
        .get("year")
        .map(render_value)
        .unwrap_or_else(|| "undefined".to_string());
    lines.push(format!("=== FRC {year} Season Statistics ==="));
    lines.push(String::new());

    let breakdown = stats.get("breakdown").and_then(Value::as_object);

    // Overall scoring stats
    if let Some(score_mean) = stats.get("score_mean") {
        lines.push("📊 OVERALL SCORING".to_string());
        let score_sd = stats
            .get("score_sd")
            .map(render_value)
            .unwrap_or_else(|| "N/A".to_string());
        lines.push(format!(
            "Average Score: {} ± {}",
            render_value(score_mean),
            score_sd
        ));
        if let Some(no_foul) = breakdown.and_then(|b| b.get("no_foul_mean")) {
            lines.push(format!("Score (no fouls): {}", render_value(no_foul)));
        }
        if let Some(foul) = breakdown.and_then(|b| b.get("foul_mean")) {
            lines.push(format!("Average Fouls: {} points", render_value(foul)));
        }
        lines.push(String::new());
    }

    // Game phase breakdown
    if let Some(breakdown) = breakdown {
        lines.push("🎮 GAME PHASE BREAKDOWN".to_string());
        if let Some(auto) = breakdown.get("auto_points_mean") {
            lines.push(format!("Autonomous: {} points", render_value(auto)));
        }
        if let Some(teleop) = breakdown.get("teleop_points_mean") {
            lines.push(format!("Teleoperated: {} points", render_value(teleop)));
        }
        if let Some(endgame) = breakdown.get("endgame_points_mean") {
            lines.push(format!("Endgame: {} points", render_value(endgame)));
        }
        lines.push(String::new());

        // Game-specific stats: generic fallback for fields that change
        // every season, filtered through a denylist of keys already
        // covered elsewhere (or never worth surfacing)
        lines.push("🎯 GAME ELEMENT AVERAGES".to_string());
        for (key, value) in breakdown {
            if is_excluded_element_key(key) {
                continue;
            }
            lines.push(format!("{}: {}", humanize_key(key), render_value(value)));
        }
        lines.push(String::new());

        // Ranking points
        if breakdown.contains_key("rp_1_mean") || breakdown.contains_key("rp_2_mean") {
            lines.push("🏆 RANKING POINTS".to_string());
            if let Some(rate) = breakdown.get("rp_1_mean").and_then(Value::as_f64) {
                lines.push(format!("RP 1: {:.1}% achievement rate", rate * 100.0));
            }
            if let Some(rate) = breakdown.get("rp_2_mean").and_then(Value::as_f64) {
                lines.push(format!("RP 2: {:.1}% achievement rate", rate * 100.0));
            }
            lines.push(String::new());
        }
    }

    // Top percentiles for key metrics
    if let Some(percentiles) = stats.get("percentiles").and_then(Value::as_object) {
        lines.push("📈 PERFORMANCE PERCENTILES (Top 10% / Top 25% / Bottom 25%)".to_string());
        for metric in ["total_points", "auto_points", "teleop_points", "endgame_points"] {
            if let Some(table) = percentiles.get(metric).and_then(Value::as_object) {
                let at = |p: &str| {
                    table
                        .get(p)
                        .map(render_value)
                        .unwrap_or_else(|| "N/A".to_string())
                };
                lines.push(format!(
                    "{}: {}+ / {}+ / {}+",
                    humanize_key(metric),
                    at("p90"),
                    at("p75"),
                    at("p25")
                ));
            }
        }
        lines.push(String::new());
    }

    // Model performance metrics
    if let Some(metrics) = stats.get("metrics").and_then(Value::as_object) {
        lines.push("🤖 PREDICTION MODEL PERFORMANCE".to_string());
        if let Some(win_prob) = metrics
            .get("win_prob")
            .and_then(|m| m.get("season"))
            .and_then(Value::as_object)
        {
            let acc = win_prob.get("acc").and_then(Value::as_f64);
            let count = win_prob.get("count").and_then(Value::as_f64);
            if let (Some(acc), Some(count)) = (acc, count) {
                lines.push(format!(
                    "Win Prediction: {:.1}% accuracy ({} matches)",
                    acc * 100.0,
                    group_thousands(count as i64)
                ));
            }
        }
        if let Some(score_pred) = metrics
            .get("score_pred")
            .and_then(|m| m.get("season"))
            .and_then(Value::as_object)
        {
            let rmse = score_pred.get("rmse").and_then(Value::as_f64);
            let error = score_pred.get("error").and_then(Value::as_f64);
            if let (Some(rmse), Some(error)) = (rmse, error) {
                lines.push(format!(
                    "Score Prediction: {rmse:.1} RMSE, {error:.1} avg error"
                ));
            }
        }
        lines.push(String::new());
    }

    lines.join("\n")
}

/// Breakdown keys that never appear in the generic element list:
/// phase/total means and ranking points are rendered by name elsewhere,
/// fouls and tiebreakers are noise.
fn is_excluded_element_key(key: &str) -> bool {
    key.contains("points_mean")
        || key.contains("rp_mean")
        || key.contains("total_")
        || key.contains("foul")
        || key.contains("tiebreaker")
}

/// Turn an upstream field key into a display label: strip a trailing
/// `_mean`, underscores to spaces, capitalize each word.
fn humanize_key(key: &str) -> String {
    let stripped = key.strip_suffix("_mean").unwrap_or(key);
    stripped
        .split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render a JSON leaf the way it appears on the wire: numbers in their
/// canonical form, strings unquoted.
fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        other => other.to_string(),
    }
}

/// Comma-grouped integer rendering (12345 -> "12,345").
fn group_thousands(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if n < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}
