//! Plain-text summary table for the end of a run.

use super::csv::RunSummary;

pub fn render_summary(summary: &RunSummary) -> String {
    let name_width = summary
        .scores
        .iter()
        .map(|s| s.strategy.len())
        .chain(std::iter::once("strategy".len()))
        .max()
        .unwrap_or(8);

    let mut out = String::new();
    out.push_str(&format!(
        "run {} over {} cases\n",
        summary.run_id, summary.cases
    ));
    out.push_str(&format!(
        "{:<name_width$}  {:>6}  {:>6}  {:>6}\n",
        "strategy", "f1", "tpr", "tnr"
    ));
    for score in &summary.scores {
        out.push_str(&format!(
            "{:<name_width$}  {:>6.4}  {:>6.4}  {:>6.4}\n",
            score.strategy, score.f1, score.tpr, score.tnr
        ));
    }
    out
}

pub fn print_summary(summary: &RunSummary) {
    print!("{}", render_summary(summary));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::csv::StrategyScore;

    #[test]
    fn table_aligns_on_the_longest_name() {
        let summary = RunSummary::new(
            10,
            vec![
                StrategyScore {
                    strategy: "baseline".into(),
                    f1: 0.5,
                    tpr: 0.4,
                    tnr: 0.6,
                },
                StrategyScore {
                    strategy: "counterfactual-debate-extended".into(),
                    f1: 1.0,
                    tpr: 1.0,
                    tnr: 1.0,
                },
            ],
        );
        let rendered = render_summary(&summary);
        assert!(rendered.contains("over 10 cases"));
        assert!(rendered.contains("counterfactual-debate-extended  1.0000"));
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 4);
        // Right-aligned header "f1" ends where the 6-wide score field ends.
        assert_eq!(lines[1].find("f1"), lines[2].find("0.").map(|i| i + 4));
    }
}
