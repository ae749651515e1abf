use std::fmt::Write as _;
use std::io::IsTerminal;

use owo_colors::OwoColorize;

use crate::analysis::AnalysisResult;
use crate::recommend::RecommendationCandidate;
use crate::tables::magnetic::Polarity;

const RULE_WIDTH: usize = 60;

fn heavy_rule() -> String {
    "=".repeat(RULE_WIDTH)
}

fn light_rule() -> String {
    "─".repeat(RULE_WIDTH)
}

fn section(out: &mut String, title: &str, use_colors: bool) {
    let _ = writeln!(out, "\n{}", light_rule());
    if use_colors {
        let _ = writeln!(out, "{}", title.bold());
    } else {
        let _ = writeln!(out, "{}", title);
    }
    let _ = writeln!(out, "{}", light_rule());
}

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Render a full analysis as a multi-section text report.
pub fn format_report(analysis: &AnalysisResult, use_colors: bool) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}", heavy_rule());
    let _ = writeln!(out, "電話號碼命理分析報告");
    let _ = writeln!(out, "{}", heavy_rule());
    let _ = writeln!(out);
    let _ = writeln!(out, "號碼: {}", analysis.phone_number);
    let _ = writeln!(out, "出生日期: {}", analysis.birthdate);

    // Magnetic fields, most frequent first
    section(&mut out, "【八大數字磁場分析】", use_colors);
    let magnetic = &analysis.magnetic_fields;
    let _ = writeln!(out, "  數字組合: {}", magnetic.pairs.join(" "));
    if magnetic.field_counts.is_empty() {
        let _ = writeln!(out, "  無特殊磁場組合");
    } else {
        let mut counts: Vec<_> = magnetic.field_counts.iter().collect();
        counts.sort_by(|a, b| b.1.cmp(a.1));
        for (kind, count) in counts {
            let field = kind.field();
            let name = format!("{} ({})", field.name, field.polarity.label());
            let name = if use_colors {
                colorize_polarity(&name, field.polarity)
            } else {
                name
            };
            let pairs: Vec<&str> = magnetic
                .matches
                .iter()
                .filter(|m| m.field == *kind)
                .map(|m| m.pair.as_str())
                .collect();
            let _ = writeln!(out, "  • {}: 出現 {} 次 [{}]", name, count, pairs.join(", "));
            let _ = writeln!(out, "    意義: {}", field.meaning);
        }
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "  磁場總分: {}", magnetic.total_score);
    let _ = writeln!(out, "  平均分數: {:.2}", magnetic.average_score);

    section(&mut out, "【八十一靈動數分析】", use_colors);
    let lingdong = &analysis.lingdong;
    let fortune = lingdong
        .fortune_class
        .map(|c| c.label())
        .unwrap_or("未知");
    let _ = writeln!(out, "  末{}碼: {}", lingdong.tail.len(), lingdong.tail);
    let _ = writeln!(out, "  數值: {}", lingdong.value);
    let _ = writeln!(out, "  靈動數: {}", lingdong.index);
    let _ = writeln!(out, "  吉凶: {}", fortune);
    let _ = writeln!(out, "  意義: {}", lingdong.meaning);
    let _ = writeln!(out, "  評分: {}", lingdong.score);

    section(&mut out, "【五行相容性分析】", use_colors);
    let elements = &analysis.five_elements;
    let _ = writeln!(out, "  出生年份: {} 年", elements.birth_year);
    let _ = writeln!(
        out,
        "  本命五行: {} ({}年)",
        elements.birth_element.label(),
        elements.birth_stem.label()
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "  號碼五行分布:");
    for score in &elements.element_scores {
        let _ = writeln!(
            out,
            "    {}: {} 個 ({}) - 得分: {}",
            score.element.label(),
            score.count,
            score.relation.label(),
            score.score
        );
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "  五行相容評分: {}", elements.compatibility_score);

    let _ = writeln!(out, "\n{}", heavy_rule());
    let _ = writeln!(out, "【綜合評分】");
    let _ = writeln!(out, "{}", heavy_rule());
    for factor in &analysis.breakdown.factors {
        let _ = writeln!(
            out,
            "  {:<9} {:>7.2} x {:.2} = {:>6.2}",
            factor.label, factor.normalized, factor.weight, factor.contribution
        );
    }
    let total = format!("{:.2}/100", analysis.final_score);
    let tier = analysis.recommendation.label();
    if use_colors {
        let _ = writeln!(out, "  總分: {}", total.bold());
        let _ = writeln!(out, "  推薦度: {}", tier.yellow());
    } else {
        let _ = writeln!(out, "  總分: {}", total);
        let _ = writeln!(out, "  推薦度: {}", tier);
    }
    let _ = writeln!(out, "{}", heavy_rule());

    out
}

fn colorize_polarity(text: &str, polarity: Polarity) -> String {
    match polarity {
        Polarity::Lucky => text.green().to_string(),
        Polarity::Neutral => text.cyan().to_string(),
        Polarity::Unlucky => text.red().to_string(),
    }
}

/// Format ranked analyses as a table: index, score, number, tier.
/// Index column: 3 chars (fits "99."), right-aligned
pub fn format_ranking_table(results: &[AnalysisResult], use_colors: bool) -> String {
    if results.is_empty() {
        return "No phone numbers to rank.".to_string();
    }

    results
        .iter()
        .enumerate()
        .map(|(idx, result)| {
            let index_str = format!("{:>2}.", idx + 1);
            let score_str = format!("{:>6.2}", result.final_score);
            let number = format!("{:<15}", result.phone_number);
            let tier = result.recommendation.label();

            if use_colors {
                format!(
                    "{} {}  {}  {}",
                    index_str.dimmed(),
                    score_str.bold(),
                    number,
                    tier.yellow()
                )
            } else {
                format!("{} {}  {}  {}", index_str, score_str, number, tier)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format ranked analyses as tab-separated values for scripting
/// Columns: score, number, stars (no headers, no colors)
pub fn format_tsv(results: &[AnalysisResult]) -> String {
    results
        .iter()
        .map(|result| {
            format!(
                "{:.2}\t{}\t{}",
                result.final_score,
                result.phone_number,
                result.recommendation.stars()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format recommended patterns, one per line.
pub fn format_recommendations(candidates: &[RecommendationCandidate], use_colors: bool) -> String {
    if candidates.is_empty() {
        return "No patterns to recommend.".to_string();
    }

    candidates
        .iter()
        .enumerate()
        .map(|(idx, c)| {
            let index_str = format!("{:>2}.", idx + 1);
            if use_colors {
                format!(
                    "{} {}  {:>3}  [{}] {}",
                    index_str.dimmed(),
                    c.pattern.bold(),
                    c.score,
                    c.category.label().cyan(),
                    c.rationale
                )
            } else {
                format!(
                    "{} {}  {:>3}  [{}] {}",
                    index_str,
                    c.pattern,
                    c.score,
                    c.category.label(),
                    c.rationale
                )
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
