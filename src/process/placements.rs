use crate::error::ScrapeError;

/// A dense competitive rank (1 = best), or `None` when the athlete has no
/// placement recorded for the event.
pub type RankValue = Option<u32>;

/// Tokens the source uses for "no placement recorded". The second entry is
/// the en dash some seasons render instead of the ASCII hyphen.
const ABSENT_SENTINELS: &[&str] = &["-", "\u{2013}"];

fn clean_token(raw: &str) -> String {
    // Drop the trailing requalification marker and thousands separators.
    raw.replace(['*', ','], "").trim().to_string()
}

fn is_absent(token: &str) -> bool {
    ABSENT_SENTINELS.contains(&token)
}

/// Convert one event column of raw placement tokens into dense ranks.
///
/// Raw cells hold either already-ranked positions or point totals depending
/// on season and event, so the literal values are meaningless across
/// columns. Ranks are re-derived per column: every distinct non-absent
/// value becomes an entry in a descending rank table, and each row maps to
/// its value's position in that table (highest value → rank 1). A token
/// that is neither a sentinel nor an integer fails the whole column.
pub fn normalize_column(column: &str, values: &[String]) -> Result<Vec<RankValue>, ScrapeError> {
    let mut scores: Vec<Option<i64>> = Vec::with_capacity(values.len());
    for raw in values {
        let token = clean_token(raw);
        if is_absent(&token) {
            scores.push(None);
            continue;
        }
        let score = token.parse::<i64>().map_err(|_| ScrapeError::DataFormat {
            column: column.to_string(),
            token,
        })?;
        scores.push(Some(score));
    }

    let mut rank_table: Vec<i64> = scores.iter().flatten().copied().collect();
    rank_table.sort_unstable_by(|a, b| b.cmp(a));
    rank_table.dedup();

    Ok(scores
        .into_iter()
        .map(|score| {
            score
                .and_then(|v| rank_table.iter().position(|&entry| entry == v))
                .map(|idx| idx as u32 + 1)
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn col(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn decorated_points_and_sentinel() {
        let ranks = normalize_column("j-bay", &col(&["10,000*", "10,000*", "-", "500"])).unwrap();
        assert_eq!(ranks, vec![Some(1), Some(1), None, Some(2)]);
    }

    #[test]
    fn ranks_are_dense_over_distinct_values() {
        let ranks =
            normalize_column("rio", &col(&["8000", "-", "10000", "6085", "8000"])).unwrap();
        assert_eq!(ranks, vec![Some(2), None, Some(1), Some(3), Some(2)]);
    }

    #[test]
    fn en_dash_is_the_same_sentinel() {
        let ranks = normalize_column("fiji", &col(&["265", "\u{2013}", "1000"])).unwrap();
        assert_eq!(ranks, vec![Some(2), None, Some(1)]);
    }

    #[test]
    fn whitespace_around_tokens_is_ignored() {
        let ranks = normalize_column("bali", &col(&[" 1,250 ", "  - "])).unwrap();
        assert_eq!(ranks, vec![Some(1), None]);
    }

    #[test]
    fn unparseable_token_is_a_data_format_error() {
        let err = normalize_column("trestles", &col(&["10000", "DNS"])).unwrap_err();
        match err {
            ScrapeError::DataFormat { column, token } => {
                assert_eq!(column, "trestles");
                assert_eq!(token, "DNS");
            }
            other => panic!("expected DataFormat, got {other:?}"),
        }
    }

    #[test]
    fn highest_value_gets_rank_one() {
        let ranks = normalize_column("portugal", &col(&["500", "10000", "3700"])).unwrap();
        assert_eq!(ranks, vec![Some(3), Some(1), Some(2)]);
    }

    #[test]
    fn renormalizing_dense_ranks_reverses_them_and_reversing_again_restores() {
        // Ranking treats higher values as better, so feeding it a 1-is-best
        // ranking flips the order; feeding it the flipped output flips back.
        let input = col(&["3", "1", "2"]);
        let once = normalize_column("teahupoo", &input).unwrap();
        assert_eq!(once, vec![Some(1), Some(3), Some(2)]);
        let tokens: Vec<String> = once.iter().map(|r| r.unwrap().to_string()).collect();
        let twice = normalize_column("teahupoo", &tokens).unwrap();
        assert_eq!(twice, vec![Some(3), Some(1), Some(2)]);
    }
}
