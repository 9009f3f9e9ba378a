//! Centrality scoring over combined feature vectors.
//!
//! A record's centrality is the sum of its cosine similarity to every record
//! in the batch, itself included. The most central record is the one most
//! typical of the batch.

/// Scale a vector to unit length. A zero vector is returned unchanged.
pub fn l2_normalize(values: &[f64]) -> Vec<f64> {
    let norm = values.iter().map(|v| v * v).sum::<f64>().sqrt();
    let divisor = if norm == 0.0 { 1.0 } else { norm };
    values.iter().map(|v| v / divisor).collect()
}

fn dot(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b.iter()).map(|(x, y)| x * y).sum()
}

/// Full pairwise cosine similarity matrix, self-similarity on the diagonal
pub fn similarity_matrix(rows: &[Vec<f64>]) -> Vec<Vec<f64>> {
    let normalized: Vec<Vec<f64>> = rows.iter().map(|row| l2_normalize(row)).collect();

    normalized
        .iter()
        .map(|a| normalized.iter().map(|b| dot(a, b)).collect())
        .collect()
}

/// Row sums of the similarity matrix
pub fn centrality_scores(rows: &[Vec<f64>]) -> Vec<f64> {
    similarity_matrix(rows)
        .iter()
        .map(|row| row.iter().sum())
        .collect()
}

/// Index of the highest-scoring row; the earliest row wins a tie.
///
/// A NaN score ranks above every number, so the first NaN row is returned.
/// Returns `None` only for an empty batch.
pub fn most_central(rows: &[Vec<f64>]) -> Option<usize> {
    let scores = centrality_scores(rows);

    let mut best: Option<(usize, f64)> = None;
    for (idx, score) in scores.into_iter().enumerate() {
        if score.is_nan() {
            return Some(idx);
        }
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((idx, score)),
        }
    }

    best.map(|(idx, _)| idx)
}
