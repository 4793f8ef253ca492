//! Per-call TF-IDF vector space.

use std::collections::HashMap;

/// Fits a TF-IDF space over exactly the given token documents and returns one
/// L2-normalized row per document.
///
/// Smoothed IDF: `ln((1 + n) / (1 + df)) + 1`, with raw term counts for TF.
/// Rows are L2-normalized, so cosine similarity reduces to a dot product.
pub(crate) fn fit_transform(docs: &[Vec<&str>]) -> Vec<Vec<f32>> {
    let mut vocabulary: HashMap<&str, usize> = HashMap::new();
    for doc in docs {
        for token in doc {
            let next = vocabulary.len();
            vocabulary.entry(*token).or_insert(next);
        }
    }

    let n_docs = docs.len() as f32;
    let mut doc_frequency = vec![0u32; vocabulary.len()];
    for doc in docs {
        let mut seen = vec![false; vocabulary.len()];
        for token in doc {
            let idx = vocabulary[*token];
            if !seen[idx] {
                seen[idx] = true;
                doc_frequency[idx] += 1;
            }
        }
    }

    let idf: Vec<f32> = doc_frequency
        .iter()
        .map(|&df| ((1.0 + n_docs) / (1.0 + df as f32)).ln() + 1.0)
        .collect();

    docs.iter()
        .map(|doc| {
            let mut row = vec![0.0f32; vocabulary.len()];
            for token in doc {
                row[vocabulary[*token]] += 1.0;
            }
            for (value, idf) in row.iter_mut().zip(&idf) {
                *value *= idf;
            }

            let norm = row.iter().map(|v| v * v).sum::<f32>().sqrt();
            if norm > 0.0 {
                for value in &mut row {
                    *value /= norm;
                }
            }

            row
        })
        .collect()
}

/// Dot product of two equal-length rows. For L2-normalized rows this is the
/// cosine similarity.
#[inline]
pub(crate) fn dot(a: &[f32], b: &[f32]) -> f32 {
    a.iter().zip(b.iter()).map(|(x, y)| x * y).sum()
}
