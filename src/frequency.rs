use std::collections::HashMap;
use std::hash::Hash;

use log::debug;

/// Symbol to occurrence count. Counts always sum to the input length.
pub type FrequencyMap<S> = HashMap<S, u64>;

pub fn count_frequencies<S, I>(symbols: I) -> FrequencyMap<S>
where
    S: Eq + Hash,
    I: IntoIterator<Item = S>,
{
    let mut freq = FrequencyMap::new();
    for symbol in symbols {
        *freq.entry(symbol).or_insert(0) += 1;
    }
    debug!("Counted {} distinct symbols", freq.len());
    freq
}

/// Shannon entropy of the distribution, in bits per symbol.
pub fn entropy_from_freq<S>(freq: &FrequencyMap<S>) -> f64 {
    let total: u64 = freq.values().sum();
    if total == 0 {
        return 0.0;
    }
    let total_f = total as f64;

    let entropy: f64 = freq
        .values()
        .map(|&count| {
            let p = count as f64 / total_f;
            -p * p.log2()
        })
        .sum();

    debug!(
        "Calculated entropy: {:.4} bits/symbol (total samples: {})",
        entropy, total
    );
    // a single symbol gives -1 * log2(1), which is -0.0
    entropy.max(0.0)
}
