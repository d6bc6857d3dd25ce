//! Pairwise Pearson correlation over numeric columns.

use premia_model::Table;

/// Symmetric correlation matrix with unit diagonal.
///
/// `values[i][j]` is the Pearson coefficient between `columns[i]` and
/// `columns[j]`, computed over rows where both cells are present. Degenerate
/// pairs (fewer than two paired observations, or zero variance on either
/// side) are `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct CorrelationMatrix {
    pub columns: Vec<String>,
    pub values: Vec<Vec<Option<f64>>>,
}

impl CorrelationMatrix {
    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        self.values.get(i)?.get(j).copied().flatten()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

/// Compute the correlation matrix over all numeric columns of the table.
pub fn correlation_matrix(table: &Table) -> CorrelationMatrix {
    let numeric = table.numeric_columns();
    let names: Vec<String> = numeric.iter().map(|c| c.name.clone()).collect();
    let series: Vec<Vec<Option<f64>>> = numeric
        .iter()
        .map(|c| c.numeric_values().unwrap_or_default())
        .collect();

    let n = names.len();
    let mut values = vec![vec![None; n]; n];
    for i in 0..n {
        values[i][i] = Some(1.0);
        for j in (i + 1)..n {
            let r = pearson(&series[i], &series[j]);
            values[i][j] = r;
            values[j][i] = r;
        }
    }
    CorrelationMatrix {
        columns: names,
        values,
    }
}

/// Pearson coefficient over pairwise-complete observations.
fn pearson(xs: &[Option<f64>], ys: &[Option<f64>]) -> Option<f64> {
    let pairs: Vec<(f64, f64)> = xs
        .iter()
        .zip(ys)
        .filter_map(|(x, y)| Some(((*x)?, (*y)?)))
        .collect();
    let n = pairs.len();
    if n < 2 {
        return None;
    }
    let mean_x = pairs.iter().map(|(x, _)| x).sum::<f64>() / n as f64;
    let mean_y = pairs.iter().map(|(_, y)| y).sum::<f64>() / n as f64;
    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (x, y) in &pairs {
        let dx = x - mean_x;
        let dy = y - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }
    if var_x == 0.0 || var_y == 0.0 {
        return None;
    }
    Some(cov / (var_x.sqrt() * var_y.sqrt()))
}
