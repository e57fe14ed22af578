use crate::registry::ActivationRegistry;
use crate::sampling::{SampledSeries, SeriesPair};

const ACTIVATION_MARK: char = '*';
const DERIVATIVE_MARK: char = '.';

/// Plot a single sampled curve as ASCII art
pub fn plot_series(series: &SampledSeries, width: usize, height: usize) -> String {
    render(&[(series, ACTIVATION_MARK)], &series.title(), width, height)
}

/// Plot the activation (`*`) and derivative (`.`) of one function on shared axes
pub fn plot_pair(pair: &SeriesPair, width: usize, height: usize) -> String {
    let title = format!("{} ({} activation, {} derivative)", pair.name(), ACTIVATION_MARK, DERIVATIVE_MARK);
    render(
        &[(&pair.activation, ACTIVATION_MARK), (&pair.derivative, DERIVATIVE_MARK)],
        &title,
        width,
        height,
    )
}

/// Generic series plotter. Non-finite samples are left out.
fn render(layers: &[(&SampledSeries, char)], title: &str, width: usize, height: usize) -> String {
    let points: Vec<(f64, f64)> = layers
        .iter()
        .flat_map(|(series, _)| series.points.iter())
        .filter(|p| p.x.is_finite() && p.y.is_finite())
        .map(|p| (p.x, p.y))
        .collect();

    if points.is_empty() || width < 10 || height < 5 {
        return format!("{}: Invalid data or dimensions", title);
    }

    let min_x = points.iter().map(|p| p.0).fold(f64::INFINITY, f64::min);
    let max_x = points.iter().map(|p| p.0).fold(f64::NEG_INFINITY, f64::max);
    let min_y = points.iter().map(|p| p.1).fold(f64::INFINITY, f64::min);
    let max_y = points.iter().map(|p| p.1).fold(f64::NEG_INFINITY, f64::max);

    if (max_y - min_y).abs() < f64::EPSILON {
        return format!("{}: All values are {:.4}", title, min_y);
    }

    let mut plot = vec![vec![' '; width]; height];

    // Add axes
    for row in plot.iter_mut() {
        row[0] = '|';
    }
    for cell in plot[height - 1].iter_mut() {
        *cell = '-';
    }
    plot[height - 1][0] = '+';

    let plot_rows = (height - 2) as f64;
    let plot_cols = (width - 3) as f64;

    for (series, mark) in layers {
        for p in series.points.iter().filter(|p| p.x.is_finite() && p.y.is_finite()) {
            let col = if max_x > min_x {
                2 + ((p.x - min_x) / (max_x - min_x) * plot_cols).round() as usize
            } else {
                2
            };
            let row = height - 2 - ((p.y - min_y) / (max_y - min_y) * plot_rows).round() as usize;
            plot[row][col.min(width - 1)] = *mark;
        }
    }

    let mut output = format!("{}\n", title);
    output.push_str(&format!("Max: {:.4}\n", max_y));

    for row in plot.iter() {
        output.push_str(&row.iter().collect::<String>());
        output.push('\n');
    }

    output.push_str(&format!("Min: {:.4}\n", min_y));
    output.push_str(&format!("X: [{:.2}, {:.2}], Points: {}\n", min_x, max_x, points.len()));

    output
}

/// Create a summary table of every registry entry
pub fn catalog_summary(registry: &ActivationRegistry) -> String {
    let mut output = String::new();
    output.push_str("Activation Catalog\n");
    output.push_str("==================\n");
    output.push_str(&format!(
        "{:<16} {:>8} {:>8} {:>10} {:>10}\n",
        "Name", "alpha", "beta", "f(0)", "f'(0)"
    ));

    for function in registry.iter() {
        output.push_str(&format!(
            "{:<16} {:>8.4} {:>8.4} {:>10.4} {:>10.4}\n",
            function.name(),
            function.alpha(),
            function.beta(),
            function.activate(0.0),
            function.derivate(0.0),
        ));
    }

    for (kind, err) in registry.failures() {
        output.push_str(&format!("{:<16} unavailable: {}\n", kind.name(), err));
    }

    output
}
