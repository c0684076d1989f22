//! Chart data for comparing locations, and (with the `plotting` feature) the charts.

use crate::climate::LocationSummary;
use crate::types::frames::yearly_frame::YEAR_COLUMN;
use crate::types::variable::Variable;
use polars::prelude::*;
use std::collections::{BTreeSet, HashMap};

/// Lays one variable out for plotting, one set of columns per location.
///
/// The result has a `year` column covering every year of any location and,
/// per location, `<name>` (the yearly mean) plus `<name>_lower` and
/// `<name>_upper` (mean minus / plus one standard deviation). Years a location
/// does not cover are null. Locations keep the order they are given in.
pub fn band_frame(summaries: &[LocationSummary], variable: Variable) -> PolarsResult<DataFrame> {
    let mut by_location = Vec::with_capacity(summaries.len());
    let mut years = BTreeSet::new();

    for summary in summaries {
        let location_years = summary.yearly.years()?;
        let means = summary.yearly.means(variable)?;
        let stds = summary.yearly.stds(variable)?;

        let mut rows = HashMap::with_capacity(location_years.len());
        for ((year, mean), std) in location_years.into_iter().zip(means).zip(stds) {
            if let Some(year) = year {
                years.insert(year);
                rows.insert(year, (mean, std));
            }
        }
        by_location.push((summary.name.as_str(), rows));
    }

    let years: Vec<i32> = years.into_iter().collect();
    let mut columns = Vec::with_capacity(1 + 3 * by_location.len());
    columns.push(Column::new(YEAR_COLUMN.into(), years.as_slice()));

    for (name, rows) in by_location {
        let mut mean = Vec::with_capacity(years.len());
        let mut lower = Vec::with_capacity(years.len());
        let mut upper = Vec::with_capacity(years.len());
        for year in &years {
            let (m, s) = rows.get(year).copied().unwrap_or((None, None));
            mean.push(m);
            lower.push(m.zip(s).map(|(m, s)| m - s));
            upper.push(m.zip(s).map(|(m, s)| m + s));
        }
        columns.push(Column::new(name.into(), mean));
        columns.push(Column::new(format!("{}_lower", name).into(), lower));
        columns.push(Column::new(format!("{}_upper", name).into(), upper));
    }

    DataFrame::new(columns)
}

/// Opens one time-series chart per variable: a solid line per location and
/// dashed lines for its ±1 standard deviation band.
#[cfg(feature = "plotting")]
pub fn plot_summaries(summaries: &[LocationSummary]) -> PolarsResult<()> {
    use plotlars::{Line, Plot, Text, TimeSeriesPlot};

    let Some((first, rest)) = summaries.split_first() else {
        return Ok(());
    };

    for variable in Variable::ALL {
        let data = band_frame(summaries, variable)?;

        let mut series = vec![format!("{}_lower", first.name), format!("{}_upper", first.name)];
        let mut lines = vec![Line::Solid, Line::Dash, Line::Dash];
        for summary in rest {
            series.push(summary.name.clone());
            series.push(format!("{}_lower", summary.name));
            series.push(format!("{}_upper", summary.name));
            lines.extend([Line::Solid, Line::Dash, Line::Dash]);
        }
        let series: Vec<&str> = series.iter().map(String::as_str).collect();
        let title = format!("Yearly {}", variable.name());

        TimeSeriesPlot::builder()
            .data(&data)
            .x(YEAR_COLUMN)
            .y(first.name.as_str())
            .additional_series(series)
            .lines(lines)
            .plot_title(Text::from(title.as_str()).size(18))
            .x_title("year")
            .y_title(variable.name())
            .build()
            .plot();
    }
    Ok(())
}
