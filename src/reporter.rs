// Chart rendering and summary output. No analysis happens here; this module
// only maps the analyzer's numbers to visual encodings.
use crate::analyzer::correlation::FIELDS;
use crate::model::{Category, DatasetReport, LaptopRecord, ReportError};
use chrono::{DateTime, Utc};
use plotters::coord::ranged1d::{IntoSegmentedCoord, SegmentValue};
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use serde::Serialize;
use std::fs;
use std::path::Path;
use tracing::info;

const CHART_SIZE: (u32, u32) = (1200, 900);
const PANEL_SIZE: (u32, u32) = (1600, 1200);
const PRICE_BINS: usize = 30;
const TOP_BRANDS: usize = 10;

type ChartResult = Result<(), Box<dyn std::error::Error>>;

#[derive(Serialize)]
struct Summary<'a> {
    generated_at: DateTime<Utc>,
    #[serde(flatten)]
    report: &'a DatasetReport,
}

/// Renders the four chart images into `<reports_dir>/images` and writes the
/// machine-readable summary next to them. Charts already written stay on disk
/// if a later one fails.
pub fn render_all(
    records: &[LaptopRecord],
    report: &DatasetReport,
    reports_dir: &Path,
) -> Result<(), ReportError> {
    let images_dir = reports_dir.join("images");
    fs::create_dir_all(&images_dir)?;

    let charts: [(&'static str, fn(&[LaptopRecord], &DatasetReport, &Path) -> ChartResult); 4] = [
        ("correlation_matrix.png", correlation_heatmap),
        ("brands_count.png", brand_bar_chart),
        ("main_analysis.png", main_panel),
        ("price_by_category.png", category_boxplot),
    ];

    for (name, draw) in charts {
        let path = images_dir.join(name);
        draw(records, report, &path).map_err(|e| ReportError::Render {
            chart: name,
            message: e.to_string(),
        })?;
        info!("Wrote {}", path.display());
    }

    write_summary(report, reports_dir)?;
    Ok(())
}

pub fn write_summary(report: &DatasetReport, reports_dir: &Path) -> Result<(), ReportError> {
    fs::create_dir_all(reports_dir)?;
    let path = reports_dir.join("summary.json");
    let summary = Summary {
        generated_at: Utc::now(),
        report,
    };
    fs::write(&path, serde_json::to_string_pretty(&summary)?)?;
    info!("Wrote {}", path.display());
    Ok(())
}

/// Diverging blue/white/red palette centered at zero, mirroring the usual
/// correlation heatmap coloring.
fn heat_color(value: f64) -> RGBColor {
    let t = value.clamp(-1.0, 1.0);
    if t >= 0.0 {
        let fade = ((1.0 - t) * 255.0) as u8;
        RGBColor(255, fade, fade)
    } else {
        let fade = ((1.0 + t) * 255.0) as u8;
        RGBColor(fade, fade, 255)
    }
}

fn correlation_heatmap(
    _records: &[LaptopRecord],
    report: &DatasetReport,
    path: &Path,
) -> ChartResult {
    let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Correlation Matrix", ("sans-serif", 36))
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(100)
        .build_cartesian_2d((0i32..3i32).into_segmented(), (0i32..3i32).into_segmented())?;

    let field_label = |seg: &SegmentValue<i32>| match seg {
        SegmentValue::CenterOf(v) if (0..4).contains(v) => FIELDS[*v as usize].to_string(),
        _ => String::new(),
    };
    chart
        .configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .x_label_formatter(&field_label)
        .y_label_formatter(&field_label)
        .draw()?;

    let cell_text = ("sans-serif", 24)
        .into_font()
        .color(&BLACK)
        .pos(Pos::new(HPos::Center, VPos::Center));

    for i in 0..4i32 {
        for j in 0..4i32 {
            let value = report.correlation.values[i as usize][j as usize];
            let color = value.map(heat_color).unwrap_or(RGBColor(220, 220, 220));
            chart.draw_series(std::iter::once(Rectangle::new(
                [
                    (SegmentValue::Exact(j), SegmentValue::Exact(i)),
                    (SegmentValue::Exact(j + 1), SegmentValue::Exact(i + 1)),
                ],
                color.filled(),
            )))?;
            let label = value
                .map(|v| format!("{v:.2}"))
                .unwrap_or_else(|| "n/a".to_string());
            chart.draw_series(std::iter::once(Text::new(
                label,
                (SegmentValue::CenterOf(j), SegmentValue::CenterOf(i)),
                cell_text.clone(),
            )))?;
        }
    }

    root.present()?;
    Ok(())
}

fn brand_bar_chart(
    _records: &[LaptopRecord],
    report: &DatasetReport,
    path: &Path,
) -> ChartResult {
    let top: Vec<&(String, usize)> = report.brand_counts.iter().take(TOP_BRANDS).collect();
    let max_count = top.iter().map(|(_, c)| *c).max().unwrap_or(1);

    let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Top Brands by Model Count", ("sans-serif", 36))
        .margin(20)
        .x_label_area_size(60)
        .y_label_area_size(60)
        .build_cartesian_2d(
            (0i32..top.len().saturating_sub(1) as i32).into_segmented(),
            0u32..(max_count as u32 + max_count as u32 / 10 + 1),
        )?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_label_formatter(&|seg: &SegmentValue<i32>| match seg {
            SegmentValue::CenterOf(v) if (*v as usize) < top.len() => top[*v as usize].0.clone(),
            _ => String::new(),
        })
        .x_desc("Brand")
        .y_desc("Models")
        .draw()?;

    chart.draw_series(
        Histogram::vertical(&chart)
            .style(BLUE.mix(0.7).filled())
            .margin(10)
            .data(top.iter().enumerate().map(|(i, (_, c))| (i as i32, *c as u32))),
    )?;

    root.present()?;
    Ok(())
}

fn main_panel(records: &[LaptopRecord], _report: &DatasetReport, path: &Path) -> ChartResult {
    let root = BitMapBackend::new(path, PANEL_SIZE).into_drawing_area();
    root.fill(&WHITE)?;
    let panels = root.split_evenly((2, 2));

    price_histogram(records, &panels[0])?;
    price_by_ram(records, &panels[1])?;
    rating_by_brand(records, &panels[2])?;
    storage_vs_price(records, &panels[3])?;

    root.present()?;
    Ok(())
}

fn price_histogram(
    records: &[LaptopRecord],
    area: &DrawingArea<BitMapBackend, plotters::coord::Shift>,
) -> ChartResult {
    let min = records.iter().map(|r| r.price).min().unwrap_or(0) as f64;
    let max = records.iter().map(|r| r.price).max().unwrap_or(1) as f64;
    let width = ((max - min) / PRICE_BINS as f64).max(1.0);

    let mut counts = vec![0u32; PRICE_BINS];
    for record in records {
        counts[bin_index(record.price as f64, min, width, PRICE_BINS)] += 1;
    }
    let peak = counts.iter().copied().max().unwrap_or(1);

    let mut chart = ChartBuilder::on(area)
        .caption("Price Distribution", ("sans-serif", 28))
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(55)
        .build_cartesian_2d(
            (0i32..PRICE_BINS as i32 - 1).into_segmented(),
            0u32..peak + peak / 10 + 1,
        )?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_label_formatter(&|seg: &SegmentValue<i32>| match seg {
            SegmentValue::CenterOf(v) => {
                let start = min + *v as f64 * width;
                format!("{}k", (start / 1000.0).round() as u64)
            }
            _ => String::new(),
        })
        .x_desc("Price (₹)")
        .y_desc("Laptops")
        .draw()?;

    chart.draw_series(
        Histogram::vertical(&chart)
            .style(BLUE.mix(0.7).filled())
            .data(counts.iter().enumerate().map(|(i, c)| (i as i32, *c))),
    )?;
    Ok(())
}

fn price_by_ram(
    records: &[LaptopRecord],
    area: &DrawingArea<BitMapBackend, plotters::coord::Shift>,
) -> ChartResult {
    let mut ram_sizes: Vec<u32> = records.iter().filter_map(|r| r.ram_gb).collect();
    ram_sizes.sort_unstable();
    ram_sizes.dedup();
    if ram_sizes.is_empty() {
        return Ok(());
    }

    let max_price = records.iter().map(|r| r.price).max().unwrap_or(1) as f32;

    let mut chart = ChartBuilder::on(area)
        .caption("Price by RAM", ("sans-serif", 28))
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(75)
        .build_cartesian_2d(
            (0i32..ram_sizes.len().saturating_sub(1) as i32).into_segmented(),
            0f32..max_price * 1.1,
        )?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_label_formatter(&|seg: &SegmentValue<i32>| match seg {
            SegmentValue::CenterOf(v) if (*v as usize) < ram_sizes.len() => {
                format!("{} GB", ram_sizes[*v as usize])
            }
            _ => String::new(),
        })
        .x_desc("RAM")
        .y_desc("Price (₹)")
        .draw()?;

    for (i, ram) in ram_sizes.iter().enumerate() {
        let prices: Vec<f64> = records
            .iter()
            .filter(|r| r.ram_gb == Some(*ram))
            .map(|r| r.price as f64)
            .collect();
        chart.draw_series(std::iter::once(
            Boxplot::new_vertical(
                SegmentValue::CenterOf(i as i32),
                &Quartiles::new(&prices),
            )
            .width(20)
            .style(&BLUE),
        ))?;
    }
    Ok(())
}

fn rating_by_brand(
    records: &[LaptopRecord],
    area: &DrawingArea<BitMapBackend, plotters::coord::Shift>,
) -> ChartResult {
    let rated: Vec<&LaptopRecord> = records.iter().filter(|r| r.rating.is_some()).collect();
    if rated.is_empty() {
        return Ok(());
    }

    let mut brands: Vec<(String, usize)> = {
        let mut map = std::collections::HashMap::new();
        for r in &rated {
            *map.entry(r.brand.clone()).or_insert(0usize) += 1;
        }
        map.into_iter().collect()
    };
    brands.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    brands.truncate(8);

    let ratings: Vec<f64> = rated.iter().filter_map(|r| r.rating).collect();
    let low = ratings.iter().copied().fold(f64::INFINITY, f64::min) as f32;
    let high = ratings.iter().copied().fold(f64::NEG_INFINITY, f64::max) as f32;
    let pad = ((high - low) * 0.1).max(0.1);

    let mut chart = ChartBuilder::on(area)
        .caption("Rating by Brand", ("sans-serif", 28))
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(55)
        .build_cartesian_2d(
            (0i32..brands.len().saturating_sub(1) as i32).into_segmented(),
            (low - pad)..(high + pad),
        )?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_label_formatter(&|seg: &SegmentValue<i32>| match seg {
            SegmentValue::CenterOf(v) if (*v as usize) < brands.len() => brands[*v as usize].0.clone(),
            _ => String::new(),
        })
        .x_desc("Brand")
        .y_desc("Rating")
        .draw()?;

    for (i, (brand, _)) in brands.iter().enumerate() {
        let values: Vec<f64> = rated
            .iter()
            .filter(|r| &r.brand == brand)
            .filter_map(|r| r.rating)
            .collect();
        chart.draw_series(std::iter::once(
            Boxplot::new_vertical(
                SegmentValue::CenterOf(i as i32),
                &Quartiles::new(&values),
            )
            .width(20)
            .style(&GREEN),
        ))?;
    }
    Ok(())
}

fn storage_vs_price(
    records: &[LaptopRecord],
    area: &DrawingArea<BitMapBackend, plotters::coord::Shift>,
) -> ChartResult {
    let points: Vec<(f64, f64)> = records
        .iter()
        .filter_map(|r| Some((r.storage_gb? as f64, r.price as f64)))
        .collect();
    if points.is_empty() {
        return Ok(());
    }

    let max_ssd = points.iter().map(|(s, _)| *s).fold(1.0, f64::max);
    let max_price = points.iter().map(|(_, p)| *p).fold(1.0, f64::max);

    let mut chart = ChartBuilder::on(area)
        .caption("Storage vs Price", ("sans-serif", 28))
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(75)
        .build_cartesian_2d(0f64..max_ssd * 1.05, 0f64..max_price * 1.05)?;

    chart
        .configure_mesh()
        .x_desc("Storage (GB)")
        .y_desc("Price (₹)")
        .draw()?;

    chart.draw_series(
        points
            .iter()
            .map(|(s, p)| Circle::new((*s, *p), 4, BLUE.mix(0.4).filled())),
    )?;
    Ok(())
}

fn category_boxplot(
    records: &[LaptopRecord],
    _report: &DatasetReport,
    path: &Path,
) -> ChartResult {
    let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let max_price = records.iter().map(|r| r.price).max().unwrap_or(1) as f32;

    let mut chart = ChartBuilder::on(&root)
        .caption("Price by Category", ("sans-serif", 36))
        .margin(20)
        .x_label_area_size(60)
        .y_label_area_size(90)
        .build_cartesian_2d((0i32..3i32).into_segmented(), 0f32..max_price * 1.1)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_label_formatter(&|seg: &SegmentValue<i32>| match seg {
            SegmentValue::CenterOf(v) if (0..4).contains(v) => {
                Category::ALL[*v as usize].label().to_string()
            }
            _ => String::new(),
        })
        .x_desc("Category")
        .y_desc("Price (₹)")
        .draw()?;

    for (i, category) in Category::ALL.iter().enumerate() {
        let prices: Vec<f64> = records
            .iter()
            .filter(|r| r.category == *category)
            .map(|r| r.price as f64)
            .collect();
        if prices.is_empty() {
            continue;
        }
        chart.draw_series(std::iter::once(
            Boxplot::new_vertical(
                SegmentValue::CenterOf(i as i32),
                &Quartiles::new(&prices),
            )
            .width(30)
            .style(&RED),
        ))?;
    }

    root.present()?;
    Ok(())
}

/// Maps a value to its histogram bin, clamping the maximum onto the last bin.
fn bin_index(value: f64, min: f64, width: f64, bins: usize) -> usize {
    (((value - min) / width) as usize).min(bins - 1)
}
