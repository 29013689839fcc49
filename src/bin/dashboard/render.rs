// Terminal rendering: arrival curve, stacked bar chart, raw table

use volume_engine::{SimulationRun, VolumeTable};

const CURVE_WIDTH: usize = 32;
const CHART_WIDTH: usize = 48;

/// One glyph per channel, cycled when a mix has more channels than glyphs.
const SEGMENT_GLYPHS: [char; 5] = ['█', '▓', '▒', '░', '·'];

fn glyph(channel: usize) -> char {
    SEGMENT_GLYPHS[channel % SEGMENT_GLYPHS.len()]
}

pub fn render_curve(run: &SimulationRun) {
    if run.curve.is_empty() {
        return;
    }
    let max = run.curve.iter().map(|p| p.weight).fold(0.0_f64, f64::max);
    println!("  Arrival curve:");
    for point in &run.curve {
        let width = if max > 0.0 {
            (point.weight / max * CURVE_WIDTH as f64).round() as usize
        } else {
            0
        };
        println!(
            "  {:>5}  {:<width$}  {:.4}",
            point.label,
            "▪".repeat(width),
            point.weight,
            width = CURVE_WIDTH
        );
    }
    println!();
}

pub fn render_chart(table: &VolumeTable) {
    if table.is_empty() {
        println!("  (no intervals in window)");
        return;
    }

    let legend: Vec<String> = table
        .channels
        .iter()
        .enumerate()
        .map(|(i, name)| format!("{} {}", glyph(i), name))
        .collect();
    println!("  Volume by interval   {}", legend.join("   "));
    println!();

    let max = table.max_total().max(1) as f64;
    for row in &table.rows {
        // Segment widths from rounded cumulative counts so the stacked bar
        // never exceeds the chart width.
        let mut bar = String::new();
        let mut cum = 0u32;
        let mut prev_edge = 0usize;
        for (i, &count) in row.counts.iter().enumerate() {
            cum += count;
            let edge = (cum as f64 / max * CHART_WIDTH as f64).round() as usize;
            for _ in prev_edge..edge {
                bar.push(glyph(i));
            }
            prev_edge = edge;
        }
        println!("  {:>5} |{:<width$}| {:>5}", row.label, bar, row.total, width = CHART_WIDTH);
    }
    println!();
}

pub fn render_table(table: &VolumeTable) {
    if table.is_empty() {
        return;
    }
    print!("  {:<8}", "Interval");
    for name in &table.channels {
        print!(" {:>8}", name);
    }
    println!(" {:>8}", "Total");
    println!("  {}", "-".repeat(9 + 9 * (table.channels.len() + 1)));

    for row in &table.rows {
        print!("  {:<8}", row.label);
        for &count in &row.counts {
            print!(" {:>8}", count);
        }
        println!(" {:>8}", row.total);
    }

    println!("  {}", "-".repeat(9 + 9 * (table.channels.len() + 1)));
    print!("  {:<8}", "Sum");
    for total in table.channel_totals() {
        print!(" {:>8}", total);
    }
    println!(" {:>8}", table.grand_total());
    println!();
}
