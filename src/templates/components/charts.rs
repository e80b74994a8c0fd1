// templates/components/charts.rs

//! Server-rendered SVG charts. No script, no external assets.

use crate::domain::Bucket;
use crate::templates::format::people;
use maud::{html, Markup};

const WIDTH: f64 = 640.0;
const HEIGHT: f64 = 320.0;
const MARGIN_LEFT: f64 = 64.0;
const MARGIN_RIGHT: f64 = 16.0;
const MARGIN_TOP: f64 = 16.0;
const MARGIN_BOTTOM: f64 = 72.0;
const Y_TICKS: usize = 4;
const ACCENT: &str = "#FF4B4B";

struct Frame {
    plot_w: f64,
    plot_h: f64,
    max: f64,
}

impl Frame {
    fn new(series: &[Bucket]) -> Self {
        let max = series.iter().map(|b| b.value).fold(0.0_f64, f64::max);
        Self {
            plot_w: WIDTH - MARGIN_LEFT - MARGIN_RIGHT,
            plot_h: HEIGHT - MARGIN_TOP - MARGIN_BOTTOM,
            // An all-zero series still gets a visible axis.
            max: if max > 0.0 { max } else { 1.0 },
        }
    }

    fn y(&self, value: f64) -> f64 {
        MARGIN_TOP + self.plot_h - (value / self.max) * self.plot_h
    }

    fn baseline(&self) -> f64 {
        MARGIN_TOP + self.plot_h
    }

    fn slot(&self, n: usize) -> f64 {
        self.plot_w / n.max(1) as f64
    }
}

fn coord(v: f64) -> String {
    format!("{v:.1}")
}

fn axes(frame: &Frame, series: &[Bucket], y_label: &str) -> Markup {
    let slot = frame.slot(series.len());
    html! {
        @for i in 0..=Y_TICKS {
            @let value = frame.max * i as f64 / Y_TICKS as f64;
            @let y = frame.y(value);
            line x1=(coord(MARGIN_LEFT)) x2=(coord(WIDTH - MARGIN_RIGHT))
                 y1=(coord(y)) y2=(coord(y)) stroke="#444" stroke-width="1" {}
            text class="tick" x=(coord(MARGIN_LEFT - 6.0)) y=(coord(y + 4.0)) text-anchor="end" {
                (people(value))
            }
        }
        @for (i, bucket) in series.iter().enumerate() {
            @let x = MARGIN_LEFT + slot * (i as f64 + 0.5);
            @let y = frame.baseline() + 14.0;
            text class="tick" x=(coord(x)) y=(coord(y)) text-anchor="end"
                 transform=(format!("rotate(-40 {} {})", coord(x), coord(y))) {
                (bucket.label)
            }
        }
        text class="axis-label" x="14" y=(coord(MARGIN_TOP + frame.plot_h / 2.0))
             transform=(format!("rotate(-90 14 {})", coord(MARGIN_TOP + frame.plot_h / 2.0)))
             text-anchor="middle" {
            (y_label)
        }
    }
}

/// Vertical bars, one per bucket, in series order.
pub fn bar_chart(title: &str, series: &[Bucket], y_label: &str) -> Markup {
    let frame = Frame::new(series);
    let slot = frame.slot(series.len());
    let bar_w = slot * 0.7;

    html! {
        figure class="chart" {
            figcaption { (title) }
            svg xmlns="http://www.w3.org/2000/svg" viewBox=(format!("0 0 {WIDTH} {HEIGHT}"))
                role="img" aria-label=(title) {
                (axes(&frame, series, y_label))
                @for (i, bucket) in series.iter().enumerate() {
                    @let x = MARGIN_LEFT + slot * i as f64 + (slot - bar_w) / 2.0;
                    @let y = frame.y(bucket.value);
                    rect class="bar" x=(coord(x)) y=(coord(y)) width=(coord(bar_w))
                         height=(coord(frame.baseline() - y)) fill=(ACCENT) {
                        title { (bucket.label) ": " (people(bucket.value)) }
                    }
                }
            }
        }
    }
}

/// Points joined by a polyline, for ordered buckets such as weeks.
pub fn line_chart(title: &str, series: &[Bucket], y_label: &str) -> Markup {
    let frame = Frame::new(series);
    let slot = frame.slot(series.len());
    let points: Vec<(f64, f64)> = series
        .iter()
        .enumerate()
        .map(|(i, b)| (MARGIN_LEFT + slot * (i as f64 + 0.5), frame.y(b.value)))
        .collect();
    let polyline = points
        .iter()
        .map(|(x, y)| format!("{},{}", coord(*x), coord(*y)))
        .collect::<Vec<_>>()
        .join(" ");

    html! {
        figure class="chart" {
            figcaption { (title) }
            svg xmlns="http://www.w3.org/2000/svg" viewBox=(format!("0 0 {WIDTH} {HEIGHT}"))
                role="img" aria-label=(title) {
                (axes(&frame, series, y_label))
                polyline points=(polyline) fill="none" stroke=(ACCENT) stroke-width="2" {}
                @for ((x, y), bucket) in points.iter().zip(series) {
                    circle class="point" cx=(coord(*x)) cy=(coord(*y)) r="4" fill=(ACCENT) {
                        title { (bucket.label) ": " (people(bucket.value)) }
                    }
                }
            }
        }
    }
}
