use std::fmt::Write;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::chart::{BarChart, ChartRenderer};

const PALETTE: [&str; 8] = [
    "#F44336", "#3F51B5", "#009688", "#FFC107", "#FF5722", "#9C27B0", "#03A9F4", "#8BC34A",
];

/// Renders a [`BarChart`] as SVG wrapped in a base64 `data:` URI.
#[derive(Debug, Clone)]
pub struct SvgBarRenderer {
    pub width: u32,
    pub height: u32,
}

impl Default for SvgBarRenderer {
    fn default() -> Self {
        Self {
            width: 800,
            height: 450,
        }
    }
}

struct Frame {
    left: f64,
    top: f64,
    plot_w: f64,
    plot_h: f64,
}

impl SvgBarRenderer {
    pub fn to_svg(&self, chart: &BarChart) -> Result<String, std::fmt::Error> {
        let (w, h) = (f64::from(self.width), f64::from(self.height));
        let frame = Frame {
            left: 60.0,
            top: 50.0,
            plot_w: (w - 60.0 - 160.0).max(1.0),
            plot_h: (h - 50.0 - 60.0).max(1.0),
        };
        let max = chart.max_value().max(1) as f64;

        let mut out = String::new();
        writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" font-family="sans-serif">"#
        )?;
        writeln!(out, r#"<rect width="100%" height="100%" fill="white"/>"#)?;
        writeln!(
            out,
            r#"<text x="{}" y="30" text-anchor="middle" font-size="18">{}</text>"#,
            w / 2.0,
            escape(&chart.title)
        )?;

        self.axis(&mut out, &frame, chart.max_value().max(1))?;
        self.bars(&mut out, &frame, chart, max)?;
        self.legend(&mut out, &frame, chart)?;

        out.push_str("</svg>\n");
        Ok(out)
    }

    fn axis(&self, out: &mut String, f: &Frame, max: u64) -> std::fmt::Result {
        let ticks = max.min(5);
        for i in 0..=ticks {
            let value = max * i / ticks;
            let y = f.top + f.plot_h - (value as f64 / max as f64) * f.plot_h;
            writeln!(
                out,
                r##"<line x1="{}" y1="{y:.1}" x2="{}" y2="{y:.1}" stroke="#e0e0e0"/>"##,
                f.left,
                f.left + f.plot_w
            )?;
            writeln!(
                out,
                r#"<text x="{}" y="{:.1}" text-anchor="end" font-size="12">{value}</text>"#,
                f.left - 8.0,
                y + 4.0
            )?;
        }
        Ok(())
    }

    fn bars(&self, out: &mut String, f: &Frame, chart: &BarChart, max: f64) -> std::fmt::Result {
        if chart.x_labels.is_empty() {
            return Ok(());
        }
        let group_w = f.plot_w / chart.x_labels.len() as f64;
        let bar_w = group_w * 0.8 / chart.series.len().max(1) as f64;

        for (g, label) in chart.x_labels.iter().enumerate() {
            let group_x = f.left + g as f64 * group_w + group_w * 0.1;
            for (s, (_, counts)) in chart.series.iter().enumerate() {
                let value = counts.get(g).copied().unwrap_or(0);
                let bar_h = value as f64 / max * f.plot_h;
                writeln!(
                    out,
                    r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" fill="{}"><title>{value}</title></rect>"#,
                    group_x + s as f64 * bar_w,
                    f.top + f.plot_h - bar_h,
                    bar_w,
                    bar_h,
                    PALETTE[s % PALETTE.len()]
                )?;
            }
            writeln!(
                out,
                r#"<text x="{:.1}" y="{:.1}" text-anchor="middle" font-size="12">{}</text>"#,
                f.left + g as f64 * group_w + group_w / 2.0,
                f.top + f.plot_h + 20.0,
                escape(label)
            )?;
        }
        Ok(())
    }

    fn legend(&self, out: &mut String, f: &Frame, chart: &BarChart) -> std::fmt::Result {
        let x = f.left + f.plot_w + 20.0;
        for (s, (label, _)) in chart.series.iter().enumerate() {
            let y = f.top + s as f64 * 20.0;
            writeln!(
                out,
                r#"<rect x="{x:.1}" y="{y:.1}" width="12" height="12" fill="{}"/>"#,
                PALETTE[s % PALETTE.len()]
            )?;
            writeln!(
                out,
                r#"<text x="{:.1}" y="{:.1}" font-size="12">{}</text>"#,
                x + 18.0,
                y + 10.0,
                escape(label)
            )?;
        }
        Ok(())
    }
}

fn escape(text: &str) -> std::borrow::Cow<'_, str> {
    html_escape::encode_text(text)
}

impl ChartRenderer for SvgBarRenderer {
    fn render(&self, chart: &BarChart) -> anyhow::Result<String> {
        let svg = self.to_svg(chart)?;
        Ok(format!(
            "data:image/svg+xml;charset=utf-8;base64,{}",
            STANDARD.encode(svg)
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chart() -> BarChart {
        BarChart {
            title: "category by country".into(),
            x_labels: vec!["USA".into(), "EGY".into()],
            series: vec![
                ("Technology".into(), vec![1, 1]),
                ("Sports & <Games>".into(), vec![1, 0]),
            ],
        }
    }

    #[test]
    fn draws_one_bar_per_group_and_series() {
        let svg = SvgBarRenderer::default().to_svg(&chart()).unwrap();
        assert_eq!(svg.matches("<title>").count(), 4);
        assert!(svg.contains(">USA</text>"));
        assert!(svg.contains(">EGY</text>"));
    }

    #[test]
    fn escapes_labels() {
        let svg = SvgBarRenderer::default().to_svg(&chart()).unwrap();
        assert!(svg.contains("Sports &amp; &lt;Games&gt;"));
        assert!(!svg.contains("<Games>"));
    }

    #[test]
    fn renders_base64_data_uri() {
        let renderer = SvgBarRenderer::default();
        let uri = renderer.render(&chart()).unwrap();
        let encoded = uri
            .strip_prefix("data:image/svg+xml;charset=utf-8;base64,")
            .expect("data uri prefix");
        let decoded = String::from_utf8(STANDARD.decode(encoded).unwrap()).unwrap();
        assert_eq!(decoded, renderer.to_svg(&chart()).unwrap());
    }

    #[test]
    fn empty_chart_still_renders() {
        let empty = BarChart {
            title: "empty".into(),
            x_labels: vec![],
            series: vec![],
        };
        let svg = SvgBarRenderer::default().to_svg(&empty).unwrap();
        assert!(svg.starts_with("<svg"));
        assert!(svg.trim_end().ends_with("</svg>"));
    }
}
