use std::fs::File;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result, bail};
use gif::{Encoder, Frame, Repeat};
use image::{Rgb, RgbImage};

use super::heat_transfer::field::TemperatureField;
use super::recorder::HistorySample;

/// Write the recorded boundary-node history as CSV: `time_s,first_c,last_c`.
pub fn write_history_csv<P: AsRef<Path>>(path: P, samples: &[HistorySample]) -> Result<()> {
    let path = path.as_ref();
    let mut file =
        File::create(path).with_context(|| format!("creating {}", path.display()))?;
    writeln!(file, "time_s,first_c,last_c")?;
    for s in samples {
        writeln!(file, "{},{},{}", s.time_s, s.first_c, s.last_c)?;
    }
    Ok(())
}

/// Linear cold-to-hot color ramp (blue at `min`, red at `max`).
fn heat_color(value: f64, min: f64, max: f64) -> Rgb<u8> {
    let span = (max - min).max(f64::MIN_POSITIVE);
    let x = ((value - min) / span).clamp(0.0, 1.0);
    let r = (255.0 * x) as u8;
    let g = (96.0 * (1.0 - (2.0 * x - 1.0).abs())) as u8;
    let b = (255.0 * (1.0 - x)) as u8;
    Rgb([r, g, b])
}

/// Renders the whole space-time field as a static PNG heatmap.
///
/// x axis: node index (left boundary on the left), y axis: time (top = start),
/// color: temperature between the field's own extremes.
pub struct HeatmapExporter {
    /// Horizontal pixels per cell.
    pub cell_px: u32,
    /// Maximum image height; longer runs are decimated in time.
    pub max_rows: u32,
}

impl Default for HeatmapExporter {
    fn default() -> Self {
        Self {
            cell_px: 8,
            max_rows: 720,
        }
    }
}

impl HeatmapExporter {
    pub fn export_png<P: AsRef<Path>>(&self, field: &TemperatureField, path: P) -> Result<()> {
        let Some((min, max)) = field.temperature_range() else {
            bail!("cannot export an empty temperature field");
        };

        let stride = field.num_steps().div_ceil(self.max_rows as usize).max(1);
        let rows: Vec<&[f64]> = field.rows_every(stride).map(|(_, row)| row).collect();
        let width = field.num_cells() as u32 * self.cell_px;
        let height = rows.len() as u32;

        let mut img = RgbImage::new(width, height);
        for (y, row) in rows.iter().enumerate() {
            for (m, &value) in row.iter().enumerate() {
                let color = heat_color(value, min, max);
                for sub in 0..self.cell_px {
                    img.put_pixel(m as u32 * self.cell_px + sub, y as u32, color);
                }
            }
        }

        let path = path.as_ref();
        img.save(path)
            .with_context(|| format!("writing heatmap to {}", path.display()))?;
        Ok(())
    }
}

/// Renders the temperature profile as an animated GIF, one frame per
/// decimated time row.
pub struct ProfileGifExporter {
    pub width: u16,
    pub height: u16,
    /// Time decimation: one frame every `stride` rows.
    pub stride: usize,
    /// Frame delay in hundredths of a second.
    pub frame_delay_cs: u16,
}

impl Default for ProfileGifExporter {
    fn default() -> Self {
        Self {
            width: 320,
            height: 200,
            stride: 50,
            frame_delay_cs: 5,
        }
    }
}

impl ProfileGifExporter {
    pub fn export_gif<P: AsRef<Path>>(&self, field: &TemperatureField, path: P) -> Result<()> {
        let Some((min, max)) = field.temperature_range() else {
            bail!("cannot export an empty temperature field");
        };
        let span = (max - min).max(f64::MIN_POSITIVE);

        let path = path.as_ref();
        let mut file =
            File::create(path).with_context(|| format!("creating {}", path.display()))?;
        let mut encoder = Encoder::new(&mut file, self.width, self.height, &[])?;
        encoder.set_repeat(Repeat::Infinite)?;

        let margin = 10u16;
        let plot_h = self.height.saturating_sub(2 * margin);
        if plot_h == 0 {
            bail!(
                "GIF height {} leaves no plot area inside the {margin}px margins",
                self.height
            );
        }
        let plot_h = plot_h as f64;
        let w = self.width as usize;
        let h = self.height as usize;

        for (_, row) in field.rows_every(self.stride) {
            // White background, profile drawn as a 2px dark polyline.
            let mut pixels = vec![255u8; w * h * 3];
            let n = row.len();
            for x in 0..w {
                let value = if n == 1 {
                    row[0]
                } else {
                    // Linear interpolation between node centers.
                    let u = x as f64 / (w - 1) as f64 * (n - 1) as f64;
                    let m = (u.floor() as usize).min(n - 2);
                    let frac = u - m as f64;
                    row[m] * (1.0 - frac) + row[m + 1] * frac
                };
                let rel = ((value - min) / span).clamp(0.0, 1.0);
                let y = margin as f64 + (1.0 - rel) * plot_h;
                let color = heat_color(value, min, max);
                for dy in 0..2usize {
                    let yi = (y as usize + dy).min(h - 1);
                    let i = (yi * w + x) * 3;
                    pixels[i] = color.0[0];
                    pixels[i + 1] = color.0[1];
                    pixels[i + 2] = color.0[2];
                }
            }

            let mut frame = Frame::from_rgb(self.width, self.height, &pixels);
            frame.delay = self.frame_delay_cs;
            encoder.write_frame(&frame)?;
        }

        Ok(())
    }
}
