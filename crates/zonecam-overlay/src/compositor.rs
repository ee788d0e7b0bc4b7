use zonecam_image::PixelFrame;

use crate::ZoneOverlayConfig;

/// Opacity of the zone overlay when blended onto the source frame.
pub const ZONE_FILL_ALPHA: f32 = 0.15;

/// Renders the configured zones over a frame.
///
/// The input frame is never mutated. Zone polygons are filled into an
/// overlay copy in lexicographic name order, then the whole overlay is
/// blended onto the original at `ZONE_FILL_ALPHA`. The blend covers every
/// pixel rather than just polygon interiors; where overlay and base agree
/// it reproduces the original byte value, so only filled regions change
/// visibly.
///
/// Zones whose fill is disabled or whose polygon has fewer than 3
/// vertices are skipped. An empty zone map returns a pixel-identical copy
/// of the input.
pub fn render_zones(frame: &PixelFrame, config: &ZoneOverlayConfig) -> PixelFrame {
    let mut overlay = frame.clone();

    for (name, zone) in &config.zones {
        let Some(color) = config.fill_color(name) else {
            log::debug!("zone {name}: fill disabled, skipping");
            continue;
        };
        if zone.polygon.len() < 3 {
            log::debug!("zone {name}: fewer than 3 vertices, skipping");
            continue;
        }
        fill_polygon(&mut overlay, &zone.polygon, color);
    }

    blend(frame, &overlay)
}

/// Fills a closed polygon into the frame with a solid color.
///
/// Scanline even-odd fill with half-open coverage: each edge covers rows
/// `ymin <= y < ymax`, each span covers columns `xl <= x < xr`. Vertices
/// are truncated toward zero to integer pixels; rows and spans are clipped
/// to the frame, so out-of-range coordinates are safe.
fn fill_polygon(frame: &mut PixelFrame, polygon: &[(f64, f64)], color: [u8; 3]) {
    let points: Vec<(i64, i64)> = polygon
        .iter()
        .map(|&(x, y)| (x as i64, y as i64))
        .collect();

    let Some(min_y) = points.iter().map(|p| p.1).min() else {
        return;
    };
    let Some(max_y) = points.iter().map(|p| p.1).max() else {
        return;
    };

    let width = i64::from(frame.width);
    let height = i64::from(frame.height);
    let y_start = min_y.max(0);
    let y_end = max_y.min(height);

    let mut crossings: Vec<f64> = Vec::new();
    for y in y_start..y_end {
        crossings.clear();
        for i in 0..points.len() {
            let (x0, y0) = points[i];
            let (x1, y1) = points[(i + 1) % points.len()];
            if y0 == y1 {
                continue;
            }
            let (lo, hi) = if y0 < y1 { (y0, y1) } else { (y1, y0) };
            if y < lo || y >= hi {
                continue;
            }
            let t = (y - y0) as f64 / (y1 - y0) as f64;
            crossings.push(x0 as f64 + t * (x1 - x0) as f64);
        }

        crossings.sort_by(|a, b| a.total_cmp(b));
        for pair in crossings.chunks_exact(2) {
            let xl = (pair[0].ceil() as i64).max(0);
            let xr = (pair[1].ceil() as i64).min(width);
            for x in xl..xr {
                frame.set_pixel(x as u32, y as u32, color);
            }
        }
    }
}

/// Per-pixel, per-channel weighted average of overlay onto base:
/// `out = overlay * alpha + base * (1 - alpha)`, rounded to nearest.
fn blend(base: &PixelFrame, overlay: &PixelFrame) -> PixelFrame {
    let data = overlay
        .data
        .iter()
        .zip(&base.data)
        .map(|(&over, &under)| {
            (f32::from(over) * ZONE_FILL_ALPHA + f32::from(under) * (1.0 - ZONE_FILL_ALPHA)).round()
                as u8
        })
        .collect();

    PixelFrame {
        width: base.width,
        height: base.height,
        data,
    }
}
