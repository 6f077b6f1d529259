//! Persistent frost layer.
//!
//! The surface stores one coverage value per pixel. Breath deposits add
//! coverage with a soft radial falloff (source-over); the fingertip removes it
//! with a steeper falloff (destination-out). Nothing clears the surface except
//! a resize, which reallocates and reseeds it.

use crate::config::FogParams;
use crate::constants::FOG_COLOR_RGB;
use glam::Vec2;

/// Map a normalized image-space point to mirrored pixel space.
#[inline]
pub fn mirror_to_pixels(point: Vec2, viewport: Vec2) -> Vec2 {
    Vec2::new((1.0 - point.x) * viewport.x, point.y * viewport.y)
}

pub struct FogSurface {
    width: u32,
    height: u32,
    coverage: Vec<f32>,
    params: FogParams,
    // Bumped whenever any coverage value may have changed
    revision: u64,
}

impl FogSurface {
    pub fn new(width: u32, height: u32, params: FogParams) -> Self {
        let mut fog = Self {
            width: 0,
            height: 0,
            coverage: Vec::new(),
            params,
            revision: 0,
        };
        fog.reseed(width, height);
        fog
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Changes after every deposit, erase or reseed that touched the raster.
    /// Renderers compare it to skip re-exporting an unchanged surface.
    #[inline]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }

    /// Reallocate for a new viewport. Prior content is dropped, not rescaled.
    /// Returns false when the size is unchanged.
    pub fn resize(&mut self, width: u32, height: u32) -> bool {
        if width == self.width && height == self.height {
            return false;
        }
        self.reseed(width, height);
        log::info!("[fog] resized to {}x{}", width, height);
        true
    }

    fn reseed(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.coverage.clear();
        self.coverage
            .resize(width as usize * height as usize, self.params.reseed_alpha);
        self.revision += 1;
    }

    /// Add frost around a normalized point. No-op inside the intensity dead zone.
    pub fn deposit(&mut self, point: Vec2, intensity: f32) -> bool {
        if intensity <= self.params.min_intensity {
            return false;
        }
        let center = mirror_to_pixels(point, self.size());
        let radius = self.params.base_radius + intensity * self.params.radius_per_intensity;
        let peak = intensity * self.params.alpha_per_intensity;
        if self.for_each_in_disc(center, radius, |a, d| {
            let s = peak * (1.0 - d / radius);
            *a += s * (1.0 - *a);
        }) {
            self.revision += 1;
        }
        true
    }

    /// Remove frost around a pixel-space point.
    pub fn erase(&mut self, center: Vec2) {
        let radius = self.params.erase_radius;
        let inner = radius * self.params.erase_plateau;
        if self.for_each_in_disc(center, radius, |a, d| {
            let e = if d <= inner {
                1.0
            } else {
                1.0 - (d - inner) / (radius - inner)
            };
            *a *= 1.0 - e;
        }) {
            self.revision += 1;
        }
    }

    /// Apply `f(coverage, distance)` to every pixel whose centre lies inside the disc.
    /// Returns whether any pixel was visited.
    fn for_each_in_disc(
        &mut self,
        center: Vec2,
        radius: f32,
        mut f: impl FnMut(&mut f32, f32),
    ) -> bool {
        if self.width == 0 || self.height == 0 || radius <= 0.0 || !center.is_finite() {
            return false;
        }
        let x0 = (center.x - radius).floor().max(0.0) as u32;
        let y0 = (center.y - radius).floor().max(0.0) as u32;
        let x1 = ((center.x + radius).ceil().max(0.0) as u32).min(self.width);
        let y1 = ((center.y + radius).ceil().max(0.0) as u32).min(self.height);
        let r2 = radius * radius;
        let mut touched = false;
        for y in y0..y1 {
            let dy = y as f32 + 0.5 - center.y;
            let row = y as usize * self.width as usize;
            for x in x0..x1 {
                let dx = x as f32 + 0.5 - center.x;
                let d2 = dx * dx + dy * dy;
                if d2 < r2 {
                    f(&mut self.coverage[row + x as usize], d2.sqrt());
                    touched = true;
                }
            }
        }
        touched
    }

    /// Coverage at a pixel; 0 outside the surface.
    pub fn coverage_at(&self, x: u32, y: u32) -> f32 {
        if x >= self.width || y >= self.height {
            return 0.0;
        }
        self.coverage[y as usize * self.width as usize + x as usize]
    }

    pub fn mean_coverage(&self) -> f32 {
        if self.coverage.is_empty() {
            return 0.0;
        }
        self.coverage.iter().sum::<f32>() / self.coverage.len() as f32
    }

    pub fn coverage(&self) -> &[f32] {
        &self.coverage
    }

    /// Export as straight-alpha RGBA8 pixels, row-major.
    pub fn write_rgba8(&self, out: &mut Vec<[u8; 4]>) {
        let [r, g, b] = FOG_COLOR_RGB;
        out.clear();
        out.extend(
            self.coverage
                .iter()
                .map(|a| [r, g, b, (a.clamp(0.0, 1.0) * 255.0).round() as u8]),
        );
    }

    /// Same as [`write_rgba8`](Self::write_rgba8) but as a flat byte buffer.
    pub fn rgba8_bytes<'a>(&self, scratch: &'a mut Vec<[u8; 4]>) -> &'a [u8] {
        self.write_rgba8(scratch);
        bytemuck::cast_slice(scratch.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fog(w: u32, h: u32) -> FogSurface {
        FogSurface::new(w, h, FogParams::default())
    }

    #[test]
    fn mirror_flips_x_only() {
        let p = mirror_to_pixels(Vec2::new(0.2, 0.5), Vec2::new(800.0, 600.0));
        assert_eq!(p, Vec2::new(640.0, 300.0));
    }

    #[test]
    fn deposit_lands_on_the_mirrored_side() {
        let mut f = fog(800, 600);
        assert!(f.deposit(Vec2::new(0.2, 0.5), 1.0));
        // Pixel (640, 300) has its centre at (640.5, 300.5).
        let d = 0.5f32.hypot(0.5);
        let expected = 0.15 + 0.04 * (1.0 - d / 250.0) * 0.85;
        assert!((f.coverage_at(640, 300) - expected).abs() < 1e-5);
        assert!((f.coverage_at(160, 300) - 0.15).abs() < 1e-6);
    }

    #[test]
    fn revision_tracks_raster_changes_only() {
        let mut f = fog(100, 100);
        let r0 = f.revision();
        f.deposit(Vec2::splat(0.5), 0.05);
        f.erase(Vec2::new(-500.0, 50.0));
        f.erase(Vec2::new(f32::NAN, 50.0));
        assert_eq!(f.revision(), r0);

        f.deposit(Vec2::splat(0.5), 0.5);
        let r1 = f.revision();
        assert!(r1 > r0);
        f.erase(Vec2::new(50.0, 50.0));
        let r2 = f.revision();
        assert!(r2 > r1);
        assert!(!f.resize(100, 100));
        assert_eq!(f.revision(), r2);
        assert!(f.resize(120, 80));
        assert!(f.revision() > r2);
    }

    #[test]
    fn new_surface_is_uniformly_seeded() {
        let f = fog(16, 8);
        assert_eq!(f.coverage().len(), 128);
        assert!(f.coverage().iter().all(|a| (*a - 0.15).abs() < 1e-6));
    }

    #[test]
    fn deposit_respects_dead_zone() {
        let mut f = fog(400, 400);
        let before = f.mean_coverage();
        assert!(!f.deposit(Vec2::splat(0.5), 0.1));
        assert_eq!(f.mean_coverage(), before);
        assert!(f.deposit(Vec2::splat(0.5), 0.5));
        assert!(f.mean_coverage() > before);
    }

    #[test]
    fn deposit_falls_off_from_centre() {
        let mut f = fog(600, 600);
        f.deposit(Vec2::splat(0.5), 1.0);
        let centre = f.coverage_at(300, 300);
        let mid = f.coverage_at(300 + 120, 300);
        let outside = f.coverage_at(300 + 260, 300);
        assert!(centre > mid && mid > 0.15);
        assert!((outside - 0.15).abs() < 1e-6);
    }

    #[test]
    fn repeated_deposits_accumulate_below_one() {
        let mut f = fog(400, 400);
        for _ in 0..2000 {
            f.deposit(Vec2::splat(0.5), 1.0);
        }
        let c = f.coverage_at(200, 200);
        assert!(c > 0.9 && c <= 1.0);
    }

    #[test]
    fn erase_clears_plateau_and_spares_outside() {
        let mut f = fog(200, 200);
        f.erase(Vec2::new(100.0, 100.0));
        assert_eq!(f.coverage_at(100, 100), 0.0);
        assert_eq!(f.coverage_at(105, 100), 0.0);
        let ring = f.coverage_at(130, 100);
        assert!(ring > 0.0 && ring < 0.15);
        assert!((f.coverage_at(150, 100) - 0.15).abs() < 1e-6);
    }

    #[test]
    fn erase_near_edges_is_clipped() {
        let mut f = fog(50, 50);
        f.erase(Vec2::new(-2.0, 52.0));
        f.erase(Vec2::new(f32::NAN, 0.0));
        assert_eq!(f.coverage_at(0, 49), 0.0);
    }

    #[test]
    fn resize_reseeds_only_on_change() {
        let mut f = fog(100, 100);
        f.erase(Vec2::new(50.0, 50.0));
        assert!(!f.resize(100, 100));
        assert_eq!(f.coverage_at(50, 50), 0.0);
        assert!(f.resize(120, 90));
        assert_eq!(f.coverage().len(), 120 * 90);
        assert!((f.coverage_at(50, 50) - 0.15).abs() < 1e-6);
    }

    #[test]
    fn rgba_export_is_white_with_coverage_alpha() {
        let f = fog(2, 1);
        let mut scratch = Vec::new();
        let bytes = f.rgba8_bytes(&mut scratch);
        assert_eq!(bytes, &[255, 255, 255, 38, 255, 255, 255, 38]);
    }
}
