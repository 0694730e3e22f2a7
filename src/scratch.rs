//! Scratch-off coverage tracking.
//!
//! A [`ScratchSurface`] quantises pointer samples onto a uniform grid of
//! square cells and reports the fraction of cells touched so far. The first
//! sample that pushes coverage to the reveal threshold flips the surface to
//! revealed; from then on the surface ignores all input.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::ConfigError;
use crate::util::clog;

/// Card width on a 390px-wide phone screen (85% of the viewport).
pub const DEFAULT_CARD_WIDTH: f64 = 390.0 * 0.85;
pub const DEFAULT_CARD_HEIGHT: f64 = 180.0;
pub const DEFAULT_CELL_SIZE: f64 = 30.0;
pub const DEFAULT_REVEAL_THRESHOLD: f64 = 0.40;

/// How the denominator of the coverage ratio is derived.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellCountMode {
    /// Surface area over cell area, `width * height / cell_size^2`, kept
    /// fractional as the coverage denominator.
    #[default]
    Area,
    /// `ceil(width / cell_size) * ceil(height / cell_size)`: every partial
    /// edge cell counts as a whole cell.
    Tiled,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScratchConfig {
    pub width: f64,
    pub height: f64,
    pub cell_size: f64,
    pub threshold: f64,
    #[serde(default)]
    pub cell_count: CellCountMode,
}

impl Default for ScratchConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_CARD_WIDTH,
            height: DEFAULT_CARD_HEIGHT,
            cell_size: DEFAULT_CELL_SIZE,
            threshold: DEFAULT_REVEAL_THRESHOLD,
            cell_count: CellCountMode::Area,
        }
    }
}

impl ScratchConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("width", self.width),
            ("height", self.height),
            ("cell_size", self.cell_size),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::NonPositiveDimension { name, value });
            }
        }
        if !(self.threshold > 0.0 && self.threshold <= 1.0) {
            return Err(ConfigError::ThresholdOutOfRange(self.threshold));
        }
        Ok(())
    }
}

/// Grid cell key. Integer pair, so equal cells always hash equal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellCoord {
    pub row: u32,
    pub col: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GesturePhase {
    Start,
    Move,
    End,
}

/// One pointer sample in surface-local coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerSample {
    pub x: f64,
    pub y: f64,
    pub phase: GesturePhase,
}

/// Result of feeding one sample to a surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TouchOutcome {
    /// Coverage ratio after the sample, in `[0, 1]`.
    pub coverage: f64,
    /// The cell this sample added, if it was not touched before.
    pub newly_touched: Option<CellCoord>,
    /// True on the single sample that revealed the surface.
    pub just_revealed: bool,
}

#[derive(Debug, Clone)]
pub struct ScratchSurface {
    config: ScratchConfig,
    cols: u32,
    rows: u32,
    total_cells: u32,
    /// Coverage denominator; fractional in `Area` mode.
    denominator: f64,
    touched: HashSet<CellCoord>,
    revealed: bool,
}

fn grid_len(len: f64, cell: f64) -> u64 {
    (len / cell).ceil().max(1.0) as u64
}

impl ScratchSurface {
    pub fn new(config: ScratchConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let cols = grid_len(config.width, config.cell_size);
        let rows = grid_len(config.height, config.cell_size);
        // Cell counts must fit u32 so they also fit a 32-bit usize.
        let tiled = cols
            .checked_mul(rows)
            .and_then(|n| u32::try_from(n).ok())
            .ok_or(ConfigError::GridTooLarge { cols, rows })?;
        let (total_cells, denominator) = match config.cell_count {
            CellCountMode::Tiled => (tiled, tiled as f64),
            CellCountMode::Area => {
                let estimate = (config.width / config.cell_size) * (config.height / config.cell_size);
                let whole = (estimate.ceil() as u32).clamp(1, tiled);
                (whole, estimate.max(f64::MIN_POSITIVE))
            }
        };
        Ok(Self {
            config,
            cols: cols as u32,
            rows: rows as u32,
            total_cells,
            denominator,
            touched: HashSet::new(),
            revealed: false,
        })
    }

    /// Whole-cell upper bound on the touched count. In `Area` mode this is the
    /// area estimate rounded up.
    pub fn total_cells(&self) -> usize {
        self.total_cells as usize
    }

    pub fn touched_count(&self) -> usize {
        self.touched.len()
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    pub fn coverage(&self) -> f64 {
        (self.touched.len() as f64 / self.denominator).min(1.0)
    }

    /// Cell containing `(x, y)`, clamped into the grid. `None` for NaN or infinite input.
    pub fn cell_at(&self, x: f64, y: f64) -> Option<CellCoord> {
        if !x.is_finite() || !y.is_finite() {
            return None;
        }
        let quantise = |v: f64, max: u32| -> u32 {
            let idx = (v / self.config.cell_size).floor();
            if idx <= 0.0 { 0 } else { (idx as u32).min(max - 1) }
        };
        Some(CellCoord {
            row: quantise(y, self.rows),
            col: quantise(x, self.cols),
        })
    }

    /// Pixel rectangle `(x, y, w, h)` of a cell, clipped to the surface.
    pub fn cell_rect(&self, cell: CellCoord) -> (f64, f64, f64, f64) {
        let size = self.config.cell_size;
        let x = cell.col as f64 * size;
        let y = cell.row as f64 * size;
        let w = size.min(self.config.width - x).max(0.0);
        let h = size.min(self.config.height - y).max(0.0);
        (x, y, w, h)
    }

    fn outcome(&self, newly_touched: Option<CellCoord>, just_revealed: bool) -> TouchOutcome {
        TouchOutcome {
            coverage: self.coverage(),
            newly_touched,
            just_revealed,
        }
    }

    pub fn record_touch(&mut self, x: f64, y: f64) -> TouchOutcome {
        if self.revealed {
            return self.outcome(None, false);
        }
        let Some(cell) = self.cell_at(x, y) else {
            return self.outcome(None, false);
        };
        if !self.touched.insert(cell) {
            return self.outcome(None, false);
        }
        let just_revealed = self.coverage() >= self.config.threshold;
        if just_revealed {
            self.revealed = true;
            clog(&format!(
                "scratch revealed touched={} total={}",
                self.touched.len(),
                self.total_cells
            ));
        }
        self.outcome(Some(cell), just_revealed)
    }

    pub fn record_sample(&mut self, sample: PointerSample) -> TouchOutcome {
        match sample.phase {
            GesturePhase::Start | GesturePhase::Move => self.record_touch(sample.x, sample.y),
            GesturePhase::End => self.outcome(None, false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // 150x60 at 30px: 5 columns, 2 rows, 10 cells either way.
    fn ten_cell_surface() -> ScratchSurface {
        ScratchSurface::new(ScratchConfig {
            width: 150.0,
            height: 60.0,
            cell_size: 30.0,
            threshold: 0.40,
            cell_count: CellCountMode::Area,
        })
        .unwrap()
    }

    fn touch_cell(s: &mut ScratchSurface, row: u32, col: u32) -> TouchOutcome {
        s.record_touch(col as f64 * 30.0 + 15.0, row as f64 * 30.0 + 15.0)
    }

    #[test]
    fn ten_cells_reveal_on_fourth_distinct_touch() {
        let mut s = ten_cell_surface();
        assert_eq!(s.total_cells(), 10);
        for col in 0..3 {
            assert!(!touch_cell(&mut s, 0, col).just_revealed);
        }
        assert!(!s.is_revealed());
        assert!((s.coverage() - 0.3).abs() < 1e-12);
        let out = touch_cell(&mut s, 1, 0);
        assert!(out.just_revealed);
        assert!(s.is_revealed());
        assert_eq!(out.coverage, 0.4);
    }

    #[test]
    fn same_cell_counts_once() {
        let mut s = ten_cell_surface();
        let first = s.record_touch(29.0, 29.0);
        assert_eq!(first.newly_touched, Some(CellCoord { row: 0, col: 0 }));
        let second = s.record_touch(5.0, 5.0);
        assert_eq!(second.newly_touched, None);
        assert_eq!(s.touched_count(), 1);
    }

    #[test]
    fn out_of_range_input_is_clamped_or_ignored() {
        let mut s = ten_cell_surface();
        let low = s.record_touch(-40.0, -1.0);
        assert_eq!(low.newly_touched, Some(CellCoord { row: 0, col: 0 }));
        let high = s.record_touch(10_000.0, 10_000.0);
        assert_eq!(high.newly_touched, Some(CellCoord { row: 1, col: 4 }));

        let before = s.touched_count();
        let out = s.record_touch(f64::NAN, 3.0);
        assert_eq!(out.newly_touched, None);
        s.record_touch(f64::INFINITY, f64::NEG_INFINITY);
        assert_eq!(s.touched_count(), before);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let zero_cell = ScratchConfig { cell_size: 0.0, ..ScratchConfig::default() };
        assert_eq!(
            ScratchSurface::new(zero_cell).unwrap_err(),
            ConfigError::NonPositiveDimension { name: "cell_size", value: 0.0 }
        );
        let zero_threshold = ScratchConfig { threshold: 0.0, ..ScratchConfig::default() };
        assert_eq!(
            ScratchSurface::new(zero_threshold).unwrap_err(),
            ConfigError::ThresholdOutOfRange(0.0)
        );
        let too_high = ScratchConfig { threshold: 1.5, ..ScratchConfig::default() };
        assert!(ScratchSurface::new(too_high).is_err());
        let negative = ScratchConfig { height: -1.0, ..ScratchConfig::default() };
        assert!(matches!(
            ScratchSurface::new(negative),
            Err(ConfigError::NonPositiveDimension { name: "height", .. })
        ));
        let nan_width = ScratchConfig { width: f64::NAN, ..ScratchConfig::default() };
        assert!(ScratchSurface::new(nan_width).is_err());
    }

    #[test]
    fn area_estimate_is_smaller_than_tiling_for_ragged_edges() {
        // 100x50 at 30px: 4x2 tiles but only 5.55.. cells of area.
        let base = ScratchConfig {
            width: 100.0,
            height: 50.0,
            cell_size: 30.0,
            threshold: 0.5,
            cell_count: CellCountMode::Area,
        };
        let area = ScratchSurface::new(base).unwrap();
        assert_eq!(area.total_cells(), 6);
        let tiled = ScratchSurface::new(ScratchConfig { cell_count: CellCountMode::Tiled, ..base }).unwrap();
        assert_eq!(tiled.total_cells(), 8);
    }

    #[test]
    fn default_card_reveals_at_twenty_seven_cells() {
        let mut s = ScratchSurface::new(ScratchConfig::default()).unwrap();
        assert_eq!(s.total_cells(), 67);
        let mut revealed_at = None;
        'outer: for row in 0..6 {
            for col in 0..12 {
                if touch_cell(&mut s, row, col).just_revealed {
                    revealed_at = Some(s.touched_count());
                    break 'outer;
                }
            }
        }
        assert_eq!(revealed_at, Some(27));
    }

    #[test]
    fn end_phase_records_nothing() {
        let mut s = ten_cell_surface();
        let out = s.record_sample(PointerSample { x: 10.0, y: 10.0, phase: GesturePhase::End });
        assert_eq!(out.newly_touched, None);
        assert_eq!(s.touched_count(), 0);
    }

    #[test]
    fn sample_stream_reports_reveal() {
        let mut s = ten_cell_surface();
        let mut samples = vec![PointerSample { x: 1.0, y: 1.0, phase: GesturePhase::Start }];
        samples.extend((1..5).map(|c| PointerSample {
            x: c as f64 * 30.0 + 1.0,
            y: 1.0,
            phase: GesturePhase::Move,
        }));
        samples.push(PointerSample { x: 0.0, y: 0.0, phase: GesturePhase::End });
        let fired: Vec<bool> = samples.into_iter().map(|p| s.record_sample(p).just_revealed).collect();
        assert_eq!(fired, vec![false, false, false, true, false, false]);
        assert!(s.is_revealed());
        assert_eq!(s.touched_count(), 4);
    }

    #[test]
    fn fractional_area_estimate_is_the_denominator() {
        // 372x30 at 30px: 12.4 cells of area, 13 whole cells.
        let mut s = ScratchSurface::new(ScratchConfig {
            width: 372.0,
            height: 30.0,
            cell_size: 30.0,
            threshold: 0.4,
            cell_count: CellCountMode::Area,
        })
        .unwrap();
        assert_eq!(s.total_cells(), 13);
        for col in 0..4 {
            assert!(!touch_cell(&mut s, 0, col).just_revealed);
        }
        let out = touch_cell(&mut s, 0, 4);
        assert!(out.just_revealed);
        assert!((out.coverage - 5.0 / 12.4).abs() < 1e-12);
    }

    #[test]
    fn grid_over_u32_cells_is_rejected() {
        for mode in [CellCountMode::Tiled, CellCountMode::Area] {
            let huge = ScratchConfig {
                width: 65536.0,
                height: 65536.0,
                cell_size: 1.0,
                threshold: 0.4,
                cell_count: mode,
            };
            assert_eq!(
                ScratchSurface::new(huge).unwrap_err(),
                ConfigError::GridTooLarge { cols: 65536, rows: 65536 }
            );
        }
        let unbounded = ScratchConfig { width: 1e300, cell_size: 1e-300, ..ScratchConfig::default() };
        assert!(matches!(ScratchSurface::new(unbounded), Err(ConfigError::GridTooLarge { .. })));

        let largest = ScratchConfig {
            width: 65535.0,
            height: 65535.0,
            cell_size: 1.0,
            threshold: 0.4,
            cell_count: CellCountMode::Tiled,
        };
        let s = ScratchSurface::new(largest).unwrap();
        assert_eq!(s.total_cells() as u64, 65535 * 65535);
        assert_eq!(s.coverage(), 0.0);
    }

    #[test]
    fn edge_cell_rect_is_clipped() {
        let s = ScratchSurface::new(ScratchConfig {
            width: 100.0,
            height: 50.0,
            cell_size: 30.0,
            threshold: 0.5,
            cell_count: CellCountMode::Tiled,
        })
        .unwrap();
        assert_eq!(s.cell_rect(CellCoord { row: 1, col: 3 }), (90.0, 30.0, 10.0, 20.0));
        assert_eq!(s.cell_rect(CellCoord { row: 0, col: 0 }), (0.0, 0.0, 30.0, 30.0));
    }

    proptest! {
        #[test]
        fn touched_count_monotonic_and_bounded(
            points in prop::collection::vec((-50.0f64..400.0, -50.0f64..250.0), 0..300),
            tiled in any::<bool>(),
        ) {
            let mode = if tiled { CellCountMode::Tiled } else { CellCountMode::Area };
            let mut s = ScratchSurface::new(ScratchConfig { cell_count: mode, ..ScratchConfig::default() }).unwrap();
            let mut last = 0;
            let mut fired = 0;
            for (x, y) in points {
                let out = s.record_touch(x, y);
                prop_assert!(s.touched_count() >= last);
                prop_assert!(s.touched_count() <= s.total_cells());
                prop_assert!((0.0..=1.0).contains(&out.coverage));
                if out.just_revealed { fired += 1; }
                last = s.touched_count();
            }
            prop_assert!(fired <= 1);
            prop_assert_eq!(fired == 1, s.is_revealed());
        }

        #[test]
        fn duplicate_sample_adds_at_most_one(x in -10.0f64..400.0, y in -10.0f64..200.0) {
            let mut s = ScratchSurface::new(ScratchConfig::default()).unwrap();
            s.record_touch(x, y);
            s.record_touch(x, y);
            prop_assert_eq!(s.touched_count(), 1);
        }

        #[test]
        fn revealed_surface_is_inert(
            points in prop::collection::vec((0.0f64..DEFAULT_CARD_WIDTH, 0.0f64..DEFAULT_CARD_HEIGHT), 1000),
        ) {
            let mut s = ten_cell_surface();
            for col in 0..4 {
                touch_cell(&mut s, 0, col);
            }
            prop_assert!(s.is_revealed());
            let (count, coverage) = (s.touched_count(), s.coverage());
            for (x, y) in points {
                let out = s.record_touch(x, y);
                prop_assert!(!out.just_revealed);
                prop_assert_eq!(out.newly_touched, None);
            }
            prop_assert_eq!(s.touched_count(), count);
            prop_assert_eq!(s.coverage(), coverage);
            prop_assert!(s.is_revealed());
        }
    }
}
