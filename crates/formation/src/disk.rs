//! The disk's dust-lane partition.
//!
//! The disk is tracked as an ordered arena of radial bands, each flagged
//! for remaining dust and gas. The partition is always contiguous,
//! non-overlapping, and ascending over `[0, dust limit]`; `consume` splits
//! and clears bands as a body sweeps its influence zone and then re-merges
//! equal-flag neighbors.

/// One radial band of the disk. Edges are in AU.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DustBand {
    pub inner_edge: f64,
    pub outer_edge: f64,
    pub dust_present: bool,
    pub gas_present: bool,
}

/// The ordered dust-lane partition for one generation run.
#[derive(Debug, Clone)]
pub struct DustDisk {
    bands: Vec<DustBand>,
    /// Whether any band in the accessible planet range still has dust
    pub dust_left: bool,
}

impl DustDisk {
    /// A fresh disk: one band spanning `[0, outer_edge]` with dust and gas.
    pub fn new(outer_edge: f64) -> Self {
        DustDisk {
            bands: vec![DustBand {
                inner_edge: 0.0,
                outer_edge,
                dust_present: true,
                gas_present: true,
            }],
            dust_left: true,
        }
    }

    pub fn bands(&self) -> &[DustBand] {
        &self.bands
    }

    /// True if any band intersecting `[inner, outer]` still has dust.
    pub fn has_dust(&self, inner: f64, outer: f64) -> bool {
        let mut index = 0;
        while index < self.bands.len() && self.bands[index].outer_edge < inner {
            index += 1;
        }
        if index >= self.bands.len() {
            return false;
        }
        let mut dust_here = self.bands[index].dust_present;
        while index < self.bands.len() && self.bands[index].inner_edge < outer {
            dust_here = dust_here || self.bands[index].dust_present;
            index += 1;
        }
        dust_here
    }

    /// Clear dust (and, unless the body stayed below critical mass, gas)
    /// from `[min, max]`, splitting bands that straddle the boundaries.
    /// Afterwards equal-flag neighbors are merged to a fixed point and
    /// `dust_left` is recomputed over the accessible range
    /// `[inner_bound, outer_bound]`.
    pub fn consume(
        &mut self,
        min: f64,
        max: f64,
        stayed_below_critical: bool,
        inner_bound: f64,
        outer_bound: f64,
    ) {
        let gas = stayed_below_critical;
        let mut index = 0;
        while index < self.bands.len() {
            let band = self.bands[index];
            if band.inner_edge < min && band.outer_edge > max {
                // Band spans the whole swept interval: split into three
                let middle = DustBand {
                    inner_edge: min,
                    outer_edge: max,
                    dust_present: false,
                    gas_present: band.gas_present && gas,
                };
                let outer = DustBand {
                    inner_edge: max,
                    ..band
                };
                self.bands[index].outer_edge = min;
                self.bands.insert(index + 1, middle);
                self.bands.insert(index + 2, outer);
                index += 3;
            } else if band.inner_edge < max && band.outer_edge > max {
                // Band straddles the outer boundary
                let outer = DustBand {
                    inner_edge: max,
                    ..band
                };
                self.bands[index].outer_edge = max;
                self.bands[index].dust_present = false;
                self.bands[index].gas_present = band.gas_present && gas;
                self.bands.insert(index + 1, outer);
                index += 2;
            } else if band.inner_edge < min && band.outer_edge > min {
                // Band straddles the inner boundary
                let cleared = DustBand {
                    inner_edge: min,
                    dust_present: false,
                    gas_present: band.gas_present && gas,
                    ..band
                };
                self.bands[index].outer_edge = min;
                self.bands.insert(index + 1, cleared);
                index += 2;
            } else if band.inner_edge >= min && band.outer_edge <= max {
                // Band fully inside the swept interval
                self.bands[index].dust_present = false;
                self.bands[index].gas_present = band.gas_present && gas;
                index += 1;
            } else {
                index += 1;
            }
        }

        self.dust_left = false;
        let mut index = 0;
        while index < self.bands.len() {
            if self.bands[index].dust_present
                && self.bands[index].outer_edge >= inner_bound
                && self.bands[index].inner_edge <= outer_bound
            {
                self.dust_left = true;
            }
            // Absorb runs of equal-flag neighbors
            if index + 1 < self.bands.len()
                && self.bands[index].dust_present == self.bands[index + 1].dust_present
                && self.bands[index].gas_present == self.bands[index + 1].gas_present
            {
                self.bands[index].outer_edge = self.bands[index + 1].outer_edge;
                self.bands.remove(index + 1);
            } else {
                index += 1;
            }
        }
    }
}
