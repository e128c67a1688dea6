use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use ndarray::{ArrayD, Axis};
use rustfft::{Fft, FftDirection, FftPlanner};

use super::{Complex64, FftBackend, FftResult};
use crate::error::PlotViewError;

/// FFT backend on `rustfft`, with plans cached per length and direction.
pub struct RustFftBackend {
    planner: FftPlanner<f64>,
    plans: HashMap<(usize, bool), Arc<dyn Fft<f64>>>,
}

impl Default for RustFftBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for RustFftBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RustFftBackend")
            .field("cached_plans", &self.plans.len())
            .finish_non_exhaustive()
    }
}

impl RustFftBackend {
    /// Create a backend with an empty plan cache.
    #[must_use]
    pub fn new() -> Self {
        Self {
            planner: FftPlanner::new(),
            plans: HashMap::new(),
        }
    }

    /// Number of plans currently cached.
    #[must_use]
    pub fn cached_plans(&self) -> usize {
        self.plans.len()
    }

    fn plan(&mut self, len: usize, inverse: bool) -> Arc<dyn Fft<f64>> {
        let planner = &mut self.planner;
        Arc::clone(self.plans.entry((len, inverse)).or_insert_with(|| {
            log::debug!("planning {len}-point fft (inverse: {inverse})");
            let direction = if inverse {
                FftDirection::Inverse
            } else {
                FftDirection::Forward
            };
            planner.plan_fft(len, direction)
        }))
    }

    /// Transform every lane along `axis` in place.
    fn transform_axis(
        &mut self,
        data: &mut ArrayD<Complex64>,
        axis: usize,
        inverse: bool,
    ) {
        let len = data.len_of(Axis(axis));
        if len == 0 {
            return;
        }
        let fft = self.plan(len, inverse);
        let scale = if inverse { 1.0 / len as f64 } else { 1.0 };
        let mut buffer = vec![Complex64::default(); len];
        let mut scratch =
            vec![Complex64::default(); fft.get_inplace_scratch_len()];

        for mut lane in data.lanes_mut(Axis(axis)) {
            for (slot, value) in buffer.iter_mut().zip(lane.iter()) {
                *slot = *value;
            }
            fft.process_with_scratch(&mut buffer, &mut scratch);
            for (value, slot) in lane.iter_mut().zip(&buffer) {
                *value = *slot * scale;
            }
        }
    }

    fn transform_leading(
        &mut self,
        a: &ArrayD<Complex64>,
        n_dims: usize,
        inverse: bool,
    ) -> FftResult<Complex64> {
        check_dims(n_dims, a.ndim())?;
        let mut out = a.clone();
        for axis in 0..n_dims {
            self.transform_axis(&mut out, axis, inverse);
        }
        Ok(out)
    }

    fn transform_along(
        &mut self,
        a: &ArrayD<Complex64>,
        along_dim: usize,
        inverse: bool,
    ) -> FftResult<Complex64> {
        if along_dim >= a.ndim() {
            return Err(PlotViewError::InvalidDimension {
                dim: along_dim,
                ndim: a.ndim(),
            });
        }
        let mut out = a.clone();
        self.transform_axis(&mut out, along_dim, inverse);
        Ok(out)
    }
}

fn check_dims(n_dims: usize, ndim: usize) -> Result<(), PlotViewError> {
    if n_dims > ndim {
        return Err(PlotViewError::InvalidDimension { dim: n_dims, ndim });
    }
    Ok(())
}

impl FftBackend for RustFftBackend {
    fn fft_forward(
        &mut self,
        a: &ArrayD<Complex64>,
        n_dims: usize,
    ) -> FftResult<Complex64> {
        self.transform_leading(a, n_dims, false)
    }

    fn fft_forward_1d(
        &mut self,
        a: &ArrayD<Complex64>,
        along_dim: usize,
    ) -> FftResult<Complex64> {
        self.transform_along(a, along_dim, false)
    }

    fn fft_backward(
        &mut self,
        a: &ArrayD<Complex64>,
        n_dims: usize,
    ) -> FftResult<Complex64> {
        self.transform_leading(a, n_dims, true)
    }

    fn fft_backward_1d(
        &mut self,
        a: &ArrayD<Complex64>,
        along_dim: usize,
    ) -> FftResult<Complex64> {
        self.transform_along(a, along_dim, true)
    }

    fn caches_plans(&self) -> bool {
        true
    }

    fn free_plans(&mut self) {
        log::debug!("dropping {} cached fft plans", self.plans.len());
        self.plans.clear();
        self.planner = FftPlanner::new();
    }
}
