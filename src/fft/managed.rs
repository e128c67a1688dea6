use ndarray::ArrayD;

use super::{Complex64, FftBackend, FftResult};
use crate::error::PlotViewError;

/// Placeholder backend: every transform fails with
/// [`PlotViewError::NotImplemented`] naming the operation.
#[derive(Debug, Clone, Copy, Default)]
pub struct ManagedFft;

impl FftBackend for ManagedFft {
    fn fft_forward(
        &mut self,
        _a: &ArrayD<Complex64>,
        _n_dims: usize,
    ) -> FftResult<Complex64> {
        Err(PlotViewError::NotImplemented("fft_forward"))
    }

    fn fft_forward_1d(
        &mut self,
        _a: &ArrayD<Complex64>,
        _along_dim: usize,
    ) -> FftResult<Complex64> {
        Err(PlotViewError::NotImplemented("fft_forward_1d"))
    }

    fn fft_backward(
        &mut self,
        _a: &ArrayD<Complex64>,
        _n_dims: usize,
    ) -> FftResult<Complex64> {
        Err(PlotViewError::NotImplemented("fft_backward"))
    }

    fn fft_backward_1d(
        &mut self,
        _a: &ArrayD<Complex64>,
        _along_dim: usize,
    ) -> FftResult<Complex64> {
        Err(PlotViewError::NotImplemented("fft_backward_1d"))
    }

    fn fft_forward_real(
        &mut self,
        _a: &ArrayD<f64>,
        _n_dims: usize,
    ) -> FftResult<Complex64> {
        Err(PlotViewError::NotImplemented("fft_forward_real"))
    }

    fn fft_forward_1d_real(
        &mut self,
        _a: &ArrayD<f64>,
        _along_dim: usize,
    ) -> FftResult<Complex64> {
        Err(PlotViewError::NotImplemented("fft_forward_1d_real"))
    }

    fn fft_backward_sym(
        &mut self,
        _a: &ArrayD<Complex64>,
        _n_dims: usize,
    ) -> FftResult<f64> {
        Err(PlotViewError::NotImplemented("fft_backward_sym"))
    }

    fn fft_backward_sym_1d(
        &mut self,
        _a: &ArrayD<Complex64>,
        _along_dim: usize,
    ) -> FftResult<f64> {
        Err(PlotViewError::NotImplemented("fft_backward_sym_1d"))
    }
}
