//! Pluggable Fourier-transform backends.
//!
//! [`FftBackend`] is the capability interface numeric code calls into.
//! Two implementations ship with the crate:
//!
//! - [`ManagedFft`] - placeholder that reports every transform as not
//!   implemented
//! - [`RustFftBackend`] - working backend on top of `rustfft`
//!
//! N-dimensional transforms run along the leading `n_dims` axes. Backward
//! transforms are scaled by `1 / n`, so `backward(forward(a)) == a`.

mod managed;
mod native;

use ndarray::ArrayD;

pub use managed::ManagedFft;
pub use native::RustFftBackend;
/// Complex element type of all transforms.
pub use rustfft::num_complex::Complex64;

use crate::error::PlotViewError;

/// Result type of every transform.
pub type FftResult<T> = Result<ArrayD<T>, PlotViewError>;

/// Forward/backward FFTs over complex and real arrays.
///
/// The real-input and hermitian variants default to the complex transforms,
/// which is what a backend without dedicated real-data kernels would do.
/// Backends report through [`speedy_hermitian`](Self::speedy_hermitian)
/// whether their hermitian path is actually faster.
pub trait FftBackend {
    /// N-dimensional forward transform along the first `n_dims` axes.
    fn fft_forward(
        &mut self,
        a: &ArrayD<Complex64>,
        n_dims: usize,
    ) -> FftResult<Complex64>;

    /// 1-dimensional forward transform along `along_dim`.
    fn fft_forward_1d(
        &mut self,
        a: &ArrayD<Complex64>,
        along_dim: usize,
    ) -> FftResult<Complex64>;

    /// N-dimensional backward transform along the first `n_dims` axes.
    fn fft_backward(
        &mut self,
        a: &ArrayD<Complex64>,
        n_dims: usize,
    ) -> FftResult<Complex64>;

    /// 1-dimensional backward transform along `along_dim`.
    fn fft_backward_1d(
        &mut self,
        a: &ArrayD<Complex64>,
        along_dim: usize,
    ) -> FftResult<Complex64>;

    /// N-dimensional forward transform of real input.
    fn fft_forward_real(
        &mut self,
        a: &ArrayD<f64>,
        n_dims: usize,
    ) -> FftResult<Complex64> {
        self.fft_forward(&to_complex(a), n_dims)
    }

    /// 1-dimensional forward transform of real input.
    fn fft_forward_1d_real(
        &mut self,
        a: &ArrayD<f64>,
        along_dim: usize,
    ) -> FftResult<Complex64> {
        self.fft_forward_1d(&to_complex(a), along_dim)
    }

    /// N-dimensional backward transform of a hermitian-symmetric sequence,
    /// producing real output.
    fn fft_backward_sym(
        &mut self,
        a: &ArrayD<Complex64>,
        n_dims: usize,
    ) -> FftResult<f64> {
        self.fft_backward(a, n_dims).map(|c| real_part(&c))
    }

    /// 1-dimensional backward transform of a hermitian-symmetric sequence,
    /// producing real output.
    fn fft_backward_sym_1d(
        &mut self,
        a: &ArrayD<Complex64>,
        along_dim: usize,
    ) -> FftResult<f64> {
        self.fft_backward_1d(a, along_dim).map(|c| real_part(&c))
    }

    /// True if plans are kept between calls.
    fn caches_plans(&self) -> bool {
        false
    }

    /// True if hermitian input is transformed faster than general input.
    fn speedy_hermitian(&self) -> bool {
        false
    }

    /// Drop all cached plans.
    fn free_plans(&mut self) {}
}

/// Widen a real array to complex.
#[must_use]
pub fn to_complex(a: &ArrayD<f64>) -> ArrayD<Complex64> {
    a.mapv(|re| Complex64::new(re, 0.0))
}

/// Real part of every element.
#[must_use]
pub fn real_part(a: &ArrayD<Complex64>) -> ArrayD<f64> {
    a.mapv(|c| c.re)
}
