use std::sync::Arc;

use ecmsm_algebra::FieldElement;
use itertools::izip;
use num_bigint::{BigInt, BigUint};
use num_traits::One;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::info_span;

use crate::{EccError, EllipticCurve, MsmConfig, MsmError, Point};


/// Multi-scalar multiplication `sum_i scalar_i * point_i` via Pippenger's bucket method.
///
/// Each scalar is cut into `config.num_windows()` windows of `config.window_bits` bits. Per
/// window, every point is added to the bucket indexed by its scalar's window value, the buckets
/// are summed with weights by a running sum, and the window sums are combined by Horner's rule
/// from the most significant window down.
#[derive(Clone, Debug)]
pub struct MultiScalarMultiplication {
    curve: Arc<EllipticCurve>,
    config: MsmConfig,
    scalars: Vec<FieldElement>,
    points: Vec<Point>,
}

impl MultiScalarMultiplication {
    pub fn new(curve: Arc<EllipticCurve>) -> Self {
        Self {
            curve,
            config: MsmConfig::default(),
            scalars: vec![],
            points: vec![],
        }
    }

    pub fn with_config(curve: Arc<EllipticCurve>, config: MsmConfig) -> Result<Self, MsmError> {
        config.validate()?;
        Ok(Self {
            config,
            ..Self::new(curve)
        })
    }

    /// Replaces the loaded pairs. Fails without modifying `self` if the lists differ in length,
    /// a point is on another curve, or a scalar is wider than `config.scalar_bits`.
    pub fn load_data(
        &mut self,
        scalars: Vec<FieldElement>,
        points: Vec<Point>,
    ) -> Result<(), MsmError> {
        if scalars.len() != points.len() {
            return Err(MsmError::DimensionMismatch {
                scalars: scalars.len(),
                points: points.len(),
            });
        }
        if points.iter().any(|point| point.curve() != &self.curve) {
            return Err(EccError::CurveMismatch.into());
        }
        let max_bits = self.config.scalar_bits;
        if let Some((index, bits)) = scalars
            .iter()
            .map(|scalar| scalar.value().bits())
            .enumerate()
            .find(|&(_, bits)| bits > max_bits as u64)
        {
            return Err(MsmError::ScalarTooWide {
                index,
                bits,
                max_bits,
            });
        }

        tracing::debug!(len = scalars.len(), "loaded msm inputs");
        self.scalars = scalars;
        self.points = points;
        Ok(())
    }

    pub fn calculate(&self) -> Result<Point, MsmError> {
        let _span = info_span!(
            "msm",
            len = self.len(),
            window_bits = self.config.window_bits,
            num_windows = self.config.num_windows()
        )
        .entered();

        let window_sums = self.calculate_windows()?;
        let shift = BigInt::one() << self.config.window_bits;
        let mut acc = self.curve.identity();
        for window_sum in window_sums.iter().rev() {
            acc = acc.scalar_mul(shift.clone())?.add(window_sum)?;
        }
        tracing::debug!("msm result: {acc}");
        Ok(acc)
    }

    #[cfg(not(feature = "parallel"))]
    fn calculate_windows(&self) -> Result<Vec<Point>, MsmError> {
        (0..self.config.num_windows())
            .map(|window| self.calculate_chunk(window))
            .collect()
    }

    #[cfg(feature = "parallel")]
    fn calculate_windows(&self) -> Result<Vec<Point>, MsmError> {
        (0..self.config.num_windows())
            .into_par_iter()
            .map(|window| self.calculate_chunk(window))
            .collect()
    }

    /// Weighted bucket sum `sum_v v * (sum of points whose scalar has window value v)` for one
    /// window, using `2 * bucket_count` additions for the weighting.
    pub fn calculate_chunk(&self, window: usize) -> Result<Point, MsmError> {
        let bucket_count = self.config.bucket_count();
        let mut buckets = vec![self.curve.identity(); bucket_count + 1];
        for (scalar, point) in izip!(&self.scalars, &self.points) {
            let index = self.window_value(scalar.value(), window);
            buckets[index] = buckets[index].add(point)?;
        }

        // Bucket 0 has weight zero and is left out.
        let mut running_sum = self.curve.identity();
        let mut window_sum = self.curve.identity();
        for bucket in buckets[1..].iter().rev() {
            running_sum = running_sum.add(bucket)?;
            window_sum = window_sum.add(&running_sum)?;
        }
        tracing::trace!(window, "window sum: {window_sum}");
        Ok(window_sum)
    }

    /// Bits `[window * w, (window + 1) * w)` of `scalar`, where `w = config.window_bits`.
    pub fn window_value(&self, scalar: &BigUint, window: usize) -> usize {
        window_value(scalar, window, self.config.window_bits)
    }

    pub fn curve(&self) -> &Arc<EllipticCurve> {
        &self.curve
    }

    pub fn config(&self) -> &MsmConfig {
        &self.config
    }

    pub fn scalars(&self) -> &[FieldElement] {
        &self.scalars
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.scalars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scalars.is_empty()
    }
}

/// Window `window` of `scalar`, `window_bits` wide. `window_bits` must not exceed 64.
pub fn window_value(scalar: &BigUint, window: usize, window_bits: usize) -> usize {
    let shifted = scalar >> (window * window_bits);
    let low = shifted.iter_u64_digits().next().unwrap_or(0);
    let mask = if window_bits >= 64 {
        u64::MAX
    } else {
        (1u64 << window_bits) - 1
    };
    (low & mask) as usize
}
