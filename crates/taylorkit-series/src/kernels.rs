//! Homogeneous-coefficient kernels.
//!
//! Each function returns the coefficient of one degree `k` of a result, given
//! the operands and the already computed prefix of the result. The recurrences
//! come from the differential equation the result satisfies, e.g.
//! `(e^a)' = a' e^a`. Kernels never allocate series and never call drivers;
//! callers guarantee every index they touch is within the slices.
//!
//! Index conventions: `a`, `b` are operands, `c` is the result buffer being
//! filled in increasing degree.

use taylorkit_rings::{Elementary, Ring};

/// `n` as a coefficient.
#[allow(clippy::cast_possible_wrap)]
pub(crate) fn int<T: Ring>(n: usize) -> T {
    T::from_int(n as i64)
}

/// Degree `k` of the Cauchy product `a * b`.
///
/// `c_k = Σ_{i=0}^{k} a_i b_{k-i}`
pub fn mul_coeff<T: Ring>(a: &[T], b: &[T], k: usize) -> T {
    let mut sum = T::zero();
    for i in 0..=k {
        sum = sum + a[i].clone() * b[k - i].clone();
    }
    sum
}

/// Degree `j` of the quotient `a / b` after factoring out `t^m` from both.
///
/// With `A_j = a_{j+m}` and `B_j = b_{j+m}`, solves `Σ_{i=0}^{j} c_i B_{j-i} = A_j`
/// for `c_j`. Returns `None` if `B_0` cannot be divided by.
pub fn div_coeff<T: Ring>(a: &[T], b: &[T], c: &[T], m: usize, j: usize) -> Option<T> {
    let mut sum = a[j + m].clone();
    for i in 0..j {
        sum = sum - c[i].clone() * b[j - i + m].clone();
    }
    sum.checked_div(&b[m])
}

/// Degree `k` of `a * a`, using the symmetry of the convolution.
pub fn square_coeff<T: Ring>(a: &[T], k: usize) -> T {
    if k == 0 {
        return a[0].clone() * a[0].clone();
    }
    let mut sum = T::zero();
    for i in 0..=(k - 1) / 2 {
        sum = sum + a[i].clone() * a[k - i].clone();
    }
    sum = sum.clone() + sum;
    if k % 2 == 0 {
        sum = sum + a[k / 2].clone() * a[k / 2].clone();
    }
    sum
}

/// Degree `k > p/2` of `sqrt(a)`, where `p` is the (even) leading degree of `a`.
///
/// Inverts `c * c = a` at degree `k + p/2`, whose only unknown term is
/// `2 c_{p/2} c_k`.
pub fn sqrt_coeff<T: Elementary>(a: &[T], c: &[T], p: usize, k: usize) -> T {
    let l = p / 2;
    let n = k + l;
    let mut sum = T::zero();
    for i in l + 1..=(n - 1) / 2 {
        sum = sum + c[i].clone() * c[n - i].clone();
    }
    sum = sum.clone() + sum;
    if n % 2 == 0 {
        sum = sum + c[n / 2].clone() * c[n / 2].clone();
    }
    (a[n].clone() - sum) / (int::<T>(2) * c[l].clone())
}

/// Degree `k > l` of `a^x`, where `p` is the leading degree of `a` and
/// `l = x p` the leading degree of the result.
///
/// From `a (a^x)' = x a' a^x`:
/// `c_k = Σ_{i=l}^{k-1} (x(k-i) - (i-l)) a_{k-i+p} c_i / ((k-l) a_p)`
#[allow(clippy::cast_precision_loss)]
pub fn pow_coeff<T: Elementary>(a: &[T], c: &[T], x: f64, p: usize, l: usize, k: usize) -> T {
    let mut sum = T::zero();
    for i in l..k {
        let weight = x * (k - i) as f64 - (i - l) as f64;
        sum = sum + T::from_f64(weight) * a[k - i + p].clone() * c[i].clone();
    }
    sum / (int::<T>(k - l) * a[p].clone())
}

/// Degree `k ≥ 1` of `exp(a)`.
///
/// `c_k = Σ_{i=0}^{k-1} (k-i) a_{k-i} c_i / k`
pub fn exp_coeff<T: Elementary>(a: &[T], c: &[T], k: usize) -> T {
    let mut sum = T::zero();
    for i in 0..k {
        sum = sum + int::<T>(k - i) * a[k - i].clone() * c[i].clone();
    }
    sum / int::<T>(k)
}

/// Degree `k ≥ 1` of `log(a)`, for `a_0 ≠ 0`.
///
/// `c_k = (a_k - Σ_{i=1}^{k-1} (k-i) a_i c_{k-i} / k) / a_0`
pub fn log_coeff<T: Elementary>(a: &[T], c: &[T], k: usize) -> T {
    let mut sum = T::zero();
    for i in 1..k {
        sum = sum + int::<T>(k - i) * a[i].clone() * c[k - i].clone();
    }
    (a[k].clone() - sum / int::<T>(k)) / a[0].clone()
}

/// Degree `k ≥ 1` of the pair `(sin(a), cos(a))`.
///
/// `sin' = a' cos` and `cos' = -a' sin` couple the two buffers, so both
/// prefixes must be filled through `k - 1`.
pub fn sincos_coeff<T: Elementary>(a: &[T], s: &[T], c: &[T], k: usize) -> (T, T) {
    let mut sin_sum = T::zero();
    let mut cos_sum = T::zero();
    for i in 1..=k {
        let x = int::<T>(i) * a[i].clone();
        sin_sum = sin_sum + x.clone() * c[k - i].clone();
        cos_sum = cos_sum - x * s[k - i].clone();
    }
    let k = int::<T>(k);
    (sin_sum / k.clone(), cos_sum / k)
}

/// Degree `k ≥ 1` of `tan(a)`, given `t2 = tan(a)^2` through degree `k - 1`.
///
/// `tan' = a' (1 + tan^2)`:
/// `c_k = a_k + Σ_{i=0}^{k-1} (k-i) a_{k-i} t2_i / k`
pub fn tan_coeff<T: Elementary>(a: &[T], t2: &[T], k: usize) -> T {
    let mut sum = T::zero();
    for i in 0..k {
        sum = sum + int::<T>(k - i) * a[k - i].clone() * t2[i].clone();
    }
    a[k].clone() + sum / int::<T>(k)
}
