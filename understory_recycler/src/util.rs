// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Number of whole items of size `extent` needed to cover `span`, rounding up.
///
/// Works without `std` or `libm`: the quotient is truncated and bumped by one
/// when a remainder exists, saturating at `usize::MAX`. Non-positive or
/// non-finite inputs yield `0`.
pub(crate) fn ceil_div(span: f64, extent: f64) -> usize {
    if !span.is_finite() || !extent.is_finite() || span <= 0.0 || extent <= 0.0 {
        return 0;
    }
    let ratio = span / extent;
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "Ratio is finite and positive; truncation is the intended floor"
    )]
    let whole = ratio as usize;
    #[allow(
        clippy::cast_precision_loss,
        reason = "Item counts stay far below f64's exact integer range"
    )]
    let floor = whole as f64;
    if floor < ratio {
        whole.saturating_add(1)
    } else {
        whole
    }
}
