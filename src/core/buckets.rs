/// A contiguous distance band `[start_km, end_km)`.
///
/// The final band of a set is closed on both ends so a driver at exactly
/// the maximum radius is not dropped. Membership is decided by interval
/// containment against the stored bounds, never by re-deriving the
/// interval from floating point subtraction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistanceBucket {
    pub start_km: f64,
    pub end_km: f64,
}

impl DistanceBucket {
    /// Band label, e.g. "0-5" or "10-12"; integral bounds print without a
    /// decimal point.
    pub fn label(&self) -> String {
        format!("{}-{}", format_km(self.start_km), format_km(self.end_km))
    }
}

fn format_km(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

/// Build the ordered list of distance bands covering `[0, max_radius_km]`.
///
/// Walks from 0 in steps of `increment_km`, clamping the final band's end
/// to `max_radius_km`, so the last band may be narrower than the
/// increment. Callers validate that both parameters are positive.
pub fn build_buckets(max_radius_km: f64, increment_km: f64) -> Vec<DistanceBucket> {
    let mut buckets = Vec::new();
    let mut start = 0.0;
    while start < max_radius_km {
        let end = (start + increment_km).min(max_radius_km);
        buckets.push(DistanceBucket {
            start_km: start,
            end_km: end,
        });
        start = end;
    }
    buckets
}

/// Index of the band containing `distance_km`, if any.
///
/// Half-open test for every band except the last, which is closed.
pub fn bucket_index(distance_km: f64, buckets: &[DistanceBucket]) -> Option<usize> {
    let last = buckets.len().checked_sub(1)?;
    for (i, bucket) in buckets.iter().enumerate() {
        let contained = if i < last {
            distance_km >= bucket.start_km && distance_km < bucket.end_km
        } else {
            distance_km >= bucket.start_km && distance_km <= bucket.end_km
        };
        if contained {
            return Some(i);
        }
    }
    None
}
