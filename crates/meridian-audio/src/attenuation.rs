use crate::renderer::DistanceModel;

/// Source parameters that shape a distance model's fall-off curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttenuationParams {
    /// Distance at which the gain is exactly 1.0.
    pub reference_distance: f32,
    /// Distance beyond which clamped models stop attenuating.
    pub max_distance: f32,
    /// How quickly the gain falls off.
    pub rolloff_factor: f32,
}

impl Default for AttenuationParams {
    fn default() -> Self {
        Self {
            reference_distance: 1.0,
            max_distance: f32::MAX,
            rolloff_factor: 1.0,
        }
    }
}

impl DistanceModel {
    /// Gain applied to a source `distance` units away from the listener.
    ///
    /// Clamped variants first clamp the distance into
    /// `[reference_distance, max_distance]`. The result is never negative.
    /// Where the inverse or exponent curve is undefined (a source on top of
    /// the listener, or a non-positive inverse denominator) the gain is 1.0.
    /// Returns `None` for [`DistanceModel::Unknown`].
    pub fn gain(self, distance: f32, params: &AttenuationParams) -> Option<f32> {
        let AttenuationParams {
            reference_distance: reference,
            max_distance: max,
            rolloff_factor: rolloff,
        } = *params;
        let clamp = |d: f32| d.max(reference).min(max);

        let gain = match self {
            DistanceModel::None => 1.0,
            DistanceModel::Inverse => inverse(distance, reference, rolloff),
            DistanceModel::InverseClamped => inverse(clamp(distance), reference, rolloff),
            DistanceModel::Linear => linear(distance.min(max), reference, max, rolloff),
            DistanceModel::LinearClamped => linear(clamp(distance), reference, max, rolloff),
            DistanceModel::Exponent => exponent(distance, reference, rolloff),
            DistanceModel::ExponentClamped => exponent(clamp(distance), reference, rolloff),
            DistanceModel::Unknown(_) => return None,
        };

        Some(gain.max(0.0))
    }
}

fn inverse(distance: f32, reference: f32, rolloff: f32) -> f32 {
    let denominator = reference + rolloff * (distance - reference);
    if distance < f32::EPSILON || denominator <= 0.0 {
        return 1.0;
    }
    reference / denominator
}

fn linear(distance: f32, reference: f32, max: f32, rolloff: f32) -> f32 {
    1.0 - rolloff * (distance - reference) / (max - reference)
}

fn exponent(distance: f32, reference: f32, rolloff: f32) -> f32 {
    if distance < f32::EPSILON || reference <= 0.0 {
        return 1.0;
    }
    (distance / reference).powf(-rolloff)
}
