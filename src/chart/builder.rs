use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::{Chart, Lane, LANE_COUNT, Note, NoteKind};

/// Unplayable tail: no note is scheduled inside the final stretch of the
/// track, so the last note can always be graded before the run ends.
pub const TAIL_MARGIN_S: f64 = 0.6;

/// Target fraction of beats that become notes.
pub const NOTE_DENSITY: f64 = 0.45;

/// Minimum spacing between consecutive tap notes, regardless of the
/// per-beat keep/skip decision.
pub const MIN_NOTE_GAP_S: f64 = 0.44;

/// Inject an off-beat double note every this many beats.
pub const DOUBLE_EVERY_BEATS: u64 = 32;

// Decorrelates the lane stream from the skip stream.
const LANE_STREAM_TWEAK: u64 = 0x9e37_79b9_7f4a_7c15;

/// Stable seed derived from the raw chart input bit patterns. Equal inputs
/// always produce the same seed, so re-detecting the same audio features
/// reproduces the same chart.
pub fn chart_seed(bpm: f64, offset_s: f64, duration_s: f64) -> u64 {
    // FNV-1a over the three f64 bit patterns.
    let mut hash = 0xcbf2_9ce4_8422_2325u64;
    for bits in [bpm.to_bits(), offset_s.to_bits(), duration_s.to_bits()] {
        for byte in bits.to_le_bytes() {
            hash ^= u64::from(byte);
            hash = hash.wrapping_mul(0x0000_0100_0000_01b3);
        }
    }
    hash
}

/// Deterministically generate a playable note sequence for a track.
///
/// - `bpm`: detected tempo; callers clamp to a sane range (roughly 70-180)
///   before calling.
/// - `offset_s`: time of the first strong beat (expected 0-2.5 s).
/// - `duration_s`: total playable track length in seconds.
///
/// Walks beat-period steps from `offset_s` to `duration_s - TAIL_MARGIN_S`,
/// keeping roughly [`NOTE_DENSITY`] of beats, enforcing [`MIN_NOTE_GAP_S`]
/// between taps, rotating lanes on repeats, and injecting a half-beat
/// double every [`DOUBLE_EVERY_BEATS`] beats. Degenerate inputs (non-finite
/// values, non-positive bpm, negative offset, duration too short) yield an
/// empty chart, which is a valid playable state.
pub fn build_chart(bpm: f64, offset_s: f64, duration_s: f64) -> Chart {
    let mut chart = Chart {
        bpm,
        offset_s,
        duration_s,
        notes: Vec::new(),
    };

    if !bpm.is_finite() || !offset_s.is_finite() || !duration_s.is_finite() {
        return chart;
    }
    if bpm <= 0.0 || offset_s < 0.0 {
        return chart;
    }
    let last_playable = duration_s - TAIL_MARGIN_S;
    if last_playable < offset_s {
        return chart;
    }

    let seed = chart_seed(bpm, offset_s, duration_s);
    let mut skip_rng = ChaCha8Rng::seed_from_u64(seed);
    let mut lane_rng = ChaCha8Rng::seed_from_u64(seed ^ LANE_STREAM_TWEAK);

    let beat_period = 60.0 / bpm;
    let half_beat = beat_period * 0.5;

    let mut next_id: u32 = 0;
    let mut prev_lane: Option<Lane> = None;
    let mut last_time = f64::NEG_INFINITY;
    let mut beat_index: u64 = 0;

    loop {
        let t = offset_s + beat_index as f64 * beat_period;
        if t > last_playable {
            break;
        }

        // Drawn on every beat, even suppressed ones, so the decision stays
        // a stable function of the beat index.
        let keep = skip_rng.gen_bool(NOTE_DENSITY);

        if keep && t - last_time >= MIN_NOTE_GAP_S {
            let lane = pick_lane(&mut lane_rng, prev_lane);
            chart.notes.push(Note {
                id: next_id,
                lane,
                time_s: t,
                kind: NoteKind::Tap,
            });
            next_id += 1;
            prev_lane = Some(lane);
            last_time = t;

            if beat_index > 0
                && beat_index % DOUBLE_EVERY_BEATS == 0
                && t + half_beat <= last_playable
            {
                let double_lane = lane.next();
                chart.notes.push(Note {
                    id: next_id,
                    lane: double_lane,
                    time_s: t + half_beat,
                    kind: NoteKind::Double,
                });
                next_id += 1;
                prev_lane = Some(double_lane);
                last_time = t + half_beat;
            }
        }

        beat_index += 1;
    }

    chart
}

/// Lane from the dedicated lane stream, drawn once per emitted note so the
/// lane sequence does not correlate with the skip pattern. A repeat of the
/// previous lane rotates to the next lane instead.
fn pick_lane<R: Rng>(rng: &mut R, prev: Option<Lane>) -> Lane {
    let lane = Lane::ALL[rng.gen_range(0..LANE_COUNT)];
    match prev {
        Some(p) if p == lane => lane.next(),
        _ => lane,
    }
}
