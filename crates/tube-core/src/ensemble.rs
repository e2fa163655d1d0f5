//! Tube ensemble controller.
//!
//! One immutable geometry buffer is shared by every tube; each tube owns an
//! independent record of shader uniforms (a flyweight: one pipeline plus an
//! array-of-structs of per-instance values). `update` advances animation
//! state once per frame; `set_palette` kicks off a staggered color sweep.

use crate::constants::{
    BASE_COLOR, RADIUS_TWEEN_DURATION, STRENGTH_TWEEN_DURATION, THICKNESS_MAX, THICKNESS_MIN,
    TRANSITION_DELAY_STEP,
};
use crate::geometry::TubeGeometry;
use crate::tween::{Ease, Tween};
use rand::Rng;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EnsembleError {
    #[error("ensemble needs at least one tube")]
    Empty,
}

/// Per-instance shader uniforms. This is the closed set: cloning an
/// instance's state is `Clone` over exactly these typed fields, with no
/// runtime shape inspection.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TubeUniforms {
    pub thickness: f32,
    /// Accumulated animation time in seconds.
    pub time: f32,
    pub color: [f32; 3],
    /// Position of the palette pulse along the tube, tweened 0 -> 1.
    pub animate_radius: f32,
    /// Remaining strength of the palette pulse, tweened 1 -> 0.
    pub animate_strength: f32,
    /// Normalized slot in the ensemble, 0..=1.
    pub index: f32,
}

/// Which animated uniform a transition drives.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnimatedField {
    Radius,
    Strength,
}

#[derive(Clone, Copy, Debug)]
struct Transition {
    instance: usize,
    field: AnimatedField,
    tween: Tween,
}

#[derive(Clone, Copy, Debug)]
pub struct EnsembleConfig {
    pub thickness_range: (f32, f32),
    pub radius_duration: f32,
    pub strength_duration: f32,
    pub delay_step: f32,
}

impl Default for EnsembleConfig {
    fn default() -> Self {
        Self {
            thickness_range: (THICKNESS_MIN, THICKNESS_MAX),
            radius_duration: RADIUS_TWEEN_DURATION,
            strength_duration: STRENGTH_TWEEN_DURATION,
            delay_step: TRANSITION_DELAY_STEP,
        }
    }
}

#[derive(Debug)]
pub struct TubeEnsemble {
    geometry: TubeGeometry,
    instances: Vec<TubeUniforms>,
    transitions: Vec<Transition>,
    config: EnsembleConfig,
}

impl TubeEnsemble {
    pub fn new(
        count: usize,
        geometry: TubeGeometry,
        config: EnsembleConfig,
        rng: &mut impl Rng,
    ) -> Result<Self, EnsembleError> {
        if count < 1 {
            return Err(EnsembleError::Empty);
        }
        let (lo, hi) = config.thickness_range;
        let instances = (0..count)
            .map(|i| TubeUniforms {
                thickness: rng.gen_range(lo..hi),
                time: 0.0,
                color: BASE_COLOR,
                animate_radius: 0.0,
                animate_strength: 0.0,
                index: if count <= 1 {
                    0.0
                } else {
                    i as f32 / (count - 1) as f32
                },
            })
            .collect();
        Ok(Self {
            geometry,
            instances,
            transitions: Vec::new(),
            config,
        })
    }

    pub fn geometry(&self) -> &TubeGeometry {
        &self.geometry
    }

    pub fn instances(&self) -> &[TubeUniforms] {
        &self.instances
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    /// Total pending/active transitions across the ensemble.
    pub fn transitions_in_flight(&self) -> usize {
        self.transitions.len()
    }

    /// Pending/active transitions for one instance.
    pub fn pending_for_instance(&self, instance: usize) -> usize {
        self.transitions
            .iter()
            .filter(|t| t.instance == instance)
            .count()
    }

    /// Advance animation state by `dt_ms` milliseconds of wall time.
    ///
    /// Transitions step before the time uniforms so a frame never observes a
    /// half-advanced mix of the two. Increments are relative, so arbitrary
    /// frame pacing accumulates without drift.
    pub fn update(&mut self, dt_ms: f32) {
        let dt = dt_ms / 1000.0;

        let Self {
            transitions,
            instances,
            ..
        } = self;
        transitions.retain_mut(|tr| {
            let u = &mut instances[tr.instance];
            let slot = match tr.field {
                AnimatedField::Radius => &mut u.animate_radius,
                AnimatedField::Strength => &mut u.animate_strength,
            };
            *slot = tr.tween.step(dt, *slot);
            !tr.tween.finished()
        });

        for u in &mut self.instances {
            u.time += dt;
        }
    }

    /// Start a staggered sweep to a new color.
    ///
    /// Any in-flight transitions are cancelled first so no two jobs ever
    /// drive the same uniform. The color itself is not interpolated; only
    /// the radius/strength pulse animates, offset per instance to sweep
    /// across the ensemble.
    pub fn set_palette(&mut self, color: [f32; 3]) {
        let Self {
            transitions,
            instances,
            config,
            ..
        } = self;
        transitions.clear();
        for (i, u) in instances.iter_mut().enumerate() {
            u.color = color;
            u.animate_radius = 0.0;
            u.animate_strength = 1.0;

            let delay = i as f32 * config.delay_step;
            transitions.push(Transition {
                instance: i,
                field: AnimatedField::Radius,
                tween: Tween::new(1.0, config.radius_duration, delay, Ease::ExpoOut),
            });
            transitions.push(Transition {
                instance: i,
                field: AnimatedField::Strength,
                tween: Tween::new(0.0, config.strength_duration, delay, Ease::ExpoInOut),
            });
        }
        log::debug!(
            "palette sweep -> ({:.3},{:.3},{:.3}) across {} tubes",
            color[0],
            color[1],
            color[2],
            self.instances.len()
        );
    }
}
