// Character animation: cue/trigger parameters driving clip playback

use std::collections::HashMap;

/// Boolean animation parameters the controller keeps in sync every frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cue {
    Walking,
    Jumping,
    Dashing,
}

impl Cue {
    pub fn name(self) -> &'static str {
        match self {
            Self::Walking => "Walking",
            Self::Jumping => "Jumping",
            Self::Dashing => "Dashing",
        }
    }
}

/// One-shot animation parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Trigger {
    Attacking,
}

impl Trigger {
    pub fn name(self) -> &'static str {
        match self {
            Self::Attacking => "Attacking",
        }
    }
}

/// Receives animation cues from the motion controller
pub trait AnimationSink {
    /// Set a boolean cue
    fn set_cue(&mut self, cue: Cue, value: bool);

    /// Fire a one-shot trigger
    fn fire_trigger(&mut self, trigger: Trigger);
}

/// A single animation clip
#[derive(Debug, Clone)]
pub struct AnimationClip {
    /// Name of the animation (e.g., "idle", "walk", "jump")
    pub name: String,
    /// Number of frames in the animation
    pub frame_count: usize,
    /// Duration of each frame in seconds
    pub frame_duration: f32,
    /// Whether the animation loops
    pub looping: bool,
}

impl AnimationClip {
    /// Create a new animation clip
    pub fn new(name: &str, frame_count: usize, fps: f32, looping: bool) -> Self {
        Self {
            name: name.to_string(),
            frame_count,
            frame_duration: 1.0 / fps,
            looping,
        }
    }

    /// Create a looping animation
    pub fn looping(name: &str, frame_count: usize, fps: f32) -> Self {
        Self::new(name, frame_count, fps, true)
    }

    /// Create a one-shot animation (plays once)
    pub fn one_shot(name: &str, frame_count: usize, fps: f32) -> Self {
        Self::new(name, frame_count, fps, false)
    }

    /// Get the total duration of one animation cycle
    pub fn total_duration(&self) -> f32 {
        self.frame_count as f32 * self.frame_duration
    }
}

/// Plays character clips chosen from the current cues and triggers
///
/// Cue priority is Dashing, then Jumping, then Walking, then idle. A triggered
/// one-shot clip plays to its end unless a dash interrupts it.
#[derive(Debug)]
pub struct Animator {
    /// All available animations
    animations: HashMap<String, AnimationClip>,
    /// Current cue values
    cues: HashMap<Cue, bool>,
    /// Currently playing animation name
    current_animation: String,
    /// Current frame index
    current_frame: usize,
    /// Time elapsed in current frame
    frame_timer: f32,
    /// Whether the animation is playing
    playing: bool,
    /// Whether the sprite should be flipped horizontally
    flip_horizontal: bool,
}

impl Default for Animator {
    fn default() -> Self {
        Self::new()
    }
}

impl Animator {
    pub fn new() -> Self {
        Self {
            animations: HashMap::new(),
            cues: HashMap::new(),
            current_animation: String::new(),
            current_frame: 0,
            frame_timer: 0.0,
            playing: true,
            flip_horizontal: false,
        }
    }

    /// Create an animator with the player's clips
    pub fn with_standard_animations() -> Self {
        let mut animator = Self::new();

        animator.add_animation(AnimationClip::looping("idle", 8, 10.0));
        animator.add_animation(AnimationClip::looping("walk", 8, 12.0));
        animator.add_animation(AnimationClip::looping("jump", 4, 10.0));
        animator.add_animation(AnimationClip::looping("dash", 4, 20.0));
        animator.add_animation(AnimationClip::one_shot("attack", 5, 20.0));

        animator.play("idle");
        animator
    }

    /// Add an animation clip
    pub fn add_animation(&mut self, clip: AnimationClip) {
        self.animations.insert(clip.name.clone(), clip);
    }

    /// Play an animation by name, unless it is already playing
    pub fn play(&mut self, name: &str) {
        if self.current_animation != name {
            self.play_from_start(name);
        }
    }

    /// Play an animation from the beginning, even if it's the same
    pub fn play_from_start(&mut self, name: &str) {
        self.current_animation = name.to_string();
        self.current_frame = 0;
        self.frame_timer = 0.0;
        self.playing = true;
    }

    /// Current value of a cue
    pub fn cue(&self, cue: Cue) -> bool {
        self.cues.get(&cue).copied().unwrap_or(false)
    }

    /// Set horizontal flip state
    pub fn set_flip_horizontal(&mut self, flip: bool) {
        self.flip_horizontal = flip;
    }

    /// Get horizontal flip state
    pub fn is_flipped_horizontal(&self) -> bool {
        self.flip_horizontal
    }

    /// Advance playback (called every frame)
    pub fn update(&mut self, dt: f32) {
        if !self.playing {
            return;
        }

        let Some(clip) = self.animations.get(&self.current_animation) else {
            return;
        };

        self.frame_timer += dt;

        while self.frame_timer >= clip.frame_duration {
            self.frame_timer -= clip.frame_duration;
            self.current_frame += 1;

            if self.current_frame >= clip.frame_count {
                if clip.looping {
                    self.current_frame = 0;
                } else {
                    // Stay on last frame
                    self.current_frame = clip.frame_count - 1;
                    self.playing = false;
                    break;
                }
            }
        }

        // A finished one-shot hands control back to the cues
        if !self.playing {
            self.refresh();
        }
    }

    /// Get the current animation name
    pub fn current_animation(&self) -> &str {
        &self.current_animation
    }

    /// Get the current frame index
    pub fn current_frame(&self) -> usize {
        self.current_frame
    }

    fn one_shot_running(&self) -> bool {
        self.playing
            && self
                .animations
                .get(&self.current_animation)
                .is_some_and(|clip| !clip.looping)
    }

    fn cue_animation(&self) -> &'static str {
        if self.cue(Cue::Dashing) {
            "dash"
        } else if self.cue(Cue::Jumping) {
            "jump"
        } else if self.cue(Cue::Walking) {
            "walk"
        } else {
            "idle"
        }
    }

    fn refresh(&mut self) {
        if self.one_shot_running() && !self.cue(Cue::Dashing) {
            return;
        }
        let name = self.cue_animation();
        self.play(name);
    }
}

impl AnimationSink for Animator {
    fn set_cue(&mut self, cue: Cue, value: bool) {
        if self.cues.insert(cue, value) != Some(value) {
            log::trace!("Cue {} = {}", cue.name(), value);
        }
        self.refresh();
    }

    fn fire_trigger(&mut self, trigger: Trigger) {
        log::trace!("Trigger {}", trigger.name());
        match trigger {
            Trigger::Attacking => self.play_from_start("attack"),
        }
    }
}
