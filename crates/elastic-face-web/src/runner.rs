use elastic_face::{ElasticFace, FaceConfig, FrameBuffers, InputEvent, InputQueue};

/// Owns the face plus the per-frame plumbing around it.
///
/// The `#[wasm_bindgen]` exports in `lib.rs` keep one of these in a
/// `thread_local!` and forward every call to it, because wasm-bindgen
/// cannot export a stateful struct with borrowed buffers directly.
pub struct FaceRunner {
    face: ElasticFace,
    input: InputQueue,
    buffers: FrameBuffers,
    frames: u64,
    stopped: bool,
}

impl FaceRunner {
    pub fn new(config: FaceConfig) -> Self {
        let buffers = FrameBuffers::with_capacity(config.particles.max_live);
        Self {
            face: ElasticFace::new(config),
            input: InputQueue::new(),
            buffers,
            frames: 0,
            stopped: false,
        }
    }

    /// Queue an input event for the next frame.
    pub fn push_input(&mut self, event: InputEvent) {
        if self.stopped {
            return;
        }
        self.input.push(event);
    }

    /// Run one frame at wall-clock `now_ms`: dispatch queued input, step the
    /// face, then repack the flat buffers and this frame's sounds.
    pub fn tick(&mut self, now_ms: f64) {
        if self.stopped {
            return;
        }

        self.face.begin_frame(now_ms);
        for event in self.input.drain() {
            self.face.apply_input(event);
        }
        self.face.tick(now_ms);

        let sounds = self.face.take_sounds();
        self.buffers.pack(&self.face, &sounds);
        self.frames += 1;
    }

    /// Stop accepting input and frames, cancel pending resets.
    pub fn shutdown(&mut self) {
        if self.stopped {
            return;
        }
        self.input.drain();
        self.face.shutdown();
        self.buffers.pack(&self.face, &[]);
        self.stopped = true;
        log::info!("runner stopped after {} frames", self.frames);
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    pub fn face(&self) -> &ElasticFace {
        &self.face
    }

    pub fn frame_count(&self) -> u64 {
        self.frames
    }

    /// JSON snapshot of the current frame (debugging, non-canvas hosts).
    pub fn frame_json(&self) -> Result<String, serde_json::Error> {
        self.face.frame().to_json()
    }

    // ---- Pointer accessors for direct memory reads ----

    pub fn elements_ptr(&self) -> *const f32 {
        self.buffers.elements_ptr()
    }

    pub fn particles_ptr(&self) -> *const f32 {
        self.buffers.particles_ptr()
    }

    pub fn particle_count(&self) -> u32 {
        self.buffers.particle_count()
    }

    pub fn sounds_ptr(&self) -> *const u8 {
        self.buffers.sounds_ptr()
    }

    pub fn sound_count(&self) -> u32 {
        self.buffers.sound_count()
    }

    pub fn buffers(&self) -> &FrameBuffers {
        &self.buffers
    }
}

impl Default for FaceRunner {
    fn default() -> Self {
        Self::new(FaceConfig::default())
    }
}
