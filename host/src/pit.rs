use glam::Vec2;

/// Field dimensions in meters.
pub const WIDTH: f32 = 12.0;
pub const HEIGHT: f32 = 8.0;

// xorshift64: deterministic spawns without process-wide RNG state
struct Rng {
    state: u64,
}

impl Rng {
    fn new(seed: u64) -> Self {
        Rng {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    /// Uniform in [0, 1).
    fn next_f32(&mut self) -> f32 {
        (self.next_u64() >> 40) as f32 / (1u64 << 24) as f32
    }
}

struct Ball {
    sim_position: Vec2,
    shown_position: Vec2,
    velocity: Vec2,
}

/// A field of drifting balls. Each ball tracks the position the simulation
/// computed and, separately, the position currently shown, so the loop
/// variants' render and interpolate callbacks have distinct targets.
pub struct Pit {
    balls: Vec<Ball>,
    steps_taken: u64,
}

impl Pit {
    pub fn new(count: usize, seed: u64) -> Self {
        let mut rng = Rng::new(seed);
        let balls = (0..count)
            .map(|_| {
                let position = Vec2::new(rng.next_f32() * WIDTH, rng.next_f32() * HEIGHT);
                let speed = 0.5 + rng.next_f32() * 2.5; // m/s
                let direction = Vec2::from_angle(rng.next_f32() * std::f32::consts::TAU);
                Ball {
                    sim_position: position,
                    shown_position: position,
                    velocity: direction * speed,
                }
            })
            .collect();
        Self {
            balls,
            steps_taken: 0,
        }
    }

    /// Advance the simulated positions by `dt` seconds. Constant-velocity
    /// drift; components reflect at the field bounds.
    pub fn advance(&mut self, dt: f64) {
        let dt = dt as f32;
        for ball in &mut self.balls {
            ball.sim_position += ball.velocity * dt;
            if ball.sim_position.x < 0.0 || ball.sim_position.x > WIDTH {
                ball.velocity.x = -ball.velocity.x;
                ball.sim_position.x = ball.sim_position.x.clamp(0.0, WIDTH);
            }
            if ball.sim_position.y < 0.0 || ball.sim_position.y > HEIGHT {
                ball.velocity.y = -ball.velocity.y;
                ball.sim_position.y = ball.sim_position.y.clamp(0.0, HEIGHT);
            }
        }
        self.steps_taken += 1;
    }

    /// Snap every shown position to its simulated position.
    pub fn present(&mut self) {
        for ball in &mut self.balls {
            ball.shown_position = ball.sim_position;
        }
    }

    /// Move every shown position toward its simulated position by `alpha`,
    /// blending in place against whatever is currently shown.
    pub fn blend(&mut self, alpha: f64) {
        let alpha = alpha as f32;
        for ball in &mut self.balls {
            ball.shown_position = ball.shown_position.lerp(ball.sim_position, alpha);
        }
    }

    pub fn steps_taken(&self) -> u64 {
        self.steps_taken
    }

    pub fn ball_count(&self) -> usize {
        self.balls.len()
    }

    /// FNV-1a 64-bit over the shown positions' bit patterns, for comparing
    /// runs with equal flags.
    pub fn shown_checksum(&self) -> u64 {
        let mut hash: u64 = 0xcbf29ce484222325;
        let prime: u64 = 0x100000001b3;
        for ball in &self.balls {
            for bits in [
                ball.shown_position.x.to_bits(),
                ball.shown_position.y.to_bits(),
            ] {
                for byte in bits.to_le_bytes() {
                    hash ^= byte as u64;
                    hash = hash.wrapping_mul(prime);
                }
            }
        }
        hash
    }
}
