/// Countdown rate limiter that decouples simulation speed from frame rate.
///
/// While running, the owner calls [`advance`](Self::advance) once per frame
/// and takes a step whenever [`is_due`](Self::is_due) holds, followed by
/// [`consume_due`](Self::consume_due). A step then fires once every
/// `period + 1` frames. Pausing is simply not advancing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepScheduler {
    period: u32,
    counter: i64,
}

impl StepScheduler {
    pub fn new(period: u32) -> Self {
        Self {
            period,
            counter: period as i64,
        }
    }

    pub fn period(&self) -> u32 {
        self.period
    }

    pub fn counter(&self) -> i64 {
        self.counter
    }

    pub fn advance(&mut self, delta_ticks: u32) {
        self.counter -= delta_ticks as i64;
    }

    pub fn is_due(&self) -> bool {
        self.counter < 0
    }

    pub fn consume_due(&mut self) {
        self.counter = self.period as i64;
    }

    /// Changes the period, clamped at zero. The running countdown is kept.
    pub fn adjust_period(&mut self, delta: i64) {
        let period = (self.period as i64 + delta).clamp(0, u32::MAX as i64);
        self.period = period as u32;
    }
}
