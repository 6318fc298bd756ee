//! Pacing trait for animations

/// Blocking pause between animation steps
///
/// Scrolling and the font demo suspend only through this trait, so host
/// tests can count pauses instead of sleeping.
pub trait Pacer {
    /// Block for `ms` milliseconds
    fn pause_ms(&mut self, ms: u32);
}

impl<P: Pacer + ?Sized> Pacer for &mut P {
    fn pause_ms(&mut self, ms: u32) {
        (**self).pause_ms(ms)
    }
}
