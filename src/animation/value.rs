use std::cell::Cell;
use std::rc::Rc;

/// A rendered property shared between the host view and the animations that
/// drive it.
///
/// Cloning yields another handle to the same cell. All access happens on the
/// UI event loop, so the cell is `!Send`. A host that drives
/// animations from a compositor thread needs its own synchronized sink.
#[derive(Clone, Debug, Default)]
pub struct AnimatedValue(Rc<Cell<f32>>);

impl AnimatedValue {
    pub fn new(initial: f32) -> Self {
        Self(Rc::new(Cell::new(initial)))
    }

    pub fn get(&self) -> f32 {
        self.0.get()
    }

    pub fn set(&self, value: f32) {
        self.0.set(value);
    }

    /// Whether both handles point at the same property.
    pub fn same_as(&self, other: &AnimatedValue) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}
