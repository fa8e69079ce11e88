//! Pointer Host Module
//!
//! The rig never talks to a window directly. Mouse look reads the cursor and
//! re-centers it through [`PointerHost`], which the desktop host implements on
//! top of winit and which [`VirtualPointer`] implements in memory.

/// Host pointer API used by mouse look.
pub trait PointerHost {
    /// Whether a pointer is available this frame (window focused, cursor inside).
    fn has_pointer_focus(&self) -> bool;

    /// Current cursor position in window pixels.
    fn pointer_position(&self, device: usize) -> (f32, f32);

    /// Window size in pixels.
    fn window_size(&self) -> (u32, u32);

    /// Warp the cursor. Returns `false` if the host refused; callers ignore it.
    fn move_pointer(&mut self, device: usize, x: f32, y: f32) -> bool;

    /// Window center in pixels, using integer halves of the window size.
    fn window_center(&self) -> (f32, f32) {
        let (width, height) = self.window_size();
        ((width / 2) as f32, (height / 2) as f32)
    }
}

/// In-memory pointer for headless driving and tests.
///
/// Starts focused with the cursor at the window center.
#[derive(Debug, Clone, PartialEq)]
pub struct VirtualPointer {
    width: u32,
    height: u32,
    position: (f32, f32),
    focused: bool,
    warps: u64,
}

impl VirtualPointer {
    /// Create a focused pointer resting at the center of a `width` x `height` window.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            position: ((width / 2) as f32, (height / 2) as f32),
            focused: true,
            warps: 0,
        }
    }

    /// Simulate user motion relative to the current cursor position.
    pub fn move_by(&mut self, dx: f32, dy: f32) {
        self.position.0 += dx;
        self.position.1 += dy;
    }

    /// Place the cursor at an absolute position.
    pub fn set_position(&mut self, x: f32, y: f32) {
        self.position = (x, y);
    }

    /// Gain or lose focus.
    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    /// Resize the virtual window. The cursor is left where it was.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }

    /// Current cursor position.
    pub fn position(&self) -> (f32, f32) {
        self.position
    }

    /// How many times the cursor has been warped.
    pub fn warp_count(&self) -> u64 {
        self.warps
    }
}

impl PointerHost for VirtualPointer {
    fn has_pointer_focus(&self) -> bool {
        self.focused
    }

    fn pointer_position(&self, _device: usize) -> (f32, f32) {
        self.position
    }

    fn window_size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn move_pointer(&mut self, _device: usize, x: f32, y: f32) -> bool {
        self.position = (x, y);
        self.warps += 1;
        true
    }
}
