use tracing::info;

use crate::device::{Device, SoftwareDevice};
use crate::renderer::Renderer;

/// An owned audio rendering context.
///
/// Listener and environment state lives in the context's device. All access
/// goes through [`Context::renderer`], so the borrow checker keeps readers and
/// writers of one context apart.
pub struct Context<D: Device = SoftwareDevice> {
    device: D,
}

impl Context<SoftwareDevice> {
    /// Create a context backed by an in-memory [`SoftwareDevice`].
    pub fn new() -> Self {
        Self::with_device(SoftwareDevice::default())
    }
}

impl Default for Context<SoftwareDevice> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: Device> Context<D> {
    /// Wrap an already opened device.
    pub fn with_device(device: D) -> Self {
        info!("Audio context created");
        Self { device }
    }

    /// Accessor for the listener and environment of this context.
    pub fn renderer(&mut self) -> Renderer<'_, D> {
        Renderer::new(&mut self.device)
    }

    pub fn device(&self) -> &D {
        &self.device
    }

    /// Release the context, handing back its device.
    pub fn into_device(self) -> D {
        self.device
    }
}
