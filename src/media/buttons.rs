//! Soft-button bar.
//!
//! The hosted application pushes an ordered descriptor array whenever its
//! button set changes. The bar discards all dynamic buttons and rebuilds
//! from scratch, with no diffing. A static "Options" button is a fixed
//! field of the bar, never part of the dynamic list, so clearing can
//! never remove it and rebuilding can never duplicate it.

use serde::Deserialize;

use crate::media::press::PressTimer;

/// Label of the always-present static button.
pub const OPTIONS_LABEL: &str = "Options";

/// One entry of the descriptor array supplied by the hosted application.
#[derive(Debug, Clone, Deserialize)]
pub struct SoftButtonDescriptor {
    #[serde(rename = "softButtonID")]
    pub soft_button_id: u32,
    /// Icon reference, shown to the right of the label when present.
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
}

/// A live dynamic button. Owns its press timer exclusively.
#[derive(Debug)]
pub struct SoftButton {
    pub id: u32,
    pub image: Option<String>,
    pub text: Option<String>,
    pub timer: PressTimer,
}

impl SoftButton {
    fn from_descriptor(desc: &SoftButtonDescriptor) -> Self {
        Self {
            id: desc.soft_button_id,
            image: desc.image.clone(),
            text: desc.text.clone(),
            timer: PressTimer::new(),
        }
    }
}

/// The static "Options" button plus the ordered dynamic list.
#[derive(Debug, Default)]
pub struct ButtonBar {
    soft: Vec<SoftButton>,
}

impl ButtonBar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Discard every dynamic button, then append one per descriptor in
    /// input order. `None` (no array supplied) degenerates to a clear.
    pub fn rebuild(&mut self, descriptors: Option<&[SoftButtonDescriptor]>) {
        self.clear();
        if let Some(descriptors) = descriptors {
            for desc in descriptors {
                self.soft.push(SoftButton::from_descriptor(desc));
            }
        }
    }

    /// Remove all dynamic buttons. The static "Options" button remains.
    pub fn clear(&mut self) {
        self.soft.clear();
    }

    /// Dynamic buttons plus the static "Options" button.
    pub fn visible_count(&self) -> usize {
        self.soft.len() + 1
    }

    pub fn soft_buttons(&self) -> &[SoftButton] {
        &self.soft
    }

    pub fn get_mut(&mut self, id: u32) -> Option<&mut SoftButton> {
        self.soft.iter_mut().find(|b| b.id == id)
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut SoftButton> {
        self.soft.iter_mut()
    }
}
