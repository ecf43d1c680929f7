//! Local UI chrome state (sticky header, mobile menu, copy-link feedback).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of the booking state so the
//! header and footer widgets can evolve independently of the wizard.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Vertical scroll (px) past which the header switches to its compact style.
pub const HEADER_SCROLL_THRESHOLD: f64 = 50.0;
/// How long the copy-link button shows its confirmation.
pub const COPY_FEEDBACK_MS: u32 = 2_000;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub header_scrolled: bool,
    pub mobile_menu_open: bool,
    /// True while the copy-link button shows its confirmation.
    pub copy_confirmed: bool,
    /// Bumped on every successful copy; a revert only applies when its
    /// sequence number is still current.
    pub copy_seq: u64,
}

impl UiState {
    pub fn page_scrolled(&mut self, scroll_y: f64) {
        self.header_scrolled = scroll_y > HEADER_SCROLL_THRESHOLD;
    }

    pub fn toggle_mobile_menu(&mut self) {
        self.mobile_menu_open = !self.mobile_menu_open;
    }

    pub fn close_mobile_menu(&mut self) {
        self.mobile_menu_open = false;
    }

    /// Show the copy confirmation and return the sequence number its revert
    /// timer must present.
    pub fn copy_succeeded(&mut self) -> u64 {
        self.copy_seq += 1;
        self.copy_confirmed = true;
        self.copy_seq
    }

    /// Revert the confirmation if no newer copy happened since `seq`.
    pub fn copy_revert_due(&mut self, seq: u64) -> bool {
        if seq != self.copy_seq {
            return false;
        }
        self.copy_confirmed = false;
        true
    }
}
