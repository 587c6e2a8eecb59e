pub const TOAST_DURATION_MS: u32 = 1800;

pub const MESSAGE_SENT: &str = "Message sent";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToastTicket(u64);

#[derive(Clone, Debug, Default)]
pub struct ToastState {
    message: Option<String>,
    issued: u64,
}

impl ToastState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn show(&mut self, message: impl Into<String>) -> ToastTicket {
        self.issued = self.issued.wrapping_add(1);
        self.message = Some(message.into());
        ToastTicket(self.issued)
    }

    pub fn dismiss(&mut self) {
        self.message = None;
    }

    // Timers carry the ticket they were armed with, so a timer left over
    // from an earlier message never clears a newer one.
    pub fn expire(&mut self, ticket: ToastTicket) -> bool {
        if ticket.0 != self.issued || self.message.is_none() {
            return false;
        }
        self.dismiss();
        true
    }
}
