use crate::payment::PaymentWidgetHandle;
use playden_shop::catalog::{Game, PaymentMethod};
use playden_shop::checkout::CheckoutSession;
use std::cell::RefCell;
use std::rc::Rc;
use yew::prelude::*;
use yew_router::prelude::Navigator;

#[derive(Properties, Clone, PartialEq)]
pub struct CheckoutProps {
    pub game: Game,
    pub methods: Vec<PaymentMethod>,
    /// The package tile that opened this checkout.
    pub package_id: u32,
    pub on_close: Callback<()>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

/// Inline notice rendered inside the dialog.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            text: text.into(),
        }
    }
}

/// Shared handles the checkout handlers operate on.
///
/// The epoch is bumped when the dialog is dismissed; async completions
/// capture it at spawn time and drop their result when it no longer matches,
/// so a closed checkout never renders further transitions (the network
/// request itself is not cancelled).
#[derive(Clone)]
pub struct CheckoutHandles {
    pub session: UseStateHandle<CheckoutSession>,
    pub notice: UseStateHandle<Option<Notice>>,
    pub widget: PaymentWidgetHandle,
    pub navigator: Option<Navigator>,
    pub epoch: Rc<RefCell<u64>>,
}

impl CheckoutHandles {
    #[must_use]
    pub fn current_epoch(&self) -> u64 {
        *self.epoch.borrow()
    }

    #[must_use]
    pub fn is_stale(&self, epoch: u64) -> bool {
        *self.epoch.borrow() != epoch
    }

    pub fn abandon(&self) {
        *self.epoch.borrow_mut() += 1;
    }

    pub fn show_error(&self, text: impl Into<String>) {
        self.notice.set(Some(Notice::error(text)));
    }

    pub fn show_info(&self, text: impl Into<String>) {
        self.notice.set(Some(Notice::info(text)));
    }

    pub fn clear_notice(&self) {
        self.notice.set(None);
    }
}

/// Format a currency amount for display, e.g. `5,500 FCFA`.
#[must_use]
pub fn format_amount(amount: u32) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 5);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out.push_str(" FCFA");
    out
}

#[cfg(test)]
mod tests {
    use super::format_amount;

    #[test]
    fn amounts_group_thousands() {
        assert_eq!(format_amount(0), "0 FCFA");
        assert_eq!(format_amount(500), "500 FCFA");
        assert_eq!(format_amount(5500), "5,500 FCFA");
        assert_eq!(format_amount(1_234_567), "1,234,567 FCFA");
    }
}
