use eframe::egui::{self, Color32, Id, LayerId, Order};

/// Stacking tiers for content drawn above the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum OverlayLayer {
    /// Dimmed backdrop behind a modal.
    Backdrop,
    /// The modal window itself.
    Modal,
}

impl OverlayLayer {
    pub(super) fn order(self) -> Order {
        match self {
            Self::Backdrop => Order::Foreground,
            Self::Modal => Order::Tooltip,
        }
    }

    pub(super) fn layer_id(self, id: impl Into<Id>) -> LayerId {
        LayerId::new(self.order(), id.into())
    }
}

/// Paint a modal backdrop that swallows pointer input behind the modal.
///
/// Returns the backdrop response so callers can close on click.
pub(super) fn modal_backdrop(
    ctx: &egui::Context,
    id: impl Into<Id>,
    color: Color32,
) -> egui::Response {
    let id = id.into();
    let rect = ctx.viewport_rect();
    let painter = ctx.layer_painter(OverlayLayer::Backdrop.layer_id(id.with("backdrop_paint")));
    painter.rect_filled(rect, 0.0, color);
    egui::Area::new(id.with("backdrop_blocker"))
        .order(OverlayLayer::Backdrop.order())
        .fixed_pos(rect.min)
        .show(ctx, |ui| ui.allocate_rect(rect, egui::Sense::click_and_drag()))
        .inner
}
