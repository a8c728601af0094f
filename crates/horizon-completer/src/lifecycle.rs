//! Hooks the host invokes as a component enters and leaves the document.

/// Lifecycle callbacks for a hosted component.
///
/// The host calls [`on_attach`](Self::on_attach) once the component is shown
/// on a live surface and [`on_detach`](Self::on_detach) when it is taken
/// away. Both must be safe to call repeatedly. Once per refresh cycle the
/// host calls [`on_redraw_requested`](Self::on_redraw_requested), which
/// performs any pending redraw.
pub trait Lifecycle {
    fn on_attach(&mut self);

    fn on_detach(&mut self);

    /// Perform a pending redraw. Returns `true` if one ran.
    fn on_redraw_requested(&mut self) -> bool;
}
